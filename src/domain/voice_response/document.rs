//! Voice response document model

use serde::{Deserialize, Serialize};

use crate::domain::shared::{ClientName, Result};

/// Speak text to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Say {
    pub text: String,
}

/// Endpoint a dial instruction bridges to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialNoun {
    /// Named software client endpoint
    Client(ClientName),
}

/// Bridge the current call to one or more endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dial {
    pub nouns: Vec<DialNoun>,
}

impl Dial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a client endpoint to ring
    pub fn client(&mut self, name: impl Into<ClientName>) -> &mut Self {
        self.nouns.push(DialNoun::Client(name.into()));
        self
    }
}

/// A single instruction in the response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verb {
    Say(Say),
    Dial(Dial),
}

/// Ordered list of instructions the platform executes top to bottom
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceResponse {
    verbs: Vec<Verb>,
}

impl VoiceResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a speak instruction
    pub fn say(&mut self, text: impl Into<String>) -> &mut Self {
        self.verbs.push(Verb::Say(Say { text: text.into() }));
        self
    }

    /// Append an empty dial instruction and return it for nouns to be added
    pub fn dial(&mut self) -> &mut Dial {
        self.verbs.push(Verb::Dial(Dial::new()));
        match self.verbs.last_mut() {
            Some(Verb::Dial(dial)) => dial,
            _ => unreachable!("dial verb was just pushed"),
        }
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Texts of all speak instructions, in order
    pub fn spoken_texts(&self) -> Vec<&str> {
        self.verbs
            .iter()
            .filter_map(|verb| match verb {
                Verb::Say(say) => Some(say.text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Client names of all dial instructions, in order
    pub fn dialed_clients(&self) -> Vec<&ClientName> {
        self.verbs
            .iter()
            .filter_map(|verb| match verb {
                Verb::Dial(dial) => Some(dial),
                _ => None,
            })
            .flat_map(|dial| dial.nouns.iter())
            .map(|noun| match noun {
                DialNoun::Client(name) => name,
            })
            .collect()
    }

    /// Serialize to the platform's XML markup
    pub fn to_xml(&self) -> Result<String> {
        super::render::render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_order() {
        let mut response = VoiceResponse::new();
        response.say("first");
        response.dial().client("alice");
        response.say("last");

        assert!(matches!(response.verbs()[0], Verb::Say(_)));
        assert!(matches!(response.verbs()[1], Verb::Dial(_)));
        assert!(matches!(response.verbs()[2], Verb::Say(_)));
        assert_eq!(response.spoken_texts(), vec!["first", "last"]);
    }

    #[test]
    fn test_dial_with_multiple_clients() {
        let mut response = VoiceResponse::new();
        response.dial().client("alice").client("bob");

        let names: Vec<&str> = response
            .dialed_clients()
            .into_iter()
            .map(ClientName::as_str)
            .collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[test]
    fn test_new_response_is_empty() {
        let response = VoiceResponse::new();
        assert!(response.is_empty());
        assert!(response.dialed_clients().is_empty());
    }
}
