//! Shared value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical name of a software client endpoint (the part after `client:`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientName(String);

impl ClientName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClientName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_name_display() {
        let name = ClientName::new("alice");
        assert_eq!(name.to_string(), "alice");
        assert_eq!(name.as_str(), "alice");
        assert!(!name.is_empty());
    }

    #[test]
    fn test_empty_client_name() {
        assert!(ClientName::from("").is_empty());
    }
}
