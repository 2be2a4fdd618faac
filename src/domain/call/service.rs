//! Inbound call routing

use super::event::CallEvent;
use super::value_object::CallTarget;
use crate::domain::voice_response::VoiceResponse;

/// Spoken to callers that did not dial a client endpoint
pub const GENERIC_GREETING: &str =
    "Congratulations! You have received your first inbound call! Good bye.";

/// Prefix of the announcement played before bridging to a client
pub const CONNECTING_PREFIX: &str = "Connecting you to ";

/// Build the voice response for an inbound call
pub fn route(event: &CallEvent) -> VoiceResponse {
    respond(&CallTarget::from_event(event))
}

/// Build the voice response for an already classified call
pub fn respond(target: &CallTarget) -> VoiceResponse {
    let mut response = VoiceResponse::new();

    match target {
        CallTarget::ClientCall { name } => {
            response.say(format!("{CONNECTING_PREFIX}{name}"));
            response.dial().client(name.clone());
        }
        CallTarget::GenericCall => {
            response.say(GENERIC_GREETING);
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::ClientName;
    use crate::domain::voice_response::Verb;

    fn event_to(to: &str) -> CallEvent {
        CallEvent::new().with_param("To", to)
    }

    #[test]
    fn test_route_client_call() {
        let response = route(&event_to("client:alice"));

        assert_eq!(response.verbs().len(), 2);
        assert_eq!(response.spoken_texts(), vec!["Connecting you to alice"]);
        assert!(matches!(response.verbs()[1], Verb::Dial(_)));
        let clients: Vec<&str> = response
            .dialed_clients()
            .into_iter()
            .map(ClientName::as_str)
            .collect();
        assert_eq!(clients, vec!["alice"]);
    }

    #[test]
    fn test_route_phone_number() {
        let response = route(&event_to("+15551234567"));

        assert_eq!(response.verbs().len(), 1);
        assert_eq!(response.spoken_texts(), vec![GENERIC_GREETING]);
        assert!(response.dialed_clients().is_empty());
    }

    #[test]
    fn test_route_without_destination() {
        let response = route(&CallEvent::new());
        assert_eq!(response, route(&event_to("+15551234567")));
    }

    #[test]
    fn test_route_empty_client_name_passes_through() {
        let response = route(&event_to("client:"));

        assert_eq!(response.spoken_texts(), vec!["Connecting you to "]);
        let clients: Vec<&str> = response
            .dialed_clients()
            .into_iter()
            .map(ClientName::as_str)
            .collect();
        assert_eq!(clients, vec![""]);
    }

    #[test]
    fn test_route_is_idempotent() {
        let event = event_to("client:bob").with_param("CallSid", "CA1");
        assert_eq!(route(&event), route(&event));
        assert_eq!(
            route(&event).to_xml().unwrap(),
            route(&event).to_xml().unwrap()
        );
    }

    #[test]
    fn test_route_client_names() {
        for name in ["alice", "bob", "support desk", "ünïcode", "a:b"] {
            let response = route(&event_to(&format!("client:{name}")));
            assert_eq!(
                response.spoken_texts(),
                vec![format!("Connecting you to {name}").as_str()]
            );
            assert_eq!(response.dialed_clients()[0].as_str(), name);
        }
    }

    #[test]
    fn test_route_rendered_xml() {
        let xml = route(&event_to("client:alice")).to_xml().unwrap();
        assert!(xml.ends_with(
            "<Response><Say>Connecting you to alice</Say><Dial><Client>alice</Client></Dial></Response>"
        ));

        let xml = route(&CallEvent::new()).to_xml().unwrap();
        assert!(xml.ends_with(
            "<Response><Say>Congratulations! You have received your first inbound call! Good bye.</Say></Response>"
        ));
    }
}
