//! Inbound call use case

use tracing::{debug, info};

use crate::domain::call::{respond, CallEvent, CallTarget};
use crate::domain::shared::Result;

/// Outcome of answering one inbound call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredCall {
    pub target: CallTarget,
    /// Serialized voice response document
    pub document: String,
}

/// Turns platform call events into voice response documents.
///
/// Stateless; one instance is shared by every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct InboundCallService;

impl InboundCallService {
    pub fn new() -> Self {
        Self
    }

    /// Answer an inbound call.
    ///
    /// Either the whole document is produced or the error is returned to the
    /// caller; nothing is retried.
    pub fn answer(&self, event: &CallEvent) -> Result<AnsweredCall> {
        info!("Incoming call event: {}", event.to_json()?);

        let target = CallTarget::from_event(event);
        match &target {
            CallTarget::ClientCall { name } => info!("Calling client: {}", name),
            CallTarget::GenericCall => info!("Regular call, not to client"),
        }

        let document = respond(&target).to_xml()?;
        debug!("Rendered voice response ({} bytes)", document.len());

        Ok(AnsweredCall { target, document })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::ClientName;

    #[test]
    fn test_answer_client_call() {
        let service = InboundCallService::new();
        let event = CallEvent::new()
            .with_param("CallSid", "CA42")
            .with_param("To", "client:alice");

        let answered = service.answer(&event).unwrap();

        assert_eq!(
            answered.target,
            CallTarget::ClientCall {
                name: ClientName::new("alice")
            }
        );
        assert!(answered.document.starts_with("<?xml"));
        assert!(answered
            .document
            .contains("<Dial><Client>alice</Client></Dial>"));
    }

    #[test]
    fn test_answer_generic_call() {
        let service = InboundCallService::new();
        let answered = service.answer(&CallEvent::new()).unwrap();

        assert_eq!(answered.target, CallTarget::GenericCall);
        assert!(!answered.document.contains("<Dial>"));
        assert!(answered
            .document
            .contains("<Say>Congratulations! You have received your first inbound call! Good bye.</Say>"));
    }

    #[test]
    fn test_answer_twice_is_identical() {
        let service = InboundCallService::new();
        let event = CallEvent::new().with_param("To", "client:bob");
        assert_eq!(service.answer(&event).unwrap(), service.answer(&event).unwrap());
    }
}
