//! Call value objects

use serde::{Deserialize, Serialize};

use super::event::CallEvent;
use crate::domain::shared::ClientName;

/// Destination prefix marking a software client endpoint
pub const CLIENT_PREFIX: &str = "client:";

/// Where an inbound call is headed, derived once from the dialed address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallTarget {
    /// Call to a named software client (`To` = `client:<name>`)
    ClientCall { name: ClientName },
    /// Any other destination, including a missing `To`
    GenericCall,
}

impl CallTarget {
    /// Classify a dialed address.
    ///
    /// The remainder after `client:` is taken verbatim, so `client:` alone
    /// yields an empty client name.
    pub fn from_destination(to: Option<&str>) -> Self {
        match to.and_then(|to| to.strip_prefix(CLIENT_PREFIX)) {
            Some(name) => CallTarget::ClientCall {
                name: ClientName::new(name),
            },
            None => CallTarget::GenericCall,
        }
    }

    pub fn from_event(event: &CallEvent) -> Self {
        Self::from_destination(event.to())
    }

    /// Label used for logs and metrics
    pub fn label(&self) -> &'static str {
        match self {
            CallTarget::ClientCall { .. } => "client",
            CallTarget::GenericCall => "generic",
        }
    }

    pub fn client_name(&self) -> Option<&ClientName> {
        match self {
            CallTarget::ClientCall { name } => Some(name),
            CallTarget::GenericCall => None,
        }
    }
}
