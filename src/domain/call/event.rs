//! Inbound call event received from the telephony platform

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::shared::{DomainError, Result};

/// Parameter carrying the dialed destination address
pub const TO_PARAM: &str = "To";
/// Parameter carrying the platform's call identifier
pub const CALL_SID_PARAM: &str = "CallSid";
/// Parameter carrying the caller address
pub const FROM_PARAM: &str = "From";

/// An inbound-call webhook invocation.
///
/// Holds every parameter the platform sent so the whole event can be echoed
/// to the log. Only `To` drives routing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallEvent {
    params: BTreeMap<String, String>,
}

impl CallEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an event from decoded form or query pairs.
    ///
    /// A repeated key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            params: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set a parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Dialed destination address, if the platform sent one
    pub fn to(&self) -> Option<&str> {
        self.param(TO_PARAM)
    }

    pub fn call_sid(&self) -> Option<&str> {
        self.param(CALL_SID_PARAM)
    }

    pub fn caller(&self) -> Option<&str> {
        self.param(FROM_PARAM)
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Serialize the whole event as JSON for diagnostics
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DomainError::Serialization(e.to_string()))
    }
}
