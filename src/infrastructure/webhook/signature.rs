//! Platform webhook signatures
//!
//! signature = base64(HMAC-SHA1(auth_token, url + key1 + value1 + key2 + value2 ...))
//! with POST parameters sorted by key. GET requests sign the URL alone.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::domain::shared::{DomainError, Result};

type HmacSha1 = Hmac<Sha1>;

/// Header carrying the request signature
pub const SIGNATURE_HEADER: &str = "x-twilio-signature";

/// Validates request signatures with the account auth token
#[derive(Clone)]
pub struct SignatureValidator {
    auth_token: String,
}

impl SignatureValidator {
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
        }
    }

    /// Compute the expected signature for a request
    pub fn compute(&self, url: &str, params: &[(String, String)]) -> Result<String> {
        let mac = self.mac(url, params)?;
        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }

    /// Check a received signature in constant time
    pub fn validate(&self, url: &str, params: &[(String, String)], signature: &str) -> Result<()> {
        let received = STANDARD
            .decode(signature.trim())
            .map_err(|_| DomainError::InvalidSignature("signature is not valid base64".to_string()))?;

        self.mac(url, params)?
            .verify_slice(&received)
            .map_err(|_| DomainError::InvalidSignature("signature mismatch".to_string()))
    }

    fn mac(&self, url: &str, params: &[(String, String)]) -> Result<HmacSha1> {
        let mut mac = HmacSha1::new_from_slice(self.auth_token.as_bytes())
            .map_err(|e| DomainError::Internal(format!("HMAC key error: {}", e)))?;

        mac.update(url.as_bytes());

        let mut sorted: Vec<&(String, String)> = params.iter().collect();
        sorted.sort();
        for (key, value) in sorted {
            mac.update(key.as_bytes());
            mac.update(value.as_bytes());
        }

        Ok(mac)
    }
}

impl std::fmt::Debug for SignatureValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureValidator")
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://mycompany.com/voice/incoming?foo=1&bar=2";

    fn params() -> Vec<(String, String)> {
        vec![
            ("To".to_string(), "client:alice".to_string()),
            ("CallSid".to_string(), "CA1234567890ABCDE".to_string()),
            ("From".to_string(), "+14158675310".to_string()),
        ]
    }

    #[test]
    fn test_compute_matches_manual_hmac() {
        let validator = SignatureValidator::new("12345");

        let mut mac = HmacSha1::new_from_slice(b"12345").unwrap();
        mac.update(
            format!("{URL}CallSidCA1234567890ABCDEFrom+14158675310Toclient:alice").as_bytes(),
        );
        let expected = STANDARD.encode(mac.finalize().into_bytes());

        assert_eq!(validator.compute(URL, &params()).unwrap(), expected);
    }

    #[test]
    fn test_validate_roundtrip() {
        let validator = SignatureValidator::new("secret-token");
        let signature = validator.compute(URL, &params()).unwrap();
        assert!(validator.validate(URL, &params(), &signature).is_ok());
    }

    #[test]
    fn test_param_order_does_not_matter() {
        let validator = SignatureValidator::new("secret-token");
        let mut reversed = params();
        reversed.reverse();
        assert_eq!(
            validator.compute(URL, &params()).unwrap(),
            validator.compute(URL, &reversed).unwrap()
        );
    }

    #[test]
    fn test_tampered_param_rejected() {
        let validator = SignatureValidator::new("secret-token");
        let signature = validator.compute(URL, &params()).unwrap();

        let mut tampered = params();
        tampered[0].1 = "client:mallory".to_string();

        assert_eq!(
            validator.validate(URL, &tampered, &signature),
            Err(DomainError::InvalidSignature("signature mismatch".to_string()))
        );
    }

    #[test]
    fn test_wrong_token_rejected() {
        let signature = SignatureValidator::new("one").compute(URL, &params()).unwrap();
        assert!(SignatureValidator::new("two")
            .validate(URL, &params(), &signature)
            .is_err());
    }

    #[test]
    fn test_garbage_signature_rejected() {
        let validator = SignatureValidator::new("secret-token");
        assert!(matches!(
            validator.validate(URL, &params(), "not base64!!"),
            Err(DomainError::InvalidSignature(_))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let validator = SignatureValidator::new("super-secret");
        assert!(!format!("{:?}", validator).contains("super-secret"));
    }
}
