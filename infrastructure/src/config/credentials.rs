//! Provider credentials.
//!
//! [`ApiKey`] wraps a secret string. The wrapper exists so the secret cannot
//! leak through `Debug` formatting or accidental serialization — the process
//! reads it once at startup and passes it by reference into the gateway.

/// A provider API key.
///
/// `Debug` output is redacted and there is no `Display` implementation;
/// the raw value is only reachable through [`ApiKey::secret`].
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, rejecting blank input.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The raw secret, for the Authorization header.
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_is_rejected() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("   ").is_none());
    }

    #[test]
    fn test_key_is_trimmed() {
        let key = ApiKey::new("  gsk_abc123  ").unwrap();
        assert_eq!(key.secret(), "gsk_abc123");
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::new("gsk_abc123").unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains("gsk_abc123"));
        assert!(debug.contains("****"));
    }
}
