//! Bearer credential type.
//!
//! At most one live credential exists per client; it is created on a
//! successful login and destroyed on logout or when the HR API rejects it.

use serde::{Deserialize, Serialize};

/// An opaque bearer token proving identity to the HR API.
///
/// The token's shape is never inspected on this side - validity is decided
/// by the backend on every authenticated request. `Debug` redacts the value
/// so credentials cannot leak into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token received from the HR API.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for use in an `Authorization: Bearer` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Credential").field(&"[REDACTED]").finish()
    }
}

impl From<String> for Credential {
    fn from(token: String) -> Self {
        Self(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let credential = Credential::new("super-secret-token");
        let debug_output = format!("{credential:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_expose_returns_raw_token() {
        let credential = Credential::new("t1");
        assert_eq!(credential.expose(), "t1");
    }
}
