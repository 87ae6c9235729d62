//! HR API error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur talking to the HR API.
#[derive(Debug, Error)]
pub enum HrError {
    /// Network failure, timeout, or a response body that did not decode.
    #[error("HR API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend rejected the presented credentials (401/403).
    #[error("HR API rejected the credentials")]
    Unauthorized,

    /// Any other non-success status.
    #[error("unexpected HR API status: {0}")]
    Status(StatusCode),
}

impl HrError {
    /// Map a non-success status to the matching error variant.
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Self::Unauthorized
        } else {
            Self::Status(status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_statuses_collapse() {
        assert!(matches!(
            HrError::from_status(StatusCode::UNAUTHORIZED),
            HrError::Unauthorized
        ));
        assert!(matches!(
            HrError::from_status(StatusCode::FORBIDDEN),
            HrError::Unauthorized
        ));
    }

    #[test]
    fn test_other_statuses_preserved() {
        assert!(matches!(
            HrError::from_status(StatusCode::INTERNAL_SERVER_ERROR),
            HrError::Status(StatusCode::INTERNAL_SERVER_ERROR)
        ));
    }
}
