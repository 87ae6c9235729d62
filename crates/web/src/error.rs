//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.
//!
//! Auth-related failures never escalate to process faults: a rejected
//! stored token redirects to the login entry point, and backend outages
//! come back as gateway errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::hr::HrError;
use crate::session::{AuthError, Session, routing};

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// HR API operation failed.
    #[error("HR API error: {0}")]
    Hr(#[from] HrError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Session store operation failed.
    #[error("Session store error: {0}")]
    SessionStore(#[from] tower_sessions::session::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // A token the backend stopped accepting mid-view is handled exactly
        // like resolution failure: back to login, no error page. The next
        // resolution pass clears the store.
        if matches!(self, Self::Hr(HrError::Unauthorized)) {
            return Redirect::to(routing::LOGIN).into_response();
        }

        // Capture server-side errors to Sentry
        if matches!(
            self,
            Self::Hr(_) | Self::SessionStore(_) | Self::Internal(_)
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Hr(_) => StatusCode::BAD_GATEWAY,
            Self::Auth(err) => match err {
                AuthError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
                AuthError::Backend(_) => StatusCode::BAD_GATEWAY,
            },
            Self::SessionStore(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Hr(_) => "External service error".to_string(),
            Self::Auth(err) => match err {
                AuthError::AuthenticationFailed => "Invalid username or password".to_string(),
                AuthError::Backend(_) => "Authentication service unavailable".to_string(),
            },
            Self::SessionStore(_) | Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from a user ID.
///
/// Call this after successful authentication to associate errors with users.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
///
/// Call this on logout to stop associating errors with the user.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Session observer keeping the Sentry user context in step with every
/// session transition. Subscribe this on each `SessionManager`.
pub fn sync_sentry_user(session: &Session) {
    match session {
        Session::Resolved { user, .. } => set_sentry_user(&user.id, Some(&user.email)),
        Session::Unauthenticated => clear_sentry_user(),
        Session::Resolving => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("employee-123".to_string());
        assert_eq!(err.to_string(), "Not found: employee-123");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::AuthenticationFailed)),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_stale_token_mid_view_redirects_to_login() {
        let response = AppError::Hr(HrError::Unauthorized).into_response();
        assert!(response.status().is_redirection());
        let location = response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok());
        assert_eq!(location, Some(routing::LOGIN));
    }
}
