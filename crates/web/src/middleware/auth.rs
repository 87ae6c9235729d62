//! Credential store and route-guard extractors.
//!
//! The credential store wraps the single persisted bearer token: `save`,
//! `read`, `clear` against the durable client session, with no validation
//! of the token's shape - resolution decides validity. The extractors run
//! resolution before any role-gated handler and turn guard decisions into
//! redirects.
//!
//! # Example
//!
//! ```rust,ignore
//! async fn protected_handler(
//!     RequireAdmin(viewer): RequireAdmin,
//! ) -> impl IntoResponse {
//!     format!("Hello, {}!", viewer.user.username)
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};

use crewdesk_core::{Credential, Role};

use crate::error;
use crate::models::session_keys;
use crate::models::user::Viewer;
use crate::session::guard::{self, Access};
use crate::session::{Session, SessionManager, routing};
use crate::state::AppState;

// ─────────────────────────────────────────────────────────────────────────────
// Credential store
// ─────────────────────────────────────────────────────────────────────────────

/// Read the stored bearer token, if any.
pub async fn read_credential(session: &tower_sessions::Session) -> Option<Credential> {
    session
        .get::<Credential>(session_keys::HR_TOKEN)
        .await
        .ok()
        .flatten()
}

/// Persist the bearer token for future visits.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_credential(
    session: &tower_sessions::Session,
    credential: &Credential,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::HR_TOKEN, credential).await
}

/// Destroy the stored bearer token. Idempotent: clearing an empty store
/// succeeds.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_credential(
    session: &tower_sessions::Session,
) -> Result<(), tower_sessions::session::Error> {
    session.remove::<Credential>(session_keys::HR_TOKEN).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Extractors
// ─────────────────────────────────────────────────────────────────────────────

/// Rejection produced when a guard denies a navigation attempt.
#[derive(Debug)]
pub enum GuardRejection {
    /// Send the browser elsewhere (login, or the user's own area).
    Redirect(&'static str),
    /// The session layer is missing or resolution could not settle.
    Unavailable,
}

impl IntoResponse for GuardRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(path) => Redirect::to(path).into_response(),
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        }
    }
}

/// Extractor that resolves the stored credential into a settled [`Session`]
/// without imposing a role requirement.
///
/// Used by the entry routes (`/`, `/dashboard`, the login page) that decide
/// where to send the user rather than render gated content.
pub struct ResolvedSession(pub Session);

impl FromRequestParts<AppState> for ResolvedSession {
    type Rejection = GuardRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get the client session from extensions (set by SessionManagerLayer)
        let client_session = parts
            .extensions
            .get::<tower_sessions::Session>()
            .cloned()
            .ok_or(GuardRejection::Unavailable)?;

        let stored = read_credential(&client_session).await;
        let had_token = stored.is_some();

        let mut manager = SessionManager::new(state.hr().clone());
        manager.subscribe(error::sync_sentry_user);
        manager.resolve(stored).await;

        if had_token && !manager.session().is_resolved() {
            // The stored token was rejected: destroy it so the next visit
            // settles without a backend call.
            if let Err(err) = clear_credential(&client_session).await {
                tracing::error!(error = %err, "failed to clear rejected credential");
            }
        }

        Ok(Self(manager.into_session()))
    }
}

fn apply_guard(session: Session, required: Role) -> Result<Viewer, GuardRejection> {
    match guard::check(&session, required) {
        Access::Grant => session.into_viewer().ok_or(GuardRejection::Unavailable),
        Access::Pending => Err(GuardRejection::Unavailable),
        Access::Login => Err(GuardRejection::Redirect(routing::LOGIN)),
        Access::Redirect(path) => Err(GuardRejection::Redirect(path)),
    }
}

/// Extractor that requires a resolved employee session.
///
/// Unauthenticated visitors are redirected to the login page; admins are
/// rerouted to their own home rather than rejected.
pub struct RequireEmployee(pub Viewer);

impl FromRequestParts<AppState> for RequireEmployee {
    type Rejection = GuardRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ResolvedSession(session) =
            ResolvedSession::from_request_parts(parts, state).await?;
        apply_guard(session, Role::Employee).map(Self)
    }
}

/// Extractor that requires a resolved admin session.
///
/// Unauthenticated visitors are redirected to the login page; employees are
/// rerouted to their own home rather than rejected.
pub struct RequireAdmin(pub Viewer);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = GuardRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ResolvedSession(session) =
            ResolvedSession::from_request_parts(parts, state).await?;
        apply_guard(session, Role::Admin).map(Self)
    }
}
