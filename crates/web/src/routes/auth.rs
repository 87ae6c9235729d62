//! Authentication route handlers.
//!
//! Login exchanges the submitted credentials for a bearer token and user
//! record through the HR API; the two are installed together and the token
//! persisted for future visits. Logout destroys the stored token and the
//! session. There is no automatic retry anywhere: a failed attempt is
//! reported once and retried only by resubmitting the form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::error;
use crate::filters;
use crate::middleware::ResolvedSession;
use crate::middleware::auth::{clear_credential, read_credential, save_credential};
use crate::session::{AuthError, SessionManager, routing};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

fn login_error_message(code: &str) -> String {
    match code {
        "credentials" => "Invalid username or password. Please try again.",
        "unreachable" => "Could not reach the HR service. Please try again.",
        "session" => "Your session could not be updated. Please try again.",
        _ => "Login failed. Please try again.",
    }
    .to_string()
}

/// Display the login page.
///
/// A visitor whose stored token still resolves is sent straight to their
/// landing route instead of seeing the form again.
pub async fn login_page(
    ResolvedSession(session): ResolvedSession,
    Query(query): Query<super::MessageQuery>,
) -> Response {
    if let Some(user) = session.user() {
        return Redirect::to(routing::landing_route(Some(user))).into_response();
    }

    LoginTemplate {
        error: query.error.as_deref().map(login_error_message),
    }
    .into_response()
}

/// Handle login form submission.
///
/// The HR API returns the token and user atomically; both are installed in
/// one transition and the token saved to the credential store. On failure
/// nothing changes: the store is untouched and the form is shown again with
/// a retryable notice.
pub async fn login(
    State(state): State<AppState>,
    client_session: tower_sessions::Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let stored = read_credential(&client_session).await;
    let had_token = stored.is_some();

    let mut manager = SessionManager::new(state.hr().clone());
    manager.subscribe(error::sync_sentry_user);
    manager.resolve(stored).await;

    if let Some(user) = manager.session().user() {
        // Already signed in (e.g. a double submit that raced a completed
        // attempt): land without re-authenticating.
        return Redirect::to(routing::landing_route(Some(user))).into_response();
    }

    if had_token {
        // The stored token no longer resolves; destroy it before installing
        // a fresh one.
        if let Err(err) = clear_credential(&client_session).await {
            tracing::error!(error = %err, "failed to clear rejected credential");
        }
    }

    match manager.login(&form.username, &form.password).await {
        Ok(()) => {
            if let Some(credential) = manager.session().credential() {
                if let Err(err) = save_credential(&client_session, credential).await {
                    tracing::error!(error = %err, "failed to persist credential after login");
                    return Redirect::to("/auth/login?error=session").into_response();
                }
            }

            Redirect::to(routing::landing_route(manager.session().user())).into_response()
        }
        Err(AuthError::AuthenticationFailed) => {
            tracing::warn!(username = %form.username, "login rejected by the HR API");
            Redirect::to("/auth/login?error=credentials").into_response()
        }
        Err(AuthError::Backend(err)) => {
            tracing::warn!(error = %err, "login could not reach the HR API");
            Redirect::to("/auth/login?error=unreachable").into_response()
        }
    }
}

/// Handle logout.
///
/// Always lands on the login page, whatever the prior state: the in-memory
/// session transitions to unauthenticated, the stored token is destroyed,
/// and the client session is flushed.
pub async fn logout(
    State(state): State<AppState>,
    client_session: tower_sessions::Session,
) -> Redirect {
    let mut manager = SessionManager::new(state.hr().clone());
    manager.subscribe(error::sync_sentry_user);
    manager.logout();

    if let Err(err) = clear_credential(&client_session).await {
        tracing::error!(error = %err, "failed to clear credential on logout");
    }

    if let Err(err) = client_session.flush().await {
        tracing::error!(error = %err, "failed to flush session on logout");
    }

    Redirect::to(routing::LOGIN)
}
