//! The session/authorization gate.
//!
//! A [`Session`] pairs the stored bearer credential with the user it
//! resolves to. Exactly one [`SessionManager`] owns the session for the
//! duration of one resolution (one request, in this server-rendered app);
//! the route guard and landing-route logic read it by reference, and
//! observers are notified synchronously on every transition. There is no
//! ambient "current user" anywhere else.
//!
//! Legal transitions:
//!
//! ```text
//! Resolving       -> Resolved         backend confirms the stored token
//! Resolving       -> Unauthenticated  no token, or the backend rejects it
//! Unauthenticated -> Resolved         successful login
//! Resolved        -> Unauthenticated  logout / invalidation
//! ```
//!
//! A fresh request always restarts at `Resolving`; a settled session never
//! re-enters it.

pub mod guard;
pub mod routing;

use thiserror::Error;

use crewdesk_core::Credential;

use crate::hr::{HrClient, HrError};
use crate::models::user::{CurrentUser, Viewer};

/// Authentication state for one resolution.
#[derive(Debug, Clone)]
pub enum Session {
    /// The stored credential (if any) has not been exchanged yet. Nothing
    /// role-gated may render while in this state.
    Resolving,
    /// The backend confirmed the credential and returned its user. Both
    /// halves are present by construction - there is no orphaned resolved
    /// state.
    Resolved {
        credential: Credential,
        user: CurrentUser,
    },
    /// No valid session exists.
    Unauthenticated,
}

impl Session {
    /// Whether the session settled on a confirmed user.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    /// The confirmed user, if resolved.
    #[must_use]
    pub const fn user(&self) -> Option<&CurrentUser> {
        match self {
            Self::Resolved { user, .. } => Some(user),
            Self::Resolving | Self::Unauthenticated => None,
        }
    }

    /// The live credential, if resolved.
    #[must_use]
    pub const fn credential(&self) -> Option<&Credential> {
        match self {
            Self::Resolved { credential, .. } => Some(credential),
            Self::Resolving | Self::Unauthenticated => None,
        }
    }

    /// Consume a resolved session into its viewer pair.
    #[must_use]
    pub fn into_viewer(self) -> Option<Viewer> {
        match self {
            Self::Resolved { credential, user } => Some(Viewer { user, credential }),
            Self::Resolving | Self::Unauthenticated => None,
        }
    }
}

/// Errors surfaced by [`SessionManager::login`].
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend explicitly rejected the submitted credentials.
    #[error("invalid username or password")]
    AuthenticationFailed,

    /// The HR API could not be reached or answered malformed.
    #[error("authentication service unavailable: {0}")]
    Backend(#[source] HrError),
}

type Observer = Box<dyn Fn(&Session) + Send + Sync>;

/// Owns the [`Session`] and drives every legal transition.
pub struct SessionManager {
    hr: HrClient,
    session: Session,
    observers: Vec<Observer>,
}

impl SessionManager {
    /// Create a manager for a fresh resolution. The session starts at
    /// `Resolving`.
    #[must_use]
    pub fn new(hr: HrClient) -> Self {
        Self {
            hr,
            session: Session::Resolving,
            observers: Vec::new(),
        }
    }

    /// The current session state.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Consume the manager, keeping the settled session.
    #[must_use]
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Register an observer called synchronously on every transition.
    pub fn subscribe(&mut self, observer: impl Fn(&Session) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn transition(&mut self, next: Session) {
        self.session = next;
        for observer in &self.observers {
            observer(&self.session);
        }
    }

    /// Exchange the stored credential for the current user.
    ///
    /// Runs once per resolution, before anything role-gated renders. With
    /// no stored token this settles to `Unauthenticated` without a network
    /// call. Any backend failure - transport, rejection, malformed body -
    /// degrades to `Unauthenticated` rather than surfacing; the caller is
    /// responsible for clearing the store when a stored token did not
    /// resolve.
    pub async fn resolve(&mut self, stored: Option<Credential>) -> &Session {
        debug_assert!(
            matches!(self.session, Session::Resolving),
            "resolution runs once per session"
        );

        match stored {
            None => self.transition(Session::Unauthenticated),
            Some(credential) => match self.hr.current_user(&credential).await {
                Ok(record) => {
                    let user = CurrentUser::from(record);
                    self.transition(Session::Resolved { credential, user });
                }
                Err(err) => {
                    tracing::debug!(error = %err, "stored credential did not resolve, treating as logged out");
                    self.transition(Session::Unauthenticated);
                }
            },
        }

        &self.session
    }

    /// Authenticate against the HR API and install the new session.
    ///
    /// The backend returns the token and user in a single payload; they are
    /// installed together, so the session never observes a credential
    /// without its matching user. On failure nothing is installed and the
    /// prior state is left untouched.
    ///
    /// # Errors
    ///
    /// `AuthenticationFailed` when the backend rejects the credentials,
    /// `Backend` when it cannot be reached.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        debug_assert!(
            matches!(self.session, Session::Unauthenticated),
            "login starts from a settled, logged-out session"
        );

        let grant = self.hr.login(username, password).await.map_err(|err| match err {
            HrError::Transport(_) => AuthError::Backend(err),
            HrError::Unauthorized | HrError::Status(_) => AuthError::AuthenticationFailed,
        })?;

        let credential = Credential::new(grant.token);
        let user = CurrentUser::from(grant.user);
        self.transition(Session::Resolved { credential, user });

        Ok(())
    }

    /// Drop the session. Never fails, from any prior state; repeated calls
    /// stay `Unauthenticated` without re-notifying.
    pub fn logout(&mut self) {
        if matches!(self.session, Session::Unauthenticated) {
            return;
        }
        self.transition(Session::Unauthenticated);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::config::HrApiConfig;

    /// A client pointed at a port nothing listens on: every call fails with
    /// a transport error without leaving the machine.
    fn unreachable_hr() -> HrClient {
        HrClient::new(&HrApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
        })
    }

    #[tokio::test]
    async fn test_resolve_without_token_skips_network() {
        let mut manager = SessionManager::new(unreachable_hr());
        let session = manager.resolve(None).await;
        // An unreachable backend would have errored; settling proves no
        // call was made.
        assert!(matches!(session, Session::Unauthenticated));
    }

    #[tokio::test]
    async fn test_resolve_degrades_on_transport_failure() {
        let mut manager = SessionManager::new(unreachable_hr());
        let session = manager.resolve(Some(Credential::new("stale"))).await;
        assert!(matches!(session, Session::Unauthenticated));
    }

    #[tokio::test]
    async fn test_failed_login_leaves_state_untouched() {
        let mut manager = SessionManager::new(unreachable_hr());
        manager.resolve(None).await;

        let result = manager.login("alice", "pw").await;
        assert!(matches!(result, Err(AuthError::Backend(_))));
        assert!(matches!(manager.session(), Session::Unauthenticated));
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let notifications = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&notifications);

        let mut manager = SessionManager::new(unreachable_hr());
        manager.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        manager.resolve(None).await;
        assert_eq!(notifications.load(Ordering::SeqCst), 1);

        manager.logout();
        manager.logout();
        assert!(matches!(manager.session(), Session::Unauthenticated));
        // Already logged out: no further transitions, no further notifies.
        assert_eq!(notifications.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_observers_fire_on_resolution() {
        let notifications = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&notifications);

        let mut manager = SessionManager::new(unreachable_hr());
        manager.subscribe(move |session| {
            assert!(!session.is_resolved());
            seen.fetch_add(1, Ordering::SeqCst);
        });

        manager.resolve(Some(Credential::new("stale"))).await;
        assert_eq!(notifications.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resolved_session_yields_viewer_pair() {
        // Constructed directly: the manager is the only producer in
        // production code.
        let session = Session::Unauthenticated;
        assert!(session.into_viewer().is_none());
    }
}
