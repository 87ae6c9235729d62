//! Role-based route guarding.
//!
//! A pure decision over the current session and a route's required role.
//! The extractors in `crate::middleware::auth` turn the decision into HTTP
//! responses; keeping the decision itself pure makes every combination
//! directly testable.

use crewdesk_core::Role;

use super::Session;
use super::routing;

/// Outcome of a navigation attempt against a guarded route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Render the guarded content.
    Grant,
    /// Resolution has not completed; render nothing decisive yet.
    Pending,
    /// No session: send to the login entry point.
    Login,
    /// Authenticated but in the wrong area: send the user to the landing
    /// route matching their actual role, never an error page.
    Redirect(&'static str),
}

/// Decide whether the session may enter a route requiring `required`.
#[must_use]
pub fn check(session: &Session, required: Role) -> Access {
    match session {
        Session::Resolving => Access::Pending,
        Session::Unauthenticated => Access::Login,
        Session::Resolved { user, .. } => {
            if user.role == required {
                Access::Grant
            } else {
                Access::Redirect(routing::landing_route(Some(user)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crewdesk_core::{Credential, UserId};

    use crate::models::user::CurrentUser;

    use super::*;

    fn resolved(role: Role, profile_setup_complete: bool) -> Session {
        Session::Resolved {
            credential: Credential::new("t1"),
            user: CurrentUser {
                id: UserId::new(1),
                username: "someone".to_string(),
                email: "someone@example.com".to_string(),
                role,
                profile_setup_complete,
                enabled: true,
                created_at: Utc::now(),
            },
        }
    }

    #[test]
    fn test_resolving_defers_without_redirecting() {
        assert_eq!(check(&Session::Resolving, Role::Admin), Access::Pending);
        assert_eq!(check(&Session::Resolving, Role::Employee), Access::Pending);
    }

    #[test]
    fn test_unauthenticated_goes_to_login() {
        assert_eq!(check(&Session::Unauthenticated, Role::Admin), Access::Login);
        assert_eq!(
            check(&Session::Unauthenticated, Role::Employee),
            Access::Login
        );
    }

    #[test]
    fn test_matching_role_is_granted() {
        assert_eq!(check(&resolved(Role::Admin, true), Role::Admin), Access::Grant);
        assert_eq!(
            check(&resolved(Role::Employee, true), Role::Employee),
            Access::Grant
        );
    }

    #[test]
    fn test_employee_on_admin_route_reroutes_to_their_home() {
        assert_eq!(
            check(&resolved(Role::Employee, true), Role::Admin),
            Access::Redirect(routing::EMPLOYEE_HOME)
        );
        // An employee who still owes profile setup reroutes there instead.
        assert_eq!(
            check(&resolved(Role::Employee, false), Role::Admin),
            Access::Redirect(routing::PROFILE_SETUP)
        );
    }

    #[test]
    fn test_admin_on_employee_route_reroutes_to_admin_home() {
        assert_eq!(
            check(&resolved(Role::Admin, true), Role::Employee),
            Access::Redirect(routing::ADMIN_HOME)
        );
    }
}
