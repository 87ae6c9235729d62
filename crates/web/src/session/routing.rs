//! Post-login landing routes.
//!
//! Pure decision logic: given the resolved user (or lack thereof), pick the
//! route their session should land on. Used right after a successful login
//! and whenever the root or dashboard entry route is visited directly.

use crewdesk_core::Role;

use crate::models::user::CurrentUser;

/// Login entry point.
pub const LOGIN: &str = "/auth/login";

/// Admin area home.
pub const ADMIN_HOME: &str = "/admin";

/// One-time profile setup screen.
pub const PROFILE_SETUP: &str = "/employee/profile-setup";

/// Employee area home.
pub const EMPLOYEE_HOME: &str = "/employee/profile";

/// The route a user's session should land on.
///
/// Deterministic over `(role, profile_setup_complete)`; employees are sent
/// through the one-time profile setup before their home.
#[must_use]
pub fn landing_route(user: Option<&CurrentUser>) -> &'static str {
    match user {
        None => LOGIN,
        Some(user) => match user.role {
            Role::Admin => ADMIN_HOME,
            Role::Employee if !user.profile_setup_complete => PROFILE_SETUP,
            Role::Employee => EMPLOYEE_HOME,
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crewdesk_core::UserId;

    use super::*;

    fn user(role: Role, profile_setup_complete: bool) -> CurrentUser {
        CurrentUser {
            id: UserId::new(1),
            username: "someone".to_string(),
            email: "someone@example.com".to_string(),
            role,
            profile_setup_complete,
            enabled: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_absent_user_lands_on_login() {
        assert_eq!(landing_route(None), LOGIN);
    }

    #[test]
    fn test_admin_lands_on_admin_home_regardless_of_setup() {
        assert_eq!(landing_route(Some(&user(Role::Admin, true))), ADMIN_HOME);
        assert_eq!(landing_route(Some(&user(Role::Admin, false))), ADMIN_HOME);
    }

    #[test]
    fn test_employee_without_setup_lands_on_profile_setup() {
        assert_eq!(
            landing_route(Some(&user(Role::Employee, false))),
            PROFILE_SETUP
        );
    }

    #[test]
    fn test_employee_with_setup_lands_on_profile_home() {
        assert_eq!(
            landing_route(Some(&user(Role::Employee, true))),
            EMPLOYEE_HOME
        );
    }
}
