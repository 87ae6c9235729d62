//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Landing redirect (role-aware)
//! GET  /dashboard               - Landing redirect (same logic)
//! GET  /health                  - Health check
//!
//! # Auth
//! GET  /auth/login              - Login page
//! POST /auth/login              - Login action
//! POST /auth/logout             - Logout action
//!
//! # Employee area (requires EMPLOYEE role)
//! GET  /employee/profile        - Profile view
//! POST /employee/profile        - Profile update
//! GET  /employee/profile-setup  - One-time profile setup form
//! POST /employee/profile-setup  - Submit profile setup
//! GET  /employee/leave          - Leave requests + apply form
//! POST /employee/leave          - Submit leave request
//! POST /employee/leave/{id}/cancel - Cancel a pending request
//! GET  /employee/worklogs       - Work logs + entry form
//! POST /employee/worklogs       - Submit work log
//!
//! # Admin area (requires ADMIN role)
//! GET  /admin                   - Admin home (overview + account registration)
//! POST /admin/register          - Register an employee account
//! GET  /admin/employees         - Employee records
//! POST /admin/employees         - Create employee record
//! POST /admin/employees/{id}    - Update employee record
//! POST /admin/employees/{id}/delete - Delete employee record
//! GET  /admin/leaves            - Leave requests across the company
//! POST /admin/leaves/{id}/approve - Approve a request
//! POST /admin/leaves/{id}/reject  - Reject a request
//! GET  /admin/worklogs          - Work logs across the company
//! ```
//!
//! Mutations are plain HTML form posts (redirect-after-post), so update and
//! delete use POST paths with a verb segment.

pub mod admin;
pub mod auth;
pub mod employee;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;

use crewdesk_core::Role;

use crate::models::user::CurrentUser;
use crate::state::AppState;

/// Data every chrome-wrapped page needs for the shared nav bar.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub username: String,
    pub is_admin: bool,
}

impl From<&CurrentUser> for Chrome {
    fn from(user: &CurrentUser) -> Self {
        Self {
            username: user.username.clone(),
            is_admin: user.role == Role::Admin,
        }
    }
}

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the front-end.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Landing redirects
        .route("/", get(home::landing))
        .route("/dashboard", get(home::landing))
        // Auth routes
        .nest("/auth", auth_routes())
        // Employee area
        .nest("/employee", employee::routes())
        // Admin area
        .nest("/admin", admin::routes())
}
