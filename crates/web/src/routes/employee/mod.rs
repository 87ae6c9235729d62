//! Employee self-service routes.
//!
//! Everything here requires a resolved `EMPLOYEE` session; the extractor
//! reroutes everyone else before a handler runs.

pub mod leave;
pub mod profile;
pub mod worklogs;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the employee area router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile::show).post(profile::update))
        .route(
            "/profile-setup",
            get(profile::setup_page).post(profile::complete_setup),
        )
        .route("/leave", get(leave::index).post(leave::submit))
        .route("/leave/{id}/cancel", post(leave::cancel))
        .route("/worklogs", get(worklogs::index).post(worklogs::submit))
}
