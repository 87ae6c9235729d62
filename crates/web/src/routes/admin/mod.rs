//! Admin area routes.
//!
//! Everything here requires a resolved `ADMIN` session; the extractor
//! reroutes everyone else before a handler runs.

pub mod employees;
pub mod home;
pub mod leaves;
pub mod worklogs;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the admin area router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/register", post(home::register))
        .route("/employees", get(employees::index).post(employees::create))
        .route("/employees/{id}", post(employees::update))
        .route("/employees/{id}/delete", post(employees::delete))
        .route("/leaves", get(leaves::index))
        .route("/leaves/{id}/approve", post(leaves::approve))
        .route("/leaves/{id}/reject", post(leaves::reject))
        .route("/worklogs", get(worklogs::index))
}
