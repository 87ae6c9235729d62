//! Landing redirect for the root and dashboard entry routes.

use axum::response::Redirect;

use crate::middleware::ResolvedSession;
use crate::session::routing;

/// Send the visitor to the route matching their session: login when none,
/// otherwise the home for their role (through profile setup when owed).
pub async fn landing(ResolvedSession(session): ResolvedSession) -> Redirect {
    Redirect::to(routing::landing_route(session.user()))
}
