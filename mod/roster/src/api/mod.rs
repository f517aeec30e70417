mod classes;
mod students;
pub mod views;

use std::sync::Arc;

use axum::Router;

use crate::service::RosterService;

/// Shared application state.
pub type AppState = Arc<RosterService>;

/// Build the roster router.
///
/// Routes are absolute (`/classes`, `/students`) — the server merges them
/// into the root router.
pub fn build_router(svc: Arc<RosterService>) -> Router {
    Router::new()
        .merge(classes::routes())
        .merge(students::routes())
        .with_state(svc)
}
