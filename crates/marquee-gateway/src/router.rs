//! Axum router wiring.
//!
//! Every route, including the operational ones, passes through the request
//! recording middleware.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, obs, ops};

pub fn build_router(state: AppState) -> Router {
    mount(Router::new(), state)
}

/// Add the operational routes and request recording to an existing router.
///
/// Host applications pass their own routes here so those are recorded too.
pub fn mount(app: Router<AppState>, state: AppState) -> Router {
    app.route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/status", get(ops::status))
        .route("/status/reset", post(ops::reset))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::track_requests,
        ))
        .with_state(state)
}
