//! Request recording middleware.
//!
//! Endpoint identity is the matched route pattern (`/movies/:id`), so path
//! parameters do not fan out the endpoint table. Requests that match no route
//! all share [`UNMATCHED_ENDPOINT`].

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Endpoint id for requests no route matched.
pub const UNMATCHED_ENDPOINT: &str = "<unmatched>";

pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let endpoint = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ENDPOINT.to_owned());

    let started = Instant::now();
    let res = next.run(req).await;

    state
        .metrics()
        .record_http_request(&endpoint, res.status().as_u16(), started.elapsed());
    res
}
