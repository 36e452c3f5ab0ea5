//! HTTP API
//!
//! One module per resource, each exposing a `router()` merged here.

pub mod formats;
pub mod health;
pub mod products;
pub mod slips;
pub mod stats;

use axum::Router;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(products::router())
        .merge(formats::router())
        .merge(slips::router())
        .merge(stats::router())
}
