//! Slip API: generation, persistence, printing

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/slips", slip_routes())
}

fn slip_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::save))
        .route("/generate", post(handler::generate))
        .route("/print", post(handler::print))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
        .route("/{id}/status", put(handler::update_status))
}
