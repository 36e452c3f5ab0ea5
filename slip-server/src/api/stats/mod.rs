//! Dashboard statistics

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/stats", get(stats))
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub products: i64,
    pub formats: i64,
    pub active_formats: i64,
    pub slips: i64,
    pub items: i64,
    /// Slips created in the last 7 days
    pub recent_slips: i64,
}

/// GET /api/stats
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<StatsResponse>> {
    let pool = state.pool();
    let week_ago = shared::util::now_millis() - 7 * 24 * 60 * 60 * 1000;

    let response = StatsResponse {
        products: count(pool, "SELECT COUNT(*) FROM product WHERE is_active = 1").await?,
        formats: count(pool, "SELECT COUNT(*) FROM slip_format").await?,
        active_formats: count(pool, "SELECT COUNT(*) FROM slip_format WHERE is_active = 1").await?,
        slips: count(pool, "SELECT COUNT(*) FROM slip").await?,
        items: count(pool, "SELECT COUNT(*) FROM slip_item").await?,
        recent_slips: sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM slip WHERE created_at >= ?")
            .bind(week_ago)
            .fetch_one(pool)
            .await
            .map_err(|e| AppError::database(e.to_string()))?,
    };

    Ok(Json(response))
}

async fn count(pool: &SqlitePool, sql: &str) -> AppResult<i64> {
    sqlx::query_scalar::<_, i64>(sql)
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))
}
