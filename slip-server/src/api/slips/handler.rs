//! Slip handlers
//!
//! Generation returns an ephemeral batch; saving is a separate call so the
//! client can discard or reroll a batch without touching the database.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;
use shared::models::{GenerateSlipsRequest, GeneratedSlip, SaveSlipsRequest, Slip, SlipStatus};

use crate::core::ServerState;
use crate::db::repository::{product, slip, slip_format};
use crate::rendering::{self, RenderItem, SlipContext};
use crate::slips::generate_batch;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<SlipStatus>,
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: SlipStatus,
}

#[derive(Debug, Deserialize)]
pub struct PrintSlipsRequest {
    pub format_id: String,
    pub slips: Vec<GeneratedSlip>,
}

/// POST /api/slips/generate
pub async fn generate(
    State(state): State<ServerState>,
    Json(request): Json<GenerateSlipsRequest>,
) -> AppResult<Json<Vec<GeneratedSlip>>> {
    let format = slip_format::get(state.pool(), &request.format_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Slip format {} not found", request.format_id))
        })?;

    let catalog = product::list(state.pool(), false).await?;

    let mut rng = rand::thread_rng();
    let slips = generate_batch(&mut rng, &request, &format, &catalog, &state.pricing)?;

    tracing::info!(
        count = slips.len(),
        format_id = %format.id,
        "slip batch generated"
    );
    Ok(Json(slips))
}

/// POST /api/slips
///
/// Each slip commits in its own transaction; a failure partway leaves the
/// earlier slips saved and rolls back only the failing one.
pub async fn save(
    State(state): State<ServerState>,
    Json(request): Json<SaveSlipsRequest>,
) -> AppResult<Json<Vec<Slip>>> {
    if request.slips.is_empty() {
        return Err(AppError::validation("no slips to save"));
    }

    let mut saved = Vec::with_capacity(request.slips.len());
    for generated in &request.slips {
        let stored = slip::save(state.pool(), request.user_id.as_deref(), generated).await?;
        saved.push(stored);
    }

    tracing::info!(count = saved.len(), "slip batch saved");
    Ok(Json(saved))
}

/// GET /api/slips?status=…&user_id=…
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Slip>>> {
    let slips = slip::list(state.pool(), query.status, query.user_id.as_deref()).await?;
    Ok(Json(slips))
}

/// GET /api/slips/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Slip>> {
    let found = slip::get(state.pool(), &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Slip {id} not found")))?;
    Ok(Json(found))
}

/// PUT /api/slips/{id}/status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<Slip>> {
    let updated = slip::update_status(state.pool(), &id, payload.status).await?;
    Ok(Json(updated))
}

/// DELETE /api/slips/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let deleted = slip::delete(state.pool(), &id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Slip {id} not found")));
    }
    Ok(Json(true))
}

/// POST /api/slips/print
///
/// Renders a generated batch into one printable HTML document.
pub async fn print(
    State(state): State<ServerState>,
    Json(request): Json<PrintSlipsRequest>,
) -> AppResult<Html<String>> {
    let format = slip_format::get(state.pool(), &request.format_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Slip format {} not found", request.format_id))
        })?;

    let blocks: Vec<String> = request
        .slips
        .iter()
        .map(|generated| {
            let items = generated
                .items
                .iter()
                .map(|item| RenderItem {
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit: item.unit.clone(),
                    total_price: item.total_price,
                })
                .collect();
            let ctx = SlipContext::new(
                &format,
                &generated.serial_number,
                &generated.slip_date,
                generated.total_amount,
                items,
            );
            rendering::render(&format.template_html, &ctx)
        })
        .collect();

    Ok(Html(rendering::print_document(&blocks)))
}
