//! Slip format handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;
use shared::models::{SlipFormat, SlipFormatCreate, SlipFormatUpdate};

use crate::core::ServerState;
use crate::db::repository::slip_format;
use crate::rendering::{RenderItem, SlipContext, render};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_TEMPLATE_LEN,
    validate_logo_data, validate_optional_text, validate_required_text, validate_tax_rate,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub active_only: bool,
}

/// GET /api/formats
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<SlipFormat>>> {
    let formats = slip_format::list(state.pool(), query.active_only).await?;
    Ok(Json(formats))
}

/// GET /api/formats/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SlipFormat>> {
    let found = slip_format::get(state.pool(), &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Slip format {id} not found")))?;
    Ok(Json(found))
}

/// POST /api/formats
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SlipFormatCreate>,
) -> AppResult<Json<SlipFormat>> {
    validate_create(&payload)?;
    let created = slip_format::create(state.pool(), payload).await?;
    Ok(Json(created))
}

/// PUT /api/formats/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SlipFormatUpdate>,
) -> AppResult<Json<SlipFormat>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(ref template) = payload.template_html {
        validate_required_text(template, "template_html", MAX_TEMPLATE_LEN)?;
    }
    if let Some(tax_rate) = payload.tax_rate {
        validate_tax_rate(tax_rate)?;
    }
    validate_logo_data(&payload.logo_data)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.store_address, "store_address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.footer_text, "footer_text", MAX_NOTE_LEN)?;

    let updated = slip_format::update(state.pool(), &id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/formats/{id} (hard delete; saved slips keep the id)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let deleted = slip_format::delete(state.pool(), &id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Slip format {id} not found")));
    }
    Ok(Json(true))
}

/// POST /api/formats/{id}/preview
///
/// Renders one sample slip through the stored template so a format can be
/// checked without generating a batch.
pub async fn preview(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let format = slip_format::get(state.pool(), &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Slip format {id} not found")))?;

    let items = vec![
        RenderItem {
            name: "Sample Item A".into(),
            quantity: 2,
            unit: "pieces".into(),
            total_price: 150.0,
        },
        RenderItem {
            name: "Sample Item B".into(),
            quantity: 1,
            unit: "kg".into(),
            total_price: 85.5,
        },
    ];
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let ctx = SlipContext::new(&format, "00000000000", &today, 235.5, items);

    Ok(Html(render(&format.template_html, &ctx)))
}

fn validate_create(payload: &SlipFormatCreate) -> AppResult<()> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.template_html, "template_html", MAX_TEMPLATE_LEN)?;
    validate_tax_rate(payload.tax_rate)?;
    validate_logo_data(&payload.logo_data)?;
    validate_required_text(
        &payload.currency_symbol,
        "currency_symbol",
        MAX_SHORT_TEXT_LEN,
    )?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.store_name, "store_name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.store_address, "store_address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.footer_text, "footer_text", MAX_NOTE_LEN)?;
    Ok(())
}
