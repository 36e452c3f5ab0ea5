//! Slip Format Repository

use super::{RepoError, RepoResult};
use shared::models::{SlipFormat, SlipFormatCreate, SlipFormatUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, description, template_html, logo_data, logo_type, store_name, store_address, store_phone, store_email, store_website, tax_rate, currency_symbol, footer_text, category, is_active, created_at, updated_at";

pub async fn list(pool: &SqlitePool, active_only: bool) -> RepoResult<Vec<SlipFormat>> {
    let sql = if active_only {
        format!("SELECT {COLUMNS} FROM slip_format WHERE is_active = 1 ORDER BY name")
    } else {
        format!("SELECT {COLUMNS} FROM slip_format ORDER BY name")
    };
    let formats = sqlx::query_as::<_, SlipFormat>(&sql).fetch_all(pool).await?;
    Ok(formats)
}

pub async fn get(pool: &SqlitePool, id: &str) -> RepoResult<Option<SlipFormat>> {
    let format =
        sqlx::query_as::<_, SlipFormat>(&format!("SELECT {COLUMNS} FROM slip_format WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(format)
}

pub async fn create(pool: &SqlitePool, data: SlipFormatCreate) -> RepoResult<SlipFormat> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = shared::util::now_millis();

    sqlx::query(
        "INSERT INTO slip_format (id, name, description, template_html, logo_data, logo_type, store_name, store_address, store_phone, store_email, store_website, tax_rate, currency_symbol, footer_text, category, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, 1, ?16, ?16)",
    )
    .bind(&id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(&data.template_html)
    .bind(&data.logo_data)
    .bind(&data.logo_type)
    .bind(&data.store_name)
    .bind(&data.store_address)
    .bind(&data.store_phone)
    .bind(&data.store_email)
    .bind(&data.store_website)
    .bind(data.tax_rate)
    .bind(&data.currency_symbol)
    .bind(&data.footer_text)
    .bind(&data.category)
    .bind(now)
    .execute(pool)
    .await?;

    get(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create slip format".into()))
}

pub async fn update(pool: &SqlitePool, id: &str, data: SlipFormatUpdate) -> RepoResult<SlipFormat> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE slip_format SET name = COALESCE(?1, name), description = COALESCE(?2, description), template_html = COALESCE(?3, template_html), logo_data = COALESCE(?4, logo_data), logo_type = COALESCE(?5, logo_type), store_name = COALESCE(?6, store_name), store_address = COALESCE(?7, store_address), store_phone = COALESCE(?8, store_phone), store_email = COALESCE(?9, store_email), store_website = COALESCE(?10, store_website), tax_rate = COALESCE(?11, tax_rate), currency_symbol = COALESCE(?12, currency_symbol), footer_text = COALESCE(?13, footer_text), category = COALESCE(?14, category), is_active = COALESCE(?15, is_active), updated_at = ?16 WHERE id = ?17",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(&data.template_html)
    .bind(&data.logo_data)
    .bind(&data.logo_type)
    .bind(&data.store_name)
    .bind(&data.store_address)
    .bind(&data.store_phone)
    .bind(&data.store_email)
    .bind(&data.store_website)
    .bind(data.tax_rate)
    .bind(&data.currency_symbol)
    .bind(&data.footer_text)
    .bind(&data.category)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Slip format {id} not found")));
    }

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Slip format {id} not found")))
}

/// Hard delete. Saved slips keep their format_id and survive the removal.
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM slip_format WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
