//! Slip Repository
//!
//! Saved slips are append-mostly: each save writes the slip row plus its
//! items in a single transaction, and stored amounts are never recomputed.

use super::{RepoError, RepoResult};
use shared::models::{GeneratedSlip, Slip, SlipItem, SlipStatus};
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, user_id, format_id, serial_number, slip_date, total_amount, items_count, status, created_at";

pub async fn list(
    pool: &SqlitePool,
    status: Option<SlipStatus>,
    user_id: Option<&str>,
) -> RepoResult<Vec<Slip>> {
    let mut slips = match (status, user_id) {
        (Some(s), Some(u)) => {
            sqlx::query_as::<_, Slip>(&format!(
                "SELECT {COLUMNS} FROM slip WHERE status = ? AND user_id = ? ORDER BY created_at DESC"
            ))
            .bind(s)
            .bind(u)
            .fetch_all(pool)
            .await?
        }
        (Some(s), None) => {
            sqlx::query_as::<_, Slip>(&format!(
                "SELECT {COLUMNS} FROM slip WHERE status = ? ORDER BY created_at DESC"
            ))
            .bind(s)
            .fetch_all(pool)
            .await?
        }
        (None, Some(u)) => {
            sqlx::query_as::<_, Slip>(&format!(
                "SELECT {COLUMNS} FROM slip WHERE user_id = ? ORDER BY created_at DESC"
            ))
            .bind(u)
            .fetch_all(pool)
            .await?
        }
        (None, None) => {
            sqlx::query_as::<_, Slip>(&format!(
                "SELECT {COLUMNS} FROM slip ORDER BY created_at DESC"
            ))
            .fetch_all(pool)
            .await?
        }
    };

    for slip in &mut slips {
        slip.items = find_items(pool, &slip.id).await?;
    }
    Ok(slips)
}

pub async fn get(pool: &SqlitePool, id: &str) -> RepoResult<Option<Slip>> {
    let mut slip = sqlx::query_as::<_, Slip>(&format!("SELECT {COLUMNS} FROM slip WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    if let Some(ref mut s) = slip {
        s.items = find_items(pool, &s.id).await?;
    }
    Ok(slip)
}

/// Persist one generated slip with its items in a single transaction.
pub async fn save(
    pool: &SqlitePool,
    user_id: Option<&str>,
    generated: &GeneratedSlip,
) -> RepoResult<Slip> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO slip (id, user_id, format_id, serial_number, slip_date, total_amount, items_count, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )
    .bind(&id)
    .bind(user_id)
    .bind(&generated.format_id)
    .bind(&generated.serial_number)
    .bind(&generated.slip_date)
    .bind(generated.total_amount)
    .bind(generated.items_count)
    .bind(SlipStatus::Generated)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    for item in &generated.items {
        sqlx::query(
            "INSERT INTO slip_item (id, slip_id, product_id, product_name, product_unit, quantity, unit_price, total_price) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(&id)
        .bind(&item.product_id)
        .bind(&item.name)
        .bind(&item.unit)
        .bind(item.quantity)
        .bind(item.unit_price)
        .bind(item.total_price)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    get(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to save slip".into()))
}

pub async fn update_status(pool: &SqlitePool, id: &str, status: SlipStatus) -> RepoResult<Slip> {
    let result = sqlx::query("UPDATE slip SET status = ?1 WHERE id = ?2")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Slip {id} not found")));
    }

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Slip {id} not found")))
}

/// Hard delete; items cascade via FK.
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM slip WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

async fn find_items(pool: &SqlitePool, slip_id: &str) -> RepoResult<Vec<SlipItem>> {
    let items = sqlx::query_as::<_, SlipItem>(
        "SELECT id, slip_id, product_id, product_name, product_unit, quantity, unit_price, total_price FROM slip_item WHERE slip_id = ? ORDER BY id",
    )
    .bind(slip_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}
