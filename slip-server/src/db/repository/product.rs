//! Product Repository

use super::{RepoError, RepoResult};
use shared::models::{Product, ProductCreate, ProductUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, name, unit, base_price, max_price, category, is_active, created_at, updated_at";

pub async fn list(pool: &SqlitePool, active_only: bool) -> RepoResult<Vec<Product>> {
    let sql = if active_only {
        format!("SELECT {COLUMNS} FROM product WHERE is_active = 1 ORDER BY name")
    } else {
        format!("SELECT {COLUMNS} FROM product ORDER BY name")
    };
    let products = sqlx::query_as::<_, Product>(&sql).fetch_all(pool).await?;
    Ok(products)
}

pub async fn get(pool: &SqlitePool, id: &str) -> RepoResult<Option<Product>> {
    let product =
        sqlx::query_as::<_, Product>(&format!("SELECT {COLUMNS} FROM product WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(product)
}

pub async fn create(pool: &SqlitePool, data: ProductCreate) -> RepoResult<Product> {
    if data.base_price > data.max_price {
        return Err(RepoError::Validation(format!(
            "base_price ({}) must not exceed max_price ({})",
            data.base_price, data.max_price
        )));
    }

    let id = uuid::Uuid::new_v4().to_string();
    let now = shared::util::now_millis();

    sqlx::query(
        "INSERT INTO product (id, name, unit, base_price, max_price, category, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7)",
    )
    .bind(&id)
    .bind(&data.name)
    .bind(&data.unit)
    .bind(data.base_price)
    .bind(data.max_price)
    .bind(&data.category)
    .bind(now)
    .execute(pool)
    .await?;

    get(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}

pub async fn update(pool: &SqlitePool, id: &str, data: ProductUpdate) -> RepoResult<Product> {
    let current = get(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))?;

    // Re-validate the price band against the merged values
    let base = data.base_price.unwrap_or(current.base_price);
    let max = data.max_price.unwrap_or(current.max_price);
    if base > max {
        return Err(RepoError::Validation(format!(
            "base_price ({base}) must not exceed max_price ({max})"
        )));
    }

    let now = shared::util::now_millis();
    sqlx::query(
        "UPDATE product SET name = COALESCE(?1, name), unit = COALESCE(?2, unit), base_price = COALESCE(?3, base_price), max_price = COALESCE(?4, max_price), category = COALESCE(?5, category), is_active = COALESCE(?6, is_active), updated_at = ?7 WHERE id = ?8",
    )
    .bind(&data.name)
    .bind(&data.unit)
    .bind(data.base_price)
    .bind(data.max_price)
    .bind(&data.category)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}

/// Soft delete: products referenced by saved slips stay queryable.
pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let result = sqlx::query("UPDATE product SET is_active = 0, updated_at = ?1 WHERE id = ?2")
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn sample() -> ProductCreate {
        ProductCreate {
            name: "Apple".into(),
            unit: "kg".into(),
            base_price: 2.0,
            max_price: 4.0,
            category: Some("fruit".into()),
        }
    }

    #[tokio::test]
    async fn create_and_get() {
        let pool = test_pool().await;
        let created = create(&pool, sample()).await.unwrap();
        assert!(created.is_active);
        assert_eq!(created.name, "Apple");

        let fetched = get(&pool, &created.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.base_price, 2.0);
    }

    #[tokio::test]
    async fn create_rejects_inverted_band() {
        let pool = test_pool().await;
        let mut data = sample();
        data.base_price = 5.0;
        data.max_price = 3.0;
        assert!(matches!(
            create(&pool, data).await,
            Err(RepoError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn update_merges_and_revalidates() {
        let pool = test_pool().await;
        let created = create(&pool, sample()).await.unwrap();

        let updated = update(
            &pool,
            &created.id,
            ProductUpdate {
                max_price: Some(6.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.base_price, 2.0);
        assert_eq!(updated.max_price, 6.0);

        // base above current max must be rejected
        let result = update(
            &pool,
            &created.id,
            ProductUpdate {
                base_price: Some(10.0),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result, Err(RepoError::Validation(_))));
    }

    #[tokio::test]
    async fn delete_is_soft() {
        let pool = test_pool().await;
        let created = create(&pool, sample()).await.unwrap();
        assert!(delete(&pool, &created.id).await.unwrap());

        let fetched = get(&pool, &created.id).await.unwrap().unwrap();
        assert!(!fetched.is_active);

        assert!(list(&pool, true).await.unwrap().is_empty());
        assert_eq!(list(&pool, false).await.unwrap().len(), 1);
    }
}
