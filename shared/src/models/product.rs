//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity — a catalog entry with a price band
///
/// Prices are stored in the base currency (Rs). The generator draws a unit
/// price from `[base_price, max_price]` per slip. Invariant
/// `base_price <= max_price` is enforced at create/update time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Unit of measure (free-form: "kg", "pieces", "dozen", ...)
    pub unit: String,
    /// Lower bound of the price band, base currency
    pub base_price: f64,
    /// Upper bound of the price band, base currency
    pub max_price: f64,
    pub category: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub unit: String,
    pub base_price: f64,
    pub max_price: f64,
    pub category: Option<String>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub base_price: Option<f64>,
    pub max_price: Option<f64>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
}
