//! Slip Models
//!
//! A `GeneratedSlip` is the ephemeral output of the generator; it only
//! becomes a persisted `Slip` through an explicit save, which stores the
//! computed values verbatim (no recomputation).

use serde::{Deserialize, Serialize};

/// Slip lifecycle status
///
/// Normal flow is generated → printed → archived, but any state may jump
/// directly to archived. Transitions are not otherwise enforced.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum SlipStatus {
    #[default]
    Generated,
    Printed,
    Archived,
}

/// Persisted slip entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Slip {
    pub id: String,
    pub user_id: Option<String>,
    pub format_id: String,
    pub serial_number: String,
    /// Slip date as YYYY-MM-DD
    pub slip_date: String,
    /// Pre-tax total in the format's display currency
    pub total_amount: f64,
    pub items_count: i64,
    pub status: SlipStatus,
    pub created_at: i64,

    // -- Relations (populated by application code, skipped by FromRow) --
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub items: Vec<SlipItem>,
}

/// Persisted slip line item
///
/// `product_name` / `product_unit` are joined in for display; the product
/// reference itself may point at a soft-deleted catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SlipItem {
    pub id: String,
    pub slip_id: String,
    pub product_id: String,
    pub product_name: String,
    pub product_unit: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
}

/// Ephemeral slip produced by the generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedSlip {
    pub serial_number: String,
    /// Slip date as YYYY-MM-DD
    pub slip_date: String,
    pub total_amount: f64,
    pub items_count: i64,
    pub format_id: String,
    pub items: Vec<GeneratedSlipItem>,
}

/// Line item of an ephemeral slip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedSlipItem {
    pub product_id: String,
    pub name: String,
    pub unit: String,
    pub quantity: i64,
    /// Unit price after conversion to the format's display currency
    pub unit_price: f64,
    pub total_price: f64,
}

/// One product chosen for generation
///
/// `quantity: None` asks for the per-unit heuristic quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSelection {
    pub product_id: String,
    pub quantity: Option<i64>,
}

/// Request payload for batch slip generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSlipsRequest {
    pub format_id: String,
    /// Inclusive date range (YYYY-MM-DD); equal dates mean an exact date
    pub start_date: String,
    pub end_date: String,
    pub count: u32,
    pub items: Vec<ItemSelection>,
}

/// Request payload for persisting a generated batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSlipsRequest {
    pub user_id: Option<String>,
    pub slips: Vec<GeneratedSlip>,
}
