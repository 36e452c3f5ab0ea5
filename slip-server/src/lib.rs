//! Slip server
//!
//! Receipt/slip generation service: a product catalog and template store
//! backed by SQLite, a pure `{{token}}` rendering engine, randomized batch
//! generation with currency conversion, and a JSON API over axum.

pub mod api;
pub mod core;
pub mod db;
pub mod pricing;
pub mod rendering;
pub mod slips;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
