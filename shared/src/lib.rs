//! Shared types for the slip generation service
//!
//! Domain models and DTOs used by the server crate. Database row mappings
//! (`sqlx::FromRow` / `sqlx::Type`) are behind the `db` feature so clients
//! can depend on the models without pulling in sqlx.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
