//! Slip generation

pub mod generator;

pub use generator::{MAX_BATCH_SIZE, generate_batch};
