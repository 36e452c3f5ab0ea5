//! Domain Models
//!
//! - [`Product`] - catalog entries with a price band per unit
//! - [`SlipFormat`] - user-authored HTML templates plus branding/tax config
//! - [`Slip`] / [`SlipItem`] - persisted slips and their line items
//! - [`GeneratedSlip`] - ephemeral slips produced by the generator

pub mod product;
pub mod slip;
pub mod slip_format;

pub use product::{Product, ProductCreate, ProductUpdate};
pub use slip::{
    GenerateSlipsRequest, GeneratedSlip, GeneratedSlipItem, ItemSelection, SaveSlipsRequest, Slip,
    SlipItem, SlipStatus,
};
pub use slip_format::{SlipFormat, SlipFormatCreate, SlipFormatUpdate};
