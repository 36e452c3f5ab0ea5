//! Template Rendering
//!
//! Pure `{{token}}` substitution over user-authored HTML templates, plus
//! assembly of the batch print document.

pub mod document;
pub mod engine;

pub use document::print_document;
pub use engine::{RenderItem, SlipContext, render};
