//! Layout calculation modules for print-ready books
//!
//! This module handles all the geometric calculations:
//! - Page dimensions and safe area (trim size + bleed)
//! - Spine width and cover bands
//! - Greedy text wrapping against measured widths
//! - Illustration and text placement per page layout

mod dimensions;
mod placement;
mod spine;
mod types;
mod wrap;

pub use dimensions::*;
pub use placement::*;
pub use spine::*;
pub use types::*;
pub use wrap::*;
