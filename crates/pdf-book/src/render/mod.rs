//! PDF rendering backend
//!
//! This module handles all PDF-specific operations:
//! - Building pages and content streams with lopdf
//! - Embedding decoded images as XObjects
//! - Measuring text with the built-in Helvetica metrics

mod metrics;
mod pdf;
mod xobject;

pub use metrics::HelveticaMetrics;
pub use pdf::PdfCanvas;
pub use xobject::{EmbeddedImage, decode_image, embed_image};
