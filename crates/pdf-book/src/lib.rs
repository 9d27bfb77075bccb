pub mod canvas;
pub mod constants;
pub mod cover;
pub mod interior;
mod io;
pub mod layout;
mod options;
pub mod render;
mod types;

pub use canvas::{Canvas, ImageFit};
pub use cover::{cover_pdf_bytes, generate_cover, render_cover};
pub use interior::{generate_interior, interior_pdf_bytes, render_interior};
pub use io::save_pdf;
pub use layout::{
    CoverDimensions, PrintSpec, Rect, SpineGeometry, TextMeasure, cover_dimensions_in,
    page_dimensions_in, spine_width_inches, wrap_text,
};
pub use options::*;
pub use render::{HelveticaMetrics, PdfCanvas};
pub use types::*;
