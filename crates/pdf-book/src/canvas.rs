//! Drawing surface used by the layout engines
//!
//! The engines compute absolute coordinates (points, origin bottom-left)
//! and hand them to a [`Canvas`]. [`crate::render::PdfCanvas`] writes real
//! PDF pages; tests record the calls instead.

use crate::layout::{Rect, TextMeasure};
use crate::types::{Color, Font, Result};
use std::path::Path;

/// How an image is fitted into its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageFit {
    /// Keep the source aspect ratio (centered in the frame) instead of
    /// stretching
    pub preserve_aspect: bool,
    /// Composite the image's alpha channel
    pub transparency: bool,
}

impl ImageFit {
    /// Aspect-preserved, centered, alpha-aware
    pub const CONTAIN: ImageFit = ImageFit {
        preserve_aspect: true,
        transparency: true,
    };
}

/// Painting operations needed to lay out interior pages and covers
pub trait Canvas: TextMeasure {
    /// Start a new page of the given size in points
    fn begin_page(&mut self, width: f32, height: f32);

    /// Finish the current page
    fn end_page(&mut self);

    /// Fill a rectangle; `alpha` of 1.0 is opaque
    fn fill_rect(&mut self, rect: Rect, color: Color, alpha: f32);

    /// Draw an image file into `frame`.
    ///
    /// Errors are page-local: callers report them and carry on.
    fn draw_image(&mut self, path: &Path, frame: Rect, fit: ImageFit) -> Result<()>;

    /// Draw a single line of text horizontally centered on `x`, baseline at `y`
    fn draw_centered_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        font: Font,
        size: f32,
        color: Color,
    );

    fn save_state(&mut self);

    fn restore_state(&mut self);

    fn translate(&mut self, dx: f32, dy: f32);

    /// Rotate counter-clockwise by `degrees`
    fn rotate(&mut self, degrees: f32);
}
