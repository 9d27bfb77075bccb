//! Page dimensions and safe area
//!
//! All values are in points with the origin at the bottom-left corner of
//! the page, bleed included.

use crate::constants::{BLEED_IN, SAFE_MARGIN_IN, in_to_pt};
use crate::types::{BookError, Result, TrimSize};

use super::Rect;

/// Page-independent geometry for one document
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrintSpec {
    pub trim_size: TrimSize,
    /// Page width including bleed on both sides
    pub page_width: f32,
    /// Page height including bleed on both sides
    pub page_height: f32,
    /// Bleed on each edge (zero when bleed is off)
    pub bleed: f32,
    pub safe_margin: f32,
    pub safe_left: f32,
    pub safe_right: f32,
    pub safe_top: f32,
    pub safe_bottom: f32,
    pub safe_width: f32,
    pub safe_height: f32,
}

impl PrintSpec {
    /// Resolve the page frame for a trim size.
    pub fn resolve(trim_size: TrimSize, include_bleed: bool) -> Self {
        let (trim_width, trim_height) = trim_size.dimensions_in();
        let bleed_in = if include_bleed { BLEED_IN } else { 0.0 };

        let page_width = in_to_pt(trim_width + 2.0 * bleed_in);
        let page_height = in_to_pt(trim_height + 2.0 * bleed_in);
        let bleed = in_to_pt(bleed_in);
        let safe_margin = in_to_pt(SAFE_MARGIN_IN);
        let inset = bleed + safe_margin;

        let safe_left = inset;
        let safe_bottom = inset;
        let safe_right = page_width - inset;
        let safe_top = page_height - inset;

        Self {
            trim_size,
            page_width,
            page_height,
            bleed,
            safe_margin,
            safe_left,
            safe_right,
            safe_top,
            safe_bottom,
            safe_width: safe_right - safe_left,
            safe_height: safe_top - safe_bottom,
        }
    }

    /// Resolve by vendor name; unknown names use the default trim size.
    pub fn resolve_named(trim_name: &str, include_bleed: bool) -> Self {
        Self::resolve(TrimSize::from_name(trim_name), include_bleed)
    }

    /// Whole page, bleed to bleed
    pub fn page_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.page_width, self.page_height)
    }

    pub fn safe_rect(&self) -> Rect {
        Rect::new(
            self.safe_left,
            self.safe_bottom,
            self.safe_width,
            self.safe_height,
        )
    }

    /// Check that the safe area is non-empty
    pub fn validate(&self) -> Result<()> {
        if self.safe_width <= 0.0 || self.safe_height <= 0.0 {
            return Err(BookError::Config(format!(
                "Safe area is empty for trim size {} ({} x {} pt)",
                self.trim_size.name(),
                self.safe_width,
                self.safe_height
            )));
        }
        Ok(())
    }
}

/// Page (width, height) in inches, bleed included
pub fn page_dimensions_in(trim_size: TrimSize, include_bleed: bool) -> (f32, f32) {
    let (width, height) = trim_size.dimensions_in();
    let bleed = if include_bleed { BLEED_IN } else { 0.0 };
    (width + 2.0 * bleed, height + 2.0 * bleed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_with_bleed() {
        let spec = PrintSpec::resolve(TrimSize::Square8_5, true);
        assert_eq!(spec.page_width, 8.75 * 72.0);
        assert_eq!(spec.page_height, 8.75 * 72.0);
        assert_eq!(spec.bleed, 9.0);
        assert_eq!(spec.safe_left, 27.0);
        assert_eq!(spec.safe_bottom, 27.0);
        assert_eq!(spec.safe_right, 630.0 - 27.0);
        assert_eq!(spec.safe_width, 576.0);
    }

    #[test]
    fn no_bleed_keeps_margin() {
        let spec = PrintSpec::resolve(TrimSize::Standard6x9, false);
        assert_eq!(spec.page_width, 432.0);
        assert_eq!(spec.page_height, 648.0);
        assert_eq!(spec.bleed, 0.0);
        assert_eq!(spec.safe_left, 18.0);
        assert_eq!(spec.safe_top, 630.0);
    }

    #[test]
    fn page_dimensions_in_inches() {
        assert_eq!(page_dimensions_in(TrimSize::Portrait8x10, true), (8.25, 10.25));
        assert_eq!(page_dimensions_in(TrimSize::Portrait8x10, false), (8.0, 10.0));
    }
}
