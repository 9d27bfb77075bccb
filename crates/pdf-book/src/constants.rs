//! Shared constants for print-ready book layout
//!
//! This module centralizes the print vendor's physical specification and
//! the magic numbers used by the interior and cover layout engines.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch (PDF user space unit)
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert inches to points
#[inline]
pub fn in_to_pt(inches: f32) -> f32 {
    inches * POINTS_PER_INCH
}

/// Convert points to inches
#[inline]
pub fn pt_to_in(pt: f32) -> f32 {
    pt / POINTS_PER_INCH
}

// =============================================================================
// Print Vendor Specification
// =============================================================================

/// Bleed added to each edge when bleed is enabled (inches)
pub const BLEED_IN: f32 = 0.125;

/// Minimum inset from the trim edge for content (inches)
pub const SAFE_MARGIN_IN: f32 = 0.25;

/// Paper thickness per page for white stock (inches)
pub const WHITE_PAPER_PER_PAGE_IN: f32 = 0.002252;

/// Paper thickness per page for cream stock (inches)
pub const CREAM_PAPER_PER_PAGE_IN: f32 = 0.0025;

/// Spines at or below this width (points) get no text
pub const MIN_SPINE_TEXT_WIDTH_PT: f32 = 10.0;

// =============================================================================
// Interior Pages
// =============================================================================

/// Body text size (points)
pub const BODY_FONT_SIZE: f32 = 16.0;

/// Distance between body text baselines (points)
pub const BODY_LINE_HEIGHT: f32 = 22.0;

/// Horizontal room taken off the safe width before wrapping (points)
pub const BODY_TEXT_INSET: f32 = 40.0;

/// Share of the safe height given to the illustration on mixed pages
pub const ILLUSTRATION_HEIGHT_RATIO: f32 = 0.70;

/// Share of the safe height reserved below the illustration for text
pub const TEXT_BAND_RATIO: f32 = 0.25;

/// Outset of the full-bleed text backing around the safe area (points)
pub const TEXT_BACKING_OUTSET: f32 = 10.0;

/// Opacity of the full-bleed text backing
pub const TEXT_BACKING_ALPHA: f32 = 0.85;

/// Offset of the text-only anchor above the page middle (points)
pub const TEXT_ONLY_OFFSET: f32 = 50.0;

/// Page number font size (points)
pub const PAGE_NUMBER_FONT_SIZE: f32 = 10.0;

/// Page number baseline above the bleed edge (points)
pub const PAGE_NUMBER_OFFSET: f32 = 15.0;

// =============================================================================
// Cover
// =============================================================================

/// Largest spine text size (points)
pub const SPINE_MAX_FONT_SIZE: f32 = 12.0;

/// Spine text size as a fraction of the spine width
pub const SPINE_FONT_RATIO: f32 = 0.6;

/// Placeholder title size (points)
pub const TITLE_FONT_SIZE: f32 = 36.0;

/// Placeholder author size (points)
pub const AUTHOR_FONT_SIZE: f32 = 18.0;

/// Placeholder title baseline as a fraction of the cover height
pub const TITLE_HEIGHT_RATIO: f32 = 0.6;

/// Placeholder author baseline as a fraction of the cover height
pub const AUTHOR_HEIGHT_RATIO: f32 = 0.4;

/// Default cover background
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";
