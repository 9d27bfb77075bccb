//! Spine width and wrap-around cover bands
//!
//! A cover sheet is laid out left to right as back cover, spine, front
//! cover, which is how the printer folds it around the book block.

use crate::constants::{BLEED_IN, MIN_SPINE_TEXT_WIDTH_PT, in_to_pt, pt_to_in};
use crate::types::{PaperType, TrimSize};

use super::{PrintSpec, Rect};

/// Spine thickness in inches for a page count on the given stock
pub fn spine_width_inches(page_count: u32, paper: PaperType) -> f32 {
    page_count as f32 * paper.thickness_per_page_in()
}

/// Horizontal bands of a wrap-around cover, in points
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpineGeometry {
    pub spine_width_in: f32,
    pub spine_width_pt: f32,
    pub trim_width_pt: f32,
    pub bleed_pt: f32,
    pub back_cover_left: f32,
    pub spine_left: f32,
    pub front_cover_left: f32,
    pub cover_width: f32,
    pub cover_height: f32,
}

impl SpineGeometry {
    pub fn new(trim_size: TrimSize, spec: &PrintSpec, spine_width_in: f32) -> Self {
        let (trim_width, trim_height) = trim_size.dimensions_in();
        let trim_width_pt = in_to_pt(trim_width);
        let spine_width_pt = in_to_pt(spine_width_in);
        let bleed_pt = spec.bleed;

        let back_cover_left = bleed_pt;
        let spine_left = bleed_pt + trim_width_pt;
        let front_cover_left = spine_left + spine_width_pt;

        Self {
            spine_width_in,
            spine_width_pt,
            trim_width_pt,
            bleed_pt,
            back_cover_left,
            spine_left,
            front_cover_left,
            cover_width: 2.0 * trim_width_pt + spine_width_pt + 2.0 * bleed_pt,
            cover_height: in_to_pt(trim_height) + 2.0 * bleed_pt,
        }
    }

    /// Whole cover sheet
    pub fn cover_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.cover_width, self.cover_height)
    }

    /// Back cover art frame (trim width, inset by bleed top and bottom)
    pub fn back_band(&self) -> Rect {
        self.art_frame(self.back_cover_left)
    }

    /// Full-height spine strip
    pub fn spine_band(&self) -> Rect {
        Rect::new(self.spine_left, 0.0, self.spine_width_pt, self.cover_height)
    }

    /// Front cover art frame (trim width, inset by bleed top and bottom)
    pub fn front_band(&self) -> Rect {
        self.art_frame(self.front_cover_left)
    }

    /// Narrow spines get their band painted but no text
    pub fn can_hold_text(&self) -> bool {
        self.spine_width_pt > MIN_SPINE_TEXT_WIDTH_PT
    }

    pub fn cover_width_in(&self) -> f32 {
        pt_to_in(self.cover_width)
    }

    pub fn cover_height_in(&self) -> f32 {
        pt_to_in(self.cover_height)
    }

    fn art_frame(&self, left: f32) -> Rect {
        Rect::new(
            left,
            self.bleed_pt,
            self.trim_width_pt,
            self.cover_height - 2.0 * self.bleed_pt,
        )
    }
}

/// Cover sheet size in inches
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CoverDimensions {
    pub width: f32,
    pub height: f32,
    pub spine_width: f32,
}

/// Full cover dimensions without building the band geometry
pub fn cover_dimensions_in(
    trim_size: TrimSize,
    page_count: u32,
    paper: PaperType,
    include_bleed: bool,
) -> CoverDimensions {
    let (width, height) = trim_size.dimensions_in();
    let spine_width = spine_width_inches(page_count, paper);
    let bleed = if include_bleed { BLEED_IN } else { 0.0 };

    CoverDimensions {
        width: 2.0 * width + spine_width + 2.0 * bleed,
        height: height + 2.0 * bleed,
        spine_width,
    }
}
