//! Illustration and text placement per page layout
//!
//! Each [`PageLayout`] maps to a [`PlacementPolicy`] entry. `TextLeft` and
//! `TextRight` currently share the `TextBottom` entry; side-by-side
//! placements are not implemented.

use crate::constants::{
    BODY_LINE_HEIGHT, ILLUSTRATION_HEIGHT_RATIO, TEXT_BACKING_OUTSET, TEXT_BAND_RATIO,
    TEXT_ONLY_OFFSET,
};
use crate::types::PageLayout;

use super::{PrintSpec, Rect};

/// Where the illustration goes on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllustrationPlacement {
    /// Bleed to bleed
    FullPage,
    /// Upper part of the safe area, above the text band
    UpperSafeArea,
    /// Not drawn, even when a path is supplied
    Hidden,
}

/// Where the first line of body text sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Over the artwork at the bottom of the safe area, on a backing panel
    Overlay,
    /// Slightly above the vertical middle of the page
    PageMiddle,
    /// In the band below the illustration
    BelowIllustration,
}

/// Placement rules for one layout variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementPolicy {
    pub illustration: IllustrationPlacement,
    pub text: TextAnchor,
}

impl PlacementPolicy {
    const FULL_BLEED: Self = Self {
        illustration: IllustrationPlacement::FullPage,
        text: TextAnchor::Overlay,
    };
    const STACKED: Self = Self {
        illustration: IllustrationPlacement::UpperSafeArea,
        text: TextAnchor::BelowIllustration,
    };
    const TEXT_ONLY: Self = Self {
        illustration: IllustrationPlacement::Hidden,
        text: TextAnchor::PageMiddle,
    };

    pub fn for_layout(layout: PageLayout) -> Self {
        match layout {
            PageLayout::FullBleed => Self::FULL_BLEED,
            PageLayout::TextOnly => Self::TEXT_ONLY,
            PageLayout::TextBottom | PageLayout::TextLeft | PageLayout::TextRight => Self::STACKED,
        }
    }

    /// Frame the illustration is fitted into, if it is drawn at all
    pub fn illustration_frame(&self, spec: &PrintSpec) -> Option<Rect> {
        match self.illustration {
            IllustrationPlacement::FullPage => Some(spec.page_rect()),
            IllustrationPlacement::UpperSafeArea => {
                let height = spec.safe_height * ILLUSTRATION_HEIGHT_RATIO;
                let y = spec.safe_bottom + spec.safe_height * (1.0 - ILLUSTRATION_HEIGHT_RATIO);
                Some(Rect::new(spec.safe_left, y, spec.safe_width, height))
            }
            IllustrationPlacement::Hidden => None,
        }
    }

    /// Baseline of the first text line and the optional backing panel
    pub fn text_block(&self, spec: &PrintSpec) -> TextBlock {
        let band_height = spec.safe_height * TEXT_BAND_RATIO;
        match self.text {
            TextAnchor::Overlay => TextBlock {
                first_baseline: spec.safe_bottom + band_height - TEXT_BACKING_OUTSET,
                backing: Some(
                    Rect::new(spec.safe_left, spec.safe_bottom, spec.safe_width, band_height)
                        .outset(TEXT_BACKING_OUTSET),
                ),
            },
            TextAnchor::PageMiddle => TextBlock {
                first_baseline: spec.page_height / 2.0 + TEXT_ONLY_OFFSET,
                backing: None,
            },
            TextAnchor::BelowIllustration => TextBlock {
                first_baseline: spec.safe_bottom + band_height,
                backing: None,
            },
        }
    }
}

/// Resolved text anchor for one page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBlock {
    pub first_baseline: f32,
    /// Semi-transparent panel painted behind the text
    pub backing: Option<Rect>,
}

/// A wrapped line with its baseline position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// Position lines top-down from the block's first baseline, centered on
/// the page.
///
/// Lines at or below the safe-area bottom are dropped rather than running
/// into the margin.
pub fn place_lines(lines: Vec<String>, block: &TextBlock, spec: &PrintSpec) -> Vec<PlacedLine> {
    let center_x = spec.page_width / 2.0;
    lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| PlacedLine {
            x: center_x,
            y: block.first_baseline - i as f32 * BODY_LINE_HEIGHT,
            text,
        })
        .filter(|line| line.y > spec.safe_bottom)
        .collect()
}
