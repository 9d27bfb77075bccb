//! Static glyph widths for the standard Helvetica faces.
//!
//! Widths are in 1/1000 em, taken from the Adobe core font metrics.
//! Index = (char as usize) - 32, covering ASCII 0x20..=0x7E.

use crate::layout::TextMeasure;
use crate::types::Font;

/// Width used for characters outside the table
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p'..'~'
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,      // 'p'..'~'
];

/// Text measurement for the built-in Helvetica fonts
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl HelveticaMetrics {
    fn glyph_width(font: Font, ch: char) -> u16 {
        let table = match font {
            Font::Helvetica => &HELVETICA,
            Font::HelveticaBold => &HELVETICA_BOLD,
        };
        (ch as usize)
            .checked_sub(32)
            .and_then(|idx| table.get(idx))
            .copied()
            .unwrap_or(FALLBACK_WIDTH)
    }
}

impl TextMeasure for HelveticaMetrics {
    fn measure(&self, text: &str, font: Font, size: f32) -> f32 {
        let units: u32 = text
            .chars()
            .map(|ch| Self::glyph_width(font, ch) as u32)
            .sum();
        units as f32 / 1000.0 * size
    }
}
