use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not load image {}: {reason}", path.display())]
    Image { path: PathBuf, reason: String },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Unknown PDF type: {0}")]
    UnknownDocumentType(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to render")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, BookError>;

/// Trim sizes accepted by the print vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrimSize {
    /// 8.5" x 8.5" square picture book
    #[default]
    Square8_5,
    /// 8" x 10" portrait
    Portrait8x10,
    /// 8.5" x 11" portrait (letter)
    Portrait8_5x11,
    /// 6" x 9" standard
    Standard6x9,
    /// 5.5" x 8.5" digest
    Digest5_5x8_5,
}

impl TrimSize {
    pub const ALL: [TrimSize; 5] = [
        TrimSize::Square8_5,
        TrimSize::Portrait8x10,
        TrimSize::Portrait8_5x11,
        TrimSize::Standard6x9,
        TrimSize::Digest5_5x8_5,
    ];

    /// Look up a trim size by its vendor name (e.g. `"6x9"`).
    ///
    /// Unknown names resolve to the default square size.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "8.5x8.5" => TrimSize::Square8_5,
            "8x10" => TrimSize::Portrait8x10,
            "8.5x11" => TrimSize::Portrait8_5x11,
            "6x9" => TrimSize::Standard6x9,
            "5.5x8.5" => TrimSize::Digest5_5x8_5,
            _ => TrimSize::default(),
        }
    }

    /// Vendor name, the inverse of [`TrimSize::from_name`]
    pub fn name(self) -> &'static str {
        match self {
            TrimSize::Square8_5 => "8.5x8.5",
            TrimSize::Portrait8x10 => "8x10",
            TrimSize::Portrait8_5x11 => "8.5x11",
            TrimSize::Standard6x9 => "6x9",
            TrimSize::Digest5_5x8_5 => "5.5x8.5",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TrimSize::Square8_5 => "8.5\" x 8.5\" Square",
            TrimSize::Portrait8x10 => "8\" x 10\" Portrait",
            TrimSize::Portrait8_5x11 => "8.5\" x 11\" Portrait",
            TrimSize::Standard6x9 => "6\" x 9\" Standard",
            TrimSize::Digest5_5x8_5 => "5.5\" x 8.5\" Digest",
        }
    }

    /// Finished (width, height) in inches
    pub fn dimensions_in(self) -> (f32, f32) {
        match self {
            TrimSize::Square8_5 => (8.5, 8.5),
            TrimSize::Portrait8x10 => (8.0, 10.0),
            TrimSize::Portrait8_5x11 => (8.5, 11.0),
            TrimSize::Standard6x9 => (6.0, 9.0),
            TrimSize::Digest5_5x8_5 => (5.5, 8.5),
        }
    }
}

/// Paper stock, which determines spine thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaperType {
    #[default]
    White,
    Cream,
}

impl PaperType {
    /// Unknown names resolve to white stock.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "cream" => PaperType::Cream,
            _ => PaperType::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperType::White => "white",
            PaperType::Cream => "cream",
        }
    }

    /// Thickness of one page in inches
    pub fn thickness_per_page_in(self) -> f32 {
        match self {
            PaperType::White => crate::constants::WHITE_PAPER_PER_PAGE_IN,
            PaperType::Cream => crate::constants::CREAM_PAPER_PER_PAGE_IN,
        }
    }
}

/// Interior page layout variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageLayout {
    /// Artwork runs to the bleed edge, text overlays the bottom
    FullBleed,
    /// Artwork above, text below
    #[default]
    TextBottom,
    TextLeft,
    TextRight,
    /// No artwork, text centered on the page
    TextOnly,
}

impl PageLayout {
    /// Unknown names resolve to [`PageLayout::TextBottom`].
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "full-bleed" => PageLayout::FullBleed,
            "text-left" => PageLayout::TextLeft,
            "text-right" => PageLayout::TextRight,
            "text-only" => PageLayout::TextOnly,
            _ => PageLayout::TextBottom,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PageLayout::FullBleed => "full-bleed",
            PageLayout::TextBottom => "text-bottom",
            PageLayout::TextLeft => "text-left",
            PageLayout::TextRight => "text-right",
            PageLayout::TextOnly => "text-only",
        }
    }
}

/// Standard PDF fonts used by the layout engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    /// PostScript base font name
    pub fn base_font(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }
}

/// RGB color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// Page number grey (#888888)
    pub const PAGE_NUMBER: Color = Color::gray(0x88);
    /// Placeholder author grey (#666666)
    pub const MUTED: Color = Color::gray(0x66);
    /// Spine band shade (#F8F8F8)
    pub const SPINE: Color = Color::gray(0xF8);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    const fn gray(level: u8) -> Self {
        let v = level as f32 / 255.0;
        Self::rgb(v, v, v)
    }

    /// Parse `#RRGGBB` or `#RGB` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);
        match digits.len() {
            6 => Some(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let expand = |i: usize| {
                    let c = &digits[i..i + 1];
                    channel(&format!("{c}{c}"))
                };
                Some(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => None,
        }
    }
}

/// Outcome of rendering an interior document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    /// Number of pages emitted
    pub pages: usize,
    /// Recoverable problems (unreadable images and the like)
    pub warnings: Vec<String>,
}

/// Outcome of rendering a cover
#[derive(Debug, Clone, PartialEq)]
pub struct CoverReport {
    /// Full cover width including spine and bleed (inches)
    pub width_in: f32,
    /// Full cover height including bleed (inches)
    pub height_in: f32,
    /// Spine width (inches)
    pub spine_width_in: f32,
    /// Whether spine text was drawn
    pub spine_text_placed: bool,
    pub warnings: Vec<String>,
}
