use crate::constants::DEFAULT_BACKGROUND;
use crate::layout::PrintSpec;
use crate::types::*;
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One interior page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageSpec {
    /// 1-based number printed at the foot of the page (page 1 is unnumbered)
    pub page_number: u32,
    pub text: Option<String>,
    pub illustration_path: Option<PathBuf>,
    pub layout: PageLayout,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page_number: 1,
            text: None,
            illustration_path: None,
            layout: PageLayout::TextBottom,
        }
    }
}

impl PageSpec {
    /// Body text, if there is any non-blank text
    pub fn body_text(&self) -> Option<&str> {
        non_blank(self.text.as_deref())
    }

    /// Illustration path, if one was supplied
    pub fn illustration(&self) -> Option<&Path> {
        non_empty_path(self.illustration_path.as_deref())
    }
}

/// Interior document configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InteriorOptions {
    pub output_path: PathBuf,
    pub trim_size: TrimSize,
    pub include_bleed: bool,
    pub pages: Vec<PageSpec>,
}

impl Default for InteriorOptions {
    fn default() -> Self {
        Self {
            output_path: PathBuf::new(),
            trim_size: TrimSize::Square8_5,
            include_bleed: true,
            pages: Vec::new(),
        }
    }
}

impl InteriorOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BookError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    pub fn print_spec(&self) -> PrintSpec {
        PrintSpec::resolve(self.trim_size, self.include_bleed)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.output_path.as_os_str().is_empty() {
            return Err(BookError::Config("No output path specified".to_string()));
        }

        if self.pages.is_empty() {
            return Err(BookError::NoPages);
        }

        if let Some(idx) = self.pages.iter().position(|p| p.page_number == 0) {
            return Err(BookError::Config(format!(
                "Page at index {} has page_number 0; page numbers start at 1",
                idx
            )));
        }

        self.print_spec().validate()
    }
}

/// Wrap-around cover configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CoverOptions {
    pub output_path: PathBuf,
    pub trim_size: TrimSize,
    /// Interior page count, which drives the spine width
    pub page_count: u32,
    pub paper_type: PaperType,
    pub include_bleed: bool,
    pub front_image: Option<PathBuf>,
    pub back_image: Option<PathBuf>,
    pub spine_text: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    /// `#RRGGBB` background; unparsable values fall back to white
    pub background_color: String,
}

impl Default for CoverOptions {
    fn default() -> Self {
        Self {
            output_path: PathBuf::new(),
            trim_size: TrimSize::Square8_5,
            page_count: 24,
            paper_type: PaperType::White,
            include_bleed: true,
            front_image: None,
            back_image: None,
            spine_text: None,
            title: None,
            author: None,
            background_color: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

impl CoverOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BookError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    pub fn print_spec(&self) -> PrintSpec {
        PrintSpec::resolve(self.trim_size, self.include_bleed)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.output_path.as_os_str().is_empty() {
            return Err(BookError::Config("No output path specified".to_string()));
        }

        if self.page_count == 0 {
            return Err(BookError::Config(
                "Cover page_count must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn front_image_path(&self) -> Option<&Path> {
        non_empty_path(self.front_image.as_deref())
    }

    pub fn back_image_path(&self) -> Option<&Path> {
        non_empty_path(self.back_image.as_deref())
    }

    pub fn spine_label(&self) -> Option<&str> {
        non_blank(self.spine_text.as_deref())
    }

    pub fn title_text(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    pub fn author_name(&self) -> Option<&str> {
        non_blank(self.author.as_deref())
    }
}

/// Which document an invocation produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Interior,
    Cover,
}

impl DocumentType {
    /// Unlike trim sizes, an unknown document type is fatal.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim() {
            "interior" => Ok(DocumentType::Interior),
            "cover" => Ok(DocumentType::Cover),
            other => Err(BookError::UnknownDocumentType(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DocumentType::Interior => "interior",
            DocumentType::Cover => "cover",
        }
    }
}

/// A complete render request: the document type plus its configuration
#[derive(Debug, Clone, PartialEq)]
pub enum BookRequest {
    Interior(InteriorOptions),
    Cover(CoverOptions),
}

impl BookRequest {
    /// Build a request from a JSON config.
    ///
    /// The type comes from `doc_type` when given, otherwise from the
    /// config's `"type"` field, defaulting to interior.
    #[cfg(feature = "serde")]
    pub fn from_json(config: serde_json::Value, doc_type: Option<&str>) -> Result<Self> {
        let type_name = match doc_type {
            Some(name) => name.to_string(),
            None => match config.get("type") {
                Some(serde_json::Value::String(name)) => name.clone(),
                Some(other) => other.to_string(),
                None => DocumentType::Interior.name().to_string(),
            },
        };

        let parse_error = |e: serde_json::Error| BookError::Config(format!("Failed to parse config: {}", e));
        let request = match DocumentType::from_name(&type_name)? {
            DocumentType::Interior => {
                BookRequest::Interior(serde_json::from_value(config).map_err(parse_error)?)
            }
            DocumentType::Cover => {
                BookRequest::Cover(serde_json::from_value(config).map_err(parse_error)?)
            }
        };
        request.validate()?;
        Ok(request)
    }

    /// Load a request from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<Path>, doc_type: Option<&str>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|e| BookError::Config(format!("Failed to parse config: {}", e)))?;
        Self::from_json(config, doc_type)
    }

    pub fn document_type(&self) -> DocumentType {
        match self {
            BookRequest::Interior(_) => DocumentType::Interior,
            BookRequest::Cover(_) => DocumentType::Cover,
        }
    }

    pub fn output_path(&self) -> &Path {
        match self {
            BookRequest::Interior(options) => &options.output_path,
            BookRequest::Cover(options) => &options.output_path,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            BookRequest::Interior(options) => options.validate(),
            BookRequest::Cover(options) => options.validate(),
        }
    }
}

/// Kinds of book with recommended print settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookKind {
    #[default]
    Picture,
    Board,
    EarlyReader,
    Activity,
    Coloring,
}

/// Recommended trim, paper and bleed for a [`BookKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendedSettings {
    pub trim_size: TrimSize,
    pub paper_type: PaperType,
    pub include_bleed: bool,
}

impl BookKind {
    /// Unknown kinds resolve to [`BookKind::Picture`].
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "board" => BookKind::Board,
            "early_reader" => BookKind::EarlyReader,
            "activity" => BookKind::Activity,
            "coloring" => BookKind::Coloring,
            _ => BookKind::Picture,
        }
    }

    pub fn recommended(self) -> RecommendedSettings {
        let (trim_size, paper_type, include_bleed) = match self {
            BookKind::Picture => (TrimSize::Square8_5, PaperType::White, true),
            BookKind::Board => (TrimSize::Portrait8x10, PaperType::White, true),
            BookKind::EarlyReader => (TrimSize::Standard6x9, PaperType::Cream, false),
            BookKind::Activity | BookKind::Coloring => {
                (TrimSize::Portrait8_5x11, PaperType::White, false)
            }
        };
        RecommendedSettings {
            trim_size,
            paper_type,
            include_bleed,
        }
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

fn non_empty_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    // Names are looked up with the total `from_name` functions, so unknown
    // values fall back to their documented defaults instead of failing.
    macro_rules! named_enum_serde {
        ($ty:ty) => {
            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(self.name())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let s = String::deserialize(deserializer)?;
                    Ok(<$ty>::from_name(&s))
                }
            }
        };
    }

    named_enum_serde!(TrimSize);
    named_enum_serde!(PaperType);
    named_enum_serde!(PageLayout);
}
