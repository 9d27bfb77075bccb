//! lopdf-backed [`Canvas`]
//!
//! Each page collects content stream operators as text and its own
//! resource dictionaries; [`PdfCanvas::finish`] assembles the page tree
//! and serializes the document.

use crate::canvas::{Canvas, ImageFit};
use crate::layout::{Rect, TextMeasure};
use crate::types::{BookError, Color, Font, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::xobject::{EmbeddedImage, decode_image, embed_image};
use super::metrics::HelveticaMetrics;

/// A PDF document under construction
pub struct PdfCanvas {
    doc: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
    current: Option<PageContent>,
    fonts: HashMap<Font, ObjectId>,
    images: HashMap<(PathBuf, bool), EmbeddedImage>,
    metrics: HelveticaMetrics,
    title: String,
}

/// Content and resources of the page being drawn
struct PageContent {
    width: f32,
    height: f32,
    ops: Vec<String>,
    fonts: Dictionary,
    xobjects: Dictionary,
    ext_gstates: Dictionary,
}

impl PageContent {
    fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            fonts: Dictionary::new(),
            xobjects: Dictionary::new(),
            ext_gstates: Dictionary::new(),
        }
    }
}

impl PdfCanvas {
    pub fn new(title: impl Into<String>) -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            page_ids: Vec::new(),
            current: None,
            fonts: HashMap::new(),
            images: HashMap::new(),
            metrics: HelveticaMetrics,
            title: title.into(),
        }
    }

    /// Number of completed pages
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Close any open page and serialize the document.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        self.end_page();
        if self.page_ids.is_empty() {
            return Err(BookError::NoPages);
        }

        let kids: Vec<Object> = self.page_ids.iter().map(|&id| Object::Reference(id)).collect();
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(self.page_ids.len() as i64)),
        ]);
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_id)),
        ]));
        let info_id = self.doc.add_object(Dictionary::from_iter(vec![
            ("Title", Object::string_literal(self.title.as_str())),
            ("Producer", Object::string_literal("pdf-book")),
        ]));
        self.doc.trailer.set("Root", catalog_id);
        self.doc.trailer.set("Info", info_id);

        self.doc.compress();

        let mut writer = Vec::new();
        self.doc.save_to(&mut writer)?;
        Ok(writer)
    }

    fn page(&mut self) -> &mut PageContent {
        self.current.get_or_insert_with(|| PageContent::new(0.0, 0.0))
    }

    fn push_op(&mut self, op: String) {
        self.page().ops.push(op);
    }

    /// Resource name for a font, registering it on the current page
    fn font_resource(&mut self, font: Font) -> &'static str {
        let name = match font {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        };
        let font_id = match self.fonts.get(&font) {
            Some(&id) => id,
            None => {
                let mut font_dict = Dictionary::new();
                font_dict.set("Type", Object::Name(b"Font".to_vec()));
                font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
                font_dict.set("BaseFont", Object::Name(font.base_font().as_bytes().to_vec()));
                font_dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
                let id = self.doc.add_object(font_dict);
                self.fonts.insert(font, id);
                id
            }
        };
        self.page().fonts.set(name, Object::Reference(font_id));
        name
    }

    /// Graphics state name for a fill opacity, registering it on the page
    fn alpha_resource(&mut self, alpha: f32) -> String {
        let name = format!("GS{}", (alpha * 100.0).round() as u32);
        let mut gs = Dictionary::new();
        gs.set("Type", Object::Name(b"ExtGState".to_vec()));
        gs.set("ca", Object::Real(alpha));
        self.page().ext_gstates.set(name.as_bytes(), Object::Dictionary(gs));
        name
    }

    fn image(&mut self, path: &Path, transparency: bool) -> Result<EmbeddedImage> {
        let key = (path.to_owned(), transparency);
        if let Some(&embedded) = self.images.get(&key) {
            return Ok(embedded);
        }
        let img = decode_image(path)?;
        let embedded = embed_image(&mut self.doc, &img, transparency);
        self.images.insert(key, embedded);
        Ok(embedded)
    }
}

impl TextMeasure for PdfCanvas {
    fn measure(&self, text: &str, font: Font, size: f32) -> f32 {
        self.metrics.measure(text, font, size)
    }
}

impl Canvas for PdfCanvas {
    fn begin_page(&mut self, width: f32, height: f32) {
        self.end_page();
        self.current = Some(PageContent::new(width, height));
    }

    fn end_page(&mut self) {
        let Some(page) = self.current.take() else {
            return;
        };

        let mut resources = Dictionary::new();
        if !page.fonts.is_empty() {
            resources.set("Font", Object::Dictionary(page.fonts));
        }
        if !page.xobjects.is_empty() {
            resources.set("XObject", Object::Dictionary(page.xobjects));
        }
        if !page.ext_gstates.is_empty() {
            resources.set("ExtGState", Object::Dictionary(page.ext_gstates));
        }

        let content = page.ops.join("");
        let content_id = self
            .doc
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page.width),
                Object::Real(page.height),
            ]),
        );
        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        let page_id = self.doc.add_object(page_dict);
        self.page_ids.push(page_id);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, alpha: f32) {
        let gs = if alpha < 1.0 {
            format!("/{} gs ", self.alpha_resource(alpha))
        } else {
            String::new()
        };
        self.push_op(format!(
            "q {}{} {} {} rg {} {} {} {} re f Q\n",
            gs, color.r, color.g, color.b, rect.x, rect.y, rect.width, rect.height
        ));
    }

    fn draw_image(&mut self, path: &Path, frame: Rect, fit: ImageFit) -> Result<()> {
        let embedded = self.image(path, fit.transparency)?;
        let placed = if fit.preserve_aspect {
            frame.fit_centered(embedded.width as f32, embedded.height as f32)
        } else {
            frame
        };

        let name = format!("Im{}", embedded.id.0);
        self.page()
            .xobjects
            .set(name.as_bytes(), Object::Reference(embedded.id));
        self.push_op(format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            placed.width, placed.height, placed.x, placed.y, name
        ));
        Ok(())
    }

    fn draw_centered_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        font: Font,
        size: f32,
        color: Color,
    ) {
        let width = self.measure(text, font, size);
        let font_name = self.font_resource(font);
        self.push_op(format!(
            "q {} {} {} rg BT /{} {} Tf {} {} Td ({}) Tj ET Q\n",
            color.r,
            color.g,
            color.b,
            font_name,
            size,
            x - width / 2.0,
            y,
            escape_text(text)
        ));
    }

    fn save_state(&mut self) {
        self.push_op("q\n".to_string());
    }

    fn restore_state(&mut self) {
        self.push_op("Q\n".to_string());
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.push_op(format!("1 0 0 1 {} {} cm\n", dx, dy));
    }

    fn rotate(&mut self, degrees: f32) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.push_op(format!("{} {} {} {} 0 0 cm\n", cos, sin, -sin, cos));
    }
}

/// Escape a string for a PDF literal in WinAnsiEncoding.
///
/// Latin-1 characters map directly; anything else becomes `?`.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            '\u{a0}'..='\u{ff}' => out.push_str(&format!("\\{:03o}", ch as u32)),
            _ => out.push('?'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_delimiters_and_latin1() {
        assert_eq!(escape_text("a (b) \\ c"), "a \\(b\\) \\\\ c");
        assert_eq!(escape_text("café"), "caf\\351");
        assert_eq!(escape_text("日本"), "??");
    }

    #[test]
    fn empty_document_is_rejected() {
        let canvas = PdfCanvas::new("Empty");
        assert!(matches!(canvas.finish(), Err(BookError::NoPages)));
    }

    #[test]
    fn pages_keep_their_own_size() {
        let mut canvas = PdfCanvas::new("Sizes");
        canvas.begin_page(100.0, 200.0);
        canvas.fill_rect(Rect::new(0.0, 0.0, 100.0, 200.0), Color::WHITE, 1.0);
        canvas.begin_page(300.0, 400.0);
        canvas.draw_centered_text(150.0, 200.0, "Hi", Font::Helvetica, 12.0, Color::BLACK);
        canvas.end_page();
        assert_eq!(canvas.page_count(), 2);

        let bytes = canvas.finish().unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 2);

        let second = doc.get_dictionary(pages[&2]).unwrap();
        let media_box = second.get(b"MediaBox").unwrap().as_array().unwrap();
        assert_eq!(media_box[2].as_float().unwrap(), 300.0);
        assert_eq!(media_box[3].as_float().unwrap(), 400.0);
    }

    #[test]
    fn translucent_fill_registers_graphics_state() {
        let mut canvas = PdfCanvas::new("Alpha");
        canvas.begin_page(10.0, 10.0);
        canvas.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::WHITE, 0.85);
        let page = canvas.current.as_ref().unwrap();
        assert!(page.ext_gstates.get(b"GS85").is_ok());
        assert!(page.ops[0].starts_with("q /GS85 gs "));
    }
}
