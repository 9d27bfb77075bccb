#![allow(dead_code)]

use pdf_book::*;
use std::path::{Path, PathBuf};

/// A canvas call, as seen by the recorder
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    BeginPage {
        width: f32,
        height: f32,
    },
    EndPage,
    FillRect {
        rect: Rect,
        color: Color,
        alpha: f32,
    },
    Image {
        path: PathBuf,
        frame: Rect,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        font: Font,
        size: f32,
        color: Color,
    },
    Save,
    Restore,
    Translate {
        dx: f32,
        dy: f32,
    },
    Rotate {
        degrees: f32,
    },
}

/// Canvas that records every call instead of drawing.
///
/// Text is measured at half an em per character; images "load" when the
/// file exists.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ops grouped per page (between BeginPage and EndPage, exclusive)
    pub fn pages(&self) -> Vec<Vec<Op>> {
        let mut pages = Vec::new();
        let mut current: Option<Vec<Op>> = None;
        for op in &self.ops {
            match op {
                Op::BeginPage { .. } => current = Some(Vec::new()),
                Op::EndPage => pages.extend(current.take()),
                other => {
                    if let Some(page) = current.as_mut() {
                        page.push(other.clone());
                    }
                }
            }
        }
        pages
    }

    pub fn page_sizes(&self) -> Vec<(f32, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::BeginPage { width, height } => Some((*width, *height)),
                _ => None,
            })
            .collect()
    }
}

/// Text ops of one page as (text, size)
pub fn texts(page: &[Op]) -> Vec<(String, f32)> {
    page.iter()
        .filter_map(|op| match op {
            Op::Text { text, size, .. } => Some((text.clone(), *size)),
            _ => None,
        })
        .collect()
}

pub fn images(page: &[Op]) -> Vec<(PathBuf, Rect)> {
    page.iter()
        .filter_map(|op| match op {
            Op::Image { path, frame } => Some((path.clone(), *frame)),
            _ => None,
        })
        .collect()
}

impl TextMeasure for RecordingCanvas {
    fn measure(&self, text: &str, _font: Font, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }
}

impl Canvas for RecordingCanvas {
    fn begin_page(&mut self, width: f32, height: f32) {
        self.ops.push(Op::BeginPage { width, height });
    }

    fn end_page(&mut self) {
        self.ops.push(Op::EndPage);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, alpha: f32) {
        self.ops.push(Op::FillRect { rect, color, alpha });
    }

    fn draw_image(&mut self, path: &Path, frame: Rect, _fit: ImageFit) -> Result<()> {
        if !path.exists() {
            return Err(BookError::Image {
                path: path.to_owned(),
                reason: "file not found".to_string(),
            });
        }
        self.ops.push(Op::Image {
            path: path.to_owned(),
            frame,
        });
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
        self.ops.push(Op::Text {
            x,
            y,
            text: text.to_string(),
            font,
            size,
            color,
        });
    }

    fn save_state(&mut self) {
        self.ops.push(Op::Save);
    }

    fn restore_state(&mut self) {
        self.ops.push(Op::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.ops.push(Op::Translate { dx, dy });
    }

    fn rotate(&mut self, degrees: f32) {
        self.ops.push(Op::Rotate { degrees });
    }
}

/// Write a small solid PNG into `dir` and return its path
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::from_pixel(width, height, image::Rgb([200, 40, 40]))
        .save(&path)
        .unwrap();
    path
}

pub fn page(number: u32, layout: PageLayout, text: &str) -> PageSpec {
    PageSpec {
        page_number: number,
        text: Some(text.to_string()),
        layout,
        ..Default::default()
    }
}
