//! Wrap-around cover layout
//!
//! The cover is a single page: back cover, spine and front cover side by
//! side, with bleed around the whole sheet.

use crate::canvas::{Canvas, ImageFit};
use crate::constants::{
    AUTHOR_FONT_SIZE, AUTHOR_HEIGHT_RATIO, SPINE_FONT_RATIO, SPINE_MAX_FONT_SIZE, TITLE_FONT_SIZE,
    TITLE_HEIGHT_RATIO,
};
use crate::io::save_pdf;
use crate::layout::{PrintSpec, Rect, SpineGeometry, spine_width_inches};
use crate::options::CoverOptions;
use crate::render::PdfCanvas;
use crate::types::{Color, CoverReport, Font, Result};
use std::path::Path;

/// Spine text size for a spine of the given width
pub fn spine_font_size(spine_width_pt: f32) -> f32 {
    SPINE_MAX_FONT_SIZE.min(spine_width_pt * SPINE_FONT_RATIO)
}

/// Lay out the cover as one canvas page.
pub fn render_cover<C: Canvas>(
    spec: &PrintSpec,
    cover: &CoverOptions,
    canvas: &mut C,
) -> CoverReport {
    let mut warnings = Vec::new();
    let spine_width_in = spine_width_inches(cover.page_count, cover.paper_type);
    let geometry = SpineGeometry::new(spec.trim_size, spec, spine_width_in);

    canvas.begin_page(geometry.cover_width, geometry.cover_height);

    let background = Color::from_hex(&cover.background_color).unwrap_or_else(|| {
        let warning = format!(
            "Invalid background color {:?}, using white",
            cover.background_color
        );
        log::warn!("{}", warning);
        warnings.push(warning);
        Color::WHITE
    });
    canvas.fill_rect(geometry.cover_rect(), background, 1.0);

    if let Some(path) = cover.back_image_path() {
        draw_art(canvas, path, geometry.back_band(), "back cover", &mut warnings);
    }

    let spine_text_placed = draw_spine(canvas, &geometry, cover.spine_label());

    let front_drawn = cover.front_image_path().is_some_and(|path| {
        draw_art(
            canvas,
            path,
            geometry.front_band(),
            "front cover",
            &mut warnings,
        )
    });
    if !front_drawn {
        draw_placeholder(canvas, &geometry, cover.title_text(), cover.author_name());
    }

    canvas.end_page();

    let report = CoverReport {
        width_in: geometry.cover_width_in(),
        height_in: geometry.cover_height_in(),
        spine_width_in,
        spine_text_placed,
        warnings,
    };
    log::info!(
        "Cover dimensions: {:.2}\" x {:.2}\", spine width: {:.4}\"",
        report.width_in,
        report.height_in,
        report.spine_width_in
    );
    report
}

fn draw_art<C: Canvas>(
    canvas: &mut C,
    path: &Path,
    frame: Rect,
    label: &str,
    warnings: &mut Vec<String>,
) -> bool {
    match canvas.draw_image(path, frame, ImageFit::CONTAIN) {
        Ok(()) => true,
        Err(e) => {
            let warning = format!("Could not load {} image: {}", label, e);
            log::warn!("{}", warning);
            warnings.push(warning);
            false
        }
    }
}

/// Paint the spine band and, when it is wide enough, its rotated label.
///
/// Returns whether text was drawn.
fn draw_spine<C: Canvas>(canvas: &mut C, geometry: &SpineGeometry, label: Option<&str>) -> bool {
    canvas.fill_rect(geometry.spine_band(), Color::SPINE, 1.0);

    let Some(label) = label else {
        return false;
    };
    if !geometry.can_hold_text() {
        log::debug!(
            "Spine is {:.2}pt wide; skipping spine text",
            geometry.spine_width_pt
        );
        return false;
    }

    let size = spine_font_size(geometry.spine_width_pt);
    canvas.save_state();
    canvas.translate(
        geometry.spine_left + geometry.spine_width_pt / 2.0,
        geometry.cover_height / 2.0,
    );
    canvas.rotate(90.0);
    canvas.draw_centered_text(0.0, -size / 3.0, label, Font::HelveticaBold, size, Color::BLACK);
    canvas.restore_state();
    true
}

fn draw_placeholder<C: Canvas>(
    canvas: &mut C,
    geometry: &SpineGeometry,
    title: Option<&str>,
    author: Option<&str>,
) {
    let center_x = geometry.front_cover_left + geometry.trim_width_pt / 2.0;

    if let Some(title) = title {
        canvas.draw_centered_text(
            center_x,
            geometry.cover_height * TITLE_HEIGHT_RATIO,
            title,
            Font::HelveticaBold,
            TITLE_FONT_SIZE,
            Color::BLACK,
        );
    }

    if let Some(author) = author {
        canvas.draw_centered_text(
            center_x,
            geometry.cover_height * AUTHOR_HEIGHT_RATIO,
            &format!("by {}", author),
            Font::Helvetica,
            AUTHOR_FONT_SIZE,
            Color::MUTED,
        );
    }
}

/// Render a cover to PDF bytes
pub fn cover_pdf_bytes(options: &CoverOptions) -> Result<(Vec<u8>, CoverReport)> {
    options.validate()?;
    let spec = options.print_spec();

    let mut canvas = PdfCanvas::new("Cover");
    let report = render_cover(&spec, options, &mut canvas);
    let bytes = canvas.finish()?;
    Ok((bytes, report))
}

/// Render a cover and write it to `options.output_path`
pub async fn generate_cover(options: &CoverOptions) -> Result<CoverReport> {
    let options = options.clone();
    let output_path = options.output_path.clone();

    let (bytes, report) = tokio::task::spawn_blocking(move || cover_pdf_bytes(&options)).await??;

    save_pdf(bytes, &output_path).await?;
    log::info!("Cover PDF created: {}", output_path.display());

    Ok(report)
}
