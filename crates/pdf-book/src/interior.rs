//! Interior page layout
//!
//! Every page is painted in the same order: white background,
//! illustration, text (with its backing panel on full-bleed pages), then
//! the page number.

use crate::canvas::{Canvas, ImageFit};
use crate::constants::{
    BODY_FONT_SIZE, BODY_TEXT_INSET, PAGE_NUMBER_FONT_SIZE, PAGE_NUMBER_OFFSET, TEXT_BACKING_ALPHA,
};
use crate::io::save_pdf;
use crate::layout::{PlacementPolicy, PrintSpec, place_lines, wrap_text};
use crate::options::{InteriorOptions, PageSpec};
use crate::render::PdfCanvas;
use crate::types::{Color, Font, RenderReport, Result};

/// Lay out `pages` in order, one canvas page each.
pub fn render_interior<C: Canvas>(
    spec: &PrintSpec,
    pages: &[PageSpec],
    canvas: &mut C,
) -> RenderReport {
    let mut report = RenderReport::default();

    for page in pages {
        render_page(spec, page, canvas, &mut report.warnings);
        report.pages += 1;
    }

    report
}

fn render_page<C: Canvas>(
    spec: &PrintSpec,
    page: &PageSpec,
    canvas: &mut C,
    warnings: &mut Vec<String>,
) {
    let policy = PlacementPolicy::for_layout(page.layout);

    canvas.begin_page(spec.page_width, spec.page_height);
    canvas.fill_rect(spec.page_rect(), Color::WHITE, 1.0);

    if let (Some(path), Some(frame)) = (page.illustration(), policy.illustration_frame(spec)) {
        if let Err(e) = canvas.draw_image(path, frame, ImageFit::CONTAIN) {
            let warning = format!("Page {}: {}", page.page_number, e);
            log::warn!("{}", warning);
            warnings.push(warning);
        }
    }

    if let Some(text) = page.body_text() {
        let block = policy.text_block(spec);
        if let Some(backing) = block.backing {
            canvas.fill_rect(backing, Color::WHITE, TEXT_BACKING_ALPHA);
        }

        let max_width = spec.safe_width - BODY_TEXT_INSET;
        let lines = wrap_text(text, Font::Helvetica, BODY_FONT_SIZE, max_width, &*canvas);
        let wrapped = lines.len();
        let placed = place_lines(lines, &block, spec);
        if placed.len() < wrapped {
            log::debug!(
                "Page {}: {} of {} lines fit above the safe margin",
                page.page_number,
                placed.len(),
                wrapped
            );
        }

        for line in &placed {
            canvas.draw_centered_text(
                line.x,
                line.y,
                &line.text,
                Font::Helvetica,
                BODY_FONT_SIZE,
                Color::BLACK,
            );
        }
    }

    if page.page_number > 1 {
        canvas.draw_centered_text(
            spec.page_width / 2.0,
            spec.bleed + PAGE_NUMBER_OFFSET,
            &page.page_number.to_string(),
            Font::Helvetica,
            PAGE_NUMBER_FONT_SIZE,
            Color::PAGE_NUMBER,
        );
    }

    canvas.end_page();
}

/// Render an interior document to PDF bytes
pub fn interior_pdf_bytes(options: &InteriorOptions) -> Result<(Vec<u8>, RenderReport)> {
    options.validate()?;
    let spec = options.print_spec();

    let mut canvas = PdfCanvas::new("Interior");
    let report = render_interior(&spec, &options.pages, &mut canvas);
    let bytes = canvas.finish()?;

    log::info!(
        "Interior PDF: {} pages at {} ({} x {} pt)",
        report.pages,
        spec.trim_size.display_name(),
        spec.page_width,
        spec.page_height
    );
    Ok((bytes, report))
}

/// Render an interior document and write it to `options.output_path`
pub async fn generate_interior(options: &InteriorOptions) -> Result<RenderReport> {
    let options = options.clone();
    let output_path = options.output_path.clone();

    let (bytes, report) =
        tokio::task::spawn_blocking(move || interior_pdf_bytes(&options)).await??;

    save_pdf(bytes, &output_path).await?;
    log::info!("Interior PDF created: {}", output_path.display());

    Ok(report)
}
