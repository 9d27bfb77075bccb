mod common;

use common::{Op, RecordingCanvas, images, texts, write_png};
use lopdf::Document;
use pdf_book::*;
use std::path::PathBuf;

fn cover(page_count: u32) -> CoverOptions {
    CoverOptions {
        output_path: PathBuf::from("cover.pdf"),
        trim_size: TrimSize::Standard6x9,
        page_count,
        paper_type: PaperType::White,
        title: Some("Test".to_string()),
        author: Some("Author".to_string()),
        ..Default::default()
    }
}

fn render(options: &CoverOptions) -> (CoverReport, Vec<Op>) {
    let mut canvas = RecordingCanvas::new();
    let report = render_cover(&options.print_spec(), options, &mut canvas);
    let mut pages = canvas.pages();
    assert_eq!(pages.len(), 1, "a cover is a single page");
    (report, pages.remove(0))
}

#[test]
fn test_thin_cover_with_placeholder() {
    let options = cover(32);
    let (report, ops) = render(&options);
    let spec = options.print_spec();
    let geometry = SpineGeometry::new(TrimSize::Standard6x9, &spec, report.spine_width_in);

    assert!((report.spine_width_in - 0.0720).abs() < 1e-4);
    assert!((report.width_in - 12.322).abs() < 1e-3);
    assert_eq!(report.height_in, 9.25);
    assert!(!report.spine_text_placed);
    assert!(report.warnings.is_empty());

    // Background, then the spine band
    assert_eq!(
        ops[0],
        Op::FillRect {
            rect: geometry.cover_rect(),
            color: Color::WHITE,
            alpha: 1.0,
        }
    );
    assert_eq!(
        ops[1],
        Op::FillRect {
            rect: geometry.spine_band(),
            color: Color::SPINE,
            alpha: 1.0,
        }
    );

    assert!(images(&ops).is_empty());
    assert_eq!(
        texts(&ops),
        vec![("Test".to_string(), 36.0), ("by Author".to_string(), 18.0)]
    );

    let front_center = geometry.front_cover_left + geometry.trim_width_pt / 2.0;
    for op in &ops {
        if let Op::Text { x, y, font, color, text, .. } = op {
            assert_eq!(*x, front_center);
            if text == "Test" {
                assert_eq!(*font, Font::HelveticaBold);
                assert!((y - geometry.cover_height * 0.6).abs() < 1e-3);
            } else {
                assert_eq!(*font, Font::Helvetica);
                assert_eq!(*color, Color::MUTED);
                assert!((y - geometry.cover_height * 0.4).abs() < 1e-3);
            }
        }
    }
}

#[test]
fn test_single_page_spine_has_no_text() {
    let options = CoverOptions {
        spine_text: Some("My Book".to_string()),
        ..cover(1)
    };
    let (report, ops) = render(&options);

    assert!(!report.spine_text_placed);
    assert!(!ops.iter().any(|op| matches!(op, Op::Rotate { .. })));
    assert!(!texts(&ops).iter().any(|(t, _)| t == "My Book"));
    // The band is still painted
    assert!(ops
        .iter()
        .any(|op| matches!(op, Op::FillRect { color, .. } if *color == Color::SPINE)));
}

#[test]
fn test_wide_spine_gets_rotated_label() {
    let options = CoverOptions {
        spine_text: Some("My Book".to_string()),
        ..cover(300)
    };
    let (report, ops) = render(&options);
    let geometry = SpineGeometry::new(
        TrimSize::Standard6x9,
        &options.print_spec(),
        report.spine_width_in,
    );
    assert!(geometry.spine_width_pt > 10.0);
    assert!(report.spine_text_placed);

    let start = ops.iter().position(|op| *op == Op::Save).unwrap();
    let expected_size = 12.0f32.min(geometry.spine_width_pt * 0.6);
    assert_eq!(
        ops[start + 1],
        Op::Translate {
            dx: geometry.spine_left + geometry.spine_width_pt / 2.0,
            dy: geometry.cover_height / 2.0,
        }
    );
    assert_eq!(ops[start + 2], Op::Rotate { degrees: 90.0 });
    match &ops[start + 3] {
        Op::Text { x, y, text, font, size, .. } => {
            assert_eq!(text, "My Book");
            assert_eq!(*x, 0.0);
            assert_eq!(*font, Font::HelveticaBold);
            assert_eq!(*size, expected_size);
            assert!((y + expected_size / 3.0).abs() < 1e-4);
        }
        other => panic!("expected spine text, got {:?}", other),
    }
    assert_eq!(ops[start + 4], Op::Restore);
}

#[test]
fn test_front_image_replaces_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let front = write_png(dir.path(), "front.png", 6, 9);
    let back = write_png(dir.path(), "back.png", 6, 9);
    let options = CoverOptions {
        front_image: Some(front.clone()),
        back_image: Some(back.clone()),
        ..cover(48)
    };
    let (report, ops) = render(&options);
    let geometry = SpineGeometry::new(
        TrimSize::Standard6x9,
        &options.print_spec(),
        report.spine_width_in,
    );

    assert!(report.warnings.is_empty());
    assert!(texts(&ops).is_empty());
    assert_eq!(
        images(&ops),
        vec![(back, geometry.back_band()), (front, geometry.front_band())]
    );
}

#[test]
fn test_unreadable_front_image_falls_back_to_placeholder() {
    let options = CoverOptions {
        front_image: Some(PathBuf::from("/missing/front.png")),
        ..cover(48)
    };
    let (report, ops) = render(&options);

    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("front cover"));
    assert!(images(&ops).is_empty());
    assert_eq!(
        texts(&ops),
        vec![("Test".to_string(), 36.0), ("by Author".to_string(), 18.0)]
    );
}

#[test]
fn test_background_color() {
    let options = CoverOptions {
        background_color: "#336699".to_string(),
        ..cover(24)
    };
    let (report, ops) = render(&options);
    assert!(report.warnings.is_empty());
    match &ops[0] {
        Op::FillRect { color, .. } => assert_eq!(Some(*color), Color::from_hex("#336699")),
        other => panic!("expected background fill, got {:?}", other),
    }

    let options = CoverOptions {
        background_color: "sky blue".to_string(),
        ..cover(24)
    };
    let (report, ops) = render(&options);
    assert_eq!(report.warnings.len(), 1);
    assert!(matches!(&ops[0], Op::FillRect { color, .. } if *color == Color::WHITE));
}

#[test]
fn test_placeholder_without_author() {
    let options = CoverOptions {
        author: None,
        ..cover(24)
    };
    let (_, ops) = render(&options);
    assert_eq!(texts(&ops), vec![("Test".to_string(), 36.0)]);
}

#[test]
fn test_cover_pdf_bytes_is_one_page() {
    let options = cover(32);
    let (bytes, report) = cover_pdf_bytes(&options).unwrap();

    let doc = Document::load_mem(&bytes).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);

    let dict = doc.get_dictionary(pages[&1]).unwrap();
    let media_box = dict.get(b"MediaBox").unwrap().as_array().unwrap();
    let width = media_box[2].as_float().unwrap();
    assert!((width / 72.0 - report.width_in).abs() < 1e-3);
}

#[test]
fn test_cover_rejects_zero_pages() {
    let options = cover(0);
    assert!(matches!(
        cover_pdf_bytes(&options),
        Err(BookError::Config(_))
    ));
}

#[tokio::test]
async fn test_generate_cover_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let options = CoverOptions {
        output_path: dir.path().join("cover.pdf"),
        spine_text: Some("A Long Story".to_string()),
        ..cover(200)
    };

    let report = generate_cover(&options).await.unwrap();
    assert!(report.spine_text_placed);

    let doc = Document::load(&options.output_path).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}
