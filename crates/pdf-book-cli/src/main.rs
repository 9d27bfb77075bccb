mod logger;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use pdf_book::{BookKind, BookRequest, PaperType, PrintSpec, TrimSize};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfbook", about = "Print-ready children's book PDFs", version)]
struct Cli {
    /// Log per-page layout details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an interior or cover PDF from a JSON config
    Render {
        /// Document type (overrides the config's "type" field)
        #[arg(short = 't', long = "type")]
        doc_type: Option<String>,

        /// JSON config file
        #[arg(short, long, conflicts_with = "json")]
        config: Option<PathBuf>,

        /// Inline JSON config
        json: Option<String>,
    },

    /// Print page and cover geometry without rendering
    Geometry {
        /// Trim size
        #[arg(long, default_value = "square", value_enum)]
        trim: TrimArg,

        /// Paper stock
        #[arg(long, default_value = "white", value_enum)]
        paper: PaperArg,

        /// Interior page count (drives the spine width)
        #[arg(long, default_value = "24")]
        page_count: u32,

        /// Omit the bleed margin
        #[arg(long)]
        no_bleed: bool,

        /// Use the recommended trim, paper and bleed for a kind of book
        #[arg(long, value_enum)]
        preset: Option<PresetArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TrimArg {
    /// 8.5x8.5
    Square,
    /// 8x10
    Portrait,
    /// 8.5x11
    Letter,
    /// 6x9
    Standard,
    /// 5.5x8.5
    Digest,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    White,
    Cream,
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    Picture,
    Board,
    EarlyReader,
    Activity,
    Coloring,
}

impl From<TrimArg> for TrimSize {
    fn from(arg: TrimArg) -> Self {
        match arg {
            TrimArg::Square => Self::Square8_5,
            TrimArg::Portrait => Self::Portrait8x10,
            TrimArg::Letter => Self::Portrait8_5x11,
            TrimArg::Standard => Self::Standard6x9,
            TrimArg::Digest => Self::Digest5_5x8_5,
        }
    }
}

impl From<PaperArg> for PaperType {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::White => Self::White,
            PaperArg::Cream => Self::Cream,
        }
    }
}

impl From<PresetArg> for BookKind {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Picture => Self::Picture,
            PresetArg::Board => Self::Board,
            PresetArg::EarlyReader => Self::EarlyReader,
            PresetArg::Activity => Self::Activity,
            PresetArg::Coloring => Self::Coloring,
        }
    }
}

async fn render(
    doc_type: Option<String>,
    config: Option<PathBuf>,
    inline: Option<String>,
) -> Result<()> {
    let request = match (config, inline) {
        (Some(path), _) => BookRequest::load(&path, doc_type.as_deref())
            .await
            .with_context(|| format!("Failed to load {}", path.display()))?,
        (None, Some(inline)) => {
            let value: serde_json::Value =
                serde_json::from_str(&inline).context("Invalid inline JSON config")?;
            BookRequest::from_json(value, doc_type.as_deref())?
        }
        (None, None) => bail!("Provide a config file with --config or an inline JSON config"),
    };

    let mut result = json!({
        "success": true,
        "output_path": request.output_path().display().to_string(),
        "type": request.document_type().name(),
    });

    match &request {
        BookRequest::Interior(options) => {
            let report = pdf_book::generate_interior(options).await?;
            log::info!("Rendered {} interior pages", report.pages);
        }
        BookRequest::Cover(options) => {
            let report = pdf_book::generate_cover(options).await?;
            if !report.spine_text_placed && options.spine_label().is_some() {
                log::info!("Spine too narrow for text; spine label omitted");
            }
            result["width_in"] = json!(round_to(report.width_in, 2));
            result["height_in"] = json!(round_to(report.height_in, 2));
            result["spine_width_in"] = json!(round_to(report.spine_width_in, 4));
        }
    }

    println!("{}", result);
    Ok(())
}

/// Round to `places` decimals for display in the result JSON
fn round_to(value: f32, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value as f64 * scale).round() / scale
}

fn geometry(
    trim: TrimArg,
    paper: PaperArg,
    page_count: u32,
    no_bleed: bool,
    preset: Option<PresetArg>,
) -> Result<()> {
    let (trim_size, paper_type, include_bleed) = match preset {
        Some(preset) => {
            let settings = BookKind::from(preset).recommended();
            (settings.trim_size, settings.paper_type, settings.include_bleed)
        }
        None => (trim.into(), paper.into(), !no_bleed),
    };

    let spec = PrintSpec::resolve(trim_size, include_bleed);
    spec.validate()?;
    let cover = pdf_book::cover_dimensions_in(trim_size, page_count, paper_type, include_bleed);

    let result = json!({
        "trim_size": trim_size.display_name(),
        "paper_type": paper_type,
        "page_count": page_count,
        "page": spec,
        "cover": cover,
    });
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logger::StderrLogger::new(level).init()?;

    match cli.command {
        Commands::Render {
            doc_type,
            config,
            json,
        } => render(doc_type, config, json).await?,

        Commands::Geometry {
            trim,
            paper,
            page_count,
            no_bleed,
            preset,
        } => geometry(trim, paper, page_count, no_bleed, preset)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_dimensions_are_rounded_for_output() {
        assert_eq!(round_to(12.322064, 2), 12.32);
        assert_eq!(round_to(0.072064, 4), 0.0721);
        assert_eq!(round_to(9.25, 2), 9.25);
    }

    #[test]
    fn render_accepts_type_and_config() {
        let cli = Cli::try_parse_from([
            "pdfbook", "render", "--type", "cover", "--config", "c.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                doc_type,
                config,
                json,
            } => {
                assert_eq!(doc_type.as_deref(), Some("cover"));
                assert_eq!(config, Some(PathBuf::from("c.json")));
                assert!(json.is_none());
            }
            _ => panic!("expected render"),
        }
    }

    #[tokio::test]
    async fn unknown_type_is_rejected() {
        let err = render(
            Some("poster".to_string()),
            None,
            Some(r#"{"output_path":"x.pdf"}"#.to_string()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Unknown PDF type: poster");
    }
}
