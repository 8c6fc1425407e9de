use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    str::FromStr as _,
};

use anyhow::Context as _;
use clap::Parser;
use textcard::{ColorSchemeId, CornerRadius, OutputFormat, RenderConfig, Renderer, ShapeId};

#[derive(Parser, Debug)]
#[command(name = "textcard", version, about = "Render text onto a shaped gradient card")]
struct Cli {
    /// Full render configuration as JSON (overrides the individual flags).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Text to render (1-128 characters).
    #[arg(long)]
    text: Option<String>,

    /// Canvas width in pixels (100-2048).
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Canvas height in pixels (100-2048).
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Color scheme (purple, ocean, forest, sunset, crimson, midnight, paper).
    #[arg(long, default_value = "purple")]
    scheme: String,

    /// Shape mask (rectangle, rounded, circle, rhombus, triangle, hexagon, star).
    #[arg(long, default_value = "rectangle")]
    shape: String,

    /// Corner radius for the rounded shape (sharp, slight, rounded, very-rounded, pill).
    #[arg(long, default_value = "rounded")]
    radius: String,

    /// Output format (png, jpeg).
    #[arg(long, default_value = "png")]
    format: String,

    /// Font file to pin glyph rendering to (TTF/OTF). Falls back to system
    /// fonts when omitted.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output file path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => read_config_json(path)?,
        None => config_from_flags(&cli)?,
    };

    let mut renderer = match &cli.font {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("read font '{}'", path.display()))?;
            Renderer::with_font_bytes(bytes)?
        }
        None => Renderer::new(),
    };

    let result = renderer.render(&config)?;

    if let Some(parent) = cli.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&cli.out, &result.bytes)
        .with_context(|| format!("write '{}'", cli.out.display()))?;

    eprintln!("wrote {} ({})", cli.out.display(), result.mime_type);
    Ok(())
}

fn read_config_json(path: &Path) -> anyhow::Result<RenderConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let config: RenderConfig =
        serde_json::from_reader(r).with_context(|| "parse render config JSON")?;
    Ok(config)
}

fn config_from_flags(cli: &Cli) -> anyhow::Result<RenderConfig> {
    let text = cli
        .text
        .clone()
        .context("--text is required unless --config is given")?;
    Ok(RenderConfig {
        text,
        width: cli.width,
        height: cli.height,
        scheme: ColorSchemeId::from_str(&cli.scheme)?,
        shape: ShapeId::from_str(&cli.shape)?,
        corner_radius: CornerRadius::from_str(&cli.radius)?,
        format: OutputFormat::from_str(&cli.format)?,
    })
}
