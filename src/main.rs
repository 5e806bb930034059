use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use ezcanvas::element::ImageElement;
use ezcanvas::input::PointerEvent;
use ezcanvas::{Canvas, Config, Settings};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "ezcanvas")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("EZCANVAS_GIT_HASH"), ")"),
    about = "Replay pointer events through a stabilized drawing canvas"
)]
struct Cli {
    /// Pointer events, one JSON object per line (`-` reads stdin)
    #[arg(long, short = 'e', value_name = "FILE", required_unless_present = "init_config")]
    events: Option<PathBuf>,

    /// Where to write the rendered PNG
    #[arg(long, short = 'o', value_name = "FILE", default_value = "canvas.png")]
    output: PathBuf,

    /// Backing store width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Backing store height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Displayed width (defaults to the backing width)
    #[arg(long)]
    display_width: Option<f64>,

    /// Displayed height (defaults to the backing height)
    #[arg(long)]
    display_height: Option<f64>,

    /// Viewport X offset of the canvas element
    #[arg(long, default_value_t = 0.0)]
    offset_x: f64,

    /// Viewport Y offset of the canvas element
    #[arg(long, default_value_t = 0.0)]
    offset_y: f64,

    /// Config file (defaults to ~/.config/ezcanvas/config.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON settings merged over the config, e.g. '{"brush":{"size":8}}'
    #[arg(long, short = 's', value_name = "JSON")]
    settings: Option<String>,

    /// PNG drawn stretched over the canvas before replaying
    #[arg(long, value_name = "FILE")]
    background: Option<PathBuf>,

    /// Fill the canvas with the configured clear color first
    #[arg(long, action = ArgAction::SetTrue)]
    fill: bool,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::get_config_path()?;
        Config::create_default_file(&path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(json) = &cli.settings {
        let settings = Settings::from_json(json).context("Invalid --settings JSON")?;
        config.apply(&settings);
    }

    let events_path = cli
        .events
        .as_deref()
        .context("--events is required")?;
    let events = read_events(events_path)?;

    let element = ImageElement::new(cli.width, cli.height)
        .with_context(|| format!("Failed to create {}x{} canvas", cli.width, cli.height))?;
    element.set_display_size(
        cli.display_width.unwrap_or(cli.width as f64),
        cli.display_height.unwrap_or(cli.height as f64),
    );
    element.set_viewport_offset(cli.offset_x, cli.offset_y);

    let mut canvas = Canvas::with_config(element.clone(), config);
    if cli.fill {
        canvas.clear_to_background();
    }
    if let Some(background) = &cli.background {
        canvas.draw_image(background);
    }

    log::info!("Replaying {} pointer events", events.len());
    for event in events {
        canvas.dispatch(event);
    }

    element
        .write_png(&cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    println!("Wrote {}", cli.output.display());

    Ok(())
}

/// Reads JSON-lines pointer events; blank lines and `#` comments are skipped.
fn read_events(path: &Path) -> Result<Vec<PointerEvent>> {
    let source = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read events from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read events from {}", path.display()))?
    };

    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str(line.trim())
                .with_context(|| format!("Invalid pointer event on line {}", index + 1))
        })
        .collect()
}
