use anyhow::{Context, Result};
use clap::Parser;
use easel::Config;
use easel::draw::Canvas;
use easel::driver::{Driver, LogSink};
use easel::input::{FrameDecoder, input_slot, spawn_reader};
use easel::sketch::Sketch;
use signal_hook::consts::signal::{SIGINT, SIGTERM};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

#[derive(Parser, Debug)]
#[command(name = "easel")]
#[command(
    version,
    about = "Immediate-mode canvas sketch driven by a delimited value stream"
)]
struct Cli {
    /// Configuration file (defaults to ~/.config/easel/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Input source: a device or file path, or "-" for stdin
    #[arg(long, short = 'i', value_name = "PATH")]
    input: Option<String>,

    /// Stop after this many frames
    #[arg(long, short = 'n', value_name = "COUNT")]
    frames: Option<u64>,

    /// Override the configured frame rate
    #[arg(long, value_name = "FPS")]
    fps: Option<i32>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(fps) = cli.fps {
        config.canvas.frames_per_second = fps;
    }

    let canvas = Canvas::from_config(&config.canvas).context("Failed to create canvas")?;
    let sketch = Sketch::with_canvas(canvas);

    let (publisher, latest) = input_slot(config.input.initial_value);
    let delimiter =
        u8::try_from(config.input.delimiter).context("Input delimiter must be ASCII")?;
    let decoder = FrameDecoder::new(delimiter);

    match cli.input.as_deref() {
        None => {
            log::info!(
                "No input source given - sketch input stays at {}",
                config.input.initial_value
            );
        }
        Some("-") => {
            log::info!("Reading input from stdin");
            spawn_reader(io::stdin(), decoder, publisher)
                .context("Failed to start input reader")?;
        }
        Some(path) => {
            let source =
                File::open(path).with_context(|| format!("Failed to open input source {path}"))?;
            log::info!("Reading input from {}", path);
            spawn_reader(source, decoder, publisher).context("Failed to start input reader")?;
        }
    }

    let stop = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&stop))
            .context("Failed to register signal handler")?;
    }

    let mut driver = Driver::new(sketch, latest, LogSink);
    let frames = driver.run(&stop, cli.frames);
    log::info!("Rendered {} frames", frames);

    Ok(())
}
