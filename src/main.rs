use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use signlang_input::config::Config;
use signlang_input::{logging, LandmarkPacker, LandmarkStep, ModelInputStage};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark step as JSON ({"face": [...], "left_hand": ..., "image_size": {...}})
    input: PathBuf,

    /// Config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Emit 543 rows of (x, y, z) instead of 3 rows of 543
    #[arg(long, default_value_t = false)]
    frame_major: bool,

    /// Apply aspect-ratio normalization regardless of the config
    #[arg(long, default_value_t = false)]
    normalize: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = Config::load(&args.config);
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };
    logging::init(&config.logging.level)?;
    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "using default config");
    }

    tracing::info!(version = env!("GIT_VERSION"), input = %args.input.display(), "signlang-pack");

    let packer = LandmarkPacker::from_config(&config.packer)
        .with_normalization(config.packer.normalize_aspect_ratio || args.normalize);

    let step = LandmarkStep::from_json_file(&args.input)?;
    let matrix = packer
        .process(&step)
        .with_context(|| format!("Failed to pack {}", args.input.display()))?;

    tracing::info!(present = ?matrix.present_parts(), "packed");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, &matrix.to_nested(args.frame_major))?;
    writeln!(out)?;

    Ok(())
}
