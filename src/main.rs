//! Jewelry try-on replay tool: composites accessories over a recorded
//! landmark trace.

use anyhow::Result;
use clap::Parser;
use jewelry_tryon::app::{AppConfig, TryOnApp};
use jewelry_tryon::assets::Accessory;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark trace file to replay (JSON Lines, one frame per line)
    #[arg(short, long)]
    trace: PathBuf,

    /// Directory to write overlay frames into
    #[arg(short, long, default_value = "overlay_out")]
    out_dir: PathBuf,

    /// Accessory asset root directory
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Accessory category active at replay start (earring, necklace, ring, bracelet)
    #[arg(short, long, default_value = "earring")]
    mode: String,

    /// Overlay surface width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Overlay surface height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Jewelry Try-On - Replay");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match jewelry_tryon::config::Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                jewelry_tryon::config::Config::default()
            }
        }
    } else {
        jewelry_tryon::config::Config::default()
    };

    // Command line overrides
    if let Some(assets) = args.assets {
        config.assets.root = assets;
    }
    if let Some(width) = args.width {
        config.surface.width = width;
    }
    if let Some(height) = args.height {
        config.surface.height = height;
    }

    let initial_mode: Accessory = args.mode.parse()?;

    // Create and run application
    let mut app = TryOnApp::new(AppConfig {
        trace_path: args.trace,
        out_dir: args.out_dir,
        initial_mode,
        config,
    })?;
    app.run()?;

    Ok(())
}
