mod config;

use std::path::PathBuf;

use clap::Parser;
use whiteout_core::batch;

use config::Config;

#[derive(Parser)]
#[command(name = "whiteout", about = "Make near-white PNG backgrounds transparent, in place")]
struct Cli {
    /// Directory of PNG files to rewrite (overrides the config file)
    directory: Option<PathBuf>,
    /// Path to a TOML config file (default: ./whiteout.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    };
    let config = loaded.unwrap_or_else(|e| {
        eprintln!("Error loading config: {}", e);
        std::process::exit(1);
    });

    let directory = config.resolve_directory(cli.directory);

    let outcome = batch::run(&directory, |path, result| {
        println!("{}", batch::report_line(path, result));
    });

    // A missing directory is reported, not turned into a failing exit status
    if let Err(e) = outcome {
        println!("{}", e);
    }
}
