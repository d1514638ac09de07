use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rpgmvp_decrypt")]
#[command(about = "Restore PNG images from RPG Maker MV encrypted containers (.rpgmvp / .png_)")]
#[command(version)]
pub struct Cli {
    /// Root directory containing encrypted images
    pub directory: Option<PathBuf>,

    /// Number of worker tasks (defaults to the CPU count)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Only process immediate children of the root directory
    #[arg(long)]
    pub flat: bool,

    /// Recognised file name suffix (repeatable, replaces the defaults)
    #[arg(short, long = "suffix", value_name = "SUFFIX")]
    pub suffixes: Vec<String>,

    /// Disable periodic progress output
    #[arg(long)]
    pub no_progress: bool,

    /// Progress report interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Capacity of the job queue between scanner and workers
    #[arg(long, value_name = "N")]
    pub buffer_size: Option<usize>,

    /// JSON settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write a JSON run report to this file
    #[arg(short, long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
