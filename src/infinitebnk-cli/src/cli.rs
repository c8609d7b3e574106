//! CLI argument definitions for infinitebnk

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "infinitebnk")]
#[command(about = "Wwise SoundBank extractor for packed asset modules")]
#[command(version)]
pub struct Args {
    /// Deploy folder containing module dumps (searched recursively)
    pub deploy_dir: PathBuf,

    /// Tagnames index mapping asset ids to source paths (optional)
    pub tagnames: Option<PathBuf>,

    /// Output directory for extracted SoundBanks
    #[arg(short, long, default_value = "soundbanks")]
    pub output: PathBuf,

    /// Dump the known-item table as CSV to stdout instead of extracting
    #[arg(long)]
    pub csv: bool,
}
