use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "vigilance",
    about = "HTTP backend for the Vigilance dashboard",
    version
)]
pub struct Cli {
    /// Path to a TOML configuration file (defaults to ./config.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Port to listen on, overriding the configuration
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory holding themes, uploads and colors.json
    #[arg(long)]
    pub storage_root: Option<PathBuf>,

    /// Do not write the bundled default themes on startup
    #[arg(long)]
    pub no_seed: bool,
}
