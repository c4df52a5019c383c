use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "todopad", about = concat!("[v] todopad v", env!("CARGO_PKG_VERSION"), " - a to-do list that forgets"), version)]
pub struct Cli {
    /// Read settings from this TOML file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Start with a few sample to-dos
    #[arg(long)]
    pub demo: bool,

    /// Append tracing output to this file (filter with TODOPAD_LOG)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}
