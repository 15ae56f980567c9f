use std::path::PathBuf;

use clap::Parser;

/// Interactive file explorer shell.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "fsnav", version, about)]
pub struct Flags {
    /// Read this rc file instead of ~/.fsnavrc
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start in this directory instead of the current one
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, conflicts_with = "debug")]
    pub quiet: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
