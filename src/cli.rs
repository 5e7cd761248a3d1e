use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Simple, file-backed to-do list CLI.
/// Storage defaults to ~/.todo or a directory passed via --dir.
#[derive(Parser)]
#[command(name = "todo", version, about = "Daily to-do list CLI")]
pub struct Cli {
    /// Directory holding the task data files.
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Log level override (trace | debug | info | warn | error).
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}
