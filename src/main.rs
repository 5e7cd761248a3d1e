//! # todo - file-backed to-do list CLI
//!
//! A small command-line task list: add, edit, complete, delete and filter
//! short text tasks with optional due date, category and priority. State is
//! stored locally as JSON so it survives between invocations.
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a task
//! todo add "Buy milk" --due tomorrow --category home --priority low
//!
//! # List pending tasks in one category
//! todo list --status pending --category home
//!
//! # Complete, edit, delete
//! todo toggle 3
//! todo edit 3 "Buy oat milk"
//! todo rm 3
//!
//! # Remove every completed task (asks for confirmation)
//! todo clear
//! ```
//!
//! Data lives in `~/.todo/` as one JSON file per storage key; pass `--dir`
//! to use another directory. The `theme` command toggles dark-mode colours
//! for the list output.

use std::path::PathBuf;

use clap::Parser;
use flexi_logger::Logger;

pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod filter;
pub mod persist;
pub mod store;
pub mod task;

use cli::Cli;
use cmd::*;
use persist::{FileKvStore, PersistenceAdapter};
use store::TaskStore;

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr; RUST_LOG or --log overrides the level.
    let level = cli.log.clone().unwrap_or_else(|| "warn".to_string());
    let _logger = match Logger::try_with_env_or_str(&level)
        .and_then(|l| l.log_to_stderr().start())
    {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Failed to initialise logging: {e}");
            None
        }
    };

    // Determine the data directory.
    let data_dir = cli.dir.clone().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".todo")
    });

    let mut kv = FileKvStore::new(&data_dir);
    let dark = persist::load_dark_mode(&kv);

    // Theme only touches the preference key, not the task store.
    if let Commands::Theme = cli.command {
        cmd_theme(&mut kv);
        return;
    }

    let mut store = TaskStore::load(PersistenceAdapter::new(kv));

    match cli.command {
        Commands::Theme => unreachable!("theme handled above"),

        Commands::Add { text, due, category, priority } =>
            cmd_add(&mut store, &text, due.as_deref(), &category, priority, dark),

        Commands::List { status, category } =>
            cmd_list(&store, status, category, dark),

        Commands::Edit { id, text } => cmd_edit(&mut store, id, &text, dark),

        Commands::Toggle { id } => cmd_toggle(&mut store, id, dark),

        Commands::Rm { id } => cmd_rm(&mut store, id, dark),

        Commands::Clear { yes } => cmd_clear(&mut store, yes, dark),
    }
}
