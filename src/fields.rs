//! Enumerations and field types for tasks.
//!
//! These are shared between the store, the filter helpers and the CLI, so
//! they derive both serde and clap traits.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Priority classification for a task. Used only for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Completion-state filter for listing tasks.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum StatusFilter {
    /// Keep every task.
    #[default]
    All,
    /// Keep tasks that are not yet completed.
    Pending,
    /// Keep completed tasks.
    Completed,
}
