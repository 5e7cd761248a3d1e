//! Task data structure.
//!
//! This module defines the core `Task` struct that represents a single to-do
//! item with its text, optional due date, category and priority.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::Priority;

/// A single to-do item.
///
/// Tasks are created only through [`TaskStore::add`](crate::store::TaskStore::add),
/// which assigns the id and enforces the text and due-date rules. The id is
/// immutable after creation; `text` changes via edit and `completed` via
/// toggle, everything else is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub due: Option<NaiveDate>,
    pub category: String,
    pub priority: Priority,
    pub completed: bool,
}
