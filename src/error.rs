//! Error types for the task store and persistence layer.

use chrono::NaiveDate;

/// Errors reported by [`TaskStore`](crate::store::TaskStore) operations.
///
/// None of these are fatal; the application stays interactive after any of
/// them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Add or edit was given text that is empty after trimming.
    #[error("task text cannot be empty")]
    EmptyText,

    /// Add was given a due date earlier than today.
    #[error("due date {due} is in the past (today is {today})")]
    PastDueDate {
        /// The rejected due date.
        due: NaiveDate,
        /// The current calendar day the date was checked against.
        today: NaiveDate,
    },

    /// No task with the given id exists.
    #[error("no task with id {0}")]
    NotFound(u64),

    /// Saving to the backing store failed. The in-memory change has already
    /// been applied; only durability was lost for this write.
    #[error("failed to persist tasks: {0}")]
    Persistence(#[from] PersistError),
}

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The backing store could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The task list could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;
