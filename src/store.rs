//! The task store: owns the in-memory collection and persists every mutation.

use chrono::{Local, NaiveDate};

use crate::error::{Error, Result};
use crate::fields::Priority;
use crate::persist::{KvStore, PersistenceAdapter};
use crate::task::Task;

/// Owns the authoritative task list.
///
/// The collection is insertion-ordered with newest first. Every mutating
/// operation performs exactly one save through the persistence adapter; a
/// failed save surfaces as [`Error::Persistence`] with the in-memory change
/// already applied, so callers should treat it as a durability warning
/// rather than a rejected mutation.
///
/// No other component holds a copy of the collection; consumers get
/// read-only views via [`TaskStore::all`].
pub struct TaskStore<S: KvStore> {
    tasks: Vec<Task>,
    next_id: u64,
    persist: PersistenceAdapter<S>,
}

impl<S: KvStore> TaskStore<S> {
    /// Load the store from the adapter's backing storage.
    pub fn load(persist: PersistenceAdapter<S>) -> Self {
        let tasks = persist.load();
        // Ids stay strictly monotonic within a session, so a deleted task's
        // id is never handed to a new one.
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        TaskStore { tasks, next_id, persist }
    }

    /// Read-only snapshot of the collection in current order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Create a task and prepend it to the collection.
    ///
    /// Text is trimmed and must be non-empty; a due date, if given, must not
    /// be earlier than the current calendar day. Stored tasks are never
    /// re-validated against later days.
    pub fn add(
        &mut self,
        text: &str,
        due: Option<NaiveDate>,
        category: &str,
        priority: Priority,
    ) -> Result<&Task> {
        self.add_on(Local::now().date_naive(), text, due, category, priority)
    }

    // Split out so tests can pin "today".
    fn add_on(
        &mut self,
        today: NaiveDate,
        text: &str,
        due: Option<NaiveDate>,
        category: &str,
        priority: Priority,
    ) -> Result<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyText);
        }
        if let Some(due) = due {
            if due < today {
                return Err(Error::PastDueDate { due, today });
            }
        }

        let task = Task {
            id: self.next_id,
            text: text.to_string(),
            due,
            category: category.to_string(),
            priority,
            completed: false,
        };
        self.next_id += 1;
        self.tasks.insert(0, task);
        self.persist.save(&self.tasks)?;
        Ok(&self.tasks[0])
    }

    /// Replace the text of an existing task.
    ///
    /// Invalid input is a no-op: on [`Error::EmptyText`] the prior text is
    /// preserved.
    pub fn edit(&mut self, id: u64, new_text: &str) -> Result<&Task> {
        let idx = self.position(id)?;
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Err(Error::EmptyText);
        }
        self.tasks[idx].text = new_text.to_string();
        self.persist.save(&self.tasks)?;
        Ok(&self.tasks[idx])
    }

    /// Flip a task between pending and completed.
    pub fn toggle(&mut self, id: u64) -> Result<&Task> {
        let idx = self.position(id)?;
        self.tasks[idx].completed = !self.tasks[idx].completed;
        self.persist.save(&self.tasks)?;
        Ok(&self.tasks[idx])
    }

    /// Remove a task by id.
    ///
    /// Removal is keyed strictly by id, never by position, so a duplicate
    /// deferred trigger reports [`Error::NotFound`] instead of touching a
    /// different task.
    pub fn remove(&mut self, id: u64) -> Result<()> {
        let idx = self.position(id)?;
        self.tasks.remove(idx);
        self.persist.save(&self.tasks)?;
        Ok(())
    }

    /// Remove every completed task and return how many were removed.
    /// Zero is a valid, non-error result.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        self.persist.save(&self.tasks)?;
        Ok(removed)
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::NotFound(id))
    }
}
