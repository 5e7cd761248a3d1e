//! Key/value persistence for the task list.
//!
//! The storage medium is modeled as a plain string key/value store
//! ([`KvStore`]). [`FileKvStore`] maps each key to a JSON file in a data
//! directory; [`MemoryKvStore`] backs tests. [`PersistenceAdapter`] sits on
//! top and handles the serialization round-trip for the task-list key.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::PersistError;
use crate::task::Task;

/// Storage key holding the serialized task list.
pub const TASKS_KEY: &str = "tasks";

/// Storage key holding the dark-mode display preference.
/// Only the CLI layer reads or writes this; task operations never touch it.
pub const DARK_MODE_KEY: &str = "dark_mode";

/// A string key/value store with get/set capability, the only thing the
/// persistence layer requires from the storage medium.
pub trait KvStore {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()>;
}

impl<S: KvStore + ?Sized> KvStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        (**self).set(key, value)
    }
}

/// File-backed store: each key lives in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        FileKvStore { dir: dir.as_ref().to_path_buf() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.key_path(key);
        // Atomic-ish write via temp + rename.
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        f.write_all(value.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        Ok(())
    }
}

/// In-memory store used by tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryKvStore {
    map: HashMap<String, String>,
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Serialization round-trip for the task list over an underlying [`KvStore`].
#[derive(Debug)]
pub struct PersistenceAdapter<S: KvStore> {
    kv: S,
}

impl<S: KvStore> PersistenceAdapter<S> {
    pub fn new(kv: S) -> Self {
        PersistenceAdapter { kv }
    }

    /// Load the stored task list.
    ///
    /// Absent or unparseable data degrades to an empty list; a parse failure
    /// is logged for diagnostics but never surfaced to the caller.
    pub fn load(&self) -> Vec<Task> {
        match self.kv.get(TASKS_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!("stored task list is unparseable, starting empty: {e}");
                    Vec::new()
                }
            },
            None => {
                debug!("no stored task list, starting empty");
                Vec::new()
            }
        }
    }

    /// Save the task list.
    ///
    /// On failure the caller's in-memory collection is untouched; only this
    /// write's durability is lost.
    pub fn save(&mut self, tasks: &[Task]) -> Result<(), PersistError> {
        let data = serde_json::to_string_pretty(tasks)?;
        self.kv.set(TASKS_KEY, &data)?;
        Ok(())
    }
}

/// Read the dark-mode display preference. Missing or malformed data means
/// the default (off).
pub fn load_dark_mode(kv: &impl KvStore) -> bool {
    kv.get(DARK_MODE_KEY).is_some_and(|v| v.trim() == "true")
}

/// Store the dark-mode display preference.
pub fn save_dark_mode(kv: &mut impl KvStore, on: bool) -> std::io::Result<()> {
    kv.set(DARK_MODE_KEY, if on { "true" } else { "false" })
}
