use crate::todo::TaskList;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed persistence for the task list
///
/// One TOML file, full-replace semantics: every save rewrites the whole
/// collection. Writes go through a temp file in the same directory followed
/// by a rename, so a crash mid-write never leaves a truncated blob behind.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Load the task list from disk. A missing file is an empty list.
    pub fn load(&self) -> Result<TaskList> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "no data file, starting empty");
            return Ok(TaskList::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("failed to read {}", self.file_path.display()))?;
        let list: TaskList = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), tasks = list.len(), "loaded task list");
        Ok(list)
    }

    /// Serialize the full collection and replace the file atomically.
    pub fn save(&self, list: &TaskList) -> Result<()> {
        let content = toml::to_string_pretty(list)?;
        let tmp_path = self.file_path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.file_path)
            .with_context(|| format!("failed to replace {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), tasks = list.len(), "saved task list");
        Ok(())
    }
}
