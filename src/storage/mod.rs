//! Persistence of the expense history as a single JSON blob.
//!
//! One file holds the whole (unfiltered) sequence. Missing or unparsable
//! content hydrates as an empty history and never surfaces an error to the
//! caller; write failures are reported so the UI can show a notice.

use crate::expense::Expense;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

pub struct ExpenseStorage {
    path: PathBuf,
}

impl ExpenseStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default blob location: `<data_dir>/spendlog/expenses.json`.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spendlog")
            .join("expenses.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hydrate the expense history. Absent or malformed content yields an
    /// empty sequence.
    pub fn load(&self) -> Vec<Expense> {
        if !self.path.exists() {
            return Vec::new();
        }
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("failed to read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(expenses) => expenses,
            Err(e) => {
                warn!("discarding unparsable history in {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// Serialize the full sequence to disk.
    pub fn save(&self, expenses: &[Expense]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
        }
        let contents =
            serde_json::to_string_pretty(expenses).with_context(|| "Failed to serialize expenses")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write expenses to {}", self.path.display()))?;
        Ok(())
    }
}
