//! Staged file rewrites with rollback support.
//!
//! Every edit made by a run goes through a single [`Transaction`] so that the
//! podspec and the package manifest are written together or not at all.
//!
//! ## Execution Guarantees
//!
//! - **Read-through**: `read()` returns staged content, so consecutive edits
//!   to one file build on each other
//! - **Validation**: Paths are checked before anything is written
//! - **Atomicity**: A failed write restores the files already written
//! - **Unchanged files are skipped**
//!
//! ## Example
//!
//! ```no_run
//! # use new_module::fs::Transaction;
//! # use std::path::{Path, PathBuf};
//! # fn example() -> new_module::error::Result<()> {
//! let mut txn = Transaction::new();
//!
//! let podspec = Path::new("tealium-swift.podspec");
//! let content = txn.read(podspec)?;
//! txn.update_file(podspec.to_path_buf(), content.replace("2.1.0", "2.2.0"), "bumped version")?;
//!
//! txn.commit()?;
//! # Ok(())
//! # }
//! ```

use crate::error::{ModuleError, Result};

use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// A staged rewrite of one file.
///
/// Stores original content for rollback and a description of every edit
/// folded into `new`.
#[derive(Debug, Clone)]
pub struct FileUpdate {
    pub path: PathBuf,
    pub original: String,
    pub new: String,
    pub edits: Vec<String>,
}

impl FileUpdate {
    fn is_noop(&self) -> bool {
        self.original == self.new
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransactionState {
    /// Staging updates.
    Building,
    /// All updates written.
    Committed,
    /// Validation or a write failed.
    Failed,
}

/// Transaction coordinating rewrites of several files.
///
/// Must be explicitly committed. If dropped without committing, logs a warning;
/// nothing is written in that case.
#[must_use = "Transaction must be committed"]
pub struct Transaction {
    updates: Vec<FileUpdate>,
    state: TransactionState,
    executed_indices: Vec<usize>,
}

impl Transaction {
    /// Creates a new transaction.
    pub fn new() -> Self {
        Self {
            updates: Vec::new(),
            state: TransactionState::Building,
            executed_indices: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Number of files whose staged content differs from disk.
    pub fn changed_files(&self) -> usize {
        self.updates.iter().filter(|u| !u.is_noop()).count()
    }

    /// Returns the content of `path` as it will be after commit.
    ///
    /// Falls back to the file on disk when nothing is staged for it.
    pub fn read(&self, path: &Path) -> Result<String> {
        if let Some(update) = self.updates.iter().find(|u| u.path == path) {
            return Ok(update.new.clone());
        }

        fs::read_to_string(path).map_err(|e| {
            log::error!("Failed to read {}: {}", path.display(), e);
            ModuleError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })
    }

    /// Stages new content for `path`.
    ///
    /// `edit` describes the change for the summary. Staging the same path
    /// again replaces its pending content and appends to its edit list.
    pub fn update_file(
        &mut self,
        path: PathBuf,
        new_content: String,
        edit: impl Into<String>,
    ) -> Result<()> {
        if self.state != TransactionState::Building {
            return Err(ModuleError::Other(anyhow::anyhow!(
                "Cannot modify transaction after commit"
            )));
        }

        let edit = edit.into();
        log::debug!("Staging update for {}: {}", path.display(), edit);

        if let Some(update) = self.updates.iter_mut().find(|u| u.path == path) {
            if update.new != new_content {
                update.new = new_content;
                update.edits.push(edit);
            }
            return Ok(());
        }

        let original = self.read(&path)?;
        if original == new_content {
            log::debug!("Content unchanged, skipping: {}", path.display());
            return Ok(());
        }

        self.updates.push(FileUpdate {
            path,
            original,
            new: new_content,
            edits: vec![edit],
        });

        Ok(())
    }

    /// Validates all staged updates.
    ///
    /// Checks:
    /// - Files still exist
    /// - Files are writable
    fn validate(&self) -> Result<()> {
        for update in &self.updates {
            if !update.path.exists() {
                return Err(ModuleError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File no longer exists: {}", update.path.display()),
                )));
            }

            if let Ok(metadata) = fs::metadata(&update.path) {
                if metadata.permissions().readonly() {
                    return Err(ModuleError::Io(std::io::Error::new(
                        std::io::ErrorKind::PermissionDenied,
                        format!("File is read-only: {}", update.path.display()),
                    )));
                }
            }
        }

        Ok(())
    }

    /// Writes every staged update.
    ///
    /// On a failed write, files already written are restored before the
    /// error is returned.
    pub fn commit(&mut self) -> Result<()> {
        if self.state != TransactionState::Building {
            return Err(ModuleError::Other(anyhow::anyhow!(
                "Transaction already committed"
            )));
        }

        if let Err(e) = self.validate() {
            self.state = TransactionState::Failed;
            return Err(e);
        }

        for idx in 0..self.updates.len() {
            let update = &self.updates[idx];
            if update.is_noop() {
                continue;
            }

            if let Err(e) = fs::write(&update.path, &update.new) {
                let err = ModuleError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to write {}: {}", update.path.display(), e),
                ));
                self.state = TransactionState::Failed;

                if self.executed_indices.is_empty() {
                    return Err(err);
                }

                log::warn!(
                    "Restoring {} file(s) after failed write",
                    self.executed_indices.len()
                );
                return match self.rollback_partial() {
                    Ok(()) => Err(err),
                    Err(rollback_err) => Err(ModuleError::RollbackFailed(format!(
                        "{} (after: {})",
                        rollback_err, err
                    ))),
                };
            }

            self.executed_indices.push(idx);
            log::debug!("Updated: {}", update.path.display());
        }

        self.state = TransactionState::Committed;
        Ok(())
    }

    /// Restores the updates written so far, in reverse order.
    fn rollback_partial(&mut self) -> Result<()> {
        let mut errors = Vec::new();

        for &idx in self.executed_indices.iter().rev() {
            if let Some(update) = self.updates.get(idx) {
                if let Err(e) = fs::write(&update.path, &update.original) {
                    errors.push(format!("Failed to restore {}: {}", update.path.display(), e));
                }
            }
        }

        if errors.is_empty() {
            self.executed_indices.clear();
            log::info!("Rollback completed");
            Ok(())
        } else {
            Err(ModuleError::RollbackFailed(errors.join("; ")))
        }
    }

    /// Prints the files written and the edits applied to each.
    pub fn print_summary(&self) {
        let changed: Vec<_> = self.updates.iter().filter(|u| !u.is_noop()).collect();

        if changed.is_empty() {
            println!("\n{}", "No changes needed".yellow());
            return;
        }

        println!("\n{}", "Changes applied:".green().bold());

        for update in &changed {
            println!("\n{} {}", "📝".bold(), update.path.display());
            for edit in &update.edits {
                println!("   {} {}", "✓".green(), edit.dimmed());
            }
        }

        println!();
        println!(
            "{} Updated {} {}",
            "✓".green().bold(),
            changed.len(),
            if changed.len() == 1 { "file" } else { "files" }
        );
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if self.state == TransactionState::Building && self.changed_files() > 0 {
            log::warn!("Transaction dropped without commit");
        }
    }
}
