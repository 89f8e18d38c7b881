use crate::error::{RenameError, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to one manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct Record {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Writes transformed manifests back in place and remembers the outcome.
///
/// Every write happens immediately. There is no staging and no rollback: if
/// a later manifest fails, the earlier ones stay rewritten.
#[derive(Debug)]
pub struct ManifestWriter {
    records: Vec<Record>,
    dry_run: bool,
}

/// Reads a manifest fully into memory.
pub fn read_manifest(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        log::error!("Failed to read file {}: {}", path.display(), e);
        RenameError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", path.display(), e),
        ))
    })
}

impl ManifestWriter {
    pub fn new(dry_run: bool) -> Self {
        Self {
            records: Vec::new(),
            dry_run,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Overwrites `path` with `new_content`. Outside dry-run the file is
    /// always written; `original` only decides the recorded outcome.
    pub fn update_file(
        &mut self,
        path: &Path,
        original: &str,
        new_content: &str,
    ) -> Result<Outcome> {
        let outcome = if original == new_content {
            Outcome::Unchanged
        } else {
            Outcome::Updated
        };

        if self.dry_run {
            if outcome == Outcome::Updated {
                log::info!("Would update: {}", path.display());
            }
        } else {
            fs::write(path, new_content).map_err(|e| {
                RenameError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to write {}: {}", path.display(), e),
                ))
            })?;
            match outcome {
                Outcome::Updated => log::info!("Updated: {}", path.display()),
                Outcome::Unchanged => log::debug!("Rewrote unchanged: {}", path.display()),
            }
        }

        self.records.push(Record {
            path: path.to_path_buf(),
            outcome,
        });
        Ok(outcome)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn updated_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == Outcome::Updated)
            .count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Prints which manifests changed, relative to `root`.
    pub fn print_summary(&self, root: &Path) {
        if self.updated_count() == 0 {
            println!("\n{}", "No changes needed".yellow());
            return;
        }

        let display_path = |path: &Path| -> String {
            let relative = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
            relative.to_string_lossy().replace('\\', "/")
        };

        if self.dry_run {
            println!("\n{}", "DRY RUN - No changes were written".yellow().bold());
        } else {
            println!("\n{}", "Changes applied:".green().bold());
        }

        for record in self.records.iter().filter(|r| r.outcome == Outcome::Updated) {
            if self.dry_run {
                println!("   • {}", display_path(&record.path).dimmed());
            } else {
                println!("   {} {}", "✓".green(), display_path(&record.path).dimmed());
            }
        }

        let updated = self.updated_count();
        let unchanged = self.len() - updated;
        println!();
        println!(
            "{} {} {}, {} unchanged",
            updated.to_string().cyan().bold(),
            if updated == 1 { "manifest" } else { "manifests" },
            if self.dry_run { "would change" } else { "changed" },
            unchanged
        );
    }
}
