//! Output directory housekeeping: atomic saves, listing, deletion and
//! age-based cleanup of generated decks.

mod filename;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::writer::DECK_EXTENSION;

pub use filename::{generate_filename, validate_filename};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A generated deck on disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredFile {
    pub filename: String,
    pub size: u64,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StorageStats {
    pub presentation_count: usize,
    pub total_bytes: u64,
}

/// The directory generated decks live in. Created once at startup.
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    pub fn create(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Path of an existing deck, after validating the caller-supplied name.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, StorageError> {
        validate_filename(name).map_err(StorageError::InvalidFilename)?;
        let path = self.root.join(name);
        if !path.is_file() {
            return Err(StorageError::NotFound(name.to_string()));
        }
        Ok(path)
    }

    /// Run `write` against a hidden temp file, then rename it into place.
    ///
    /// On any failure the temp file is removed and no deck becomes visible.
    /// Returns the size of the stored file.
    pub fn persist<E, F>(&self, filename: &str, write: F) -> Result<u64, E>
    where
        E: From<io::Error>,
        F: FnOnce(&Path) -> Result<(), E>,
    {
        validate_filename(filename).map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;
        let target = self.root.join(filename);
        let temp = self.root.join(format!(".{filename}.tmp"));

        if let Err(err) = write(&temp) {
            discard(&temp);
            return Err(err);
        }
        if let Err(err) = fs::rename(&temp, &target) {
            discard(&temp);
            return Err(err.into());
        }
        Ok(fs::metadata(&target)?.len())
    }

    /// Decks in the directory, most recently modified first.
    pub fn list(&self) -> io::Result<Vec<StoredFile>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !is_deck(&name) {
                continue;
            }
            let meta = entry.metadata()?;
            if !meta.is_file() {
                continue;
            }
            let modified: DateTime<Utc> = meta.modified()?.into();
            let created = meta.created().map(DateTime::<Utc>::from).unwrap_or(modified);
            files.push(StoredFile {
                filename: name,
                size: meta.len(),
                created,
                modified,
            });
        }
        files.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.filename.cmp(&b.filename)));
        Ok(files)
    }

    pub fn delete(&self, name: &str) -> Result<(), StorageError> {
        let path = self.resolve(name)?;
        fs::remove_file(path)?;
        log::info!("Deleted presentation {}", name);
        Ok(())
    }

    /// Delete decks last modified before `now - max_age`. Returns how many went.
    ///
    /// An age reaching past the earliest representable time deletes nothing.
    pub fn cleanup(&self, max_age: Duration, now: DateTime<Utc>) -> io::Result<usize> {
        let Some(cutoff) = now.checked_sub_signed(max_age) else {
            log::warn!("Cleanup age of {} days is out of range, nothing removed", max_age.num_days());
            return Ok(0);
        };
        let mut deleted = 0;
        for file in self.list()? {
            if file.modified < cutoff {
                match fs::remove_file(self.root.join(&file.filename)) {
                    Ok(()) => {
                        log::info!("Cleanup removed {}", file.filename);
                        deleted += 1;
                    }
                    // Raced with a concurrent delete.
                    Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                    Err(err) => return Err(err),
                }
            }
        }
        Ok(deleted)
    }

    pub fn stats(&self) -> io::Result<StorageStats> {
        let files = self.list()?;
        Ok(StorageStats {
            presentation_count: files.len(),
            total_bytes: files.iter().map(|f| f.size).sum(),
        })
    }
}

fn is_deck(name: &str) -> bool {
    !name.starts_with('.') && name.ends_with(&format!(".{DECK_EXTENSION}"))
}

fn discard(temp: &Path) {
    if let Err(err) = fs::remove_file(temp) {
        if err.kind() != io::ErrorKind::NotFound {
            log::warn!("Failed to remove temp file {}: {}", temp.display(), err);
        }
    }
}
