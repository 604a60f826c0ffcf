//! Storage connection: owns the data directory layout.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Handle on the data directory shared by all repositories. Cloning is
/// cheap; repositories hold their own copy.
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Open (and create if needed) the data directory layout.
    pub fn new(base_directory: impl AsRef<Path>) -> Result<Self> {
        let base = base_directory.as_ref().to_path_buf();
        for dir in [
            base.join("dogs"),
            base.join("plans"),
            base.join("trainings"),
            base.join("uploads").join("dogs"),
            base.join("uploads").join("trainings"),
        ] {
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create data directory {}", dir.display()))?;
        }
        Ok(Self { base_directory: base })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn dogs_directory(&self) -> PathBuf {
        self.base_directory.join("dogs")
    }

    /// Directory holding one dog's record and session rows.
    pub fn dog_directory(&self, dog_id: &str) -> PathBuf {
        self.dogs_directory().join(dog_id)
    }

    pub fn plans_directory(&self) -> PathBuf {
        self.base_directory.join("plans")
    }

    pub fn trainings_directory(&self) -> PathBuf {
        self.base_directory.join("trainings")
    }

    pub fn uploads_directory(&self) -> PathBuf {
        self.base_directory.join("uploads")
    }
}

/// True when an externally supplied id is usable as a single path
/// component. Ids we generate are UUIDs; anything else (path separators,
/// dot-dot) is treated as a lookup miss by the repositories.
pub(crate) fn is_safe_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Write a file through a temp sibling + rename so readers never observe
/// a partial write.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)
        .with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("failed to move {} into place", tmp.display()))?;
    Ok(())
}
