//! Test infrastructure for the file storage layer.
//!
//! RAII-based cleanup: the temp directory lives as long as the
//! environment and is removed even when a test panics.

use anyhow::Result;
use tempfile::TempDir;

use super::connection::CsvConnection;

/// A storage connection rooted in a temporary directory.
pub struct TestEnvironment {
    pub connection: CsvConnection,
    /// Base directory path for direct filesystem assertions.
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // keep alive until drop
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}
