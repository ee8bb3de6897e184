//! Template store configuration
//!
//! The three storage roots are explicit configuration injected into the
//! service rather than process-wide constants, so tests can point the
//! pipeline at a throwaway directory.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Default data root when `DATA_DIR` is not set
const DEFAULT_DATA_DIR: &str = "/data";

/// Filesystem roots for the three template tiers
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base templates (read-only inputs)
    pub base_dir: PathBuf,
    /// Tenant-filled intermediate templates
    pub intermediate_dir: PathBuf,
    /// Final documents, nested by template name then year
    pub final_dir: PathBuf,
}

impl StoreConfig {
    /// Standard layout under a single data root: `base/`, `intermediate/`,
    /// `final/`.
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        let root = data_root.into();
        Self {
            base_dir: root.join("base"),
            intermediate_dir: root.join("intermediate"),
            final_dir: root.join("final"),
        }
    }

    /// Read the data root from the `DATA_DIR` environment variable.
    pub fn from_env() -> Self {
        let root = std::env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        Self::new(root)
    }

    /// Create all three roots if missing. Called once at startup.
    pub fn ensure_dirs(&self) -> io::Result<()> {
        for dir in [&self.base_dir, &self.intermediate_dir, &self.final_dir] {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}
