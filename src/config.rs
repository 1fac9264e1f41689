//! Configuration for the scan pipeline.
//!
//! The core takes an explicit [`ScanConfig`]; it never reads a console or
//! environment itself. An optional `fixity.toml` supplies defaults, and
//! CLI flags override file values.

use crate::error::FixityError;
use crate::logging::LoggingConfig;
use crate::manifest::DEFAULT_MANIFEST_NAME;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Explicit configuration handed to the core entry point.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory under which traversal begins.
    pub root: PathBuf,
    /// Manifest file name, created inside the root.
    pub manifest_name: String,
    /// Whether the walker resolves symlinks to their targets.
    pub follow_symlinks: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            follow_symlinks: false,
        }
    }
}

impl ScanConfig {
    /// Canonicalize the root so records carry a stable path form.
    ///
    /// Fails with [`FixityError::InvalidRoot`] when the root does not
    /// resolve to a directory.
    pub fn canonicalized(mut self) -> Result<Self, FixityError> {
        let canonical =
            dunce::canonicalize(&self.root).map_err(|_| FixityError::InvalidRoot(self.root.clone()))?;
        if !canonical.is_dir() {
            return Err(FixityError::InvalidRoot(self.root));
        }
        self.root = canonical;
        Ok(self)
    }
}

/// On-disk configuration file (`fixity.toml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// Manifest file name override.
    pub manifest_name: Option<String>,

    /// Symlink policy override.
    pub follow_symlinks: Option<bool>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FileConfig {
    /// Load a configuration file, failing if it is missing or malformed.
    pub fn load_from_file(path: &Path) -> Result<Self, FixityError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| FixityError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&raw)
            .map_err(|e| FixityError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load `fixity.toml` from the working directory if present, else defaults.
    pub fn load() -> Result<Self, FixityError> {
        let default_path = PathBuf::from("fixity.toml");
        if default_path.is_file() {
            Self::load_from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Fold file-level defaults into a scan configuration for `root`.
    pub fn scan_config(&self, root: PathBuf) -> ScanConfig {
        ScanConfig {
            root,
            manifest_name: self
                .manifest_name
                .clone()
                .unwrap_or_else(|| DEFAULT_MANIFEST_NAME.to_string()),
            follow_symlinks: self.follow_symlinks.unwrap_or(false),
        }
    }
}
