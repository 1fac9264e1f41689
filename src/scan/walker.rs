//! Filesystem walker for enumerating regular files under a root.

use crate::error::FixityError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false; symlinks and other
    /// non-regular files are skipped rather than resolved)
    pub follow_symlinks: bool,
    /// File names to exclude when found directly in the root directory.
    /// Used so a manifest left by a previous run is not inventoried.
    pub exclude_root_names: Vec<OsString>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            exclude_root_names: Vec::new(),
        }
    }
}

/// Recursive filesystem walker
///
/// Enumerates every regular file under the root to unbounded depth.
/// Directories never yield entries. Results are sorted by path so a given
/// static filesystem state always produces the same sequence.
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// The root this walker traverses.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate all regular files under the root, sorted by path.
    ///
    /// Fails with [`FixityError::InvalidRoot`] before producing any paths
    /// if the root does not exist or is not a directory. A failure midway
    /// through traversal aborts the whole walk.
    pub fn file_paths(&self) -> Result<Vec<PathBuf>, FixityError> {
        if !self.root.is_dir() {
            return Err(FixityError::InvalidRoot(self.root.clone()));
        }

        let mut paths = Vec::new();

        let walker = WalkDir::new(&self.root).follow_links(self.config.follow_symlinks);

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone());
                FixityError::io(path, e.into())
            })?;

            if self.is_excluded(entry.path()) {
                continue;
            }

            // file_type() comes from the directory entry and does not
            // follow links unless the walker does, so symlinks, devices,
            // and other non-regular files fall through here.
            if entry.file_type().is_file() {
                paths.push(entry.path().to_path_buf());
            }
        }

        // Sort for determinism
        paths.sort();

        Ok(paths)
    }

    /// Check whether a path matches the root-level exclusion list
    fn is_excluded(&self, path: &Path) -> bool {
        if self.config.exclude_root_names.is_empty() {
            return false;
        }
        match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) if parent == self.root => self
                .config
                .exclude_root_names
                .iter()
                .any(|excluded| excluded.as_os_str() == name),
            _ => false,
        }
    }
}
