// Library manager for loading and saving playlists

use crate::config::EditorConfig;
use crate::library::serialization::{deserialize_from_json, serialize_to_json};
use crate::library::types::LibrarySnapshot;
use crate::library::validate_snapshot;
use log::info;
use std::path::{Path, PathBuf};

/// Library error types
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("File system error: {0}")]
    FileSystemError(String),

    #[error("Invalid library snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Unsupported snapshot version {0}")]
    UnsupportedVersion(u32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("RON error: {0}")]
    Ron(#[from] ron::Error),
}

/// Library manager - handles saving/loading the playlist library
pub struct LibraryManager {
    /// Location of the library file
    path: PathBuf,
}

impl LibraryManager {
    /// Create a manager for the library file at `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Create a manager for the configured storage location
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.storage_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if a saved library exists
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Save a snapshot, replacing any previous one
    ///
    /// The snapshot is validated, written to a temporary file next to the
    /// target and then renamed over it. A failed save leaves the old file
    /// and no temporary file behind.
    pub fn save_library(&self, snapshot: &LibrarySnapshot) -> Result<(), LibraryError> {
        validate_snapshot(snapshot)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                LibraryError::FileSystemError(format!(
                    "Failed to create library directory: {}",
                    e
                ))
            })?;
        }

        let json = serialize_to_json(snapshot)?;
        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, json).map_err(|e| {
            LibraryError::FileSystemError(format!("Failed to write library: {}", e))
        })?;
        if let Err(e) = std::fs::rename(&temp_path, &self.path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(LibraryError::FileSystemError(format!(
                "Failed to replace library: {}",
                e
            )));
        }

        info!(
            "Saved {} playlists to {}",
            snapshot.playlists.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Load the saved snapshot
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    pub fn load_library(&self) -> Result<Option<LibrarySnapshot>, LibraryError> {
        if !self.exists() {
            info!("No saved library at {}", self.path.display());
            return Ok(None);
        }

        let json = std::fs::read_to_string(&self.path)?;
        let snapshot = deserialize_from_json(&json)?;

        info!(
            "Loaded {} playlists from {}",
            snapshot.playlists.len(),
            self.path.display()
        );
        Ok(Some(snapshot))
    }
}
