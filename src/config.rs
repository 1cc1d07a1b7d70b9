// Editor configuration

use crate::library::LibraryError;
use crate::playlist::Song;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the saved library inside the data directory
pub const LIBRARY_FILE_NAME: &str = "recent_work.json";

/// Name given to new or renamed-to-empty playlists
pub const DEFAULT_LIST_NAME: &str = "Untitled";

/// Editor settings
///
/// Every field has a default, so a config file only needs the values it
/// overrides, e.g. `(max_history: Some(50))`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Name used for new playlists and for playlists renamed to an empty name
    pub default_list_name: String,
    /// Song appended by "add song"
    pub new_song: Song,
    /// Maximum number of undo steps kept (unbounded if None)
    pub max_history: Option<usize>,
    /// Where the library is saved (platform data directory if None)
    pub storage_path: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_list_name: DEFAULT_LIST_NAME.to_string(),
            new_song: Song::default(),
            max_history: None,
            storage_path: None,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from RON text
    pub fn from_ron_str(ron_data: &str) -> Result<Self, LibraryError> {
        let config: Self = ron::from_str(ron_data)
            .map_err(|e| LibraryError::InvalidConfig(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LibraryError> {
        let path = path.as_ref();
        let ron_data = std::fs::read_to_string(path).map_err(|e| {
            LibraryError::FileSystemError(format!(
                "Failed to read config {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_ron_str(&ron_data)
    }

    /// Serialize the configuration to RON text
    pub fn to_ron_string(&self) -> Result<String, LibraryError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Check the configured values
    pub fn validate(&self) -> Result<(), LibraryError> {
        if self.default_list_name.trim().is_empty() {
            return Err(LibraryError::InvalidConfig(
                "Default list name cannot be empty".to_string(),
            ));
        }

        self.new_song
            .validate()
            .map_err(|e| LibraryError::InvalidConfig(format!("New song template: {}", e)))?;

        if self.max_history == Some(0) {
            return Err(LibraryError::InvalidConfig(
                "History limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolved location of the saved library
    pub fn storage_path(&self) -> PathBuf {
        self.storage_path
            .clone()
            .unwrap_or_else(default_storage_path)
    }
}

/// Default location of the saved library
///
/// Falls back to the working directory when the platform has no data directory.
pub fn default_storage_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("playlister"))
        .unwrap_or_default()
        .join(LIBRARY_FILE_NAME)
}
