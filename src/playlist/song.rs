// Song record stored in a playlist

use crate::playlist::store::PlaylistError;
use serde::{Deserialize, Serialize};

/// Default title given to a freshly added song
pub const DEFAULT_SONG_TITLE: &str = "Untitled";

/// Default artist given to a freshly added song
pub const DEFAULT_SONG_ARTIST: &str = "Unknown";

/// Default video reference given to a freshly added song
pub const DEFAULT_SONG_EXTERNAL_ID: &str = "dQw4w9WgXcQ";

/// A single song entry
///
/// All three fields are required. Deserializing a record with a missing
/// field fails, so a playlist never holds a partial song.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub title: String,
    pub artist: String,
    /// Reference id of the song's video (e.g. a YouTube video id)
    pub external_id: String,
}

impl Song {
    /// Create a new song
    ///
    /// # Errors
    /// Returns `PlaylistError::InvalidSong` if the title is blank.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        external_id: impl Into<String>,
    ) -> Result<Self, PlaylistError> {
        let song = Self {
            title: title.into(),
            artist: artist.into(),
            external_id: external_id.into(),
        };
        song.validate()?;
        Ok(song)
    }

    /// Check that the record is complete enough to be stored
    pub fn validate(&self) -> Result<(), PlaylistError> {
        if self.title.trim().is_empty() {
            return Err(PlaylistError::InvalidSong(
                "Song title cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Link to the song's video
    pub fn video_url(&self) -> String {
        format!("https://youtube.com/watch?v={}", self.external_id)
    }
}

impl Default for Song {
    fn default() -> Self {
        Self {
            title: DEFAULT_SONG_TITLE.to_string(),
            artist: DEFAULT_SONG_ARTIST.to_string(),
            external_id: DEFAULT_SONG_EXTERNAL_ID.to_string(),
        }
    }
}

impl std::fmt::Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.title, self.artist)
    }
}
