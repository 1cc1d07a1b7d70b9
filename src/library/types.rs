// Types for library persistence

use crate::playlist::Playlist;
use serde::{Deserialize, Serialize};

/// Current version of the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Flat snapshot of every playlist in a library
///
/// Undo history is never part of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    /// Version of the snapshot format
    pub version: u32,
    /// When the snapshot was taken (RFC 3339)
    pub saved_at: String,
    /// Playlists with their songs, in display order
    pub playlists: Vec<Playlist>,
}

impl LibrarySnapshot {
    /// Snapshot of `playlists` taken now
    pub fn new(playlists: Vec<Playlist>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: chrono::Utc::now().to_rfc3339(),
            playlists,
        }
    }

    /// Total number of songs across all playlists
    pub fn song_count(&self) -> usize {
        self.playlists.iter().map(|p| p.songs.len()).sum()
    }
}

impl Default for LibrarySnapshot {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
