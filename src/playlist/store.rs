// Playlist storage - primitive, non-undoable song mutators

use crate::playlist::song::Song;
use serde::{Deserialize, Serialize};

/// Playlist error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaylistError {
    #[error("Index {index} is out of range for a playlist of {len} songs")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid song: {0}")]
    InvalidSong(String),

    #[error("Playlist {0} not found")]
    PlaylistNotFound(PlaylistId),

    #[error("No playlist is currently loaded")]
    NoActivePlaylist,

    #[error("No playlist IDs left to assign")]
    IdsExhausted,
}

/// Identifier of a playlist, unique within a library
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(pub u64);

impl std::fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structural song-list operations used by commands
///
/// Implementations bounds-check every index and leave the list untouched
/// when an index is out of range. None of these operations record history;
/// undo is the job of the commands that call them.
pub trait PlaylistStore {
    /// Number of songs in the list
    fn len(&self) -> usize;

    /// Song at `index`, if any
    fn song_at(&self, index: usize) -> Option<&Song>;

    /// Insert `song` so that it ends up at `index`
    ///
    /// `index == len()` appends.
    fn insert_song_at(&mut self, index: usize, song: Song) -> Result<(), PlaylistError>;

    /// Remove and return the song at `index`
    fn remove_song_at(&mut self, index: usize) -> Result<Song, PlaylistError>;

    /// Take the song at `from` out of the list and re-insert it at `to`
    fn move_song(&mut self, from: usize, to: usize) -> Result<(), PlaylistError>;

    /// Replace the fields of the song at `index`, returning the previous values
    fn update_song_fields_at(&mut self, index: usize, song: Song) -> Result<Song, PlaylistError>;

    /// Check if the list has no songs
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named, ordered list of songs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub songs: Vec<Song>,
}

impl Playlist {
    /// Create a new playlist
    pub fn new(id: PlaylistId, name: impl Into<String>, songs: Vec<Song>) -> Self {
        Self {
            id,
            name: name.into(),
            songs,
        }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    fn check_index(&self, index: usize) -> Result<(), PlaylistError> {
        if index >= self.songs.len() {
            return Err(PlaylistError::IndexOutOfRange {
                index,
                len: self.songs.len(),
            });
        }
        Ok(())
    }
}

impl PlaylistStore for Playlist {
    fn len(&self) -> usize {
        self.songs.len()
    }

    fn song_at(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    fn insert_song_at(&mut self, index: usize, song: Song) -> Result<(), PlaylistError> {
        if index > self.songs.len() {
            return Err(PlaylistError::IndexOutOfRange {
                index,
                len: self.songs.len(),
            });
        }
        self.songs.insert(index, song);
        Ok(())
    }

    fn remove_song_at(&mut self, index: usize) -> Result<Song, PlaylistError> {
        self.check_index(index)?;
        Ok(self.songs.remove(index))
    }

    fn move_song(&mut self, from: usize, to: usize) -> Result<(), PlaylistError> {
        // Both ends are checked up front so a bad `to` never loses the song
        self.check_index(from)?;
        self.check_index(to)?;
        let song = self.songs.remove(from);
        self.songs.insert(to, song);
        Ok(())
    }

    fn update_song_fields_at(&mut self, index: usize, song: Song) -> Result<Song, PlaylistError> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.songs[index], song))
    }
}
