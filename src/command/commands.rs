// Concrete playlist edit commands

use crate::command::trait_def::{CommandResult, UndoableCommand};
use crate::playlist::{PlaylistError, PlaylistStore, Song};

/// A reversible edit of a playlist's song list
///
/// Each variant stores the data its inverse needs, so reverting never
/// reads the store for values that the forward mutation destroyed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongCommand {
    /// Insert `song` at `index`; reverted by removing at `index`
    AddSong { index: usize, song: Song },

    /// Remove the song at `index`; `song` is the removed record
    RemoveSong { index: usize, song: Song },

    /// Move the song at `from` so that it ends up at `to`
    MoveSong { from: usize, to: usize },

    /// Replace the fields of the song at `index`
    EditSong { index: usize, old: Song, new: Song },
}

impl SongCommand {
    /// Command inserting `song` at `index`
    pub fn add_song(index: usize, song: Song) -> Self {
        Self::AddSong { index, song }
    }

    /// Command removing the song at `index`
    ///
    /// Snapshots the record currently stored at `index`.
    ///
    /// # Errors
    /// Returns `PlaylistError::IndexOutOfRange` if there is no song at `index`.
    pub fn remove_song<S: PlaylistStore + ?Sized>(
        store: &S,
        index: usize,
    ) -> Result<Self, PlaylistError> {
        let song = store
            .song_at(index)
            .cloned()
            .ok_or(PlaylistError::IndexOutOfRange {
                index,
                len: store.len(),
            })?;
        Ok(Self::RemoveSong { index, song })
    }

    /// Command moving the song at `from` to `to`
    pub fn move_song(from: usize, to: usize) -> Self {
        Self::MoveSong { from, to }
    }

    /// Command replacing the song at `index` with `new`
    ///
    /// Snapshots the current field values as the values to restore on undo.
    ///
    /// # Errors
    /// Returns `PlaylistError::IndexOutOfRange` if there is no song at `index`.
    pub fn edit_song<S: PlaylistStore + ?Sized>(
        store: &S,
        index: usize,
        new: Song,
    ) -> Result<Self, PlaylistError> {
        let old = store
            .song_at(index)
            .cloned()
            .ok_or(PlaylistError::IndexOutOfRange {
                index,
                len: store.len(),
            })?;
        Ok(Self::EditSong { index, old, new })
    }

    /// The command that undoes this one
    pub fn inverse(&self) -> Self {
        match self {
            Self::AddSong { index, song } => Self::RemoveSong {
                index: *index,
                song: song.clone(),
            },
            Self::RemoveSong { index, song } => Self::AddSong {
                index: *index,
                song: song.clone(),
            },
            Self::MoveSong { from, to } => Self::MoveSong {
                from: *to,
                to: *from,
            },
            Self::EditSong { index, old, new } => Self::EditSong {
                index: *index,
                old: new.clone(),
                new: old.clone(),
            },
        }
    }
}

impl UndoableCommand for SongCommand {
    type Target = dyn PlaylistStore;

    fn apply(&self, store: &mut Self::Target) -> CommandResult<()> {
        match self {
            Self::AddSong { index, song } => store.insert_song_at(*index, song.clone())?,
            Self::RemoveSong { index, .. } => {
                store.remove_song_at(*index)?;
            }
            Self::MoveSong { from, to } => store.move_song(*from, *to)?,
            Self::EditSong { index, new, .. } => {
                store.update_song_fields_at(*index, new.clone())?;
            }
        }
        Ok(())
    }

    fn revert(&self, store: &mut Self::Target) -> CommandResult<()> {
        self.inverse().apply(store)
    }

    fn description(&self) -> String {
        match self {
            Self::AddSong { index, song } => {
                format!("Add Song \"{}\" at {}", song.title, index + 1)
            }
            Self::RemoveSong { index, song } => {
                format!("Remove Song \"{}\" from {}", song.title, index + 1)
            }
            Self::MoveSong { from, to } => format!("Move Song {} to {}", from + 1, to + 1),
            Self::EditSong { old, .. } => format!("Edit Song \"{}\"", old.title),
        }
    }
}
