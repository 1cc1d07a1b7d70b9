// Playlister - Library exports for tests and the demo binary

pub mod command;
pub mod config;
pub mod library;
pub mod playlist;

// Re-export commonly used types for convenience
pub use command::{CommandError, CommandResult, CommandStack, SongCommand, UndoableCommand};
pub use config::EditorConfig;
pub use library::{LibraryError, LibraryManager, LibrarySnapshot, PlaylistLibrary};
pub use playlist::{Playlist, PlaylistError, PlaylistId, PlaylistStore, Song};
