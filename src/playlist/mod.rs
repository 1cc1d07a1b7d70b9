// Playlist data model
//
// Songs and the playlists that hold them. Playlists expose primitive,
// bounds-checked mutators through the PlaylistStore trait; those mutators
// know nothing about undo. Reversible edits go through command::SongCommand.

pub mod song;
pub mod store;

pub use song::Song;
pub use store::{Playlist, PlaylistError, PlaylistId, PlaylistStore};
