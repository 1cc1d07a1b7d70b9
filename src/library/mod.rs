// Playlist library: editing session and persistence
//
// The library owns every playlist, the active one and its undo history.
// Snapshots of the playlists are saved as a single JSON file.

pub mod manager;
pub mod serialization;
pub mod session;
pub mod types;

pub use manager::{LibraryError, LibraryManager};
pub use session::PlaylistLibrary;
pub use types::{LibrarySnapshot, SNAPSHOT_VERSION};

/// Helper function to validate a snapshot before it is used
pub fn validate_snapshot(snapshot: &LibrarySnapshot) -> Result<(), LibraryError> {
    if snapshot.version == 0 || snapshot.version > SNAPSHOT_VERSION {
        return Err(LibraryError::UnsupportedVersion(snapshot.version));
    }

    // Check for duplicate playlist IDs
    let mut ids = std::collections::HashSet::new();
    for playlist in &snapshot.playlists {
        // The id after the highest one must stay representable
        if playlist.id.0 == u64::MAX {
            return Err(LibraryError::InvalidSnapshot(format!(
                "Playlist ID {} is out of range",
                playlist.id
            )));
        }

        if !ids.insert(playlist.id) {
            return Err(LibraryError::InvalidSnapshot(format!(
                "Duplicate playlist ID: {}",
                playlist.id
            )));
        }

        if playlist.name.trim().is_empty() {
            return Err(LibraryError::InvalidSnapshot(format!(
                "Playlist {} name cannot be empty",
                playlist.id
            )));
        }

        for (index, song) in playlist.songs.iter().enumerate() {
            song.validate().map_err(|e| {
                LibraryError::InvalidSnapshot(format!(
                    "Song {} of playlist {}: {}",
                    index, playlist.id, e
                ))
            })?;
        }
    }

    Ok(())
}
