// PlaylistLibrary - the editing session over all playlists

use crate::command::{CommandResult, CommandStack, SongCommand};
use crate::config::EditorConfig;
use crate::library::LibraryError;
use crate::library::types::LibrarySnapshot;
use crate::playlist::{Playlist, PlaylistError, PlaylistId, PlaylistStore, Song};
use log::{info, warn};

/// All playlists of a user plus the one currently being edited
///
/// Song edits on the active playlist are recorded as SongCommands so they
/// can be undone. List-level operations (create, rename, delete) are not
/// undoable. History belongs to the active playlist: loading another list,
/// closing the active one or deleting it clears the history.
pub struct PlaylistLibrary {
    /// Playlists sorted by case-insensitive name
    playlists: Vec<Playlist>,

    /// Playlist being edited
    current: Option<PlaylistId>,

    /// Id given to the next created playlist
    next_list_id: u64,

    /// Undo/redo history of the active playlist
    history: CommandStack<SongCommand>,

    config: EditorConfig,
}

impl PlaylistLibrary {
    /// Create an empty library
    pub fn new(config: EditorConfig) -> Self {
        let history = config
            .max_history
            .map(CommandStack::with_limit)
            .unwrap_or_default();

        Self {
            playlists: Vec::new(),
            current: None,
            next_list_id: 0,
            history,
            config,
        }
    }

    /// Rebuild a library from a saved snapshot
    ///
    /// No playlist is active afterwards and history is empty.
    pub fn from_snapshot(
        snapshot: LibrarySnapshot,
        config: EditorConfig,
    ) -> Result<Self, LibraryError> {
        crate::library::validate_snapshot(&snapshot)?;

        let mut next_list_id = 0;
        for playlist in &snapshot.playlists {
            let following = playlist.id.0.checked_add(1).ok_or_else(|| {
                LibraryError::InvalidSnapshot(format!(
                    "Playlist ID {} leaves no room for new playlists",
                    playlist.id
                ))
            })?;
            next_list_id = next_list_id.max(following);
        }

        let mut library = Self::new(config);
        library.next_list_id = next_list_id;
        library.playlists = snapshot.playlists;
        library.sort_lists();

        info!("Restored library with {} playlists", library.playlists.len());
        Ok(library)
    }

    /// Snapshot of every playlist for persistence
    pub fn snapshot(&self) -> LibrarySnapshot {
        LibrarySnapshot::new(self.playlists.clone())
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// All playlists, sorted by name
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn playlist(&self, id: PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    /// Playlist being edited
    pub fn current_list(&self) -> Option<&Playlist> {
        self.current.and_then(|id| self.playlist(id))
    }

    pub fn current_id(&self) -> Option<PlaylistId> {
        self.current
    }

    pub fn has_current_list(&self) -> bool {
        self.current.is_some()
    }

    // List management

    /// Create a playlist and return its id
    ///
    /// A blank name is replaced by the configured default name.
    ///
    /// # Errors
    /// Returns `PlaylistError::IdsExhausted` once every id has been handed out.
    pub fn add_new_list(
        &mut self,
        name: impl Into<String>,
        songs: Vec<Song>,
    ) -> Result<PlaylistId, PlaylistError> {
        let id = PlaylistId(self.next_list_id);
        self.next_list_id = self
            .next_list_id
            .checked_add(1)
            .ok_or(PlaylistError::IdsExhausted)?;

        let name = self.normalize_name(name.into());
        info!("Created playlist {} \"{}\"", id, name);
        self.playlists.push(Playlist::new(id, name, songs));
        self.sort_lists();
        Ok(id)
    }

    /// Make `id` the active playlist
    ///
    /// Loading the playlist that is already active keeps its history.
    pub fn load_list(&mut self, id: PlaylistId) -> Result<(), PlaylistError> {
        if self.current == Some(id) {
            return Ok(());
        }
        if self.playlist(id).is_none() {
            warn!("Cannot load unknown playlist {}", id);
            return Err(PlaylistError::PlaylistNotFound(id));
        }

        self.current = Some(id);
        self.history.clear();
        info!("Loaded playlist {}", id);
        Ok(())
    }

    /// Close the active playlist
    pub fn unselect_current_list(&mut self) {
        if let Some(id) = self.current.take() {
            self.history.clear();
            info!("Closed playlist {}", id);
        }
    }

    /// Rename a playlist
    ///
    /// A blank name is replaced by the configured default name.
    pub fn rename_list(&mut self, id: PlaylistId, name: impl Into<String>) -> Result<(), PlaylistError> {
        let name = self.normalize_name(name.into());
        let playlist = find_list_mut(&mut self.playlists, id)?;
        info!("Renamed playlist {} to \"{}\"", id, name);
        playlist.name = name;
        self.sort_lists();
        Ok(())
    }

    /// Delete a playlist and return it
    pub fn delete_list(&mut self, id: PlaylistId) -> Result<Playlist, PlaylistError> {
        let position = self
            .playlists
            .iter()
            .position(|p| p.id == id)
            .ok_or(PlaylistError::PlaylistNotFound(id))?;
        let removed = self.playlists.remove(position);

        if self.current == Some(id) {
            self.current = None;
            self.history.clear();
        }

        info!("Deleted playlist {} \"{}\"", id, removed.name);
        Ok(removed)
    }

    // Song edits on the active playlist, all undoable

    /// Append the configured new-song template to the active playlist
    pub fn add_song(&mut self) -> CommandResult<()> {
        let song = self.config.new_song.clone();
        self.execute(|playlist| Ok(SongCommand::add_song(playlist.len(), song)))
    }

    /// Insert `song` at `index` in the active playlist
    pub fn add_song_at(&mut self, index: usize, song: Song) -> CommandResult<()> {
        song.validate()?;
        self.execute(|_| Ok(SongCommand::add_song(index, song)))
    }

    /// Remove the song at `index` from the active playlist
    pub fn remove_song(&mut self, index: usize) -> CommandResult<()> {
        self.execute(|playlist| SongCommand::remove_song(playlist, index))
    }

    /// Move the song at `from` to `to` in the active playlist
    ///
    /// Dropping a song onto its own position records nothing.
    pub fn move_song(&mut self, from: usize, to: usize) -> CommandResult<()> {
        self.execute(|playlist| {
            if from >= playlist.len() {
                return Err(PlaylistError::IndexOutOfRange {
                    index: from,
                    len: playlist.len(),
                });
            }
            Ok(SongCommand::move_song(from, to))
        })
    }

    /// Replace the song at `index` in the active playlist
    ///
    /// An edit that changes nothing records nothing.
    pub fn edit_song(&mut self, index: usize, song: Song) -> CommandResult<()> {
        song.validate()?;
        self.execute(|playlist| SongCommand::edit_song(playlist, index, song))
    }

    // Undo/redo

    /// Undo the last edit of the active playlist
    ///
    /// Returns the description of the undone edit, `None` if there was none.
    pub fn undo(&mut self) -> CommandResult<Option<String>> {
        let Some(id) = self.current else {
            return Ok(None);
        };
        let playlist = find_list_mut(&mut self.playlists, id)?;
        self.history.undo(playlist)
    }

    /// Redo the last undone edit of the active playlist
    ///
    /// Returns the description of the redone edit, `None` if there was none.
    pub fn redo(&mut self) -> CommandResult<Option<String>> {
        let Some(id) = self.current else {
            return Ok(None);
        };
        let playlist = find_list_mut(&mut self.playlists, id)?;
        self.history.redo(playlist)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<String> {
        self.history.redo_description()
    }

    /// Undo/redo history of the active playlist
    pub fn history(&self) -> &CommandStack<SongCommand> {
        &self.history
    }

    /// Build a command against the active playlist and record it
    ///
    /// A command that would not change the playlist is dropped silently.
    fn execute<F>(&mut self, build: F) -> CommandResult<()>
    where
        F: FnOnce(&Playlist) -> Result<SongCommand, PlaylistError>,
    {
        let id = self.current.ok_or(PlaylistError::NoActivePlaylist)?;
        let playlist = find_list_mut(&mut self.playlists, id)?;
        let command = build(playlist).inspect_err(|e| warn!("Rejected edit: {}", e))?;

        let unchanged = match &command {
            SongCommand::MoveSong { from, to } => from == to,
            SongCommand::EditSong { old, new, .. } => old == new,
            _ => false,
        };
        if unchanged {
            return Ok(());
        }

        self.history
            .execute(command, playlist)
            .inspect_err(|e| warn!("Rejected edit: {}", e))
    }

    fn normalize_name(&self, name: String) -> String {
        if name.trim().is_empty() {
            self.config.default_list_name.clone()
        } else {
            name
        }
    }

    fn sort_lists(&mut self) {
        self.playlists.sort_by_key(|p| p.name.to_uppercase());
    }
}

impl Default for PlaylistLibrary {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

fn find_list_mut(playlists: &mut [Playlist], id: PlaylistId) -> Result<&mut Playlist, PlaylistError> {
    playlists
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(PlaylistError::PlaylistNotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandError;

    fn song(title: &str) -> Song {
        Song::new(title, "Artist", title.to_lowercase()).unwrap()
    }

    fn titles(library: &PlaylistLibrary) -> Vec<String> {
        library
            .current_list()
            .map(|p| p.songs.iter().map(|s| s.title.clone()).collect())
            .unwrap_or_default()
    }

    fn create_test_library() -> (PlaylistLibrary, PlaylistId) {
        let mut library = PlaylistLibrary::default();
        let id = library.add_new_list("Test", vec![song("S1"), song("S2"), song("S3")]).unwrap();
        library.load_list(id).unwrap();
        (library, id)
    }

    #[test]
    fn test_lists_sorted_case_insensitively() {
        let mut library = PlaylistLibrary::default();
        library.add_new_list("beta", Vec::new()).unwrap();
        library.add_new_list("Alpha", Vec::new()).unwrap();
        library.add_new_list("gamma", Vec::new()).unwrap();

        let names: Vec<_> = library.playlists().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut library = PlaylistLibrary::default();
        assert_eq!(library.add_new_list("A", Vec::new()).unwrap(), PlaylistId(0));
        assert_eq!(library.add_new_list("B", Vec::new()).unwrap(), PlaylistId(1));
    }

    #[test]
    fn test_blank_name_uses_default() {
        let mut library = PlaylistLibrary::default();
        let id = library.add_new_list("", Vec::new()).unwrap();
        assert_eq!(library.playlist(id).unwrap().name, "Untitled");

        library.rename_list(id, "Road Trip").unwrap();
        assert_eq!(library.playlist(id).unwrap().name, "Road Trip");

        library.rename_list(id, "   ").unwrap();
        assert_eq!(library.playlist(id).unwrap().name, "Untitled");
    }

    #[test]
    fn test_load_unknown_list() {
        let mut library = PlaylistLibrary::default();
        assert_eq!(
            library.load_list(PlaylistId(42)),
            Err(PlaylistError::PlaylistNotFound(PlaylistId(42)))
        );
        assert!(!library.has_current_list());
    }

    #[test]
    fn test_edit_without_active_list() {
        let mut library = PlaylistLibrary::default();
        library.add_new_list("Idle", Vec::new()).unwrap();

        let result = library.add_song();
        assert_eq!(
            result,
            Err(CommandError::Playlist(PlaylistError::NoActivePlaylist))
        );
        assert_eq!(library.undo().unwrap(), None);
    }

    #[test]
    fn test_add_song_appends_template() {
        let (mut library, _) = create_test_library();
        library.add_song().unwrap();

        assert_eq!(titles(&library), vec!["S1", "S2", "S3", "Untitled"]);
        assert_eq!(library.current_list().unwrap().songs[3], Song::default());

        library.undo().unwrap();
        assert_eq!(titles(&library), vec!["S1", "S2", "S3"]);
    }

    #[test]
    fn test_add_song_at_rejects_blank_title() {
        let (mut library, _) = create_test_library();
        let blank = Song {
            title: String::new(),
            artist: "A".to_string(),
            external_id: "1".to_string(),
        };

        let result = library.add_song_at(0, blank);
        assert!(matches!(
            result,
            Err(CommandError::Playlist(PlaylistError::InvalidSong(_)))
        ));
        assert!(!library.can_undo());
    }

    #[test]
    fn test_remove_song_and_undo() {
        let (mut library, _) = create_test_library();
        library.remove_song(1).unwrap();
        assert_eq!(titles(&library), vec!["S1", "S3"]);

        library.undo().unwrap();
        assert_eq!(titles(&library), vec!["S1", "S2", "S3"]);
        assert_eq!(library.current_list().unwrap().songs[1], song("S2"));
    }

    #[test]
    fn test_invalid_index_not_recorded() {
        let (mut library, _) = create_test_library();

        assert!(library.remove_song(3).is_err());
        assert!(library.move_song(5, 0).is_err());
        assert!(library.move_song(0, 5).is_err());
        assert!(library.edit_song(9, song("X")).is_err());

        assert!(!library.can_undo());
        assert_eq!(titles(&library), vec!["S1", "S2", "S3"]);
    }

    #[test]
    fn test_move_onto_itself_records_nothing() {
        let (mut library, _) = create_test_library();
        library.move_song(1, 1).unwrap();
        assert!(!library.can_undo());
    }

    #[test]
    fn test_move_onto_itself_out_of_range() {
        let (mut library, _) = create_test_library();
        let result = library.move_song(7, 7);
        assert_eq!(
            result,
            Err(CommandError::Playlist(PlaylistError::IndexOutOfRange {
                index: 7,
                len: 3,
            }))
        );
        assert!(!library.can_undo());
        assert_eq!(titles(&library), vec!["S1", "S2", "S3"]);
    }

    #[test]
    fn test_unchanged_edit_records_nothing() {
        let (mut library, _) = create_test_library();
        library.edit_song(0, song("S1")).unwrap();
        assert!(!library.can_undo());
    }

    #[test]
    fn test_switching_lists_clears_history() {
        let (mut library, first) = create_test_library();
        let second = library.add_new_list("Other", Vec::new()).unwrap();

        library.add_song().unwrap();
        assert!(library.can_undo());

        // Reloading the active list keeps history
        library.load_list(first).unwrap();
        assert!(library.can_undo());

        library.load_list(second).unwrap();
        assert!(!library.can_undo());
        assert!(!library.can_redo());

        // The edit on the first list stays applied
        assert_eq!(library.playlist(first).unwrap().songs.len(), 4);
    }

    #[test]
    fn test_unselect_clears_history() {
        let (mut library, _) = create_test_library();
        library.add_song().unwrap();
        library.unselect_current_list();

        assert!(!library.has_current_list());
        assert!(!library.can_undo());
    }

    #[test]
    fn test_delete_current_list() {
        let (mut library, id) = create_test_library();
        library.add_song().unwrap();

        let removed = library.delete_list(id).unwrap();
        assert_eq!(removed.name, "Test");
        assert!(library.current_list().is_none());
        assert!(!library.can_undo());
        assert!(library.delete_list(id).is_err());
    }

    #[test]
    fn test_delete_other_list_keeps_history() {
        let (mut library, id) = create_test_library();
        let other = library.add_new_list("Other", Vec::new()).unwrap();
        library.add_song().unwrap();

        library.delete_list(other).unwrap();
        assert_eq!(library.current_id(), Some(id));
        assert!(library.can_undo());
    }

    #[test]
    fn test_history_limit_from_config() {
        let config = EditorConfig {
            max_history: Some(2),
            ..Default::default()
        };
        let mut library = PlaylistLibrary::new(config);
        let id = library.add_new_list("Limited", Vec::new()).unwrap();
        library.load_list(id).unwrap();

        for _ in 0..4 {
            library.add_song().unwrap();
        }
        assert_eq!(library.history().len(), 2);

        while library.can_undo() {
            library.undo().unwrap();
        }
        assert_eq!(library.current_list().unwrap().songs.len(), 2);
    }

    #[test]
    fn test_undo_redo_descriptions() {
        let (mut library, _) = create_test_library();
        library.move_song(0, 2).unwrap();

        assert_eq!(library.undo_description().as_deref(), Some("Move Song 1 to 3"));
        assert_eq!(library.redo_description(), None);

        let undone = library.undo().unwrap();
        assert_eq!(undone.as_deref(), Some("Move Song 1 to 3"));
        assert_eq!(library.redo_description().as_deref(), Some("Move Song 1 to 3"));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let (mut library, id) = create_test_library();
        library.add_new_list("Empty", Vec::new()).unwrap();
        library.remove_song(0).unwrap();

        let snapshot = library.snapshot();
        let restored = PlaylistLibrary::from_snapshot(snapshot, EditorConfig::default()).unwrap();

        assert_eq!(restored.playlists(), library.playlists());
        assert!(!restored.has_current_list());
        assert!(!restored.can_undo());
        assert_eq!(restored.playlist(id).unwrap().songs.len(), 2);
    }

    #[test]
    fn test_restored_library_continues_ids() {
        let snapshot = LibrarySnapshot::new(vec![
            Playlist::new(PlaylistId(4), "Four", Vec::new()),
            Playlist::new(PlaylistId(9), "Nine", Vec::new()),
        ]);
        let mut library = PlaylistLibrary::from_snapshot(snapshot, EditorConfig::default()).unwrap();
        assert_eq!(library.add_new_list("Next", Vec::new()).unwrap(), PlaylistId(10));
    }

    #[test]
    fn test_restore_rejects_last_possible_id() {
        let snapshot =
            LibrarySnapshot::new(vec![Playlist::new(PlaylistId(u64::MAX), "Max", Vec::new())]);
        let result = PlaylistLibrary::from_snapshot(snapshot, EditorConfig::default());
        assert!(matches!(result, Err(LibraryError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_ids_exhausted() {
        let snapshot = LibrarySnapshot::new(vec![Playlist::new(
            PlaylistId(u64::MAX - 1),
            "Almost Max",
            Vec::new(),
        )]);
        let mut library =
            PlaylistLibrary::from_snapshot(snapshot, EditorConfig::default()).unwrap();

        let result = library.add_new_list("Overflow", Vec::new());
        assert_eq!(result, Err(PlaylistError::IdsExhausted));
        assert_eq!(library.playlists().len(), 1);
    }
}
