// Quick demonstration of the playlist editor core
// Run with: cargo run --bin demo_playlist_editor [config.ron]

use playlister::{EditorConfig, LibraryManager, PlaylistLibrary, Song};

fn print_list(library: &PlaylistLibrary) {
    if let Some(playlist) = library.current_list() {
        for (index, song) in playlist.songs.iter().enumerate() {
            println!("   {}. {}", index + 1, song);
        }
    }
    println!(
        "   [undo: {:?}] [redo: {:?}]",
        library.undo_description(),
        library.redo_description()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🎵 Playlister - Undo/Redo Demo");
    println!("==============================");

    let mut config = match std::env::args().nth(1) {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };
    if config.storage_path.is_none() {
        config.storage_path = Some(std::env::temp_dir().join("playlister_demo.json"));
    }

    let mut library = PlaylistLibrary::new(config.clone());
    let id = library.add_new_list(
        "Demo Playlist",
        vec![
            Song::new("Heroes", "David Bowie", "lXgkuM2NhYI")?,
            Song::new("Blue Monday", "New Order", "FYH8DsU2WCk")?,
            Song::new("Enjoy the Silence", "Depeche Mode", "aGSKrC7dGcY")?,
        ],
    )?;
    library.load_list(id)?;

    println!("\n✅ Created playlist:");
    print_list(&library);

    library.move_song(0, 2)?;
    library.edit_song(1, Song::new("Enjoy the Silence (Live)", "Depeche Mode", "aGSKrC7dGcY")?)?;
    library.add_song()?;
    library.remove_song(0)?;

    println!("\n✏️  After move, edit, add and remove:");
    print_list(&library);

    while let Some(description) = library.undo()? {
        println!("   ↩️  Undo: {}", description);
    }
    println!("\n⏪ After undoing everything:");
    print_list(&library);

    while let Some(description) = library.redo()? {
        println!("   ↪️  Redo: {}", description);
    }
    println!("\n⏩ After redoing everything:");
    print_list(&library);

    let manager = LibraryManager::from_config(&config);
    manager.save_library(&library.snapshot())?;
    println!("\n💾 Saved library to: {}", manager.path().display());

    if let Some(snapshot) = manager.load_library()? {
        let restored = PlaylistLibrary::from_snapshot(snapshot, config)?;
        println!(
            "📂 Restored {} playlist(s), identical: {}",
            restored.playlists().len(),
            restored.playlists() == library.playlists()
        );
    }

    std::fs::remove_file(manager.path())?;
    println!("\n🎉 Demo completed successfully!");

    Ok(())
}
