// Command Pattern for Undo/Redo functionality
//
// Every reversible playlist edit goes through a SongCommand recorded on a
// CommandStack. Store mutators in crate::playlist stay undo-unaware.
//
// Architecture:
// - UndoableCommand trait: Defines apply(), revert(), description()
// - SongCommand: closed set of playlist edits (add, remove, move, edit)
// - CommandStack: linear history with a cursor between applied and undone commands

pub mod commands;
pub mod stack;
pub mod trait_def;

pub use commands::SongCommand;
pub use stack::CommandStack;
pub use trait_def::{CommandError, CommandResult, UndoableCommand};
