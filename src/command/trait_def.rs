// UndoableCommand trait definition

use crate::playlist::PlaylistError;

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur while applying or reverting a command
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The target store rejected the mutation
    #[error("Playlist error: {0}")]
    Playlist(#[from] PlaylistError),

    /// Reverting a recorded command failed
    #[error("Undo failed: {0}")]
    UndoFailed(String),

    /// Re-applying a recorded command failed
    #[error("Redo failed: {0}")]
    RedoFailed(String),
}

/// Trait for commands that support undo/redo
///
/// A command captures, at construction time, everything `revert()` needs.
/// By the time undo runs the forward mutation has already happened, so a
/// command must never look up prior state in its target.
///
/// # Example
/// ```
/// use playlister::command::trait_def::{CommandResult, UndoableCommand};
///
/// struct Increment(i32);
///
/// impl UndoableCommand for Increment {
///     type Target = i32;
///
///     fn apply(&self, target: &mut i32) -> CommandResult<()> {
///         *target += self.0;
///         Ok(())
///     }
///
///     fn revert(&self, target: &mut i32) -> CommandResult<()> {
///         *target -= self.0;
///         Ok(())
///     }
///
///     fn description(&self) -> String {
///         format!("Increment by {}", self.0)
///     }
/// }
///
/// let mut value = 1;
/// let cmd = Increment(2);
/// cmd.apply(&mut value).unwrap();
/// assert_eq!(value, 3);
/// cmd.revert(&mut value).unwrap();
/// assert_eq!(value, 1);
/// ```
pub trait UndoableCommand {
    /// What the command mutates
    type Target: ?Sized;

    /// Perform the forward mutation
    ///
    /// Called once when the command is executed and once per redo.
    fn apply(&self, target: &mut Self::Target) -> CommandResult<()>;

    /// Perform the exact inverse of `apply()`
    ///
    /// Restores the fields this command touched to what they were
    /// immediately before `apply()` ran.
    fn revert(&self, target: &mut Self::Target) -> CommandResult<()>;

    /// Get a human-readable description of the command
    ///
    /// Used for UI display (e.g., "Undo: Move Song 1 to 3")
    fn description(&self) -> String;
}

impl<C: UndoableCommand + ?Sized> UndoableCommand for Box<C> {
    type Target = C::Target;

    fn apply(&self, target: &mut Self::Target) -> CommandResult<()> {
        (**self).apply(target)
    }

    fn revert(&self, target: &mut Self::Target) -> CommandResult<()> {
        (**self).revert(target)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}
