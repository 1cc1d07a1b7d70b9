// CommandStack - linear undo/redo history

use crate::command::trait_def::{CommandError, CommandResult, UndoableCommand};
use log::debug;

/// Manages command execution and undo/redo functionality
///
/// The stack keeps every recorded command in execution order plus a cursor:
/// - Commands before the cursor are applied and can be undone
/// - Commands from the cursor on have been undone and can be redone
///
/// When a new command is executed:
/// 1. Apply the command (nothing is recorded if this fails)
/// 2. Drop everything from the cursor on (the redo branch)
/// 3. Push the command and advance the cursor
/// 4. Trim history if a limit is set
///
/// Undo at the bottom and redo at the top are no-ops, not errors. Callers
/// are expected to check `can_undo()` / `can_redo()` to drive their UI.
///
/// `clear()` is a hard reset: it forgets history without reverting anything.
pub struct CommandStack<C> {
    /// Recorded commands, oldest first
    history: Vec<C>,

    /// Number of currently applied commands
    cursor: usize,

    /// Maximum number of commands to keep in history (unbounded if None)
    max_history: Option<usize>,
}

impl<C: UndoableCommand> CommandStack<C> {
    /// Create a new CommandStack with unbounded history
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            cursor: 0,
            max_history: None,
        }
    }

    /// Create a new CommandStack keeping at most `max_history` commands
    ///
    /// A limit of zero is raised to one.
    pub fn with_limit(max_history: usize) -> Self {
        Self {
            history: Vec::with_capacity(max_history),
            cursor: 0,
            max_history: Some(max_history.max(1)),
        }
    }

    /// Apply a command and record it
    ///
    /// # Errors
    /// Returns the error raised by `apply()`. The command is then discarded
    /// and the history is left exactly as it was.
    pub fn execute(&mut self, command: C, target: &mut C::Target) -> CommandResult<()> {
        command.apply(target)?;
        debug!("Executed: {}", command.description());

        // New timeline: the undone commands can no longer be redone
        self.history.truncate(self.cursor);
        self.history.push(command);
        self.cursor += 1;

        if let Some(max_history) = self.max_history
            && self.history.len() > max_history
        {
            let excess = self.history.len() - max_history;
            self.history.drain(..excess);
            self.cursor -= excess;
        }

        Ok(())
    }

    /// Undo the most recently applied command
    ///
    /// Returns the description of the undone command, or `None` if there
    /// was nothing to undo.
    ///
    /// # Errors
    /// Returns `CommandError::UndoFailed` if `revert()` fails. The cursor
    /// does not move in that case.
    pub fn undo(&mut self, target: &mut C::Target) -> CommandResult<Option<String>> {
        if !self.can_undo() {
            debug!("Nothing to undo");
            return Ok(None);
        }

        let command = &self.history[self.cursor - 1];
        let description = command.description();
        command
            .revert(target)
            .map_err(|e| CommandError::UndoFailed(format!("{}: {}", description, e)))?;

        self.cursor -= 1;
        debug!("Undone: {}", description);

        Ok(Some(description))
    }

    /// Redo the most recently undone command
    ///
    /// Returns the description of the redone command, or `None` if there
    /// was nothing to redo.
    ///
    /// # Errors
    /// Returns `CommandError::RedoFailed` if `apply()` fails. The cursor
    /// does not move in that case.
    pub fn redo(&mut self, target: &mut C::Target) -> CommandResult<Option<String>> {
        if !self.can_redo() {
            debug!("Nothing to redo");
            return Ok(None);
        }

        let command = &self.history[self.cursor];
        let description = command.description();
        command
            .apply(target)
            .map_err(|e| CommandError::RedoFailed(format!("{}: {}", description, e)))?;

        self.cursor += 1;
        debug!("Redone: {}", description);

        Ok(Some(description))
    }

    /// Check if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Check if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        self.cursor < self.history.len()
    }

    /// Get a description of the command that would be undone
    pub fn undo_description(&self) -> Option<String> {
        self.cursor
            .checked_sub(1)
            .map(|index| self.history[index].description())
    }

    /// Get a description of the command that would be redone
    pub fn redo_description(&self) -> Option<String> {
        self.history.get(self.cursor).map(|cmd| cmd.description())
    }

    /// Forget all history without reverting anything
    pub fn clear(&mut self) {
        self.history.clear();
        self.cursor = 0;
    }

    /// Position of the boundary between applied and undone commands
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of recorded commands
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Get the number of commands that can be undone
    pub fn undo_count(&self) -> usize {
        self.cursor
    }

    /// Get the number of commands that can be redone
    pub fn redo_count(&self) -> usize {
        self.history.len() - self.cursor
    }
}

impl<C: UndoableCommand> Default for CommandStack<C> {
    fn default() -> Self {
        Self::new()
    }
}
