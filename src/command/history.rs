use super::DrawCommand;

/// The display list plus the redo stack.
///
/// Render order is commit order. Undo and redo move only the most recent command between
/// the two stacks; surviving commands are never reordered.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Commands that make up the drawing, earliest first
    committed: Vec<DrawCommand>,
    /// Commands removed by undo, most recently undone last
    redoable: Vec<DrawCommand>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new command. Branching away from undone work discards it.
    pub fn commit(&mut self, command: DrawCommand) {
        log::debug!(
            "commit {} (dropping {} redoable)",
            command.name(),
            self.redoable.len()
        );
        self.committed.push(command);
        self.redoable.clear();
    }

    /// Undo the last committed command. Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(command) => {
                log::debug!("undo {}", command.name());
                self.redoable.push(command);
                true
            }
            None => false,
        }
    }

    /// Redo the last undone command. Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redoable.pop() {
            Some(command) => {
                log::debug!("redo {}", command.name());
                self.committed.push(command);
                true
            }
            None => false,
        }
    }

    /// Drop everything, including redo history. Not undoable.
    pub fn clear(&mut self) {
        log::debug!(
            "clear {} committed, {} redoable",
            self.committed.len(),
            self.redoable.len()
        );
        self.committed.clear();
        self.redoable.clear();
    }

    /// The committed commands in render order
    pub fn snapshot(&self) -> &[DrawCommand] {
        &self.committed
    }

    /// Undone commands, the next one to be redone last
    pub fn redo_stack(&self) -> &[DrawCommand] {
        &self.redoable
    }

    /// Mutable access to a committed command, used to extend the live command
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut DrawCommand> {
        self.committed.get_mut(index)
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redoable.is_empty()
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    pub fn redo_len(&self) -> usize {
        self.redoable.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RotationPivot;
    use crate::stroke::StrokeCommand;
    use egui::{Color32, Pos2};

    fn stroke(x: f32) -> DrawCommand {
        StrokeCommand::from_points(
            vec![Pos2::new(x, 0.0), Pos2::new(x, 10.0)],
            Color32::RED,
            2.0,
            0.0,
            RotationPivot::Anchor,
        )
        .into()
    }

    #[test]
    fn empty_undo_and_redo_are_no_ops() {
        let mut history = History::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.is_empty());
        assert_eq!(history.redo_len(), 0);
    }

    #[test]
    fn undo_moves_last_command_to_redo_stack() {
        let mut history = History::new();
        history.commit(stroke(1.0));
        history.commit(stroke(2.0));

        assert!(history.undo());
        assert_eq!(history.snapshot(), &[stroke(1.0)]);
        assert_eq!(history.redo_stack(), &[stroke(2.0)]);
        assert!(history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn get_mut_reaches_committed_only() {
        let mut history = History::new();
        history.commit(stroke(1.0));
        assert!(history.get_mut(0).is_some());
        history.undo();
        assert!(history.get_mut(0).is_none());
    }
}
