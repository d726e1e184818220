/// Pointer interaction state.
///
/// `Drawing` remembers which committed command the pointer is extending. There is no
/// paused state: leaving the surface ends the drawing just like releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Drawing {
        /// Index of the live command in the committed list
        index: usize,
    },
}

impl PointerState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// Index of the command being drawn, if any
    pub fn live_index(&self) -> Option<usize> {
        match self {
            Self::Drawing { index } => Some(*index),
            Self::Idle => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing { .. } => "Drawing",
        }
    }
}
