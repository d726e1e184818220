use egui::Pos2;

use super::{DrawState, SubPath, Surface, SurfaceContext};

/// A painting operation captured by [`RecordingSurface`], with the state it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear,
    Stroke { path: Vec<SubPath>, state: DrawState },
    Fill { path: Vec<SubPath>, state: DrawState },
    Text { text: String, at: Pos2, state: DrawState },
}

/// Surface that paints nothing and logs every operation instead.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    context: SurfaceContext,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Operations since the most recent clear
    pub fn visible_ops(&self) -> &[SurfaceOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, SurfaceOp::Clear))
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }

    pub fn clear_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Clear))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn context(&self) -> &SurfaceContext {
        &self.context
    }

    fn context_mut(&mut self) -> &mut SurfaceContext {
        &mut self.context
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke {
            path: self.context.path.clone(),
            state: self.context.current,
        });
    }

    fn fill(&mut self) {
        self.ops.push(SurfaceOp::Fill {
            path: self.context.path.clone(),
            state: self.context.current,
        });
    }

    fn fill_text(&mut self, text: &str, at: Pos2) {
        self.ops.push(SurfaceOp::Text {
            text: text.to_owned(),
            at,
            state: self.context.current,
        });
    }
}
