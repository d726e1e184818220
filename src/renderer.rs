use crate::command::{DrawCommand, Preview};
use crate::surface::Surface;

/// Repaints a surface from the committed list and the optional preview.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderPipeline;

impl RenderPipeline {
    pub fn new() -> Self {
        Self
    }

    /// Clear `surface`, paint `committed` in order, then the preview on top.
    pub fn redraw(
        &self,
        surface: &mut dyn Surface,
        committed: &[DrawCommand],
        preview: Option<&Preview>,
    ) {
        surface.clear();
        for command in committed {
            command.render(surface);
        }
        if let Some(preview) = preview {
            preview.render(surface);
        }
    }
}

/// Pending-redraw marker.
///
/// Mutations mark it; the frame loop takes it once per frame, so any number of mutations
/// between frames collapse into a single repaint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawFlag {
    pending: bool,
}

impl RedrawFlag {
    pub fn mark(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Returns whether a redraw was pending, and resets the flag.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}
