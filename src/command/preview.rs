use egui::{Color32, Pos2};

use crate::sticker::StickerCommand;
use crate::surface::Surface;
use crate::tools::{Mark, ToolState};

/// What a preview looks like.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewShape {
    /// Marker tip: a disc as wide as the marker's line
    Marker {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    /// The sticker that would be stamped here
    Sticker(StickerCommand),
}

/// A translucent, never-committed hint of what pointer-down would create.
///
/// Kept apart from [`super::DrawCommand`] so it cannot end up in the history, and so the
/// render pipeline can only ever paint it after the committed list.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    shape: PreviewShape,
    alpha: f32,
}

impl Preview {
    pub fn shape(&self) -> &PreviewShape {
        &self.shape
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match &self.shape {
            PreviewShape::Marker {
                center,
                radius,
                color,
            } => {
                surface.save();
                surface.set_global_alpha(self.alpha);
                surface.set_fill_color(*color);
                surface.begin_path();
                surface.arc(*center, *radius);
                surface.fill();
                surface.restore();
            }
            PreviewShape::Sticker(sticker) => sticker.render_with_alpha(surface, self.alpha),
        }
    }
}

/// Builds the preview for the current tool at the pointer position.
#[derive(Debug, Clone, Copy)]
pub struct PreviewGenerator {
    alpha: f32,
}

impl Default for PreviewGenerator {
    fn default() -> Self {
        Self { alpha: 0.5 }
    }
}

impl PreviewGenerator {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Preview at `at`, or `None` while drawing (the live command already shows intent).
    pub fn update(&self, at: Pos2, tools: &ToolState, is_drawing: bool) -> Option<Preview> {
        if is_drawing {
            return None;
        }

        let style = tools.current_style();
        let shape = match style.mark {
            Mark::Marker { thickness } => PreviewShape::Marker {
                center: at,
                radius: thickness / 2.0,
                color: style.color,
            },
            Mark::Sticker { glyph, size } => PreviewShape::Sticker(StickerCommand::new(
                at,
                glyph,
                style.color,
                style.rotation,
                size,
                tools.pivot(),
            )),
        };

        Some(Preview {
            shape,
            alpha: self.alpha,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SketchConfig;
    use crate::surface::{RecordingSurface, SurfaceOp};

    fn tools() -> ToolState {
        ToolState::with_seed(&SketchConfig::default(), 7)
    }

    #[test]
    fn no_preview_while_drawing() {
        let generator = PreviewGenerator::default();
        assert!(generator.update(Pos2::new(1.0, 1.0), &tools(), true).is_none());
    }

    #[test]
    fn marker_preview_is_translucent_circle() {
        let mut tools = tools();
        tools.select_thick();
        let preview = PreviewGenerator::new(0.4)
            .update(Pos2::new(10.0, 20.0), &tools, false)
            .unwrap();
        assert_eq!(
            preview.shape(),
            &PreviewShape::Marker {
                center: Pos2::new(10.0, 20.0),
                radius: 3.0,
                color: tools.current_style().color,
            }
        );

        let mut surface = RecordingSurface::new();
        preview.render(&mut surface);
        let [SurfaceOp::Fill { state, .. }] = surface.ops() else {
            panic!("expected one fill, got {:?}", surface.ops());
        };
        assert_eq!(state.global_alpha, 0.4);
        assert_eq!(surface.state().global_alpha, 1.0);
    }

    #[test]
    fn sticker_preview_uses_sticker_style() {
        let mut tools = tools();
        tools.select_sticker("🌮").unwrap();
        let style = tools.current_style();
        let preview = PreviewGenerator::default()
            .update(Pos2::new(3.0, 4.0), &tools, false)
            .unwrap();
        let PreviewShape::Sticker(sticker) = preview.shape() else {
            panic!("expected sticker preview");
        };
        assert_eq!(sticker.glyph(), "🌮");
        assert_eq!(sticker.anchor(), Pos2::new(3.0, 4.0));
        assert_eq!(sticker.rotation(), style.rotation);

        let mut surface = RecordingSurface::new();
        preview.render(&mut surface);
        let [SurfaceOp::Text { state, .. }] = surface.ops() else {
            panic!("expected one text op");
        };
        assert_eq!(state.global_alpha, 0.5);
    }
}
