use egui::{Color32, Pos2};

use crate::config::RotationPivot;
use crate::surface::Surface;

/// A glyph stamped at an anchor point.
///
/// Dragging replaces the anchor; unlike strokes no trail of positions is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerCommand {
    anchor: Pos2,
    glyph: String,
    color: Color32,
    rotation: f32,
    size: f32,
    pivot: RotationPivot,
}

impl StickerCommand {
    pub fn new(
        anchor: Pos2,
        glyph: impl Into<String>,
        color: Color32,
        rotation: f32,
        size: f32,
        pivot: RotationPivot,
    ) -> Self {
        Self {
            anchor,
            glyph: glyph.into(),
            color,
            rotation,
            size,
            pivot,
        }
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Pos2) {
        self.anchor = anchor;
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        self.render_with_alpha(surface, 1.0);
    }

    /// Paint the sticker at the given opacity; previews use this to appear translucent.
    pub(crate) fn render_with_alpha(&self, surface: &mut dyn Surface, alpha: f32) {
        surface.save();
        surface.set_global_alpha(alpha);
        surface.set_fill_color(self.color);
        surface.set_font_size(self.size);
        match self.pivot {
            RotationPivot::Anchor => {
                surface.translate(self.anchor.x, self.anchor.y);
                surface.rotate(self.rotation);
                surface.fill_text(&self.glyph, Pos2::ZERO);
            }
            RotationPivot::Origin => {
                surface.rotate(self.rotation);
                surface.fill_text(&self.glyph, self.anchor);
            }
        }
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};

    #[test]
    fn renders_glyph_at_anchor() {
        let sticker = StickerCommand::new(
            Pos2::new(5.0, 5.0),
            "★",
            Color32::BLUE,
            0.0,
            32.0,
            RotationPivot::Anchor,
        );
        let mut surface = RecordingSurface::new();
        sticker.render(&mut surface);

        let [SurfaceOp::Text { text, at, state }] = surface.ops() else {
            panic!("expected one text op, got {:?}", surface.ops());
        };
        assert_eq!(text, "★");
        assert_eq!(*at, Pos2::ZERO);
        assert_eq!(state.transform.tx, 5.0);
        assert_eq!(state.transform.ty, 5.0);
        assert_eq!(state.fill_color, Color32::BLUE);
        assert_eq!(state.font_size, 32.0);
        assert_eq!(state.global_alpha, 1.0);
        assert_eq!(surface.context().depth(), 0);
    }

    #[test]
    fn origin_pivot_keeps_anchor_in_text_position() {
        let sticker = StickerCommand::new(
            Pos2::new(7.0, 9.0),
            "🐱",
            Color32::BLUE,
            0.2,
            32.0,
            RotationPivot::Origin,
        );
        let mut surface = RecordingSurface::new();
        sticker.render(&mut surface);
        let SurfaceOp::Text { at, state, .. } = &surface.ops()[0] else {
            panic!("expected text");
        };
        assert_eq!(*at, Pos2::new(7.0, 9.0));
        assert_eq!(state.transform.tx, 0.0);
    }

    #[test]
    fn dragging_replaces_anchor() {
        let mut sticker = StickerCommand::new(
            Pos2::new(1.0, 1.0),
            "⭐",
            Color32::BLUE,
            0.0,
            32.0,
            RotationPivot::Anchor,
        );
        sticker.set_anchor(Pos2::new(3.0, 4.0));
        sticker.set_anchor(Pos2::new(8.0, 9.0));
        assert_eq!(sticker.anchor(), Pos2::new(8.0, 9.0));
    }
}
