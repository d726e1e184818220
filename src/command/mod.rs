mod history;
mod preview;

use egui::Pos2;

use crate::sticker::StickerCommand;
use crate::stroke::StrokeCommand;
use crate::surface::Surface;

pub use history::History;
pub use preview::{Preview, PreviewGenerator, PreviewShape};

/// One user action on the drawing, able to paint itself.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Stroke(StrokeCommand),
    Sticker(StickerCommand),
}

impl DrawCommand {
    /// Grow the live command: append a point to a stroke, or move a sticker.
    pub fn extend(&mut self, point: Pos2) {
        match self {
            Self::Stroke(stroke) => stroke.add_point(point),
            Self::Sticker(sticker) => sticker.set_anchor(point),
        }
    }

    /// Paint with the command's own stored style. Leaves the surface state as it found it.
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Stroke(stroke) => stroke.render(surface),
            Self::Sticker(sticker) => sticker.render(surface),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stroke(_) => "stroke",
            Self::Sticker(_) => "sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&StrokeCommand> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            Self::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&StickerCommand> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            Self::Stroke(_) => None,
        }
    }
}

impl From<StrokeCommand> for DrawCommand {
    fn from(stroke: StrokeCommand) -> Self {
        Self::Stroke(stroke)
    }
}

impl From<StickerCommand> for DrawCommand {
    fn from(sticker: StickerCommand) -> Self {
        Self::Sticker(sticker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RotationPivot;
    use egui::Color32;

    #[test]
    fn extend_appends_or_repositions() {
        let mut stroke: DrawCommand = StrokeCommand::new(
            Pos2::new(0.0, 0.0),
            Color32::RED,
            2.0,
            0.0,
            RotationPivot::Anchor,
        )
        .into();
        stroke.extend(Pos2::new(1.0, 1.0));
        stroke.extend(Pos2::new(2.0, 2.0));
        assert_eq!(stroke.as_stroke().unwrap().points().len(), 3);

        let mut sticker: DrawCommand = StickerCommand::new(
            Pos2::new(0.0, 0.0),
            "⭐",
            Color32::RED,
            0.0,
            32.0,
            RotationPivot::Anchor,
        )
        .into();
        sticker.extend(Pos2::new(1.0, 1.0));
        sticker.extend(Pos2::new(2.0, 2.0));
        assert_eq!(sticker.as_sticker().unwrap().anchor(), Pos2::new(2.0, 2.0));
        assert_eq!(sticker.name(), "sticker");
    }
}
