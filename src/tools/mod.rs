//! Tool selection and the per-activation style that the next mark inherits.

use std::fmt;

use egui::{Color32, Pos2};

use crate::command::DrawCommand;
use crate::config::{RotationPivot, SketchConfig};
use crate::error::ToolError;
use crate::sticker::StickerCommand;
use crate::stroke::StrokeCommand;

mod palette;
mod style;

pub use palette::StickerPalette;
pub use style::{StyleSampler, ToolStyle, hsl_to_color32};

/// The active tool. Exactly one is selected at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolSelection {
    Thin,
    Thick,
    Sticker(String),
}

impl fmt::Display for ToolSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thin => write!(f, "thin marker"),
            Self::Thick => write!(f, "thick marker"),
            Self::Sticker(glyph) => write!(f, "sticker {glyph}"),
        }
    }
}

/// What the next mark is made of.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Marker { thickness: f32 },
    Sticker { glyph: String, size: f32 },
}

/// Everything the next command inherits from the tool state.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentStyle {
    pub color: Color32,
    pub rotation: f32,
    pub mark: Mark,
}

/// Active tool plus its ephemeral style.
///
/// Every selection, including re-selecting the current tool, draws a fresh style.
#[derive(Debug, Clone)]
pub struct ToolState {
    selection: ToolSelection,
    style: ToolStyle,
    sampler: StyleSampler,
    thin_width: f32,
    thick_width: f32,
    sticker_size: f32,
    pivot: RotationPivot,
}

impl ToolState {
    /// Tool state sampling styles from OS entropy. Starts with the thin marker.
    pub fn new(config: &SketchConfig) -> Self {
        let sampler = StyleSampler::from_os_rng(
            config.saturation,
            config.lightness,
            config.max_rotation(),
        );
        Self::with_sampler(config, sampler)
    }

    /// Tool state with reproducible sampling
    pub fn with_seed(config: &SketchConfig, seed: u64) -> Self {
        let sampler =
            StyleSampler::seeded(seed, config.saturation, config.lightness, config.max_rotation());
        Self::with_sampler(config, sampler)
    }

    pub fn with_sampler(config: &SketchConfig, mut sampler: StyleSampler) -> Self {
        let style = sampler.sample();
        Self {
            selection: ToolSelection::Thin,
            style,
            sampler,
            thin_width: config.thin_width,
            thick_width: config.thick_width,
            sticker_size: config.sticker_size,
            pivot: config.rotation_pivot,
        }
    }

    pub fn select_thin(&mut self) {
        self.activate(ToolSelection::Thin);
    }

    pub fn select_thick(&mut self) {
        self.activate(ToolSelection::Thick);
    }

    /// Select a sticker tool. Blank glyphs are rejected and leave the state untouched.
    pub fn select_sticker(&mut self, glyph: &str) -> Result<(), ToolError> {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return Err(ToolError::EmptyGlyph);
        }
        self.activate(ToolSelection::Sticker(glyph.to_owned()));
        Ok(())
    }

    fn activate(&mut self, selection: ToolSelection) {
        self.style = self.sampler.sample();
        log::debug!(
            "selected {selection} with color {:?}, rotation {:.3}",
            self.style.color,
            self.style.rotation
        );
        self.selection = selection;
    }

    pub fn selection(&self) -> &ToolSelection {
        &self.selection
    }

    pub fn style(&self) -> ToolStyle {
        self.style
    }

    pub fn pivot(&self) -> RotationPivot {
        self.pivot
    }

    pub fn current_style(&self) -> CurrentStyle {
        let mark = match &self.selection {
            ToolSelection::Thin => Mark::Marker {
                thickness: self.thin_width,
            },
            ToolSelection::Thick => Mark::Marker {
                thickness: self.thick_width,
            },
            ToolSelection::Sticker(glyph) => Mark::Sticker {
                glyph: glyph.clone(),
                size: self.sticker_size,
            },
        };
        CurrentStyle {
            color: self.style.color,
            rotation: self.style.rotation,
            mark,
        }
    }

    /// Create the command pointer-down at `at` starts with the current tool and style.
    pub fn begin_command(&self, at: Pos2) -> DrawCommand {
        let style = self.current_style();
        match style.mark {
            Mark::Marker { thickness } => StrokeCommand::new(
                at,
                style.color,
                thickness,
                style.rotation,
                self.pivot,
            )
            .into(),
            Mark::Sticker { glyph, size } => StickerCommand::new(
                at,
                glyph,
                style.color,
                style.rotation,
                size,
                self.pivot,
            )
            .into(),
        }
    }
}
