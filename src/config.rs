use std::{fs, path::Path, path::PathBuf};

use egui::Vec2;
use serde::Deserialize;

use crate::error::ConfigError;

/// Point that committed strokes and stickers rotate around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationPivot {
    /// Rotate around the surface origin (top-left corner).
    Origin,
    /// Rotate a stroke around its first point and a sticker around its anchor.
    #[default]
    Anchor,
}

/// Settings for the sketchpad, loaded from an optional TOML file.
///
/// Every field has a default, so an empty file (or no file at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SketchConfig {
    /// Logical width of the drawing surface
    pub canvas_width: f32,
    /// Logical height of the drawing surface
    pub canvas_height: f32,
    /// Line width of the thin marker
    pub thin_width: f32,
    /// Line width of the thick marker
    pub thick_width: f32,
    /// Font size stickers are stamped at
    pub sticker_size: f32,
    /// HSL saturation of sampled colors, 0..=1
    pub saturation: f32,
    /// HSL lightness of sampled colors, 0..=1
    pub lightness: f32,
    /// Sampled rotations fall in `-max..=max` degrees
    pub max_rotation_degrees: f32,
    /// Opacity of the tool preview
    pub preview_alpha: f32,
    /// Sticker glyphs offered before the user adds their own
    pub stickers: Vec<String>,
    pub rotation_pivot: RotationPivot,
    /// Export resolution relative to the on-screen surface
    pub export_scale: f32,
    /// Where the toolbar's export button writes the PNG
    pub export_file: PathBuf,
    /// Extra font tried first when rasterizing stickers for export
    pub glyph_font: Option<PathBuf>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_width: 256.0,
            canvas_height: 256.0,
            thin_width: 2.0,
            thick_width: 6.0,
            sticker_size: 32.0,
            saturation: 1.0,
            lightness: 0.5,
            max_rotation_degrees: 30.0,
            preview_alpha: 0.5,
            stickers: vec!["🐱".to_owned(), "🌮".to_owned(), "⭐".to_owned()],
            rotation_pivot: RotationPivot::default(),
            export_scale: 4.0,
            export_file: PathBuf::from("sketchpad.png"),
            glyph_font: None,
        }
    }
}

impl SketchConfig {
    pub fn load<A: AsRef<Path>>(path: A) -> Result<Self, ConfigError> {
        Self::load_impl(path.as_ref())
    }

    fn load_impl(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the drawing engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("thin_width", self.thin_width),
            ("thick_width", self.thick_width),
            ("sticker_size", self.sticker_size),
            ("export_scale", self.export_scale),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "`{name}` must be a positive number (found {value})"
                )));
            }
        }

        let unit = [
            ("saturation", self.saturation),
            ("lightness", self.lightness),
            ("preview_alpha", self.preview_alpha),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "`{name}` must be within 0..=1 (found {value})"
                )));
            }
        }

        if !(0.0..=180.0).contains(&self.max_rotation_degrees) {
            return Err(ConfigError::Invalid(format!(
                "`max_rotation_degrees` must be within 0..=180 (found {})",
                self.max_rotation_degrees
            )));
        }

        if let Some(empty) = self.stickers.iter().position(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "sticker #{empty} has an empty glyph"
            )));
        }

        Ok(())
    }

    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_width, self.canvas_height)
    }

    pub fn max_rotation(&self) -> f32 {
        self.max_rotation_degrees.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_example_config() {
        let config = SketchConfig::load("config.example.toml").unwrap();
        assert_eq!(config.rotation_pivot, RotationPivot::Anchor);
        assert!(!config.stickers.is_empty());
    }

    #[test]
    fn empty_file_is_default() {
        let config = SketchConfig::from_toml_str("").unwrap();
        assert_eq!(config, SketchConfig::default());
        assert!((config.max_rotation() - std::f32::consts::FRAC_PI_6).abs() < 1e-6);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = SketchConfig::from_toml_str(
            "thick_width = 10.0\nrotation_pivot = \"origin\"\n",
        )
        .unwrap();
        assert_eq!(config.thick_width, 10.0);
        assert_eq!(config.thin_width, 2.0);
        assert_eq!(config.rotation_pivot, RotationPivot::Origin);
    }

    #[test]
    fn rejects_non_positive_width() {
        let err = SketchConfig::from_toml_str("thin_width = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_out_of_range_lightness() {
        let err = SketchConfig::from_toml_str("lightness = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = SketchConfig::from_toml_str("brush = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_blank_sticker() {
        let err = SketchConfig::from_toml_str("stickers = [\"⭐\", \"  \"]").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
