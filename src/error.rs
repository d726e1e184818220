use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while changing the active tool or the sticker palette
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// A sticker tool needs a glyph to stamp
    #[error("sticker glyph must not be empty")]
    EmptyGlyph,
}

/// Errors that can occur while exporting the drawing to a raster image
#[derive(Debug, Error)]
pub enum ExportError {
    /// Scale factor was zero, negative, or not finite
    #[error("invalid export scale {0}")]
    InvalidScale(f32),

    /// The output surface could not be allocated
    #[error("cannot allocate a {width}x{height} export surface")]
    Allocation { width: u32, height: u32 },

    /// Encoding the finished raster failed
    #[error("image encoding failed: {0}")]
    Encode(String),

    /// Writing the encoded image failed
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure reported by an export sink
    #[error("export sink rejected the image: {0}")]
    Sink(String),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Errors raised while loading or validating the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
