#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod sticker;
pub mod stroke;
pub mod surface;
pub mod tools;

pub use app::SketchApp;
pub use command::{DrawCommand, History, Preview, PreviewGenerator};
pub use config::{RotationPivot, SketchConfig};
pub use document::Document;
pub use error::{ConfigError, ExportError, ToolError};
pub use export::{ExportRenderer, ExportSink, PngFileSink};
pub use input::{InputEvent, InputHandler, Shortcut};
pub use renderer::{RedrawFlag, RenderPipeline};
pub use state::PointerState;
pub use sticker::StickerCommand;
pub use stroke::StrokeCommand;
pub use surface::{PainterSurface, PixmapSurface, RecordingSurface, Surface};
pub use tools::{ToolSelection, ToolState};
