//! Raster export of the committed drawing.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use egui::{Color32, Vec2};
use image::codecs::png::PngEncoder;
use image::{ImageEncoder, RgbaImage};

use crate::command::DrawCommand;
use crate::config::SketchConfig;
use crate::error::{ExportError, ExportResult};
use crate::surface::{GlyphFonts, PixmapSurface, Surface};

/// Largest export edge, in pixels
pub const MAX_EXPORT_EDGE: u32 = 16_384;

/// Receives finished exports; the host decides where they go.
pub trait ExportSink {
    fn accept(&mut self, image: &RgbaImage) -> ExportResult<()>;
}

/// Writes exports to a PNG file, replacing any existing file.
#[derive(Debug, Clone)]
pub struct PngFileSink {
    path: PathBuf,
}

impl PngFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExportSink for PngFileSink {
    fn accept(&mut self, image: &RgbaImage) -> ExportResult<()> {
        let bytes = encode_png(image)?;
        std::fs::write(&self.path, bytes)?;
        log::info!(
            "Wrote {}x{} export to {}",
            image.width(),
            image.height(),
            self.path.display()
        );
        Ok(())
    }
}

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> ExportResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    PngEncoder::new(&mut buf)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ColorType::Rgba8.into(),
        )
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Replays commands onto a fresh, scaled, opaque raster.
///
/// Export never samples randomness; identical input gives identical pixels.
#[derive(Debug, Clone)]
pub struct ExportRenderer {
    canvas_size: Vec2,
    background: Color32,
    fonts: GlyphFonts,
}

impl ExportRenderer {
    pub fn new(canvas_size: Vec2, fonts: GlyphFonts) -> Self {
        Self {
            canvas_size,
            background: Color32::WHITE,
            fonts,
        }
    }

    pub fn from_config(config: &SketchConfig) -> Self {
        Self::new(
            config.canvas_size(),
            GlyphFonts::load(config.glyph_font.as_deref()),
        )
    }

    /// Pixel size of an export at `scale`.
    pub fn output_size(&self, scale: f32) -> ExportResult<(u32, u32)> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ExportError::InvalidScale(scale));
        }
        let width = (self.canvas_size.x * scale).ceil();
        let height = (self.canvas_size.y * scale).ceil();
        let max = MAX_EXPORT_EDGE as f32;
        if !(1.0..=max).contains(&width) || !(1.0..=max).contains(&height) {
            return Err(ExportError::Allocation {
                width: width.clamp(0.0, u32::MAX as f32) as u32,
                height: height.clamp(0.0, u32::MAX as f32) as u32,
            });
        }
        Ok((width as u32, height as u32))
    }

    /// Render `commands` at `scale` times the on-screen size.
    pub fn render(&self, commands: &[DrawCommand], scale: f32) -> ExportResult<RgbaImage> {
        let (width, height) = self.output_size(scale)?;
        self.render_sized(commands, scale, width, height)
    }

    /// Render `commands` scaled by `scale` into a `width`x`height` raster.
    pub fn render_sized(
        &self,
        commands: &[DrawCommand],
        scale: f32,
        width: u32,
        height: u32,
    ) -> ExportResult<RgbaImage> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ExportError::InvalidScale(scale));
        }
        let mut surface = PixmapSurface::new(width, height, &self.fonts)?;
        surface.fill_background(self.background);
        surface.scale(scale, scale);
        for command in commands {
            command.render(&mut surface);
        }
        log::info!(
            "Rendered {} commands into {width}x{height} export",
            commands.len()
        );
        surface.into_image()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> ExportRenderer {
        ExportRenderer::new(Vec2::new(256.0, 256.0), GlyphFonts::default())
    }

    #[test]
    fn output_size_scales_canvas() {
        assert_eq!(renderer().output_size(4.0).unwrap(), (1024, 1024));
        assert_eq!(renderer().output_size(1.5).unwrap(), (384, 384));
    }

    #[test]
    fn rejects_bad_scales() {
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                renderer().output_size(scale),
                Err(ExportError::InvalidScale(_))
            ));
        }
        assert!(matches!(
            renderer().output_size(1000.0),
            Err(ExportError::Allocation { .. })
        ));
    }

    #[test]
    fn empty_export_is_opaque_white() {
        let image = renderer().render(&[], 0.25).unwrap();
        assert_eq!(image.dimensions(), (64, 64));
        assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn png_bytes_have_signature() {
        let image = RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 255]));
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
