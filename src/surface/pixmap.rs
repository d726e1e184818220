use std::path::Path;

use ab_glyph::{Font, FontArc, GlyphId, ScaleFont, point};
use egui::{Color32, Pos2};
use image::RgbaImage;
use tiny_skia::{
    ColorU8, FillRule, FilterQuality, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint,
    Stroke, Transform,
};

use super::{SubPath, Surface, SurfaceContext, length_scale};
use crate::error::{ExportError, ExportResult};

/// Fonts used to rasterize sticker glyphs, tried in order for each character.
#[derive(Clone, Default)]
pub struct GlyphFonts {
    fonts: Vec<FontArc>,
}

impl std::fmt::Debug for GlyphFonts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphFonts")
            .field("fonts", &self.fonts.len())
            .finish()
    }
}

impl GlyphFonts {
    /// The proportional fonts bundled with egui (text plus emoji fallbacks).
    pub fn egui_defaults() -> Self {
        let definitions = egui::FontDefinitions::default();
        let mut fonts = Vec::new();
        let names = definitions
            .families
            .get(&egui::FontFamily::Proportional)
            .cloned()
            .unwrap_or_default();

        for name in names {
            let Some(data) = definitions.font_data.get(&name) else {
                continue;
            };
            match FontArc::try_from_vec(data.font.to_vec()) {
                Ok(font) => fonts.push(font),
                Err(err) => log::warn!("Skipping bundled font {name}: {err}"),
            }
        }

        Self { fonts }
    }

    /// egui's bundled fonts, preceded by `extra` when it can be read.
    pub fn load(extra: Option<&Path>) -> Self {
        let mut glyph_fonts = Self::egui_defaults();
        if let Some(path) = extra {
            match std::fs::read(path).map(FontArc::try_from_vec) {
                Ok(Ok(font)) => {
                    log::info!("Using {} for sticker glyphs", path.display());
                    glyph_fonts.fonts.insert(0, font);
                }
                Ok(Err(err)) => log::warn!("Invalid glyph font {}: {err}", path.display()),
                Err(err) => log::warn!("Cannot read glyph font {}: {err}", path.display()),
            }
        }
        glyph_fonts
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    fn font_for(&self, ch: char) -> Option<&FontArc> {
        self.fonts
            .iter()
            .find(|font| font.glyph_id(ch) != GlyphId(0))
            .or_else(|| self.fonts.first())
    }

    /// Rasterize `text` at `px` pixels into a tightly sized pixmap.
    ///
    /// Returns `None` when nothing would be visible (no fonts, empty text, blank glyphs).
    pub fn rasterize(&self, text: &str, px: f32, color: Color32) -> Option<Pixmap> {
        if px <= 0.0 {
            return None;
        }

        let chars: Vec<(char, &FontArc)> = text
            .chars()
            .filter_map(|ch| self.font_for(ch).map(|font| (ch, font)))
            .collect();
        if chars.is_empty() {
            return None;
        }

        let ascent = chars
            .iter()
            .map(|(_, font)| font.as_scaled(px).ascent())
            .fold(0.0_f32, f32::max);
        let descent = chars
            .iter()
            .map(|(_, font)| font.as_scaled(px).descent())
            .fold(0.0_f32, f32::min);
        let advance: f32 = chars
            .iter()
            .map(|(ch, font)| {
                let scaled = font.as_scaled(px);
                scaled.h_advance(font.glyph_id(*ch))
            })
            .sum();

        let width = advance.ceil().max(1.0) as u32;
        let height = (ascent - descent).ceil().max(1.0) as u32;
        let mut pixmap = Pixmap::new(width, height)?;

        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let mut cursor = 0.0;
        let mut painted = false;
        for (ch, font) in chars {
            let id = font.glyph_id(ch);
            let glyph = id.with_scale_and_position(px, point(cursor, ascent));
            cursor += font.as_scaled(px).h_advance(id);

            let Some(outlined) = font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            let pixels = pixmap.pixels_mut();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
                    return;
                }
                let alpha = (coverage.clamp(0.0, 1.0) * f32::from(a)).round() as u8;
                let idx = y as usize * width as usize + x as usize;
                if alpha > pixels[idx].alpha() {
                    pixels[idx] = ColorU8::from_rgba(r, g, b, alpha).premultiply();
                    painted = true;
                }
            });
        }

        painted.then_some(pixmap)
    }
}

/// Off-screen raster surface used for export.
pub struct PixmapSurface<'f> {
    pixmap: Pixmap,
    fonts: &'f GlyphFonts,
    context: SurfaceContext,
}

impl<'f> PixmapSurface<'f> {
    /// Allocate a transparent `width`x`height` surface.
    pub fn new(width: u32, height: u32, fonts: &'f GlyphFonts) -> ExportResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(ExportError::Allocation { width, height })?;
        Ok(Self {
            pixmap,
            fonts,
            context: SurfaceContext::default(),
        })
    }

    /// Paint the whole surface with an opaque color, ignoring the current transform.
    pub fn fill_background(&mut self, color: Color32) {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Convert to straight-alpha RGBA.
    pub fn into_image(self) -> ExportResult<RgbaImage> {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        RgbaImage::from_raw(width, height, data).ok_or(ExportError::Allocation { width, height })
    }

    fn paint(color: Color32) -> Paint<'static> {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    }

    fn build_path(&self, include_open: bool) -> Option<tiny_skia::Path> {
        let mut builder = PathBuilder::new();
        for sub in &self.context.path {
            match sub {
                SubPath::Polyline(points) if points.len() >= 2 => {
                    if !include_open && points.len() < 3 {
                        continue;
                    }
                    builder.move_to(points[0].x, points[0].y);
                    for p in &points[1..] {
                        builder.line_to(p.x, p.y);
                    }
                    if !include_open {
                        builder.close();
                    }
                }
                SubPath::Polyline(_) => {}
                SubPath::Circle { center, radius } => {
                    builder.push_circle(center.x, center.y, *radius);
                }
            }
        }
        builder.finish()
    }
}

impl Surface for PixmapSurface<'_> {
    fn context(&self) -> &SurfaceContext {
        &self.context
    }

    fn context_mut(&mut self) -> &mut SurfaceContext {
        &mut self.context
    }

    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn stroke(&mut self) {
        let Some(path) = self.build_path(true) else {
            return;
        };
        let state = self.context.current;
        let stroke = Stroke {
            width: state.line_width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        let paint = Self::paint(state.effective_stroke());
        self.pixmap
            .stroke_path(&path, &paint, &stroke, state.transform, None);
    }

    fn fill(&mut self) {
        let Some(path) = self.build_path(false) else {
            return;
        };
        let state = self.context.current;
        let paint = Self::paint(state.effective_fill());
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, state.transform, None);
    }

    fn fill_text(&mut self, text: &str, at: Pos2) {
        let state = self.context.current;
        // Rasterize at device resolution, then map back into surface units.
        let density = length_scale(&state.transform).max(f32::EPSILON);
        let Some(glyphs) = self
            .fonts
            .rasterize(text, state.font_size * density, state.fill_color)
        else {
            if self.fonts.is_empty() {
                log::warn!("No glyph fonts available, skipping {text:?}");
            }
            return;
        };

        let (w, h) = (glyphs.width() as f32, glyphs.height() as f32);
        let transform: Transform = state
            .transform
            .pre_translate(at.x, at.y)
            .pre_scale(1.0 / density, 1.0 / density)
            .pre_translate(-w / 2.0, -h / 2.0);
        let paint = PixmapPaint {
            opacity: state.global_alpha,
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, glyphs.as_ref(), &paint, transform, None);
    }
}
