//! Render sinks that drawing commands paint onto.
//!
//! A [`Surface`] mirrors the immediate-mode 2D canvas model: a current drawing state
//! (transform, global alpha, colors, line width, font size) that can be saved and restored,
//! a path under construction, and the operations that consume it. Commands never rely on
//! state left behind by a previous command; each one sets what it needs inside a
//! `save`/`restore` pair.

use egui::{Color32, Pos2};
use tiny_skia::Transform;

mod painter;
mod pixmap;
mod recording;

pub use painter::PainterSurface;
pub use pixmap::{GlyphFonts, PixmapSurface};
pub use recording::{RecordingSurface, SurfaceOp};

/// The style and transform state of a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    pub transform: Transform,
    pub global_alpha: f32,
    pub stroke_color: Color32,
    pub fill_color: Color32,
    pub line_width: f32,
    pub font_size: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            global_alpha: 1.0,
            stroke_color: Color32::BLACK,
            fill_color: Color32::BLACK,
            line_width: 1.0,
            font_size: 16.0,
        }
    }
}

impl DrawState {
    /// Stroke color with the global alpha applied
    pub fn effective_stroke(&self) -> Color32 {
        self.stroke_color.gamma_multiply(self.global_alpha)
    }

    /// Fill color with the global alpha applied
    pub fn effective_fill(&self) -> Color32 {
        self.fill_color.gamma_multiply(self.global_alpha)
    }
}

/// One piece of the current path, in pre-transform coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum SubPath {
    Polyline(Vec<Pos2>),
    Circle { center: Pos2, radius: f32 },
}

/// State shared by every surface implementation: the current draw state, the save stack
/// and the path being built.
#[derive(Debug, Clone, Default)]
pub struct SurfaceContext {
    current: DrawState,
    saved: Vec<DrawState>,
    path: Vec<SubPath>,
}

impl SurfaceContext {
    pub fn state(&self) -> &DrawState {
        &self.current
    }

    /// Number of `save` calls not yet matched by `restore`
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn path(&self) -> &[SubPath] {
        &self.path
    }
}

/// A drawing surface capability.
///
/// Implementors provide access to their [`SurfaceContext`] and the four painting
/// operations; state handling and path building come for free. Path coordinates are
/// interpreted under the transform current at the time of `stroke`, `fill` or `fill_text`.
pub trait Surface {
    fn context(&self) -> &SurfaceContext;

    fn context_mut(&mut self) -> &mut SurfaceContext;

    /// Erase everything painted so far.
    fn clear(&mut self);

    /// Outline the current path with the stroke color and line width.
    fn stroke(&mut self);

    /// Fill the closed shapes of the current path with the fill color.
    fn fill(&mut self);

    /// Paint `text` with the fill color and font size, centered on `at`.
    fn fill_text(&mut self, text: &str, at: Pos2);

    fn state(&self) -> &DrawState {
        self.context().state()
    }

    fn save(&mut self) {
        let ctx = self.context_mut();
        ctx.saved.push(ctx.current);
    }

    /// Pop the most recently saved state. Unbalanced calls are ignored.
    fn restore(&mut self) {
        let ctx = self.context_mut();
        if let Some(state) = ctx.saved.pop() {
            ctx.current = state;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        let state = &mut self.context_mut().current;
        state.transform = state.transform.pre_translate(dx, dy);
    }

    fn rotate(&mut self, radians: f32) {
        let state = &mut self.context_mut().current;
        state.transform = state.transform.pre_rotate(radians.to_degrees());
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        let state = &mut self.context_mut().current;
        state.transform = state.transform.pre_scale(sx, sy);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.context_mut().current.global_alpha = alpha.clamp(0.0, 1.0);
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.context_mut().current.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.context_mut().current.fill_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.context_mut().current.line_width = width;
    }

    fn set_font_size(&mut self, size: f32) {
        self.context_mut().current.font_size = size;
    }

    fn begin_path(&mut self) {
        self.context_mut().path.clear();
    }

    fn move_to(&mut self, point: Pos2) {
        self.context_mut().path.push(SubPath::Polyline(vec![point]));
    }

    fn line_to(&mut self, point: Pos2) {
        let path = &mut self.context_mut().path;
        match path.last_mut() {
            Some(SubPath::Polyline(points)) => points.push(point),
            _ => path.push(SubPath::Polyline(vec![point])),
        }
    }

    /// Add a full circle to the current path.
    fn arc(&mut self, center: Pos2, radius: f32) {
        self.context_mut()
            .path
            .push(SubPath::Circle { center, radius });
    }
}

/// Apply `transform` to a point.
pub(crate) fn map_point(transform: &Transform, point: Pos2) -> Pos2 {
    Pos2::new(
        transform.sx * point.x + transform.kx * point.y + transform.tx,
        transform.ky * point.x + transform.sy * point.y + transform.ty,
    )
}

/// Uniform scale a transform applies to lengths (line widths, radii, font sizes).
pub(crate) fn length_scale(transform: &Transform) -> f32 {
    (transform.sx * transform.sy - transform.kx * transform.ky)
        .abs()
        .sqrt()
}

/// Rotation angle of a transform, in radians.
pub(crate) fn rotation_of(transform: &Transform) -> f32 {
    transform.ky.atan2(transform.sx)
}
