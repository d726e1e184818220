use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use super::{SubPath, Surface, SurfaceContext, length_scale, map_point, rotation_of};

/// On-screen surface backed by an egui [`Painter`].
///
/// Surface coordinates are relative to `rect.min`, so commands never see screen positions.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    background: Color32,
    context: SurfaceContext,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, background: Color32) -> Self {
        Self {
            painter,
            rect,
            background,
            context: SurfaceContext::default(),
        }
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        map_point(&self.context.current.transform, point) + self.rect.min.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn context(&self) -> &SurfaceContext {
        &self.context
    }

    fn context_mut(&mut self) -> &mut SurfaceContext {
        &mut self.context
    }

    fn clear(&mut self) {
        // egui starts every frame empty, so clearing just repaints the background
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn stroke(&mut self) {
        let state = self.context.current;
        let stroke = Stroke::new(
            state.line_width * length_scale(&state.transform),
            state.effective_stroke(),
        );

        for sub in &self.context.path {
            match sub {
                SubPath::Polyline(points) if points.len() >= 2 => {
                    let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
                    self.painter.add(Shape::line(screen, stroke));
                }
                SubPath::Polyline(_) => {}
                SubPath::Circle { center, radius } => {
                    self.painter.circle_stroke(
                        self.to_screen(*center),
                        radius * length_scale(&state.transform),
                        stroke,
                    );
                }
            }
        }
    }

    fn fill(&mut self) {
        let state = self.context.current;
        let color = state.effective_fill();

        for sub in &self.context.path {
            match sub {
                SubPath::Polyline(points) if points.len() >= 3 => {
                    let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
                    self.painter
                        .add(Shape::convex_polygon(screen, color, Stroke::NONE));
                }
                SubPath::Polyline(_) => {}
                SubPath::Circle { center, radius } => {
                    self.painter.circle_filled(
                        self.to_screen(*center),
                        radius * length_scale(&state.transform),
                        color,
                    );
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, at: Pos2) {
        let state = self.context.current;
        let color = state.effective_fill();
        let size = state.font_size * length_scale(&state.transform);
        if text.is_empty() || size <= 0.0 {
            return;
        }

        let galley = self
            .painter
            .layout_no_wrap(text.to_owned(), FontId::proportional(size), color);

        // TextShape rotates around its top-left corner; shift it so the galley's
        // center lands on `at`.
        let angle = rotation_of(&state.transform);
        let half = galley.size() / 2.0;
        let (sin, cos) = angle.sin_cos();
        let rotated_half = Vec2::new(half.x * cos - half.y * sin, half.x * sin + half.y * cos);
        let pos = self.to_screen(at) - rotated_half;

        self.painter
            .add(TextShape::new(pos, galley, color).with_angle(angle));
    }
}
