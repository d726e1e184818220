use egui::{Color32, Pos2};

use crate::config::RotationPivot;
use crate::surface::Surface;

/// A freehand marker line.
///
/// Points are appended while the pointer is held down; once the pointer is released nothing
/// extends the stroke again.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCommand {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
    rotation: f32,
    pivot: RotationPivot,
}

impl StrokeCommand {
    /// Start a stroke at `start`
    pub fn new(
        start: Pos2,
        color: Color32,
        thickness: f32,
        rotation: f32,
        pivot: RotationPivot,
    ) -> Self {
        Self {
            points: vec![start],
            color,
            thickness,
            rotation,
            pivot,
        }
    }

    /// Build a stroke from an existing point list
    pub fn from_points(
        points: Vec<Pos2>,
        color: Color32,
        thickness: f32,
        rotation: f32,
        pivot: RotationPivot,
    ) -> Self {
        Self {
            points,
            color,
            thickness,
            rotation,
            pivot,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// The point the rotation is applied around
    pub fn pivot_point(&self) -> Pos2 {
        match self.pivot {
            RotationPivot::Origin => Pos2::ZERO,
            RotationPivot::Anchor => self.points.first().copied().unwrap_or(Pos2::ZERO),
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        // A click without a drag leaves no mark
        if self.points.len() < 2 {
            return;
        }

        let pivot = self.pivot_point();
        surface.save();
        surface.set_global_alpha(1.0);
        surface.translate(pivot.x, pivot.y);
        surface.rotate(self.rotation);
        surface.translate(-pivot.x, -pivot.y);
        surface.set_stroke_color(self.color);
        surface.set_line_width(self.thickness);

        surface.begin_path();
        surface.move_to(self.points[0]);
        for point in &self.points[1..] {
            surface.line_to(*point);
        }
        surface.stroke();
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SubPath, SurfaceOp};

    fn stroke(points: &[(f32, f32)]) -> StrokeCommand {
        StrokeCommand::from_points(
            points.iter().map(|&(x, y)| Pos2::new(x, y)).collect(),
            Color32::RED,
            4.0,
            0.0,
            RotationPivot::Anchor,
        )
    }

    #[test]
    fn single_point_renders_nothing() {
        let mut surface = RecordingSurface::new();
        stroke(&[(5.0, 5.0)]).render(&mut surface);
        assert!(surface.ops().is_empty());
        assert_eq!(surface.context().depth(), 0);
    }

    #[test]
    fn renders_one_polyline_with_own_style() {
        let mut surface = RecordingSurface::new();
        surface.set_stroke_color(Color32::GREEN);
        surface.set_line_width(20.0);

        stroke(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]).render(&mut surface);

        let [SurfaceOp::Stroke { path, state }] = surface.ops() else {
            panic!("expected a single stroke, got {:?}", surface.ops());
        };
        assert_eq!(path.len(), 1);
        assert!(matches!(&path[0], SubPath::Polyline(points) if points.len() == 3));
        assert_eq!(state.stroke_color, Color32::RED);
        assert_eq!(state.line_width, 4.0);

        // Ambient state is restored afterwards
        assert_eq!(surface.state().stroke_color, Color32::GREEN);
        assert_eq!(surface.state().line_width, 20.0);
        assert_eq!(surface.context().depth(), 0);
    }

    #[test]
    fn render_does_not_touch_the_command() {
        let command = stroke(&[(0.0, 0.0), (10.0, 10.0)]);
        let before = command.clone();
        let mut surface = RecordingSurface::new();
        command.render(&mut surface);
        command.render(&mut surface);
        assert_eq!(command, before);
        assert_eq!(surface.ops()[0], surface.ops()[1]);
    }

    #[test]
    fn pivot_follows_mode() {
        let mut command = StrokeCommand::new(
            Pos2::new(40.0, 50.0),
            Color32::RED,
            2.0,
            0.3,
            RotationPivot::Anchor,
        );
        command.add_point(Pos2::new(60.0, 70.0));
        assert_eq!(command.pivot_point(), Pos2::new(40.0, 50.0));

        let origin = StrokeCommand::new(
            Pos2::new(40.0, 50.0),
            Color32::RED,
            2.0,
            0.3,
            RotationPivot::Origin,
        );
        assert_eq!(origin.pivot_point(), Pos2::ZERO);
    }

    #[test]
    fn anchor_rotation_keeps_first_point_in_place() {
        let mut command = StrokeCommand::new(
            Pos2::new(100.0, 100.0),
            Color32::RED,
            2.0,
            std::f32::consts::FRAC_PI_6,
            RotationPivot::Anchor,
        );
        command.add_point(Pos2::new(120.0, 100.0));

        let mut surface = RecordingSurface::new();
        command.render(&mut surface);
        let SurfaceOp::Stroke { state, .. } = &surface.ops()[0] else {
            panic!("expected a stroke");
        };
        let t = state.transform;
        let x = t.sx * 100.0 + t.kx * 100.0 + t.tx;
        let y = t.ky * 100.0 + t.sy * 100.0 + t.ty;
        assert!((x - 100.0).abs() < 1e-3 && (y - 100.0).abs() < 1e-3);
    }
}
