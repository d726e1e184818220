use egui::{Color32, Pos2};
use sticker_sketchpad::surface::{DrawState, SurfaceOp};
use sticker_sketchpad::{
    Document, DrawCommand, RecordingSurface, RenderPipeline, RotationPivot, SketchConfig,
    StickerCommand, StrokeCommand, Surface,
};

fn stroke(color: Color32, width: f32) -> DrawCommand {
    StrokeCommand::from_points(
        vec![Pos2::new(0.0, 0.0), Pos2::new(50.0, 50.0)],
        color,
        width,
        0.4,
        RotationPivot::Origin,
    )
    .into()
}

fn sticker(color: Color32) -> DrawCommand {
    StickerCommand::new(
        Pos2::new(20.0, 20.0),
        "🐱",
        color,
        -0.4,
        24.0,
        RotationPivot::Anchor,
    )
    .into()
}

fn painted_colors(ops: &[SurfaceOp]) -> Vec<Color32> {
    ops.iter()
        .filter_map(|op| match op {
            SurfaceOp::Stroke { state, .. } => Some(state.stroke_color),
            SurfaceOp::Text { state, .. } | SurfaceOp::Fill { state, .. } => {
                Some(state.fill_color)
            }
            SurfaceOp::Clear => None,
        })
        .collect()
}

#[test]
fn test_z_order_is_stable_across_redraws() {
    let commands = [
        stroke(Color32::RED, 2.0),
        stroke(Color32::GREEN, 6.0),
        sticker(Color32::BLUE),
    ];
    let pipeline = RenderPipeline::new();
    let mut surface = RecordingSurface::new();

    for _ in 0..3 {
        pipeline.redraw(&mut surface, &commands, None);
        assert_eq!(
            painted_colors(surface.visible_ops()),
            vec![Color32::RED, Color32::GREEN, Color32::BLUE]
        );
    }
    assert_eq!(surface.clear_count(), 3);
}

#[test]
fn test_styles_do_not_leak_between_commands() {
    let commands = [stroke(Color32::RED, 12.0), sticker(Color32::BLUE)];
    let mut surface = RecordingSurface::new();
    RenderPipeline::new().redraw(&mut surface, &commands, None);

    // The surface ends where it started
    assert_eq!(*surface.state(), DrawState::default());
    assert_eq!(surface.context().depth(), 0);

    // Rendering the sticker alone gives the same op as after the stroke
    let mut alone = RecordingSurface::new();
    commands[1].render(&mut alone);
    assert_eq!(surface.visible_ops()[1], alone.ops()[0]);
}

#[test]
fn test_render_is_idempotent() {
    let command = stroke(Color32::RED, 2.0);
    let mut first = RecordingSurface::new();
    let mut second = RecordingSurface::new();
    command.render(&mut first);
    command.render(&mut second);
    command.render(&mut second);
    assert_eq!(first.ops()[0], second.ops()[0]);
    assert_eq!(second.ops()[0], second.ops()[1]);
}

#[test]
fn test_single_click_stroke_paints_nothing() {
    let mut doc = Document::with_seed(&SketchConfig::default(), 2);
    doc.pointer_down(Pos2::new(40.0, 40.0));
    doc.pointer_up();
    assert_eq!(doc.commands().len(), 1);

    let mut surface = RecordingSurface::new();
    doc.render(&mut surface);
    assert!(surface.visible_ops().is_empty());
}

#[test]
fn test_document_preview_painted_on_top() {
    let mut doc = Document::with_seed(&SketchConfig::default(), 2);
    doc.pointer_down(Pos2::new(0.0, 0.0));
    doc.pointer_move(Pos2::new(30.0, 30.0));
    doc.pointer_up();
    doc.pointer_move(Pos2::new(60.0, 60.0));

    let mut surface = RecordingSurface::new();
    doc.render(&mut surface);
    let ops = surface.visible_ops();
    assert_eq!(ops.len(), 2);
    assert!(matches!(ops[0], SurfaceOp::Stroke { .. }));
    assert!(matches!(&ops[1], SurfaceOp::Fill { state, .. } if state.global_alpha < 1.0));
}
