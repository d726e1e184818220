use crate::SketchApp;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sticker Sketchpad");

        let size = app.document().canvas_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        // Handle input
        let events = app.input_mut().process_input(ctx, &response);
        for event in events {
            app.document_mut().handle_input(event);
        }

        // Render the canvas
        let painter = painter.with_clip_rect(canvas_rect);
        let mut surface =
            PainterSurface::new(&painter, canvas_rect, ui.visuals().extreme_bg_color);
        app.document().render(&mut surface);
    });
}
