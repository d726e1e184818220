use crate::SketchApp;
use crate::tools::ToolSelection;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Markers");
            let selection = app.document().selection().clone();
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(selection == ToolSelection::Thin, "Thin")
                    .clicked()
                {
                    app.document_mut().select_thin();
                }
                if ui
                    .selectable_label(selection == ToolSelection::Thick, "Thick")
                    .clicked()
                {
                    app.document_mut().select_thick();
                }
            });

            ui.separator();
            ui.heading("Stickers");

            // Collect glyphs first to avoid borrowing issues
            let glyphs: Vec<String> = app.document().palette().glyphs().to_vec();
            ui.horizontal_wrapped(|ui| {
                for glyph in &glyphs {
                    let selected = matches!(&selection, ToolSelection::Sticker(g) if g == glyph);
                    let label = egui::RichText::new(glyph.as_str()).size(22.0);
                    if ui.selectable_label(selected, label).clicked() {
                        if let Err(err) = app.document_mut().select_sticker(glyph) {
                            app.set_message(err.to_string());
                        }
                    }
                }
            });
            if ui.button("Add sticker…").clicked() {
                app.open_sticker_prompt();
            }

            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.document().can_undo();
                let can_redo = app.document().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.document_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.document_mut().redo();
                }
                if ui.button("Clear").clicked() {
                    app.document_mut().clear();
                }
            });

            ui.separator();

            let export_label = format!("Export {}×", app.config().export_scale);
            if ui.button(export_label).clicked() {
                app.export();
            }

            ui.separator();
            ui.label(app.document().status_line());
            if let Some(message) = app.message() {
                ui.label(egui::RichText::new(message).italics());
            }
        });
}
