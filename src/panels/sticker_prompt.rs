use crate::SketchApp;

/// Modal-style window asking for a custom sticker glyph.
pub fn sticker_prompt(app: &mut SketchApp, ctx: &egui::Context) {
    let Some(text) = app.sticker_prompt_mut().as_mut() else {
        return;
    };

    let mut submit = false;
    let mut cancel = false;
    egui::Window::new("Add sticker")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Glyph or emoji:");
            let response = ui.text_edit_singleline(text);
            response.request_focus();
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
            ui.horizontal(|ui| {
                if ui.button("Add").clicked() {
                    submit = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if cancel {
        *app.sticker_prompt_mut() = None;
    } else if submit {
        app.submit_sticker_prompt();
    }
}
