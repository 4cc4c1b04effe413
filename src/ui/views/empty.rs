use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::Context;

/// Pantalla de cortocircuito cuando el banco se queda sin preguntas jugables
pub fn ui_empty(app: &mut QuizApp, ctx: &Context) {
    let dropped = app.dropped_records;
    centered_panel(ctx, 160.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("No questions available");
            ui.add_space(8.0);
            if dropped > 0 {
                ui.label(format!(
                    "{dropped} records failed to decode; check the log for details."
                ));
            }
        });
    });
}
