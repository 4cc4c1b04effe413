use crate::QuizApp;
use crate::ui::layout::{centered_panel, score_bar};
use egui::{Button, Context};

pub fn ui_result(app: &mut QuizApp, ctx: &Context) {
    let view = app.result_view();
    let percentage = app.progress_percentage();
    let progress_label = app.progress_label();

    centered_panel(ctx, 260.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            let panel_width = ui.available_width().min(440.0);

            ui.heading("Result");
            ui.add_space(10.0);
            ui.label(view.score_label());
            ui.add_space(16.0);

            if ui
                .add_sized([200.0, 40.0], Button::new("Restart Quiz"))
                .clicked()
            {
                app.reiniciar_quiz();
            }

            ui.add_space(16.0);
            score_bar(ui, panel_width, percentage, &progress_label);
        });
    });
}
