use crate::QuizApp;
use crate::ui::helpers::{option_button, star_row};
use crate::ui::layout::{centered_panel, completion_bar, score_bar};
use egui::{Button, Context, Vec2};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let view = match app.quiz_view() {
        Some(v) => v,
        None => return,
    };
    let percentage = app.progress_percentage();
    let progress_label = app.progress_label();
    let fraction = app.completion_fraction();

    centered_panel(ctx, 460.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            let panel_width = ui.available_width().min(520.0);

            completion_bar(ui, panel_width, fraction, view.number_1based, view.total);
            ui.add_space(12.0);

            ui.heading(view.heading());
            ui.label("Entertainment: Board game");
            star_row(ui, view.stars);
            ui.add_space(10.0);

            ui.label(&view.question);
            ui.add_space(10.0);

            // Opciones repartidas en dos columnas
            let btn_w = (panel_width - 8.0) / 2.0;
            let btn_h = 36.0;
            let (izquierda, derecha) = view.columns();
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - panel_width).max(0.0) / 2.0);
                ui.vertical(|ui| {
                    for opt in izquierda {
                        if option_button(ui, &opt.label, btn_w, btn_h, opt.selected, opt.disabled)
                        {
                            app.seleccionar_opcion(&opt.label);
                        }
                        ui.add_space(4.0);
                    }
                });
                ui.vertical(|ui| {
                    for opt in derecha {
                        if option_button(ui, &opt.label, btn_w, btn_h, opt.selected, opt.disabled)
                        {
                            app.seleccionar_opcion(&opt.label);
                        }
                        ui.add_space(4.0);
                    }
                });
            });

            if let Some(feedback) = &view.feedback {
                ui.add_space(6.0);
                ui.label(feedback);
            }

            ui.add_space(10.0);
            let next = ui.add_enabled(
                view.submit_enabled,
                Button::new("Next Question").min_size(Vec2::new(btn_w, 44.0)),
            );
            if next.clicked() {
                app.avanzar_pregunta();
            }

            ui.add_space(16.0);
            score_bar(ui, panel_width, percentage, &progress_label);

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
