use crate::QuizApp;
use crate::app::progress::score_bar_color;
use egui::{CentralPanel, Context, Frame, ProgressBar, RichText, Ui, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🔄 Restart quiz").clicked() {
                app.confirm_reset = true;
            }
        });
    });
}

pub fn bottom_panel(app: &QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if app.dropped_records > 0 {
                ui.label(format!(
                    "⚠ {} questions dropped from the bank",
                    app.dropped_records
                ));
            }
            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(
                egui::Layout::right_to_left(egui::Align::Center),
                |ui| {
                    if ui.button("🌙 Dark mode").clicked() {
                        ctx.set_visuals(Visuals::dark());
                    }
                    if ui.button("☀ Light mode").clicked() {
                        ctx.set_visuals(Visuals::light());
                    }
                },
            );
        });
    });
}

/// Panel centrado vertical y horizontalmente, con ancho máximo de contenido
/// y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Barra superior de avance: pregunta actual sobre el total
pub fn completion_bar(ui: &mut Ui, width: f32, fraction: f32, numero: usize, total: usize) {
    ui.add(
        ProgressBar::new(fraction)
            .desired_width(width)
            .text(format!("Question {numero} of {total}")),
    );
}

/// Barra decorativa de puntuación: porcentaje mezclado con dos decimales
pub fn score_bar(ui: &mut Ui, width: f32, percentage: f64, label: &str) {
    let fraction = (percentage / 100.0).clamp(0.0, 1.0) as f32;
    ui.add(
        ProgressBar::new(fraction)
            .desired_width(width)
            .fill(score_bar_color(percentage))
            .text(RichText::new(label).strong()),
    );
}
