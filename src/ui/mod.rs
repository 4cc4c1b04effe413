mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // BOTÓN SUPERIOR DE REINICIAR (solo con partida en marcha)
        if self.has_questions() && !self.session.show_result {
            top_panel(self, ctx);
        }

        // Panel inferior: tema y diagnóstico del banco
        bottom_panel(self, ctx);

        // Dispatch por estado a las vistas
        if !self.has_questions() {
            views::empty::ui_empty(self, ctx);
        } else if self.session.show_result {
            views::result::ui_result(self, ctx);
        } else {
            views::quiz::ui_quiz(self, ctx);
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }
}
