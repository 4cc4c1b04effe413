use super::*;

impl QuizApp {
    /// Ventana de confirmación antes de tirar la partida en curso
    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Restart quiz")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Start over? Your current score will be lost.");
                ui.horizontal(|ui| {
                    if ui.button("Yes, restart").clicked() {
                        self.reiniciar_quiz();
                        self.confirm_reset = false;
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}
