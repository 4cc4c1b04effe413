// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

/// Botón de opción: la marcada se pinta en negro, las demás quedan
/// bloqueadas tras la selección. Devuelve true si se ha pulsado.
pub fn option_button(
    ui: &mut Ui,
    label: &str,
    width: f32,
    height: f32,
    selected: bool,
    disabled: bool,
) -> bool {
    let button = if selected {
        Button::new(RichText::new(label).color(Color32::WHITE)).fill(Color32::BLACK)
    } else {
        Button::new(label)
    };
    ui.add_enabled(!disabled, button.min_size(Vec2::new(width, height)))
        .clicked()
}

/// Fila de estrellas de dificultad, sobre un máximo de tres
pub fn star_row(ui: &mut Ui, filled: usize) {
    ui.horizontal(|ui| {
        for i in 0..3 {
            let star = if i < filled { "★" } else { "☆" };
            ui.label(RichText::new(star).size(16.0));
        }
    });
}
