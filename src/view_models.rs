// src/view_models.rs

/// Una opción de respuesta tal y como la pinta la vista
#[derive(Clone, Debug)]
pub struct OptionView {
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
}

/// Proyección de solo lectura de la pregunta en curso
#[derive(Clone, Debug)]
pub struct QuizView {
    pub number_1based: usize,
    pub total: usize,
    pub question: String,
    pub options: Vec<OptionView>,
    pub feedback: Option<String>,
    pub stars: usize,
    pub submit_enabled: bool,
}

impl QuizView {
    pub fn heading(&self) -> String {
        format!("Question {} of {}", self.number_1based, self.total)
    }

    /// Opciones repartidas en dos columnas: las dos primeras a la izquierda,
    /// el resto a la derecha
    pub fn columns(&self) -> (&[OptionView], &[OptionView]) {
        let split = self.options.len().min(2);
        self.options.split_at(split)
    }
}

/// Proyección de la pantalla final
#[derive(Clone, Copy, Debug)]
pub struct ResultView {
    pub score: usize,
    pub total: usize,
}

impl ResultView {
    pub fn score_label(&self) -> String {
        format!("Your score: {} / {}", self.score, self.total)
    }
}
