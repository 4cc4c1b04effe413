use super::*;

impl QuizApp {
    // Accesores de solo lectura para la capa de presentación
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }

    /// Pregunta actual, o None al terminar (el índice queda fuera de rango)
    pub fn current_question(&self) -> Option<&Question> {
        if self.session.show_result {
            return None;
        }
        self.questions.get(self.session.current_question)
    }

    pub fn is_option_selected(&self, opcion: &str) -> bool {
        self.session.selected_option.as_deref() == Some(opcion)
    }

    pub fn is_option_disabled(&self, opcion: &str) -> bool {
        self.session.disabled_options.contains(opcion)
    }

    /// El botón de avanzar solo se habilita con una opción marcada
    pub fn is_submit_disabled(&self) -> bool {
        self.session.selected_option.is_none()
    }

    /// Estrellas de dificultad de la pregunta actual
    pub fn star_count(&self) -> usize {
        self.current_question()
            .map(|q| q.difficulty.stars())
            .unwrap_or(0)
    }
}
