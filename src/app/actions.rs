use super::*;

impl QuizApp {
    /// Marca una opción de la pregunta actual: bloquea el resto y deja el
    /// feedback según coincida o no con la respuesta correcta. No avanza;
    /// volver a marcar otra opción sobrescribe la anterior.
    pub fn seleccionar_opcion(&mut self, opcion: &str) {
        let q = match self.questions.get(self.session.current_question) {
            Some(q) => q,
            None => return,
        };
        // La opción tiene que pertenecer a la pregunta actual
        if !q.options.iter().any(|o| o == opcion) {
            return;
        }

        self.session.selected_option = Some(opcion.to_string());
        self.session.disabled_options = q
            .options
            .iter()
            .filter(|o| o.as_str() != opcion)
            .cloned()
            .collect();
        self.session.answer_feedback = Some(feedback_for(opcion == q.correct_answer));
        self.message.clear();
    }

    /// Puntúa la selección vigente y pasa a la siguiente pregunta; al agotar
    /// el banco activa la pantalla de resultado. Sin selección no toca nada.
    pub fn avanzar_pregunta(&mut self) {
        let seleccion = match self.session.selected_option.clone() {
            Some(s) => s,
            None => {
                self.message = "⚠ Selecciona una opción antes de continuar.".into();
                return;
            }
        };
        let q = match self.questions.get(self.session.current_question) {
            Some(q) => q,
            None => return,
        };

        // 1) Reevaluar el feedback con la selección vigente y puntuar
        let correcta = seleccion == q.correct_answer;
        self.session.answer_feedback = Some(feedback_for(correcta));
        if correcta {
            self.session.score += 1;
        }

        // 2) Avanzar el índice: dentro del banco se limpia la selección;
        //    al agotarlo el índice queda fuera de rango y se muestra resultado
        let siguiente = self.session.current_question + 1;
        self.session.current_question = siguiente;
        if siguiente < self.questions.len() {
            self.session.selected_option = None;
            self.session.disabled_options.clear();
        } else {
            self.session.show_result = true;
        }
        self.message.clear();
    }

    /// Vuelve al estado inicial de partida
    pub fn reiniciar_quiz(&mut self) {
        self.session = SessionState::default();
        self.message.clear();
    }
}

fn feedback_for(correcta: bool) -> String {
    if correcta { "Correct!" } else { "Sorry!" }.to_string()
}
