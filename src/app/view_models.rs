use super::*;

impl QuizApp {
    /// Proyección de la pregunta en curso para la vista del quiz
    pub fn quiz_view(&self) -> Option<QuizView> {
        let q = self.current_question()?;
        let options = q
            .options
            .iter()
            .map(|o| OptionView {
                label: o.clone(),
                selected: self.is_option_selected(o),
                disabled: self.is_option_disabled(o),
            })
            .collect();

        Some(QuizView {
            number_1based: self.session.current_question + 1,
            total: self.total_questions(),
            question: q.question.clone(),
            options,
            feedback: self.session.answer_feedback.clone(),
            stars: q.difficulty.stars(),
            submit_enabled: !self.is_submit_disabled(),
        })
    }

    pub fn result_view(&self) -> ResultView {
        ResultView {
            score: self.session.score,
            total: self.total_questions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    #[test]
    fn quiz_view_projects_selection_state() {
        let mut app = QuizApp::with_questions(vec![Question {
            question: "Q1".to_string(),
            correct_answer: "A".to_string(),
            options: vec!["B".to_string(), "C".to_string(), "A".to_string()],
            difficulty: Difficulty::Medium,
        }]);

        let view = app.quiz_view().expect("hay pregunta en curso");
        assert_eq!(view.heading(), "Question 1 of 1");
        assert!(!view.submit_enabled);
        assert!(view.options.iter().all(|o| !o.selected && !o.disabled));
        let (left, right) = view.columns();
        assert_eq!(left.len(), 2);
        assert_eq!(right.len(), 1);

        app.seleccionar_opcion("B");
        let view = app.quiz_view().expect("hay pregunta en curso");
        assert!(view.submit_enabled);
        assert_eq!(view.feedback.as_deref(), Some("Sorry!"));
        for o in &view.options {
            assert_eq!(o.selected, o.label == "B");
            assert_eq!(o.disabled, o.label != "B");
        }

        // Al agotar el banco ya no hay proyección de pregunta
        app.avanzar_pregunta();
        assert!(app.quiz_view().is_none());
        assert!(app.result_view().score_label().contains("0 / 1"));
    }
}
