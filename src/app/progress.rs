use super::*;
use egui::Color32;

/// Porcentaje mezclado de progreso: pondera las preguntas restantes por la
/// puntuación acumulada, así que no es un simple ratio de completadas.
/// Con banco vacío devuelve 0.
pub fn blended_progress(current_question: usize, score: usize, total_questions: usize) -> f64 {
    if total_questions == 0 {
        return 0.0;
    }
    let total = total_questions as f64;
    let remaining = total - current_question as f64;
    let remaining_weight = (remaining / total) * 100.0;
    let correct_weight = (score as f64 / total) * 100.0;
    correct_weight + (remaining_weight / total) * (total - score as f64)
}

/// Banda de color de la barra de puntuación. Las bandas resuelven todas al
/// mismo gris de momento; la partición queda para colorear por tramos.
pub fn score_bar_color(progress: f64) -> Color32 {
    match progress {
        p if p > 66.66 && p <= 100.0 => Color32::from_rgb(0xd3, 0xd3, 0xd3),
        _ => Color32::from_rgb(0xd3, 0xd3, 0xd3),
    }
}

impl QuizApp {
    pub fn progress_percentage(&self) -> f64 {
        blended_progress(
            self.session.current_question,
            self.session.score,
            self.questions.len(),
        )
    }

    /// Etiqueta de la barra de puntuación, con dos decimales
    pub fn progress_label(&self) -> String {
        format!("{:.2}%", self.progress_percentage())
    }

    /// Fracción 0..1 de la barra superior de avance (pregunta actual / total)
    pub fn completion_fraction(&self) -> f32 {
        if self.questions.is_empty() {
            return 0.0;
        }
        if self.session.show_result {
            return 1.0;
        }
        (self.session.current_question + 1) as f32 / self.questions.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, Question};

    fn bank(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                question: format!("Q{i}"),
                correct_answer: "A".to_string(),
                options: vec!["B".to_string(), "A".to_string()],
                difficulty: Difficulty::Easy,
            })
            .collect()
    }

    #[test]
    fn worked_example_matches_the_formula() {
        // remaining=2, remaining_weight=50, correct_weight=25
        // 25 + (50/4) * (4-1) = 62.5
        assert_eq!(blended_progress(2, 1, 4), 62.5);
    }

    #[test]
    fn label_renders_two_decimals() {
        let mut app = QuizApp::with_questions(bank(4));
        app.session.current_question = 2;
        app.session.score = 1;
        assert_eq!(app.progress_label(), "62.50%");
    }

    #[test]
    fn empty_bank_is_zero_percent() {
        assert_eq!(blended_progress(0, 0, 0), 0.0);
        let app = QuizApp::with_questions(Vec::new());
        assert_eq!(app.progress_percentage(), 0.0);
        assert_eq!(app.completion_fraction(), 0.0);
    }

    #[test]
    fn fresh_session_starts_at_one_hundred() {
        assert_eq!(blended_progress(0, 0, 4), 100.0);
    }

    #[test]
    fn finished_runs_hit_the_extremes() {
        // Todo acertado
        assert_eq!(blended_progress(4, 4, 4), 100.0);
        // Todo fallado
        assert_eq!(blended_progress(4, 0, 4), 0.0);
    }

    #[test]
    fn score_bar_color_is_flat_across_bands() {
        assert_eq!(score_bar_color(10.0), score_bar_color(80.0));
        assert_eq!(score_bar_color(0.0), Color32::from_rgb(0xd3, 0xd3, 0xd3));
    }

    #[test]
    fn completion_fraction_tracks_the_current_question() {
        let mut app = QuizApp::with_questions(bank(4));
        assert_eq!(app.completion_fraction(), 0.25);
        app.session.current_question = 3;
        assert_eq!(app.completion_fraction(), 1.0);
        app.session.current_question = 4;
        app.session.show_result = true;
        assert_eq!(app.completion_fraction(), 1.0);
    }
}
