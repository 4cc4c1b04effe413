use crate::data::{decode_questions, read_questions_embedded};
use crate::model::Question;
use eframe::egui;
use std::collections::HashSet;

// Submódulos
pub mod actions;
pub mod progress;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{OptionView, QuizView, ResultView};

/// Estado mutable de una partida. Solo lo tocan las operaciones de
/// `app/actions.rs`; la vista lee a través de los accesores.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Índice en el banco jugable; puede quedar en `len` al terminar
    pub current_question: usize,
    /// Aciertos acumulados; nunca supera `current_question`
    pub score: usize,
    pub selected_option: Option<String>,
    /// Resto de opciones de la pregunta actual una vez marcada una
    pub disabled_options: HashSet<String>,
    pub show_result: bool,
    /// "Correct!" o "Sorry!" según la última selección
    pub answer_feedback: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_question: 0,
            score: 0,
            selected_option: None,
            disabled_options: HashSet::new(),
            show_result: false,
            answer_feedback: None,
        }
    }
}

pub struct QuizApp {
    /// Banco jugable ya decodificado; nadie escribe aquí tras la carga
    pub questions: Vec<Question>,
    pub session: SessionState,
    /// Aviso puntual de UI (no confundir con `answer_feedback`)
    pub message: String,
    pub confirm_reset: bool,
    /// Registros descartados al decodificar el banco
    pub dropped_records: usize,
}

impl QuizApp {
    pub fn new() -> Self {
        let raw = read_questions_embedded();
        let (questions, failures) = decode_questions(&raw);
        if !failures.is_empty() {
            log::warn!(
                "{} de {} preguntas descartadas del banco",
                failures.len(),
                raw.len()
            );
        }
        Self::from_parts(questions, failures.len())
    }

    /// Construye la app sobre un banco ya decodificado
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self::from_parts(questions, 0)
    }

    fn from_parts(questions: Vec<Question>, dropped_records: usize) -> Self {
        Self {
            questions,
            session: SessionState::default(),
            message: String::new(),
            confirm_reset: false,
            dropped_records,
        }
    }
}
