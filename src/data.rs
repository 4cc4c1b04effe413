// src/data.rs

use crate::model::{Question, RawQuestion};

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Vec<RawQuestion> {
    let file_content = include_str!("data/quiz_questions.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de preguntas YAML")
}

/// Registro descartado del banco, con su motivo (para diagnóstico)
#[derive(Debug, Clone)]
pub struct DecodeFailure {
    pub index: usize,
    /// Texto de la pregunta tal cual venía (sin decodificar)
    pub question: String,
    pub reason: String,
}

/// Decodifica un registro percent-encoded a pregunta jugable.
/// Las opciones quedan como incorrectas decodificadas + correcta al final.
pub fn decode_question(raw: &RawQuestion) -> Result<Question, std::string::FromUtf8Error> {
    let question = urlencoding::decode(&raw.question)?.into_owned();
    let correct_answer = urlencoding::decode(&raw.correct_answer)?.into_owned();

    let mut options = Vec::with_capacity(raw.incorrect_answers.len() + 1);
    for incorrect in &raw.incorrect_answers {
        options.push(urlencoding::decode(incorrect)?.into_owned());
    }
    options.push(correct_answer.clone());

    Ok(Question {
        question,
        correct_answer,
        options,
        difficulty: raw.difficulty,
    })
}

/// Decodifica todo el banco con política de saltar-y-seguir: los registros
/// que fallan se descartan (quedan registrados en el vector de fallos) y el
/// resto conserva su orden de carga.
pub fn decode_questions(raw: &[RawQuestion]) -> (Vec<Question>, Vec<DecodeFailure>) {
    let mut questions = Vec::with_capacity(raw.len());
    let mut failures = Vec::new();

    for (index, record) in raw.iter().enumerate() {
        match decode_question(record) {
            Ok(q) => questions.push(q),
            Err(e) => {
                log::warn!(
                    "pregunta {} descartada del banco: {} (raw: {:?})",
                    index,
                    e,
                    record
                );
                failures.push(DecodeFailure {
                    index,
                    question: record.question.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    (questions, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn raw(question: &str, correct: &str, incorrect: &[&str]) -> RawQuestion {
        RawQuestion {
            question: question.to_string(),
            correct_answer: correct.to_string(),
            incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn decode_question_builds_options_with_correct_last() {
        let record = raw(
            "In%20which%20game%20do%20you%20buy%20streets%3F",
            "Monopoly",
            &["Risk", "Cluedo", "Catan"],
        );
        let q = decode_question(&record).expect("decode ok");
        assert_eq!(q.question, "In which game do you buy streets?");
        assert_eq!(q.options, vec!["Risk", "Cluedo", "Catan", "Monopoly"]);
        assert_eq!(q.correct_answer, "Monopoly");
    }

    #[test]
    fn malformed_record_is_dropped_preserving_order() {
        let records = vec![
            raw("First%20question", "A", &["B"]),
            // %FF no es UTF-8 válido al decodificar
            raw("Broken%FFquestion", "A", &["B"]),
            raw("Third%20question", "A", &["B"]),
        ];
        let (questions, failures) = decode_questions(&records);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "First question");
        assert_eq!(questions[1].question, "Third question");

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].index, 1);
        assert_eq!(failures[0].question, "Broken%FFquestion");
        assert!(!failures[0].reason.is_empty());
    }

    #[test]
    fn malformed_option_drops_the_whole_record() {
        let records = vec![raw("Fine%20question", "A", &["B", "bad%FF"])];
        let (questions, failures) = decode_questions(&records);
        assert!(questions.is_empty());
        assert_eq!(failures.len(), 1);
    }

    #[test]
    fn embedded_bank_decodes_without_drops() {
        let raw = read_questions_embedded();
        assert!(!raw.is_empty());
        let (questions, failures) = decode_questions(&raw);
        assert_eq!(questions.len(), raw.len());
        assert!(failures.is_empty());
        // Cada pregunta jugable trae sus opciones con la correcta incluida
        for q in &questions {
            assert!(q.options.contains(&q.correct_answer));
            assert_eq!(*q.options.last().expect("opciones"), q.correct_answer);
        }
    }
}
