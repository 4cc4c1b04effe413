use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    // Cualquier valor desconocido del banco cae aquí
    #[serde(other)]
    Unknown,
}

impl Difficulty {
    /// Estrellas para mostrar: easy=1, medium=2, hard=3, resto=0
    pub fn stars(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Unknown => 0,
        }
    }
}

/// Registro tal cual viene del banco embebido (campos percent-encoded)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawQuestion {
    pub question: String,       // Pregunta (percent-encoded)
    pub correct_answer: String, // Respuesta correcta (percent-encoded)
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
    pub difficulty: Difficulty,
}

/// Pregunta ya decodificada y jugable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub correct_answer: String,
    /// Incorrectas decodificadas + la correcta al final, en ese orden
    pub options: Vec<String>,
    pub difficulty: Difficulty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_map_known_difficulties() {
        assert_eq!(Difficulty::Easy.stars(), 1);
        assert_eq!(Difficulty::Medium.stars(), 2);
        assert_eq!(Difficulty::Hard.stars(), 3);
        assert_eq!(Difficulty::Unknown.stars(), 0);
    }

    #[test]
    fn unknown_difficulty_deserializes_to_fallback() {
        let raw: RawQuestion = serde_yaml::from_str(
            "question: \"Hola\"\ncorrect_answer: \"Si\"\ndifficulty: impossible\n",
        )
        .expect("yaml ok");
        assert_eq!(raw.difficulty, Difficulty::Unknown);
        assert!(raw.incorrect_answers.is_empty());
    }
}
