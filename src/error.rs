// src/error.rs

use thiserror::Error;

/// Errores que el usuario puede corregir: se muestran como aviso y el
/// formulario conserva lo que había escrito.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("blank question text")]
    BlankText,
    #[error("no correct option")]
    NoCorrectOption,
    #[error("more than one correct option")]
    MultipleCorrectOptions,
    #[error("incomplete options")]
    IncompleteOptions,
    #[error("expected {expected} options, found {found}")]
    WrongOptionCount { expected: usize, found: usize },
    #[error("duplicate option id `{0}`")]
    DuplicateOptionId(String),
    #[error("question `{0}` already exists")]
    DuplicateQuestion(String),
    #[error("question `{0}` not found")]
    UnknownQuestion(String),
    #[error("blank title")]
    BlankTitle,
    #[error("no questions selected")]
    NoQuestionsSelected,
}

impl ValidationError {
    /// Título corto del aviso.
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::BlankText => "Missing question text",
            ValidationError::NoCorrectOption => "Missing correct answer",
            ValidationError::MultipleCorrectOptions => "Too many correct answers",
            ValidationError::IncompleteOptions | ValidationError::WrongOptionCount { .. } => {
                "Incomplete options"
            }
            ValidationError::DuplicateOptionId(_) => "Invalid options",
            ValidationError::DuplicateQuestion(_) => "Duplicate question",
            ValidationError::UnknownQuestion(_) => "Question not found",
            ValidationError::BlankTitle => "Missing title",
            ValidationError::NoQuestionsSelected => "No questions selected",
        }
    }

    /// Texto largo del aviso, pensado para el usuario.
    pub fn description(&self) -> String {
        match self {
            ValidationError::BlankText => "Please provide text for your question.".into(),
            ValidationError::NoCorrectOption => "Please mark one option as correct.".into(),
            ValidationError::MultipleCorrectOptions => {
                "Only one option can be marked as correct.".into()
            }
            ValidationError::IncompleteOptions => "Please fill in all option texts.".into(),
            ValidationError::WrongOptionCount { expected, .. } => {
                format!("A question needs exactly {expected} options.")
            }
            ValidationError::DuplicateOptionId(id) => {
                format!("Option id `{id}` is used more than once.")
            }
            ValidationError::DuplicateQuestion(id) => {
                format!("A question with id `{id}` is already in the bank.")
            }
            ValidationError::UnknownQuestion(id) => {
                format!("Question `{id}` is no longer in the bank.")
            }
            ValidationError::BlankTitle => "Please provide a title for your quiz.".into(),
            ValidationError::NoQuestionsSelected => {
                "Please select at least one question for your quiz.".into()
            }
        }
    }
}

/// Fallos del almacenamiento clave-valor. Los stores los registran y siguen
/// adelante con el estado en memoria.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read `{key}`: {message}")]
    Read { key: String, message: String },
    #[error("failed to write `{key}`: {message}")]
    Write { key: String, message: String },
    #[error("failed to serialize `{key}`")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse `{key}`")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssembleError {
    #[error("no questions available")]
    EmptyPool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_user_wording() {
        assert_eq!(ValidationError::NoCorrectOption.to_string(), "no correct option");
        assert_eq!(ValidationError::NoCorrectOption.title(), "Missing correct answer");
        assert_eq!(ValidationError::BlankTitle.title(), "Missing title");
        assert!(
            ValidationError::NoQuestionsSelected
                .description()
                .contains("at least one question")
        );
    }

    #[test]
    fn empty_pool_reads_as_no_questions_available() {
        assert_eq!(AssembleError::EmptyPool.to_string(), "no questions available");
    }
}
