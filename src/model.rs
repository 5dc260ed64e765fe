use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Cada pregunta lleva exactamente cuatro opciones (A-D).
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Categoría que asigna el editor a un borrador nuevo.
pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
    // Campos desconocidos: se conservan tal cual al reescribir la colección
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnswerOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_correct,
            extra: Map::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub category: String,
    pub options: Vec<AnswerOption>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Question {
    /// Plantilla vacía: cuatro opciones `o1`..`o4` sin texto y ninguna correcta.
    pub fn empty(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            category: category.into(),
            options: (1..=OPTIONS_PER_QUESTION)
                .map(|n| AnswerOption::new(format!("o{n}"), "", false))
                .collect(),
            extra: Map::new(),
        }
    }

    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.is_correct)
    }

    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Reglas que debe cumplir una pregunta antes de guardarse.
    /// El orden de las comprobaciones decide qué aviso ve el usuario primero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::BlankText);
        }
        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(ValidationError::WrongOptionCount {
                expected: OPTIONS_PER_QUESTION,
                found: self.options.len(),
            });
        }
        match self.options.iter().filter(|o| o.is_correct).count() {
            0 => return Err(ValidationError::NoCorrectOption),
            1 => {}
            _ => return Err(ValidationError::MultipleCorrectOptions),
        }
        if self.options.iter().any(|o| o.text.trim().is_empty()) {
            return Err(ValidationError::IncompleteOptions);
        }
        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.id.as_str()) {
                return Err(ValidationError::DuplicateOptionId(option.id.clone()));
            }
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    /// Ids de preguntas del banco. Referencia débil: pueden haber sido borradas.
    pub questions: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Resultado de resolver un id de un quiz contra el banco actual.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizEntry<'a> {
    Present(&'a Question),
    Missing(&'a str),
}

impl Quiz {
    /// Resuelve cada id en orden; los que ya no existen quedan como `Missing`.
    pub fn resolve<'a>(&'a self, bank: &'a [Question]) -> Vec<QuizEntry<'a>> {
        self.questions
            .iter()
            .map(|id| match bank.iter().find(|q| &q.id == id) {
                Some(q) => QuizEntry::Present(q),
                None => QuizEntry::Missing(id.as_str()),
            })
            .collect()
    }

    pub fn missing_count(&self, bank: &[Question]) -> usize {
        self.resolve(bank)
            .iter()
            .filter(|e| matches!(e, QuizEntry::Missing(_)))
            .count()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Home,
    QuestionBank,
    CreateQuiz,
    QuizDetail,
}

/// Letra que se muestra delante de cada opción (A, B, C, D...).
pub fn option_label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}
