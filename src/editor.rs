//! Borrador de pregunta que maneja el formulario del banco.

use crate::error::ValidationError;
use crate::ids;
use crate::model::{DEFAULT_CATEGORY, Question};
use crate::storage::KeyValueStorage;
use crate::store::QuestionStore;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    New,
    /// Editando una pregunta que ya está en el banco
    Editing(String),
}

#[derive(Debug, Clone)]
pub struct QuestionEditor {
    draft: Question,
    mode: EditorMode,
}

impl Default for QuestionEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionEditor {
    pub fn new() -> Self {
        Self {
            draft: Question::empty(ids::question_id(), DEFAULT_CATEGORY),
            mode: EditorMode::New,
        }
    }

    /// Carga una copia de `question` para reemplazarla al confirmar.
    pub fn edit(question: &Question) -> Self {
        Self {
            draft: question.clone(),
            mode: EditorMode::Editing(question.id.clone()),
        }
    }

    pub fn draft(&self) -> &Question {
        &self.draft
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Editing(_))
    }

    /// Hay texto escrito en la pregunta o en alguna opción.
    pub fn has_input(&self) -> bool {
        !self.draft.text.trim().is_empty()
            || self.draft.options.iter().any(|o| !o.text.trim().is_empty())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.draft.category = category.into();
    }

    /// Devuelve `false` si la opción no existe en el borrador.
    pub fn set_option_text(&mut self, option_id: &str, text: impl Into<String>) -> bool {
        match self.draft.options.iter_mut().find(|o| o.id == option_id) {
            Some(option) => {
                option.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Marca `option_id` como correcta y desmarca todas las demás.
    /// Un id desconocido no toca nada.
    pub fn set_correct(&mut self, option_id: &str) -> bool {
        if self.draft.option(option_id).is_none() {
            return false;
        }
        for option in &mut self.draft.options {
            option.is_correct = option.id == option_id;
        }
        true
    }

    pub fn correct_option_id(&self) -> Option<&str> {
        self.draft.correct_option().map(|o| o.id.as_str())
    }

    /// Valida y guarda el borrador en el banco. Si todo va bien devuelve la
    /// pregunta guardada y deja un borrador vacío con id nuevo; si no, el
    /// borrador queda intacto para corregirlo.
    pub fn commit<S: KeyValueStorage>(
        &mut self,
        store: &mut QuestionStore<S>,
    ) -> Result<Question, ValidationError> {
        let question = self.draft.clone();
        match &self.mode {
            EditorMode::New => store.add(question.clone())?,
            EditorMode::Editing(_) => store.update(question.clone())?,
        }
        debug!("Borrador {} guardado", question.id);
        *self = Self::new();
        Ok(question)
    }

    /// Descarta el borrador actual.
    pub fn cancel(&mut self) {
        *self = Self::new();
    }
}
