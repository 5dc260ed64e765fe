use crate::error::ValidationError;
use crate::model::Question;
use crate::storage::{KeyValueStorage, QUESTIONS_KEY, read_collection, write_collection};
use log::{debug, error, info, warn};

/// Banco de preguntas. La copia en memoria manda durante la sesión; cada
/// cambio reescribe la colección completa en el almacenamiento.
pub struct QuestionStore<S: KeyValueStorage> {
    storage: S,
    questions: Vec<Question>,
    /// El último intento de guardar falló: lo guardado está atrasado.
    unsaved: bool,
}

impl<S: KeyValueStorage> QuestionStore<S> {
    /// Abre el banco. Si no hay nada guardado (o está corrupto) arranca con `seed`.
    pub fn open(storage: S, seed: Vec<Question>) -> Self {
        let questions = match read_collection::<Question, _>(&storage, QUESTIONS_KEY) {
            Ok(Some(saved)) => {
                info!("Banco cargado: {} preguntas", saved.len());
                saved
            }
            Ok(None) => {
                info!("Sin banco guardado, usando {} preguntas de ejemplo", seed.len());
                seed
            }
            Err(e) => {
                error!("No se pudo cargar el banco de preguntas: {e}");
                seed
            }
        };
        Self {
            storage,
            questions,
            unsaved: false,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Lo último que quedó guardado. Si no se puede leer, o si el último
    /// guardado falló, la copia en memoria.
    pub fn load(&self) -> Vec<Question> {
        if self.unsaved {
            return self.questions.clone();
        }
        match read_collection(&self.storage, QUESTIONS_KEY) {
            Ok(Some(saved)) => saved,
            Ok(None) => self.questions.clone(),
            Err(e) => {
                warn!("Lectura del banco fallida, se usa la copia en memoria: {e}");
                self.questions.clone()
            }
        }
    }

    /// Sustituye la colección entera y la guarda.
    pub fn save(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.persist();
    }

    pub fn add(&mut self, question: Question) -> Result<(), ValidationError> {
        question.validate()?;
        if self.contains(&question.id) {
            return Err(ValidationError::DuplicateQuestion(question.id));
        }
        debug!("Añadiendo pregunta {}", question.id);
        self.questions.push(question);
        self.persist();
        Ok(())
    }

    /// Reemplazo completo de una pregunta existente (mismo id).
    pub fn update(&mut self, question: Question) -> Result<(), ValidationError> {
        question.validate()?;
        let Some(slot) = self.questions.iter_mut().find(|q| q.id == question.id) else {
            return Err(ValidationError::UnknownQuestion(question.id));
        };
        debug!("Actualizando pregunta {}", question.id);
        *slot = question;
        self.persist();
        Ok(())
    }

    /// Borra sin condiciones. Devuelve si había algo que borrar.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.questions.len();
        self.questions.retain(|q| q.id != id);
        let removed = self.questions.len() != before;
        if removed {
            debug!("Pregunta {id} eliminada");
        }
        self.persist();
        removed
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    fn persist(&mut self) {
        // El fallo se registra y nada más: la sesión sigue con lo que hay en memoria
        match write_collection(&mut self.storage, QUESTIONS_KEY, &self.questions) {
            Ok(()) => self.unsaved = false,
            Err(e) => {
                error!("No se pudo guardar el banco de preguntas: {e}");
                self.unsaved = true;
            }
        }
    }
}
