use crate::model::Quiz;
use crate::storage::{KeyValueStorage, QUIZZES_KEY, read_collection, write_collection};
use log::{debug, error, info, warn};

/// Quizzes ya montados. Sólo se añaden: no hay ruta de edición ni de borrado.
pub struct QuizStore<S: KeyValueStorage> {
    storage: S,
    quizzes: Vec<Quiz>,
    /// El último intento de guardar falló: lo guardado está atrasado.
    unsaved: bool,
}

impl<S: KeyValueStorage> QuizStore<S> {
    pub fn open(storage: S, seed: Vec<Quiz>) -> Self {
        let quizzes = match read_collection::<Quiz, _>(&storage, QUIZZES_KEY) {
            Ok(Some(saved)) => {
                info!("Quizzes cargados: {}", saved.len());
                saved
            }
            Ok(None) => seed,
            Err(e) => {
                error!("No se pudieron cargar los quizzes: {e}");
                seed
            }
        };
        Self {
            storage,
            quizzes,
            unsaved: false,
        }
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn get(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    pub fn load(&self) -> Vec<Quiz> {
        // Tras un guardado fallido lo escrito está atrasado
        if self.unsaved {
            return self.quizzes.clone();
        }
        match read_collection(&self.storage, QUIZZES_KEY) {
            Ok(Some(saved)) => saved,
            Ok(None) => self.quizzes.clone(),
            Err(e) => {
                warn!("Lectura de quizzes fallida, se usa la copia en memoria: {e}");
                self.quizzes.clone()
            }
        }
    }

    pub fn save(&mut self, quizzes: Vec<Quiz>) {
        self.quizzes = quizzes;
        self.persist();
    }

    pub fn add(&mut self, quiz: Quiz) {
        debug!("Añadiendo quiz {} ({} preguntas)", quiz.id, quiz.questions.len());
        self.quizzes.push(quiz);
        self.persist();
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    fn persist(&mut self) {
        match write_collection(&mut self.storage, QUIZZES_KEY, &self.quizzes) {
            Ok(()) => self.unsaved = false,
            Err(e) => {
                error!("No se pudieron guardar los quizzes: {e}");
                self.unsaved = true;
            }
        }
    }
}
