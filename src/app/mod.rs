use crate::assembler::QuizDraft;
use crate::config::AppConfig;
use crate::data::{Samples, read_samples_embedded};
use crate::editor::QuestionEditor;
use crate::model::AppState;
use crate::storage::{Backend, default_backend};
use crate::store::{QuestionStore, QuizStore};
use serde::{Deserialize, Serialize};

// Submódulos
pub mod actions;
pub mod navigation;
pub mod notifications;
pub mod queries;

pub use notifications::{Notification, NotificationKind};

/// Preferencias de la interfaz. Se guardan con la persistencia de eframe,
/// aparte de las colecciones `questions` y `quizzes`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiPrefs {
    pub category_filter: String,
    pub requested_count: usize,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            category_filter: crate::filter::ALL_CATEGORIES.to_string(),
            requested_count: AppConfig::default().initial_count(),
        }
    }
}

/// Estado del diálogo "Create New Quiz"
#[derive(Clone, Debug, PartialEq)]
pub struct CreateDialog {
    pub title: String,
    pub count: usize,
}

pub struct QuizApp {
    pub config: AppConfig,
    pub prefs: UiPrefs,
    pub state: AppState,
    pub questions: QuestionStore<Backend>,
    pub quizzes: QuizStore<Backend>,
    pub editor: QuestionEditor,
    pub create_dialog: Option<CreateDialog>,
    pub quiz_draft: Option<QuizDraft>,
    pub viewing_quiz: Option<String>,
    pub confirm_delete: Option<String>,
    pub notifications: Vec<Notification>,
    next_notification_id: u64,
}

impl QuizApp {
    /// Arranque desde eframe: recupera las preferencias y abre los stores
    /// sobre el backend de la plataforma.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let prefs: UiPrefs = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let question_backend = default_backend(&config);
        let quiz_backend = default_backend(&config);
        let mut app = Self::with_backends(config, question_backend, quiz_backend);
        app.prefs = prefs;
        app.sanitize_prefs();
        app
    }

    pub fn with_backends(config: AppConfig, question_backend: Backend, quiz_backend: Backend) -> Self {
        let Samples { questions, quizzes } = if config.seed_samples {
            read_samples_embedded()
        } else {
            Samples::default()
        };

        let prefs = UiPrefs {
            requested_count: config.initial_count(),
            ..UiPrefs::default()
        };

        Self {
            questions: QuestionStore::open(question_backend, questions),
            quizzes: QuizStore::open(quiz_backend, quizzes),
            editor: QuestionEditor::new(),
            prefs,
            config,
            state: AppState::default(),
            create_dialog: None,
            quiz_draft: None,
            viewing_quiz: None,
            confirm_delete: None,
            notifications: Vec::new(),
            next_notification_id: 0,
        }
    }

    /// Las preferencias guardadas pueden referirse a categorías que ya no existen.
    pub fn sanitize_prefs(&mut self) {
        if !self.category_options().contains(&self.prefs.category_filter) {
            self.prefs.category_filter = crate::filter::ALL_CATEGORIES.to_string();
        }
        if !self.config.count_choices.contains(&self.prefs.requested_count) {
            self.prefs.requested_count = self.config.initial_count();
        }
    }
}
