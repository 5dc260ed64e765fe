use super::*;
use crate::assembler::validate_title;
use crate::error::AssembleError;
use log::{debug, info};

impl QuizApp {
    // ---------- Banco de preguntas ----------

    /// Botón "Add Question to Bank" (o "Save Changes" si se está editando).
    pub fn submit_question(&mut self) {
        let editing = self.editor.is_editing();
        match self.editor.commit(&mut self.questions) {
            Ok(question) => {
                info!("Pregunta {} guardada en el banco", question.id);
                if editing {
                    self.notify_success("Question updated", "Your changes have been saved.");
                } else {
                    self.notify_success(
                        "Question added",
                        "Your question has been added to the question bank.",
                    );
                }
            }
            Err(e) => self.notify_invalid(&e),
        }
    }

    /// Carga la pregunta en el editor. Un borrador nuevo a medio escribir se
    /// pierde, y se avisa.
    pub fn edit_question(&mut self, id: &str) {
        let Some(question) = self.questions.get(id) else {
            return;
        };
        let discarded = !self.editor.is_editing() && self.editor.has_input();
        self.editor = QuestionEditor::edit(question);
        self.state = AppState::QuestionBank;
        if discarded {
            debug!("Borrador nuevo descartado al editar {id}");
            self.notify(
                NotificationKind::Error,
                "Draft discarded",
                "The unsaved new question was replaced by the question you chose to edit.",
            );
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
    }

    /// Pide confirmación antes de borrar: no se puede deshacer.
    pub fn request_delete(&mut self, id: &str) {
        self.confirm_delete = Some(id.to_string());
    }

    pub fn confirm_delete_question(&mut self) {
        let Some(id) = self.confirm_delete.take() else {
            return;
        };
        self.delete_question(&id);
    }

    pub fn delete_question(&mut self, id: &str) {
        if !self.questions.remove(id) {
            return;
        }
        if self.editor.mode() == &crate::editor::EditorMode::Editing(id.to_string()) {
            self.editor.cancel();
        }
        if let Some(draft) = self.quiz_draft.as_mut() {
            draft.retain_existing(self.questions.questions());
        }
        if !self.category_options().contains(&self.prefs.category_filter) {
            self.prefs.category_filter = crate::filter::ALL_CATEGORIES.to_string();
        }
        self.notify_success(
            "Question deleted",
            "The question has been removed from the question bank.",
        );
    }

    // ---------- Creación de quizzes ----------

    pub fn open_create_dialog(&mut self) {
        self.create_dialog = Some(CreateDialog {
            title: String::new(),
            count: self.prefs.requested_count,
        });
    }

    pub fn close_create_dialog(&mut self) {
        self.create_dialog = None;
    }

    /// "Continue" del diálogo: exige título y pasa a la página de selección
    /// con una preselección aleatoria.
    pub fn submit_create_dialog(&mut self) {
        let Some(dialog) = self.create_dialog.clone() else {
            return;
        };
        if let Err(e) = validate_title(&dialog.title) {
            self.notify_invalid(&e);
            return;
        }
        self.create_dialog = None;
        self.prefs.requested_count = dialog.count;
        self.begin_quiz_draft(dialog.title.trim(), dialog.count);
    }

    pub fn begin_quiz_draft(&mut self, title: &str, count: usize) {
        if self.questions.is_empty() {
            let err = AssembleError::EmptyPool;
            self.notify(NotificationKind::Error, "No questions available", err.to_string());
        }
        let pool = self.questions.questions();
        self.quiz_draft = Some(QuizDraft::new(title, count, pool, &mut rand::thread_rng()));
        self.state = AppState::CreateQuiz;
    }

    pub fn toggle_draft_question(&mut self, id: &str) {
        if let Some(draft) = self.quiz_draft.as_mut() {
            draft.toggle(id);
        }
    }

    /// "Create Quiz": guarda el quiz y vuelve a la portada.
    pub fn create_quiz(&mut self) {
        let Some(draft) = self.quiz_draft.as_ref() else {
            return;
        };
        match draft.submit() {
            Ok(quiz) => {
                let description = format!(
                    "Your quiz \"{}\" has been created with {} questions.",
                    quiz.title,
                    quiz.questions.len()
                );
                info!("Quiz {} creado", quiz.id);
                self.quizzes.add(quiz);
                self.quiz_draft = None;
                self.notify_success("Quiz created!", description);
                self.open_home();
            }
            Err(e) => self.notify_invalid(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app_with;
    use super::*;
    use crate::storage::{KeyValueStorage, QUIZZES_KEY};
    use pretty_assertions::assert_eq;

    fn fill_editor(app: &mut QuizApp, text: &str) {
        app.editor.set_text(text);
        for (i, t) in ["3", "4", "5", "6"].iter().enumerate() {
            app.editor.set_option_text(&format!("o{}", i + 1), *t);
        }
    }

    #[test]
    fn submit_question_without_correct_option_notifies_and_keeps_input() {
        let mut app = app_with(false);
        fill_editor(&mut app, "What is 2+2?");

        app.submit_question();

        assert!(app.questions.is_empty());
        assert_eq!(app.notifications[0].title, "Missing correct answer");
        assert_eq!(app.editor.draft().text, "What is 2+2?");
    }

    #[test]
    fn submit_question_adds_to_bank() {
        let mut app = app_with(false);
        fill_editor(&mut app, "What is 2+2?");
        app.editor.set_correct("o2");

        app.submit_question();

        assert_eq!(app.questions.len(), 1);
        assert_eq!(app.notifications[0].title, "Question added");
        assert!(app.editor.draft().text.is_empty());
    }

    #[test]
    fn edit_then_submit_replaces() {
        let mut app = app_with(true);
        app.edit_question("q1");
        app.editor.set_text("What is the capital of Italy?");
        app.editor.set_option_text("o1", "Rome");
        app.submit_question();

        assert_eq!(app.questions.len(), 3);
        assert_eq!(app.questions.get("q1").unwrap().text, "What is the capital of Italy?");
        assert_eq!(app.notifications[0].title, "Question updated");
    }

    #[test]
    fn editing_over_a_half_written_draft_warns() {
        let mut app = app_with(true);
        fill_editor(&mut app, "Unfinished?");

        app.edit_question("q2");

        assert_eq!(app.editor.draft().id, "q2");
        let last = app.notifications.last().unwrap();
        assert_eq!(last.title, "Draft discarded");
        assert_eq!(last.kind, NotificationKind::Error);
    }

    #[test]
    fn editing_from_a_blank_draft_is_silent() {
        let mut app = app_with(true);
        app.edit_question("q2");
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn delete_goes_through_confirmation() {
        let mut app = app_with(true);
        app.request_delete("q2");
        assert_eq!(app.questions.len(), 3);

        app.confirm_delete_question();
        assert!(app.confirm_delete.is_none());
        assert!(app.questions.get("q2").is_none());
        assert!(app.questions.load().iter().all(|q| q.id != "q2"));
    }

    #[test]
    fn deleting_the_filtered_category_resets_filter() {
        let mut app = app_with(true);
        app.prefs.category_filter = "Art".into();
        app.delete_question("q3");
        assert_eq!(app.prefs.category_filter, "All");
    }

    #[test]
    fn deleting_the_edited_question_resets_editor() {
        let mut app = app_with(true);
        app.edit_question("q1");
        app.delete_question("q1");
        assert!(!app.editor.is_editing());
    }

    #[test]
    fn dialog_requires_title() {
        let mut app = app_with(true);
        app.open_create_dialog();
        app.submit_create_dialog();

        assert!(app.create_dialog.is_some());
        assert_eq!(app.state, AppState::Home);
        assert_eq!(app.notifications[0].title, "Missing title");
    }

    #[test]
    fn full_quiz_creation_flow() {
        let mut app = app_with(true);
        app.open_create_dialog();
        if let Some(dialog) = app.create_dialog.as_mut() {
            dialog.title = "Quiz A".into();
            dialog.count = 10;
        }
        app.submit_create_dialog();

        assert_eq!(app.state, AppState::CreateQuiz);
        let draft = app.quiz_draft.as_ref().unwrap();
        assert_eq!(draft.selected().len(), 3);

        app.create_quiz();

        assert_eq!(app.state, AppState::Home);
        assert_eq!(app.quizzes.len(), 4);
        let quiz = app.quizzes.quizzes().last().unwrap();
        assert_eq!(quiz.title, "Quiz A");
        assert_eq!(quiz.description, "3 questions");
        assert!(app.quizzes.storage().get(QUIZZES_KEY).unwrap().is_some());
        assert_eq!(
            app.notifications.last().unwrap().description,
            "Your quiz \"Quiz A\" has been created with 3 questions."
        );
    }

    #[test]
    fn create_quiz_with_nothing_selected_is_rejected() {
        let mut app = app_with(true);
        app.begin_quiz_draft("Quiz B", 5);
        let selected: Vec<String> = app.quiz_draft.as_ref().unwrap().selected().to_vec();
        for id in &selected {
            app.toggle_draft_question(id);
        }

        app.create_quiz();

        assert_eq!(app.state, AppState::CreateQuiz);
        assert_eq!(app.quizzes.len(), 3);
        assert_eq!(app.notifications.last().unwrap().title, "No questions selected");
    }

    #[test]
    fn empty_bank_reports_no_questions_available() {
        let mut app = app_with(false);
        app.begin_quiz_draft("Quiz C", 5);

        assert_eq!(app.notifications[0].description, "no questions available");
        assert_eq!(app.state, AppState::CreateQuiz);
        assert!(app.quiz_draft.as_ref().unwrap().selected().is_empty());
    }

    #[test]
    fn leaving_the_create_page_drops_the_draft() {
        let mut app = app_with(true);
        app.begin_quiz_draft("Quiz D", 5);
        app.leave_create_page();
        assert!(app.quiz_draft.is_none());
        assert_eq!(app.state, AppState::Home);
    }
}
