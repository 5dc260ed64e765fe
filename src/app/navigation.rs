use super::*;

impl QuizApp {
    pub fn open_home(&mut self) {
        self.state = AppState::Home;
        self.viewing_quiz = None;
    }

    pub fn open_question_bank(&mut self) {
        self.state = AppState::QuestionBank;
    }

    /// Abre el detalle de un quiz. Un id desconocido se queda en la portada.
    pub fn open_quiz(&mut self, id: &str) {
        if self.quizzes.get(id).is_some() {
            self.viewing_quiz = Some(id.to_string());
            self.state = AppState::QuizDetail;
        } else {
            log::warn!("Quiz {id} no encontrado");
            self.open_home();
        }
    }

    /// Salir de la página de creación descarta el borrador.
    pub fn leave_create_page(&mut self) {
        self.quiz_draft = None;
        self.open_home();
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app_with;
    use super::*;

    #[test]
    fn open_quiz_sets_detail_state() {
        let mut app = app_with(true);
        app.open_quiz("2");
        assert_eq!(app.state, AppState::QuizDetail);
        assert_eq!(app.viewing_quiz.as_deref(), Some("2"));

        app.open_home();
        assert_eq!(app.state, AppState::Home);
        assert!(app.viewing_quiz.is_none());
    }

    #[test]
    fn unknown_quiz_stays_home() {
        let mut app = app_with(true);
        app.open_question_bank();
        app.open_quiz("nope");
        assert_eq!(app.state, AppState::Home);
    }
}
