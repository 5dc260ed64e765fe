use super::*;
use crate::filter::{categories, filter};
use crate::view_models::{QuestionCard, QuizCard, QuizEntryRow};

impl QuizApp {
    /// Opciones del filtro de la lista: "All" + categorías presentes en el banco.
    pub fn category_options(&self) -> Vec<String> {
        categories(self.questions.questions())
    }

    pub fn filtered_question_cards(&self) -> Vec<QuestionCard> {
        filter(self.questions.questions(), &self.prefs.category_filter)
            .into_iter()
            .map(QuestionCard::from)
            .collect()
    }

    pub fn pool_cards(&self) -> Vec<QuestionCard> {
        self.questions.questions().iter().map(QuestionCard::from).collect()
    }

    pub fn quiz_cards(&self) -> Vec<QuizCard> {
        let bank = self.questions.questions();
        self.quizzes
            .quizzes()
            .iter()
            .map(|quiz| QuizCard::from_quiz(quiz, bank))
            .collect()
    }

    /// Categorías que ofrece el editor; incluye la del borrador si es otra.
    pub fn editor_categories(&self) -> Vec<String> {
        let mut out = self.config.categories.clone();
        let current = &self.editor.draft().category;
        if !out.contains(current) {
            out.push(current.clone());
        }
        out
    }

    pub fn viewing_quiz_rows(&self) -> Option<(QuizCard, Vec<QuizEntryRow>)> {
        let id = self.viewing_quiz.as_deref()?;
        let quiz = self.quizzes.get(id)?;
        let bank = self.questions.questions();
        Some((QuizCard::from_quiz(quiz, bank), QuizEntryRow::rows(quiz, bank)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app_with;
    use pretty_assertions::assert_eq;

    #[test]
    fn filter_pref_drives_question_cards() {
        let mut app = app_with(true);
        assert_eq!(app.filtered_question_cards().len(), 3);

        app.prefs.category_filter = "Science".into();
        let cards = app.filtered_question_cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].text, "Which planet is known as the Red Planet?");
    }

    #[test]
    fn category_options_come_from_the_bank() {
        let app = app_with(true);
        assert_eq!(app.category_options(), vec!["All", "Geography", "Science", "Art"]);
    }

    #[test]
    fn editor_categories_include_custom_draft_category() {
        let mut app = app_with(false);
        assert_eq!(app.editor_categories().len(), 6);
        app.editor.set_category("Music");
        assert_eq!(app.editor_categories().last().map(String::as_str), Some("Music"));
    }

    #[test]
    fn quiz_detail_rows_resolve_against_the_bank() {
        let mut app = app_with(true);
        app.quizzes.add(crate::assembler::new_quiz(
            "Mixed",
            vec!["q2".into(), "q404".into()],
            chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        ));
        let id = app.quizzes.quizzes().last().unwrap().id.clone();
        app.open_quiz(&id);

        let (card, rows) = app.viewing_quiz_rows().unwrap();
        assert_eq!(card.title, "Mixed");
        assert_eq!(card.missing, 1);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].label(), "2. (question no longer in the bank)");
    }
}
