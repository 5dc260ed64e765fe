// src/view_models.rs

use crate::model::{Question, Quiz, QuizEntry, option_label};

#[derive(Clone, Debug, PartialEq)]
pub struct OptionRow {
    pub label: char, // A, B, C, D
    pub text: String,
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionCard {
    pub id: String,
    pub text: String,
    pub category: String,
    pub options: Vec<OptionRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub missing: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum QuizEntryRow {
    Question { number: usize, card: QuestionCard },
    Missing { number: usize, id: String },
}

impl From<&Question> for QuestionCard {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id.clone(),
            text: q.text.clone(),
            category: q.category.clone(),
            options: q
                .options
                .iter()
                .enumerate()
                .map(|(i, o)| OptionRow {
                    label: option_label(i),
                    text: o.text.clone(),
                    correct: o.is_correct,
                })
                .collect(),
        }
    }
}

impl QuestionCard {
    pub fn category_label(&self) -> String {
        format!("Category: {}", self.category)
    }
}

impl QuizCard {
    pub fn from_quiz(quiz: &Quiz, bank: &[Question]) -> Self {
        Self {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            description: quiz.description.clone(),
            created_at: quiz.created_at.clone(),
            missing: quiz.missing_count(bank),
        }
    }

    pub fn created_label(&self) -> String {
        format!("Created on {}", self.created_at)
    }
}

impl QuizEntryRow {
    pub fn rows(quiz: &Quiz, bank: &[Question]) -> Vec<Self> {
        quiz.resolve(bank)
            .into_iter()
            .enumerate()
            .map(|(i, entry)| match entry {
                QuizEntry::Present(q) => QuizEntryRow::Question {
                    number: i + 1,
                    card: q.into(),
                },
                QuizEntry::Missing(id) => QuizEntryRow::Missing {
                    number: i + 1,
                    id: id.to_string(),
                },
            })
            .collect()
    }

    pub fn label(&self) -> String {
        match self {
            QuizEntryRow::Question { number, card } => format!("{number}. {}", card.text),
            QuizEntryRow::Missing { number, .. } => {
                format!("{number}. (question no longer in the bank)")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    #[test]
    fn question_card_letters_and_correct_flag() {
        let mut q = Question::empty("q1", "Art");
        q.options[2].is_correct = true;
        let card = QuestionCard::from(&q);
        let labels: String = card.options.iter().map(|o| o.label).collect();
        assert_eq!(labels, "ABCD");
        assert!(card.options[2].correct);
        assert_eq!(card.category_label(), "Category: Art");
    }

    #[test]
    fn entry_rows_use_placeholder_for_missing_questions() {
        let mut q = Question::empty("q1", "Art");
        q.text = "Who painted the Mona Lisa?".into();
        let quiz = Quiz {
            id: "quiz-x".into(),
            title: "Art".into(),
            description: "2 questions".into(),
            created_at: "May 14, 2025".into(),
            questions: vec!["deleted".into(), "q1".into()],
            extra: Map::new(),
        };
        let rows = QuizEntryRow::rows(&quiz, &[q]);
        assert_eq!(rows[0].label(), "1. (question no longer in the bank)");
        assert_eq!(rows[1].label(), "2. Who painted the Mona Lisa?");

        let card = QuizCard::from_quiz(&quiz, &[]);
        assert_eq!(card.missing, 2);
        assert_eq!(card.created_label(), "Created on May 14, 2025");
    }
}
