//! Montaje de quizzes a partir del banco.
//!
//! La selección aleatoria usa `SliceRandom::shuffle` (Fisher-Yates), así que
//! cualquier subconjunto de tamaño `n` del banco es igual de probable.

use crate::error::{AssembleError, ValidationError};
use crate::ids;
use crate::model::{Question, Quiz};
use chrono::{Local, NaiveDate};
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::Map;

/// Baraja el banco y se queda con los ids de los primeros `min(count, len)`.
pub fn sample_ids<R: Rng + ?Sized>(
    count: usize,
    pool: &[Question],
    rng: &mut R,
) -> Result<Vec<String>, AssembleError> {
    if pool.is_empty() {
        return Err(AssembleError::EmptyPool);
    }
    let mut shuffled: Vec<&Question> = pool.iter().collect();
    shuffled.shuffle(rng);
    Ok(shuffled
        .into_iter()
        .take(count.min(pool.len()))
        .map(|q| q.id.clone())
        .collect())
}

pub fn assemble(title: &str, count: usize, pool: &[Question]) -> Result<Quiz, AssembleError> {
    assemble_with(title, count, pool, &mut rand::thread_rng())
}

pub fn assemble_with<R: Rng + ?Sized>(
    title: &str,
    count: usize,
    pool: &[Question],
    rng: &mut R,
) -> Result<Quiz, AssembleError> {
    let ids = sample_ids(count, pool, rng)?;
    Ok(new_quiz(title, ids, today()))
}

/// Construye el quiz con la descripción y la fecha tal como se muestran en la lista.
pub fn new_quiz(title: &str, question_ids: Vec<String>, created: NaiveDate) -> Quiz {
    Quiz {
        id: ids::quiz_id(),
        title: title.trim().to_string(),
        description: format!("{} questions", question_ids.len()),
        created_at: format_created_at(created),
        questions: question_ids,
        extra: Map::new(),
    }
}

/// Fecha larga en inglés: "May 10, 2025".
pub fn format_created_at(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Quiz en preparación: preselección aleatoria que el usuario puede retocar
/// antes de crearlo.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizDraft {
    pub title: String,
    pub requested: usize,
    selected: Vec<String>,
}

impl QuizDraft {
    /// Con un banco vacío el borrador arranca sin selección; el error sólo
    /// aparece al intentar crearlo.
    pub fn new<R: Rng + ?Sized>(
        title: impl Into<String>,
        requested: usize,
        pool: &[Question],
        rng: &mut R,
    ) -> Self {
        let selected = sample_ids(requested, pool, rng).unwrap_or_default();
        Self {
            title: title.into(),
            requested,
            selected,
        }
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Añade o quita `id` de la selección. Los añadidos van al final.
    pub fn toggle(&mut self, id: &str) {
        if self.is_selected(id) {
            self.selected.retain(|s| s != id);
        } else {
            self.selected.push(id.to_string());
        }
    }

    /// Olvida ids que ya no están en el banco.
    pub fn retain_existing(&mut self, pool: &[Question]) {
        self.selected.retain(|id| pool.iter().any(|q| &q.id == id));
    }

    pub fn submit(&self) -> Result<Quiz, ValidationError> {
        self.submit_on(today())
    }

    pub fn submit_on(&self, created: NaiveDate) -> Result<Quiz, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankTitle);
        }
        if self.selected.is_empty() {
            return Err(ValidationError::NoQuestionsSelected);
        }
        debug!(
            "Creando quiz \"{}\" con {} preguntas",
            self.title,
            self.selected.len()
        );
        Ok(new_quiz(&self.title, self.selected.clone(), created))
    }
}

/// Validación del diálogo de creación: sólo hace falta un título.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        Err(ValidationError::BlankTitle)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    fn pool(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question::empty(format!("q{i}"), "General"))
            .collect()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 10).unwrap()
    }

    #[test]
    fn small_pool_yields_every_question_once() {
        let pool = pool(3);
        let quiz = assemble("Quiz A", 10, &pool).unwrap();

        assert_eq!(quiz.questions.len(), 3);
        let unique: HashSet<&String> = quiz.questions.iter().collect();
        assert_eq!(unique.len(), 3);
        assert!(quiz.questions.iter().all(|id| pool.iter().any(|q| &q.id == id)));
        assert_eq!(quiz.title, "Quiz A");
        assert_eq!(quiz.description, "3 questions");
    }

    #[test]
    fn takes_min_of_count_and_pool() {
        let pool = pool(20);
        let mut rng = StdRng::seed_from_u64(7);
        for count in [0, 1, 5, 19, 20, 25] {
            let ids = sample_ids(count, &pool, &mut rng).unwrap();
            assert_eq!(ids.len(), count.min(20));
            let unique: HashSet<&String> = ids.iter().collect();
            assert_eq!(unique.len(), ids.len());
        }
    }

    #[test]
    fn empty_pool_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample_ids(5, &[], &mut rng), Err(AssembleError::EmptyPool));
        assert_eq!(
            assemble("Quiz", 5, &[]).unwrap_err().to_string(),
            "no questions available"
        );
    }

    #[test]
    fn same_seed_same_selection() {
        let pool = pool(10);
        let a = sample_ids(4, &pool, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = sample_ids(4, &pool, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn first_pick_is_roughly_uniform() {
        let pool = pool(4);
        let mut rng = StdRng::seed_from_u64(2024);
        let mut hits: HashMap<String, usize> = HashMap::new();
        for _ in 0..4000 {
            let ids = sample_ids(1, &pool, &mut rng).unwrap();
            *hits.entry(ids[0].clone()).or_default() += 1;
        }
        assert_eq!(hits.len(), 4);
        for count in hits.values() {
            assert!((800..1200).contains(count), "sesgo en la selección: {hits:?}");
        }
    }

    #[test]
    fn created_at_uses_long_us_format() {
        assert_eq!(format_created_at(date()), "May 10, 2025");
        let d = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(format_created_at(d), "December 1, 2025");
    }

    #[test]
    fn draft_preselects_requested_count() {
        let pool = pool(8);
        let draft = QuizDraft::new("Mix", 5, &pool, &mut StdRng::seed_from_u64(3));
        assert_eq!(draft.selected().len(), 5);
        assert_eq!(draft.requested, 5);
    }

    #[test]
    fn toggle_adds_and_removes() {
        let pool = pool(3);
        let mut draft = QuizDraft::new("Mix", 1, &pool, &mut StdRng::seed_from_u64(3));
        let first = draft.selected()[0].clone();

        draft.toggle(&first);
        assert!(draft.selected().is_empty());

        draft.toggle("q2");
        draft.toggle("q0");
        assert_eq!(draft.selected(), &["q2".to_string(), "q0".to_string()]);
    }

    #[test]
    fn submit_rejects_zero_selection() {
        let pool = pool(2);
        let mut draft = QuizDraft::new("Mix", 1, &pool, &mut StdRng::seed_from_u64(9));
        let only = draft.selected()[0].clone();
        draft.toggle(&only);
        assert_eq!(draft.submit_on(date()), Err(ValidationError::NoQuestionsSelected));
    }

    #[test]
    fn submit_rejects_blank_title() {
        let pool = pool(2);
        let draft = QuizDraft::new("  ", 2, &pool, &mut StdRng::seed_from_u64(9));
        assert_eq!(draft.submit_on(date()), Err(ValidationError::BlankTitle));
        assert_eq!(validate_title(" "), Err(ValidationError::BlankTitle));
        assert_eq!(validate_title("History"), Ok(()));
    }

    #[test]
    fn draft_over_empty_pool_cannot_be_submitted() {
        let draft = QuizDraft::new("Empty", 10, &[], &mut StdRng::seed_from_u64(0));
        assert!(draft.selected().is_empty());
        assert_eq!(draft.submit_on(date()), Err(ValidationError::NoQuestionsSelected));
    }

    #[test]
    fn submit_builds_the_quiz() {
        let pool = pool(6);
        let mut draft = QuizDraft::new("Friday", 2, &pool, &mut StdRng::seed_from_u64(5));
        draft.toggle("q5");
        let expected = draft.selected().to_vec();

        let quiz = draft.submit_on(date()).unwrap();
        assert_eq!(quiz.questions, expected);
        assert_eq!(quiz.created_at, "May 10, 2025");
        assert!(quiz.id.starts_with("quiz-"));
        assert_eq!(quiz.description, format!("{} questions", expected.len()));
    }

    #[test]
    fn retain_existing_drops_deleted_ids() {
        let mut bank = pool(3);
        let mut draft = QuizDraft::new("Mix", 3, &bank, &mut StdRng::seed_from_u64(11));
        bank.remove(1);
        draft.retain_existing(&bank);
        assert_eq!(draft.selected().len(), 2);
        assert!(!draft.is_selected("q1"));
    }
}
