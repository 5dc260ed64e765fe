pub mod questions;
pub mod quizzes;

pub use questions::QuestionStore;
pub use quizzes::QuizStore;
