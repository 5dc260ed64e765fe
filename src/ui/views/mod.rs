pub mod create_dialog;
pub mod create_quiz;
pub mod home;
pub mod question_bank;
pub mod quiz_detail;
