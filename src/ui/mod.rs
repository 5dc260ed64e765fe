mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{notification_area, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        top_panel(self, ctx);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::QuestionBank => views::question_bank::ui_question_bank(self, ctx),
            AppState::CreateQuiz => views::create_quiz::ui_create_quiz(self, ctx),
            AppState::QuizDetail => views::quiz_detail::ui_quiz_detail(self, ctx),
        }

        if self.create_dialog.is_some() {
            views::create_dialog::ui_create_dialog(self, ctx);
        }
        if self.confirm_delete.is_some() {
            views::question_bank::ui_confirm_delete(self, ctx);
        }

        notification_area(self, ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
