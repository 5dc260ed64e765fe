use crate::QuizApp;
use crate::ui::helpers::{card, page_header};
use crate::ui::layout::page;
use crate::view_models::QuizCard;
use egui::{Align, Button, Context, Layout, RichText};

pub fn ui_home(app: &mut QuizApp, ctx: &Context) {
    let cards: Vec<QuizCard> = app.quiz_cards();

    page(ctx, 960.0, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| page_header(ui, "Quiz Creator", "Create and manage your quizzes"));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.add(Button::new("➕ Create New Quiz")).clicked() {
                    app.open_create_dialog();
                }
                if ui.button("🗄 Manage Questions").clicked() {
                    app.open_question_bank();
                }
            });
        });
        ui.add_space(8.0);

        if cards.is_empty() {
            ui.label(RichText::new("No quizzes yet. Create one to get started.").weak());
            return;
        }

        // Rejilla de tarjetas: tantas columnas como quepan
        let columns = ((ui.available_width() / 300.0).floor() as usize).clamp(1, 3);
        for row in cards.chunks(columns) {
            ui.columns(columns, |cols| {
                for (col, quiz) in cols.iter_mut().zip(row) {
                    if quiz_card(col, quiz) {
                        app.open_quiz(&quiz.id);
                    }
                }
            });
            ui.add_space(12.0);
        }
    });
}

/// Devuelve `true` si se pulsó "View".
fn quiz_card(ui: &mut egui::Ui, quiz: &QuizCard) -> bool {
    card(ui, false, |ui| {
        ui.label(RichText::new(&quiz.title).size(18.0).strong());
        ui.label(RichText::new(&quiz.description).weak());
        ui.add_space(8.0);
        ui.label(RichText::new(quiz.created_label()).small().weak());
        if quiz.missing > 0 {
            ui.label(
                RichText::new(format!("{} question(s) no longer in the bank", quiz.missing))
                    .small()
                    .color(ui.visuals().warn_fg_color),
            );
        }
        ui.with_layout(Layout::right_to_left(Align::Min), |ui| ui.button("View").clicked())
            .inner
    })
}
