use crate::QuizApp;
use crate::ui::helpers::{card, option_grid, page_header, question_heading};
use crate::ui::layout::page;
use crate::view_models::QuestionCard;
use egui::{Align, Button, Context, Layout, RichText};

pub fn ui_create_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(draft) = app.quiz_draft.as_ref() else {
        // Sin borrador no hay nada que mostrar
        app.open_home();
        return;
    };
    let title = draft.title.clone();
    let requested = draft.requested;
    let selected: Vec<String> = draft.selected().to_vec();
    let pool: Vec<QuestionCard> = app.pool_cards();

    let mut toggled: Option<String> = None;

    page(ctx, 900.0, |ui| {
        ui.horizontal(|ui| {
            if ui.button("⬅").on_hover_text("Back to quizzes").clicked() {
                app.leave_create_page();
            }
            ui.vertical(|ui| {
                page_header(
                    ui,
                    &format!("Create Quiz: {title}"),
                    &format!("Select {requested} questions for your quiz"),
                )
            });
        });

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Available Questions").size(20.0).strong());
                ui.label(
                    RichText::new(format!("Selected: {}/{} questions", selected.len(), requested))
                        .weak(),
                );
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.add(Button::new("💾 Create Quiz")).clicked() {
                    app.create_quiz();
                }
            });
        });
        ui.add_space(10.0);

        if pool.is_empty() {
            card(ui, false, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(
                        RichText::new("No questions available in the question bank.").weak(),
                    );
                    ui.add_space(8.0);
                    if ui.button("Add Questions").clicked() {
                        app.leave_create_page();
                        app.open_question_bank();
                    }
                    ui.add_space(20.0);
                });
            });
            return;
        }

        for question in &pool {
            let is_selected = selected.contains(&question.id);
            card(ui, is_selected, |ui| {
                ui.horizontal(|ui| {
                    let mut checked = is_selected;
                    if ui.checkbox(&mut checked, "").changed() {
                        toggled = Some(question.id.clone());
                    }
                    question_heading(ui, question);
                });
                ui.add_space(6.0);
                option_grid(ui, &format!("pool_opts_{}", question.id), &question.options);
            });
            ui.add_space(8.0);
        }
    });

    if let Some(id) = toggled {
        app.toggle_draft_question(&id);
    }
}
