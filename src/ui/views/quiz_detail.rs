use crate::QuizApp;
use crate::ui::helpers::{card, option_grid, page_header};
use crate::ui::layout::page;
use crate::view_models::QuizEntryRow;
use egui::{Context, RichText};

pub fn ui_quiz_detail(app: &mut QuizApp, ctx: &Context) {
    let Some((quiz, rows)) = app.viewing_quiz_rows() else {
        app.open_home();
        return;
    };

    page(ctx, 900.0, |ui| {
        ui.horizontal(|ui| {
            if ui.button("⬅").on_hover_text("Back to quizzes").clicked() {
                app.open_home();
            }
            ui.vertical(|ui| page_header(ui, &quiz.title, &quiz.description));
        });
        ui.label(RichText::new(quiz.created_label()).small().weak());
        ui.add_space(10.0);

        if rows.is_empty() {
            ui.label(RichText::new("This quiz has no questions.").weak());
            return;
        }

        for row in &rows {
            match row {
                QuizEntryRow::Question { card: question, .. } => {
                    card(ui, false, |ui| {
                        ui.label(RichText::new(row.label()).size(17.0).strong());
                        ui.label(RichText::new(question.category_label()).weak());
                        ui.add_space(6.0);
                        option_grid(ui, &format!("quiz_opts_{}", question.id), &question.options);
                    });
                }
                // La pregunta se borró del banco después de crear el quiz
                QuizEntryRow::Missing { id, .. } => {
                    card(ui, false, |ui| {
                        ui.label(
                            RichText::new(row.label())
                                .italics()
                                .color(ui.visuals().warn_fg_color),
                        );
                        ui.label(RichText::new(format!("id: {id}")).small().weak());
                    });
                }
            }
            ui.add_space(8.0);
        }
    });
}
