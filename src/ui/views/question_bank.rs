use crate::QuizApp;
use crate::model::option_label;
use crate::ui::helpers::{card, option_grid, page_header, question_heading};
use crate::ui::layout::page;
use crate::view_models::QuestionCard;
use egui::{Align, Button, ComboBox, Context, Layout, RichText, TextEdit, Ui};

/// Acciones de la lista, aplicadas tras pintar para no pisar el préstamo de `app`.
enum ListAction {
    Edit(String),
    Delete(String),
}

pub fn ui_question_bank(app: &mut QuizApp, ctx: &Context) {
    let cards: Vec<QuestionCard> = app.filtered_question_cards();
    let filter_options = app.category_options();
    let editor_categories = app.editor_categories();

    let mut action: Option<ListAction> = None;

    page(ctx, 900.0, |ui| {
        ui.horizontal(|ui| {
            if ui.button("⬅").on_hover_text("Back to quizzes").clicked() {
                app.open_home();
            }
            ui.vertical(|ui| page_header(ui, "Question Bank", "Manage your quiz questions"));
        });

        card(ui, app.editor.is_editing(), |ui| editor_form(app, ui, &editor_categories));
        ui.add_space(20.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("Existing Questions").size(20.0).strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ComboBox::from_id_salt("filter_category")
                    .selected_text(app.prefs.category_filter.clone())
                    .width(180.0)
                    .show_ui(ui, |ui| {
                        for category in &filter_options {
                            ui.selectable_value(
                                &mut app.prefs.category_filter,
                                category.clone(),
                                category.as_str(),
                            );
                        }
                    });
                ui.label("Filter by:");
            });
        });
        ui.add_space(8.0);

        if cards.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new("No questions found in this category.").weak());
            });
            return;
        }

        for question in &cards {
            card(ui, false, |ui| {
                ui.horizontal(|ui| {
                    question_heading(ui, question);
                    ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                        if ui.button("🗑").on_hover_text("Delete question").clicked() {
                            action = Some(ListAction::Delete(question.id.clone()));
                        }
                        if ui.button("✏").on_hover_text("Edit question").clicked() {
                            action = Some(ListAction::Edit(question.id.clone()));
                        }
                    });
                });
                ui.add_space(6.0);
                option_grid(ui, &format!("bank_opts_{}", question.id), &question.options);
            });
            ui.add_space(8.0);
        }
    });

    match action {
        Some(ListAction::Edit(id)) => app.edit_question(&id),
        Some(ListAction::Delete(id)) => app.request_delete(&id),
        None => {}
    }
}

/// Formulario del borrador. Cada cambio pasa por los setters del editor, así
/// marcar una opción como correcta desmarca las demás.
fn editor_form(app: &mut QuizApp, ui: &mut Ui, categories: &[String]) {
    let editing = app.editor.is_editing();
    if editing {
        ui.label(RichText::new("Edit Question").size(20.0).strong());
        ui.label(RichText::new("Changes replace the stored question").weak());
    } else {
        ui.label(RichText::new("Add New Question").size(20.0).strong());
        ui.label(RichText::new("Create a new question for your question bank").weak());
    }
    ui.add_space(10.0);

    ui.label("Question Text");
    let mut text = app.editor.draft().text.clone();
    if ui
        .add(
            TextEdit::multiline(&mut text)
                .hint_text("Enter your question")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        app.editor.set_text(text);
    }
    ui.add_space(8.0);

    ui.label("Category");
    let mut category = app.editor.draft().category.clone();
    ComboBox::from_id_salt("editor_category")
        .selected_text(category.clone())
        .width(220.0)
        .show_ui(ui, |ui| {
            for c in categories {
                ui.selectable_value(&mut category, c.clone(), c.as_str());
            }
        });
    if category != app.editor.draft().category {
        app.editor.set_category(category);
    }
    ui.add_space(8.0);

    ui.label("Answer Options");
    let options: Vec<(String, String, bool)> = app
        .editor
        .draft()
        .options
        .iter()
        .map(|o| (o.id.clone(), o.text.clone(), o.is_correct))
        .collect();
    for (index, (id, option_text, correct)) in options.into_iter().enumerate() {
        let letter = option_label(index);
        ui.horizontal(|ui| {
            if ui.radio(correct, "").clicked() {
                app.editor.set_correct(&id);
            }
            ui.label(format!("{letter}:"));
            let mut value = option_text;
            if ui
                .add(
                    TextEdit::singleline(&mut value)
                        .hint_text(format!("Option {letter}"))
                        .desired_width(f32::INFINITY),
                )
                .changed()
            {
                app.editor.set_option_text(&id, value);
            }
        });
    }
    ui.label(
        RichText::new("Select the radio button next to the correct answer")
            .small()
            .weak(),
    );
    ui.add_space(10.0);

    let submit_label = if editing { "💾 Save Changes" } else { "💾 Add Question to Bank" };
    let width = ui.available_width();
    if ui.add_sized([width, 32.0], Button::new(submit_label)).clicked() {
        app.submit_question();
    }
    if editing && ui.button("Cancel editing").clicked() {
        app.cancel_edit();
    }
}

/// Confirmación del borrado: la pregunta desaparece para siempre.
pub fn ui_confirm_delete(app: &mut QuizApp, ctx: &Context) {
    let Some(id) = app.confirm_delete.clone() else {
        return;
    };
    let text = app
        .questions
        .get(&id)
        .map(|q| q.text.clone())
        .unwrap_or_default();

    let mut confirmed = false;
    let mut cancelled = false;
    egui::Window::new("Delete question")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Delete this question from the bank? This cannot be undone.");
            if !text.is_empty() {
                ui.label(RichText::new(&text).italics());
            }
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Yes, delete").clicked() {
                    confirmed = true;
                }
                if ui.button("No").clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        app.confirm_delete_question();
    } else if cancelled {
        app.confirm_delete = None;
    }
}
