use crate::QuizApp;
use egui::{Align2, ComboBox, Context, Key, RichText, TextEdit};

pub fn ui_create_dialog(app: &mut QuizApp, ctx: &Context) {
    let choices = app.config.count_choices.clone();
    let Some(dialog) = app.create_dialog.as_mut() else {
        return;
    };

    let mut submit = false;
    let mut cancel = false;

    egui::Window::new("Create New Quiz")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(
                RichText::new("Enter a title and select how many questions to include in your quiz.")
                    .weak(),
            );
            ui.add_space(10.0);

            egui::Grid::new("create_quiz_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Title");
                    let title = ui.add(
                        TextEdit::singleline(&mut dialog.title)
                            .hint_text("Quiz title")
                            .desired_width(240.0),
                    );
                    if title.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                        submit = true;
                    }
                    ui.end_row();

                    ui.label("Questions");
                    ComboBox::from_id_salt("question_count")
                        .selected_text(format!("{} questions", dialog.count))
                        .show_ui(ui, |ui| {
                            for n in &choices {
                                ui.selectable_value(&mut dialog.count, *n, format!("{n} questions"));
                            }
                        });
                    ui.end_row();
                });

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Continue").clicked() {
                    submit = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if cancel {
        app.close_create_dialog();
    } else if submit {
        app.submit_create_dialog();
    }
}
