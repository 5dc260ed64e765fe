use crate::QuizApp;
use crate::app::NotificationKind;
use crate::model::AppState;
use egui::{Align2, CentralPanel, Color32, Context, Frame, RichText, ScrollArea, Ui};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.strong("Quiz Creator");
            ui.separator();

            if ui
                .selectable_label(matches!(app.state, AppState::Home | AppState::QuizDetail), "📋 Quizzes")
                .clicked()
            {
                if app.state == AppState::CreateQuiz {
                    app.leave_create_page();
                } else {
                    app.open_home();
                }
            }
            if ui
                .selectable_label(app.state == AppState::QuestionBank, "🗄 Manage Questions")
                .clicked()
            {
                app.open_question_bank();
            }
        });
    });
}

/// Avisos descartables en la esquina inferior derecha.
pub fn notification_area(app: &mut QuizApp, ctx: &Context) {
    if app.notifications.is_empty() {
        return;
    }

    let mut dismissed = None;
    egui::Area::new(egui::Id::new("notifications"))
        .anchor(Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .show(ctx, |ui| {
            ui.set_max_width(320.0);
            for n in &app.notifications {
                let (accent, icon) = match n.kind {
                    NotificationKind::Success => (Color32::from_rgb(46, 160, 67), "✔"),
                    NotificationKind::Error => (Color32::from_rgb(218, 54, 51), "⚠"),
                };
                Frame::popup(ui.style())
                    .stroke(egui::Stroke::new(1.0, accent))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(icon).color(accent));
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&n.title).strong());
                                if !n.description.is_empty() {
                                    ui.label(n.description.as_str());
                                }
                            });
                            if ui.small_button("✕").on_hover_text("Dismiss").clicked() {
                                dismissed = Some(n.id);
                            }
                        });
                    });
                ui.add_space(6.0);
            }
        });

    if let Some(id) = dismissed {
        app.dismiss_notification(id);
    }
}

/// Página con scroll y ancho de contenido limitado.
pub fn page(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_max_width(w);
                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        ui.add_space(16.0);
                        inner(ui);
                        ui.add_space(24.0);
                    });
                });
            });
    });
}
