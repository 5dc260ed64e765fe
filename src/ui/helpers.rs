// src/ui/helpers.rs
use crate::view_models::{OptionRow, QuestionCard};
use egui::{Color32, Frame, RichText, Ui};

const CORRECT_FILL: Color32 = Color32::from_rgb(220, 252, 231);
const CORRECT_TEXT: Color32 = Color32::from_rgb(22, 101, 52);

/// Cabecera de página: título grande y subtítulo atenuado.
pub fn page_header(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.heading(RichText::new(title).size(26.0).strong());
    ui.label(RichText::new(subtitle).weak());
    ui.add_space(12.0);
}

/// Tarjeta con marco; `highlight` la resalta (p.ej. pregunta seleccionada).
pub fn card<R>(ui: &mut Ui, highlight: bool, inner: impl FnOnce(&mut Ui) -> R) -> R {
    let stroke = if highlight {
        egui::Stroke::new(2.0, ui.visuals().selection.bg_fill)
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    };
    Frame::group(ui.style())
        .stroke(stroke)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            inner(ui)
        })
        .inner
}

/// Opciones en dos columnas; la correcta con la letra en verde.
pub fn option_grid(ui: &mut Ui, id_salt: &str, options: &[OptionRow]) {
    egui::Grid::new(id_salt)
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            for (i, option) in options.iter().enumerate() {
                option_cell(ui, option);
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}

fn option_cell(ui: &mut Ui, option: &OptionRow) {
    ui.horizontal(|ui| {
        let letter = RichText::new(option.label.to_string()).monospace();
        if option.correct {
            Frame::new()
                .fill(CORRECT_FILL)
                .inner_margin(egui::Margin::symmetric(6, 2))
                .show(ui, |ui| ui.label(letter.color(CORRECT_TEXT).strong()));
            ui.label(RichText::new(&option.text).strong());
        } else {
            Frame::new()
                .fill(ui.visuals().faint_bg_color)
                .inner_margin(egui::Margin::symmetric(6, 2))
                .show(ui, |ui| ui.label(letter));
            ui.label(option.text.as_str());
        }
    });
}

/// Texto y categoría de una pregunta, como en las listas del banco.
pub fn question_heading(ui: &mut Ui, card: &QuestionCard) {
    ui.vertical(|ui| {
        ui.label(RichText::new(&card.text).size(17.0).strong());
        ui.label(RichText::new(card.category_label()).weak());
    });
}
