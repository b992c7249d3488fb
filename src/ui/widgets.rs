use egui::{Color32, Response, RichText, Sense, Ui};

use crate::ui::theme::{self, Palette};

/// Small rounded label, used for status, priority and counts.
pub fn pill(ui: &mut Ui, text: impl Into<String>, fill: Color32, text_color: Color32) -> Response {
    let frame = egui::Frame {
        fill,
        rounding: egui::Rounding::same(4.0),
        inner_margin: egui::Margin::symmetric(6.0, 1.0),
        outer_margin: egui::Margin::ZERO,
        stroke: egui::Stroke::NONE,
        shadow: egui::epaint::Shadow::NONE,
    };
    frame
        .show(ui, |ui| {
            ui.label(RichText::new(text.into()).size(11.0).color(text_color));
        })
        .response
}

/// Uppercase tag chip.
pub fn tag(ui: &mut Ui, text: &str, pal: &Palette) -> Response {
    let frame = egui::Frame {
        fill: pal.bg_header,
        rounding: egui::Rounding::same(3.0),
        inner_margin: egui::Margin::symmetric(5.0, 1.0),
        outer_margin: egui::Margin::ZERO,
        stroke: egui::Stroke::new(1.0, pal.border),
        shadow: egui::epaint::Shadow::NONE,
    };
    frame
        .show(ui, |ui| {
            ui.label(
                RichText::new(text.to_uppercase())
                    .size(9.5)
                    .color(pal.text_secondary),
            );
        })
        .response
}

/// Round avatar with the first two letters of `name`.
pub fn avatar(ui: &mut Ui, name: &str, size: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());
    let initials: String = name.chars().take(2).collect::<String>().to_uppercase();
    let painter = ui.painter();
    painter.circle_filled(rect.center(), size / 2.0, theme::avatar_color(name));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(size * 0.42),
        Color32::from_rgb(55, 65, 81),
    );
    response.on_hover_text(name)
}
