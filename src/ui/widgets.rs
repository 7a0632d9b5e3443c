// DataViz Pro - ui/widgets.rs
//
// Small reusable widgets: gradient buttons, icon tiles, badges and the
// confidence bar.

use crate::core::model::{Accent, IconRef};
use crate::ui::theme;
use egui::{Align2, Color32, FontId, Rect, Response, Sense, Ui, Vec2};

/// A pill-shaped button filled with the purple-to-blue brand gradient.
pub fn gradient_button(ui: &mut Ui, text: &str, font_size: f32) -> Response {
    let font = FontId::proportional(font_size);
    let galley = ui
        .painter()
        .layout_no_wrap(text.to_owned(), font.clone(), Color32::WHITE);
    let padding = Vec2::new(font_size * 1.6, font_size * 0.8);
    let size = galley.size() + padding * 2.0;
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let (left, right) = if response.hovered() {
            (
                theme::PURPLE_600.gamma_multiply(0.85),
                theme::BLUE_600.gamma_multiply(0.85),
            )
        } else {
            (theme::PURPLE_600, theme::BLUE_600)
        };
        let painter = ui.painter().with_clip_rect(rect);
        theme::paint_horizontal_gradient(&painter, rect, left, right);
        ui.painter()
            .text(rect.center(), Align2::CENTER_CENTER, text, font, Color32::WHITE);
    }
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// A rounded outline button on a translucent fill.
pub fn outline_button(ui: &mut Ui, text: &str, font_size: f32, dark_mode: bool) -> Response {
    let label = egui::RichText::new(text)
        .size(font_size)
        .color(theme::text_colour(dark_mode));
    ui.add(
        egui::Button::new(label)
            .fill(theme::card_fill(dark_mode))
            .stroke(egui::Stroke::new(2.0, Color32::from_white_alpha(51)))
            .min_size(Vec2::new(0.0, font_size * 2.6)),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Square tile with an accent gradient and a centred glyph.
pub fn icon_tile(ui: &mut Ui, icon: IconRef, accent: Accent, edge: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(edge), Sense::hover());
    if ui.is_rect_visible(rect) {
        let (left, right) = theme::accent_stops(accent);
        theme::paint_horizontal_gradient(ui.painter(), rect, left, right);
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            theme::glyph(icon),
            FontId::proportional(edge * 0.5),
            Color32::WHITE,
        );
    }
    response
}

/// Round avatar disc with an optional glyph.
pub fn avatar(ui: &mut Ui, icon: Option<IconRef>, diameter: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(diameter), Sense::hover());
    if ui.is_rect_visible(rect) {
        let (left, right) = theme::accent_stops(Accent::PurpleBlue);
        let radius = diameter / 2.0;
        ui.painter().circle_filled(rect.center(), radius, left);
        // Right half tinted toward the second stop.
        ui.painter().circle_filled(
            rect.center() + Vec2::new(radius * 0.35, 0.0),
            radius * 0.65,
            right.gamma_multiply(0.6),
        );
        if let Some(icon) = icon {
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                theme::glyph(icon),
                FontId::proportional(diameter * 0.5),
                Color32::WHITE,
            );
        }
    }
    response
}

/// Small rounded label with explicit (background, text) colours.
pub fn badge(ui: &mut Ui, text: &str, (fill, colour): (Color32, Color32)) -> Response {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(255))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(colour));
        })
        .response
}

/// Horizontal bar showing `percent` of its width in a green-to-blue gradient.
pub fn confidence_bar(ui: &mut Ui, percent: u8, width: f32) -> Response {
    let height = 8.0;
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());
    if ui.is_rect_visible(rect) {
        let radius = egui::CornerRadius::same(4);
        ui.painter()
            .rect_filled(rect, radius, Color32::from_white_alpha(26));
        let filled = Rect::from_min_size(
            rect.min,
            Vec2::new(rect.width() * f32::from(percent.min(100)) / 100.0, height),
        );
        theme::paint_horizontal_gradient(ui.painter(), filled, theme::GREEN_500, theme::BLUE_500);
    }
    response
}

/// Section heading in the large bold style used by every panel.
pub fn panel_heading(ui: &mut Ui, text: &str, dark_mode: bool) {
    ui.label(
        egui::RichText::new(text)
            .size(24.0)
            .strong()
            .color(theme::text_colour(dark_mode)),
    );
}

/// Amber "N warnings" label; hovering lists each warning.
pub fn warning_indicator(ui: &mut Ui, summary: &str, warnings: &[String]) -> Response {
    ui.label(
        egui::RichText::new(format!("\u{26a0} {summary}"))
            .small()
            .color(theme::AMBER_300),
    )
    .on_hover_ui(|ui| {
        for warning in warnings {
            ui.label(warning);
        }
    })
}
