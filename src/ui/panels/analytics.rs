// DataViz Pro - ui/panels/analytics.rs
//
// Admin analytics panel: metric cards and a usage-trends placeholder.

use crate::app::state::AppState;
use crate::core::fixtures::ANALYTICS;
use crate::core::model::IconRef;
use crate::ui::motion::{self, Reveal};
use crate::ui::{theme, widgets};
use crate::util::constants::{CARD_STAGGER_SECS, PANEL_REVEAL_SECS};

const TRENDS_HEIGHT: f32 = 256.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, elapsed: f32) {
    let dark = state.dark_mode;

    widgets::panel_heading(ui, "Analytics Dashboard", dark);
    ui.add_space(20.0);

    ui.columns(ANALYTICS.len(), |columns| {
        for (i, (col, metric)) in columns.iter_mut().zip(ANALYTICS).enumerate() {
            let reveal = Reveal::staggered(0.0, CARD_STAGGER_SECS, i, PANEL_REVEAL_SECS);
            motion::revealed(col, reveal, elapsed, |ui| {
                theme::card_frame(dark).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(metric.title)
                            .small()
                            .color(theme::GRAY_400),
                    );
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(metric.value)
                                .size(30.0)
                                .strong()
                                .color(theme::text_colour(dark)),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Max), |ui| {
                            ui.label(
                                egui::RichText::new(metric.change)
                                    .small()
                                    .color(theme::GREEN_400),
                            );
                        });
                    });
                });
            });
        }
    });

    ui.add_space(24.0);

    theme::card_frame(dark).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new("Usage Trends")
                .size(20.0)
                .strong()
                .color(theme::text_colour(dark)),
        );
        ui.add_space(12.0);
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), TRENDS_HEIGHT),
            egui::Sense::hover(),
        );
        theme::paint_horizontal_gradient(
            ui.painter(),
            rect,
            theme::PURPLE_500.gamma_multiply(0.1),
            theme::BLUE_500.gamma_multiply(0.1),
        );
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            theme::glyph(IconRef::BarChart),
            egui::FontId::proportional(64.0),
            theme::PURPLE_400,
        );
    });
}
