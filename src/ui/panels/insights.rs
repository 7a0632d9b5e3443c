// DataViz Pro - ui/panels/insights.rs
//
// AI Insights panel: mock insight cards with confidence bars.

use crate::app::state::AppState;
use crate::core::fixtures::INSIGHTS;
use crate::core::model::{Accent, IconRef};
use crate::ui::motion::{self, Reveal};
use crate::ui::{theme, widgets};
use crate::util::constants::PANEL_REVEAL_SECS;

const INSIGHT_STAGGER_SECS: f32 = 0.2;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, elapsed: f32) {
    let dark = state.dark_mode;

    ui.horizontal(|ui| {
        widgets::panel_heading(ui, "AI Insights", dark);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if widgets::outline_button(ui, "Refresh", 14.0, dark).clicked() {
                state.request_insights();
            }
        });
    });
    ui.add_space(20.0);

    for (i, item) in INSIGHTS.iter().enumerate() {
        let reveal = Reveal::staggered(0.0, INSIGHT_STAGGER_SECS, i, PANEL_REVEAL_SECS);
        motion::revealed(ui, reveal, elapsed, |ui| {
            theme::card_frame(dark).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_top(|ui| {
                    widgets::icon_tile(ui, IconRef::Brain, Accent::PurpleBlue, 48.0);
                    ui.add_space(12.0);
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(item.title)
                                .size(20.0)
                                .strong()
                                .color(theme::text_colour(dark)),
                        );
                        ui.add_space(4.0);
                        ui.label(
                            egui::RichText::new(item.narrative).color(theme::muted_colour(dark)),
                        );
                        ui.add_space(12.0);
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new("Confidence:")
                                    .small()
                                    .color(theme::GRAY_400),
                            );
                            let bar_width = (ui.available_width() - 48.0).max(40.0);
                            widgets::confidence_bar(ui, item.confidence, bar_width);
                            ui.label(
                                egui::RichText::new(format!("{}%", item.confidence))
                                    .small()
                                    .color(theme::text_colour(dark)),
                            );
                        });
                    });
                });
            });
        });
        ui.add_space(20.0);
    }
}
