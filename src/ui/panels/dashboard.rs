// DataViz Pro - ui/panels/dashboard.rs
//
// Dashboard panel: counter cards and the recent activity list.
// Shown to both roles with the same content.

use crate::app::state::AppState;
use crate::core::fixtures::{DASHBOARD_STATS, RECENT_ACTIVITY};
use crate::ui::motion::{self, Reveal};
use crate::ui::{theme, widgets};
use crate::util::constants::{CARD_STAGGER_SECS, PANEL_REVEAL_SECS};

/// Delay before the activity card starts revealing.
const ACTIVITY_DELAY_SECS: f32 = 0.3;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, elapsed: f32) {
    let dark = state.dark_mode;

    ui.columns(DASHBOARD_STATS.len(), |columns| {
        for (i, (col, stat)) in columns.iter_mut().zip(DASHBOARD_STATS).enumerate() {
            let reveal = Reveal::staggered(0.0, CARD_STAGGER_SECS, i, PANEL_REVEAL_SECS);
            motion::revealed(col, reveal, elapsed, |ui| {
                theme::card_frame(dark).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(stat.title)
                                    .small()
                                    .color(theme::GRAY_400),
                            );
                            ui.label(
                                egui::RichText::new(stat.value)
                                    .size(30.0)
                                    .strong()
                                    .color(theme::text_colour(dark)),
                            );
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                widgets::icon_tile(ui, stat.icon, stat.accent, 48.0);
                            },
                        );
                    });
                });
            });
        }
    });

    ui.add_space(24.0);

    let reveal = Reveal::new(ACTIVITY_DELAY_SECS, PANEL_REVEAL_SECS);
    motion::revealed(ui, reveal, elapsed, |ui| {
        theme::card_frame(dark).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("Recent Activity")
                    .size(20.0)
                    .strong()
                    .color(theme::text_colour(dark)),
            );
            ui.add_space(12.0);
            for activity in RECENT_ACTIVITY {
                egui::Frame::new()
                    .fill(egui::Color32::from_white_alpha(13))
                    .corner_radius(egui::CornerRadius::same(8))
                    .inner_margin(egui::Margin::same(12))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            let (dot, _) = ui.allocate_exact_size(
                                egui::Vec2::splat(8.0),
                                egui::Sense::hover(),
                            );
                            ui.painter()
                                .circle_filled(dot.center(), 4.0, theme::PURPLE_400);
                            ui.label(
                                egui::RichText::new(*activity).color(theme::muted_colour(dark)),
                            );
                        });
                    });
                ui.add_space(8.0);
            }
        });
    });
}
