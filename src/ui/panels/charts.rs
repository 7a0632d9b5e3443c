// DataViz Pro - ui/panels/charts.rs
//
// Charts panel: "Create New Chart" and a grid of placeholder chart tiles.

use crate::app::state::AppState;
use crate::core::fixtures::CHARTS;
use crate::core::model::IconRef;
use crate::ui::motion::{self, Reveal};
use crate::ui::{theme, widgets};
use crate::util::constants::{CARD_STAGGER_SECS, PANEL_REVEAL_SECS};

const GRID_COLUMNS: usize = 3;
const PREVIEW_HEIGHT: f32 = 128.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, elapsed: f32) {
    let dark = state.dark_mode;

    ui.horizontal(|ui| {
        widgets::panel_heading(ui, "Your Charts", dark);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if widgets::gradient_button(ui, "Create New Chart", 14.0).clicked() {
                state.request_chart();
            }
        });
    });
    ui.add_space(20.0);

    for (row_index, row) in CHARTS.chunks(GRID_COLUMNS).enumerate() {
        ui.columns(GRID_COLUMNS, |columns| {
            for (col_index, (col, chart)) in columns.iter_mut().zip(row).enumerate() {
                let i = row_index * GRID_COLUMNS + col_index;
                // Tiles start one stagger step in, matching their 1-based numbering.
                let reveal =
                    Reveal::staggered(CARD_STAGGER_SECS, CARD_STAGGER_SECS, i, PANEL_REVEAL_SECS);
                motion::revealed(col, reveal, elapsed, |ui| {
                    theme::card_frame(dark)
                        .inner_margin(egui::Margin::same(16))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            let (rect, _) = ui.allocate_exact_size(
                                egui::vec2(ui.available_width(), PREVIEW_HEIGHT),
                                egui::Sense::hover(),
                            );
                            theme::paint_horizontal_gradient(
                                ui.painter(),
                                rect,
                                theme::PURPLE_500.gamma_multiply(0.2),
                                theme::BLUE_500.gamma_multiply(0.2),
                            );
                            ui.painter().text(
                                rect.center(),
                                egui::Align2::CENTER_CENTER,
                                theme::glyph(IconRef::BarChart),
                                egui::FontId::proportional(32.0),
                                theme::PURPLE_400,
                            );
                            ui.add_space(12.0);
                            ui.label(
                                egui::RichText::new(format!("Chart {}", chart.number))
                                    .strong()
                                    .color(theme::text_colour(dark)),
                            );
                            ui.label(
                                egui::RichText::new(chart.caption)
                                    .small()
                                    .color(theme::GRAY_400),
                            );
                        });
                });
            }
        });
        ui.add_space(24.0);
    }
}
