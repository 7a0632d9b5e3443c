// DataViz Pro - ui/panels/upload.rs
//
// Upload panel: drop zone and "Choose File" button.
// Hovered files switch the zone into its active style; dropped or chosen
// files are handed to the upload collaborator, which in this build
// discards them.

use crate::app::state::AppState;
use crate::core::model::IconRef;
use crate::ui::motion::{self, Reveal};
use crate::ui::{theme, widgets};
use crate::util::constants::{PANEL_REVEAL_SECS, SPREADSHEET_EXTENSIONS};
use std::path::PathBuf;

const UPLOAD_CARD_WIDTH: f32 = 640.0;
const DROP_ZONE_HEIGHT: f32 = 260.0;

/// Update the drag flag and collect dropped paths for this frame.
fn poll_drag_and_drop(ctx: &egui::Context, state: &mut AppState) -> Vec<PathBuf> {
    let (hovering, dropped) = ctx.input(|i| {
        let dropped: Vec<PathBuf> = i
            .raw
            .dropped_files
            .iter()
            .filter_map(|f| f.path.clone())
            .collect();
        (!i.raw.hovered_files.is_empty(), dropped)
    });
    if hovering != state.drag_active {
        tracing::debug!(hovering, "Drag state changed");
    }
    state.drag_active = hovering;
    dropped
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState, elapsed: f32) {
    let dropped = poll_drag_and_drop(ui.ctx(), state);
    if !dropped.is_empty() {
        state.submit_files(&dropped);
    }

    let dark = state.dark_mode;
    let reveal = Reveal::new(0.0, PANEL_REVEAL_SECS);

    ui.vertical_centered(|ui| {
        ui.set_max_width(UPLOAD_CARD_WIDTH);
        motion::revealed(ui, reveal, elapsed, |ui| {
            theme::card_frame(dark).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    widgets::panel_heading(ui, "Upload Excel File", dark);
                });
                ui.add_space(20.0);
                drop_zone(ui, state);
            });
        });
    });
}

fn drop_zone(ui: &mut egui::Ui, state: &mut AppState) {
    let dark = state.dark_mode;
    let active = state.drag_active;
    let fill = if active {
        theme::PURPLE_400.gamma_multiply(0.1)
    } else {
        egui::Color32::TRANSPARENT
    };

    let response = egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(theme::CARD_RADIUS))
        .inner_margin(egui::Margin::same(48))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(DROP_ZONE_HEIGHT - 96.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(theme::glyph(IconRef::Upload))
                        .size(56.0)
                        .color(theme::PURPLE_400),
                );
                ui.add_space(12.0);
                let caption = if active {
                    "Drop your file here"
                } else {
                    "Drag & drop your Excel file"
                };
                ui.label(
                    egui::RichText::new(caption)
                        .size(20.0)
                        .strong()
                        .color(theme::text_colour(dark)),
                );
                ui.label(egui::RichText::new("or click to browse").color(theme::GRAY_400));
                ui.add_space(20.0);
                if widgets::gradient_button(ui, "Choose File", 15.0).clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Spreadsheets", SPREADSHEET_EXTENSIONS)
                        .pick_file()
                    {
                        state.submit_files(&[path]);
                    }
                }
            });
        })
        .response;

    let hovered = response.hovered();
    let outline = if active {
        theme::PURPLE_400
    } else if hovered {
        theme::PURPLE_400.gamma_multiply(0.5)
    } else {
        egui::Color32::from_white_alpha(77)
    };
    paint_dashed_outline(ui.painter(), response.rect, egui::Stroke::new(2.0, outline));
}

fn paint_dashed_outline(painter: &egui::Painter, rect: egui::Rect, stroke: egui::Stroke) {
    let points = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    painter.extend(egui::Shape::dashed_line(&points, stroke, 8.0, 6.0));
}
