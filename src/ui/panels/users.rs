// DataViz Pro - ui/panels/users.rs
//
// Admin user management panel: mock user table with role/status badges.
// "Add User" and "Edit" go through the user directory collaborator.

use crate::app::state::AppState;
use crate::core::fixtures::USERS;
use crate::ui::motion::{self, Reveal};
use crate::ui::{theme, widgets};
use crate::util::constants::PANEL_REVEAL_SECS;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, elapsed: f32) {
    let dark = state.dark_mode;

    ui.horizontal(|ui| {
        widgets::panel_heading(ui, "User Management", dark);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if widgets::gradient_button(ui, "Add User", 14.0).clicked() {
                state.request_add_user();
            }
        });
    });
    ui.add_space(20.0);

    let mut edit_clicked = None;
    motion::revealed(ui, Reveal::new(0.0, PANEL_REVEAL_SECS), elapsed, |ui| {
        theme::card_frame(dark).show(ui, |ui| {
            ui.set_width(ui.available_width());
            egui::ScrollArea::horizontal()
                .id_salt("users_table")
                .show(ui, |ui| {
                    egui::Grid::new("users_grid")
                        .num_columns(5)
                        .striped(true)
                        .spacing([32.0, 12.0])
                        .min_col_width(80.0)
                        .show(ui, |ui| {
                            for header in ["Name", "Email", "Role", "Status", "Actions"] {
                                ui.label(
                                    egui::RichText::new(header)
                                        .strong()
                                        .color(theme::text_colour(dark)),
                                );
                            }
                            ui.end_row();

                            for (i, user) in USERS.iter().enumerate() {
                                ui.label(
                                    egui::RichText::new(user.name).color(theme::text_colour(dark)),
                                );
                                ui.label(
                                    egui::RichText::new(user.email)
                                        .color(theme::muted_colour(dark)),
                                );
                                widgets::badge(ui, user.role.label(), theme::role_badge(user.role));
                                widgets::badge(
                                    ui,
                                    user.status.label(),
                                    theme::status_badge(user.status),
                                );
                                if ui.small_button("Edit").clicked() {
                                    edit_clicked = Some(i);
                                }
                                ui.end_row();
                            }
                        });
                });
        });
    });

    if let Some(i) = edit_clicked {
        if let Some(row) = USERS.get(i) {
            state.request_edit_user(i, row);
        }
    }
}
