// DataViz Pro - ui/panels/settings.rs
//
// Admin settings panel: runtime display preferences.
//
// Sections:
//   1. Appearance: theme and font size
//   2. Motion: reveal/parallax animations
//
// Values start from config.toml and are validated against the bounds in
// util::constants. Changes take effect immediately and last for the
// lifetime of the process.

use crate::app::state::AppState;
use crate::ui::{theme, widgets};
use crate::util::constants::{DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let dark = state.dark_mode;

    widgets::panel_heading(ui, "Settings", dark);
    ui.add_space(20.0);

    theme::card_frame(dark).show(ui, |ui| {
        ui.set_width(ui.available_width());

        // =========================================================
        // Section 1: Appearance
        // =========================================================
        ui.heading("Appearance");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("Theme:");
            if ui.selectable_label(state.dark_mode, "Dark").clicked() {
                state.dark_mode = true;
            }
            if ui.selectable_label(!state.dark_mode, "Light").clicked() {
                state.dark_mode = false;
            }
        });
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label("Font size:");
            let mut v = state.font_size;
            if ui
                .add(
                    egui::Slider::new(&mut v, MIN_FONT_SIZE..=MAX_FONT_SIZE)
                        .step_by(0.5)
                        .suffix(" pt"),
                )
                .changed()
            {
                state.set_font_size(v);
            }
            if (state.font_size - DEFAULT_FONT_SIZE).abs() > 0.1
                && ui
                    .small_button("Reset")
                    .on_hover_text(format!(
                        "Reset to the built-in default ({DEFAULT_FONT_SIZE} pt)"
                    ))
                    .clicked()
            {
                state.set_font_size(DEFAULT_FONT_SIZE);
            }
        });
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Scales all text in the application. Takes effect immediately.")
                .small()
                .weak(),
        );

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(6.0);

        // =========================================================
        // Section 2: Motion
        // =========================================================
        ui.heading("Motion");
        ui.add_space(8.0);
        if ui
            .checkbox(&mut state.animations, "Animate page reveals and parallax")
            .changed()
        {
            tracing::debug!(animations = state.animations, "Animation preference changed");
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(6.0);

        ui.label(
            egui::RichText::new(
                "Preferences are kept for this session only. \
                 Set defaults in config.toml.",
            )
            .small()
            .italics()
            .weak(),
        );
    });
}
