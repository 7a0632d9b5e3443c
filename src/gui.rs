// DataViz Pro - gui.rs
//
// Top-level eframe::App implementation.
// Chooses between the landing page and the dashboard shell from the
// controller's role each frame.

use crate::app::state::AppState;
use crate::ui;

/// The DataViz Pro application.
pub struct DataVizApp {
    pub state: AppState,
    /// Theme and font size last pushed to the egui context.
    applied_style: Option<(bool, f32)>,
}

impl DataVizApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            applied_style: None,
        }
    }
}

impl eframe::App for DataVizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let wanted = (self.state.dark_mode, self.state.font_size);
        if self.applied_style != Some(wanted) {
            ui::theme::apply_style(ctx, wanted.0, wanted.1);
            self.applied_style = Some(wanted);
            tracing::debug!(dark = wanted.0, font_size = wanted.1, "Style applied");
        }

        if self.state.controller.is_signed_in() {
            ui::shell::render(ctx, &mut self.state);
        } else {
            ui::landing::render(ctx, &mut self.state);
        }

        ui::panels::about::render(ctx, &mut self.state);
    }
}
