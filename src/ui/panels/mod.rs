// DataViz Pro - ui/panels/mod.rs
//
// Dashboard content panels and the PanelId -> renderer dispatch.

pub mod about;
pub mod analytics;
pub mod charts;
pub mod dashboard;
pub mod insights;
pub mod settings;
pub mod upload;
pub mod users;

use crate::app::state::AppState;
use crate::core::model::PanelId;
use crate::util::constants::PANEL_REVEAL_SECS;

/// Longest stagger + duration used by any panel; repaint until it has passed.
const PANEL_ANIMATION_WINDOW_SECS: f32 = 1.5;

/// Render the content area for `panel`.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, panel: PanelId) {
    let elapsed = if state.animations {
        let now = ui.input(|i| i.time);
        let start = state.panel_reveal_start(now);
        (now - start) as f32
    } else {
        f32::INFINITY
    };
    if elapsed < PANEL_ANIMATION_WINDOW_SECS {
        ui.ctx().request_repaint();
    }

    let fade = crate::ui::motion::Reveal::new(0.0, PANEL_REVEAL_SECS).progress(elapsed);
    ui.multiply_opacity(fade);

    match panel {
        PanelId::Dashboard => dashboard::render(ui, state, elapsed),
        PanelId::Upload => upload::render(ui, state, elapsed),
        PanelId::Charts => charts::render(ui, state, elapsed),
        PanelId::Insights => insights::render(ui, state, elapsed),
        PanelId::Users => users::render(ui, state, elapsed),
        PanelId::Analytics => analytics::render(ui, state, elapsed),
        PanelId::Settings => settings::render(ui, state),
    }
}
