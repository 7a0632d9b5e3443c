// DataViz Pro - app/state.rs
//
// Application state management. Holds the view controller, the
// collaborator set, display preferences and transient UI flags.
// Owned by the eframe::App implementation and passed by &mut to panels.

use crate::app::controller::ViewController;
use crate::core::collaborators::{
    ChartCollaborator, ChartConfig, Collaborators, InsightCollaborator, TabularData,
    UploadCollaborator, UserDirectory, UserRecord,
};
use crate::core::model::{AccountStatus, PanelId, Role, UserRow};
use crate::core::registry;
use crate::platform::config::AppConfig;
use crate::util::constants::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::util::error::CollaboratorError;
use chrono::{DateTime, Local};
use std::path::PathBuf;

const READY_MESSAGE: &str = "Ready.";

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Role / panel / sidebar state machine.
    pub controller: ViewController,

    /// External services (stubs in this build).
    pub collaborators: Collaborators,

    /// Dark (true) or light (false) visuals.
    pub dark_mode: bool,

    /// Body font size in points.
    pub font_size: f32,

    /// Whether reveal and parallax animations run.
    pub animations: bool,

    /// Status message for the dashboard status bar.
    pub status_message: String,

    /// Non-fatal warnings collected at startup (config validation).
    pub warnings: Vec<String>,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// A file is currently being dragged over the window.
    pub drag_active: bool,

    /// Vertical scroll offset of the landing page, for parallax.
    pub landing_scroll_y: f32,

    /// Set by the "Features" nav button; consumed by the landing page.
    pub scroll_to_features: bool,

    /// Local time at which the current role was selected.
    pub signed_in_at: Option<DateTime<Local>>,

    landing_shown_at: Option<f64>,
    panel_shown_at: Option<f64>,
}

impl AppState {
    /// Create initial state from the validated config.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            controller: ViewController::new(config.sidebar_open),
            collaborators: Collaborators::unavailable(),
            dark_mode: config.dark_mode,
            font_size: config.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
            animations: config.animations,
            status_message: READY_MESSAGE.to_string(),
            warnings: Vec::new(),
            show_about: false,
            drag_active: false,
            landing_scroll_y: 0.0,
            scroll_to_features: false,
            signed_in_at: None,
            landing_shown_at: None,
            panel_shown_at: None,
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Enter the dashboard as `role`.
    pub fn sign_in(&mut self, role: Role) {
        self.controller.select_role(role);
        self.panel_shown_at = None;
        self.drag_active = false;
        match registry::profile(role) {
            Some(profile) => {
                self.signed_in_at = Some(Local::now());
                self.status_message = format!("Signed in as {}.", profile.display_name);
            }
            None => {
                self.signed_in_at = None;
                self.landing_shown_at = None;
                self.status_message = READY_MESSAGE.to_string();
            }
        }
    }

    /// Leave the dashboard and return to the landing page.
    pub fn sign_out(&mut self) {
        self.controller.logout();
        self.signed_in_at = None;
        self.drag_active = false;
        self.landing_shown_at = None;
        self.landing_scroll_y = 0.0;
        self.panel_shown_at = None;
        self.status_message = READY_MESSAGE.to_string();
    }

    /// Show `panel` if allowed. Restarts the panel reveal when it changes.
    pub fn open_panel(&mut self, panel: PanelId) -> bool {
        let previous = self.controller.active_panel();
        if !self.controller.select_panel(panel) {
            return false;
        }
        if previous != Some(panel) {
            self.panel_shown_at = None;
            self.drag_active = false;
        }
        true
    }

    pub fn toggle_sidebar(&mut self) {
        self.controller.toggle_sidebar();
    }

    /// Keep startup warnings for the warning indicator and show the first
    /// on the status line.
    pub fn record_warnings(&mut self, warnings: Vec<String>) {
        if let Some(first) = warnings.first() {
            self.status_message = first.clone();
        }
        self.warnings.extend(warnings);
    }

    /// Short "N warning(s)" label, or `None` when startup was clean.
    pub fn warning_summary(&self) -> Option<String> {
        match self.warnings.len() {
            0 => None,
            1 => Some("1 warning".to_string()),
            n => Some(format!("{n} warnings")),
        }
    }

    // -------------------------------------------------------------------------
    // Reveal clocks
    // -------------------------------------------------------------------------

    /// Time (egui clock) at which the landing page was first drawn.
    pub fn landing_reveal_start(&mut self, now: f64) -> f64 {
        *self.landing_shown_at.get_or_insert(now)
    }

    /// Time (egui clock) at which the active panel was first drawn.
    pub fn panel_reveal_start(&mut self, now: f64) -> f64 {
        *self.panel_shown_at.get_or_insert(now)
    }

    // -------------------------------------------------------------------------
    // Preferences
    // -------------------------------------------------------------------------

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    // -------------------------------------------------------------------------
    // Collaborator actions
    // -------------------------------------------------------------------------

    /// Hand dropped or chosen files to the upload collaborator.
    ///
    /// Returns the number of files the collaborator accepted.
    pub fn submit_files(&mut self, paths: &[PathBuf]) -> usize {
        self.drag_active = false;
        let mut imported = 0;
        let mut last_error = None;
        for path in paths {
            match self.collaborators.upload.import(path) {
                Ok(data) => {
                    imported += 1;
                    tracing::info!(
                        path = %path.display(),
                        rows = data.rows.len(),
                        "Spreadsheet imported"
                    );
                }
                Err(e) => {
                    tracing::info!(path = %path.display(), error = %e, "Spreadsheet not imported");
                    last_error = Some(e);
                }
            }
        }
        self.status_message = match (imported, last_error) {
            (0, Some(e)) => format!("{e}; {} file(s) discarded.", paths.len()),
            (n, Some(e)) => format!("Imported {n} of {} file(s). {e}.", paths.len()),
            (n, None) => format!("Imported {n} file(s)."),
        };
        imported
    }

    /// "Create New Chart" on the Charts panel.
    pub fn request_chart(&mut self) {
        let config = ChartConfig {
            title: "New chart".to_string(),
            ..ChartConfig::default()
        };
        let result = self
            .collaborators
            .charts
            .render(&TabularData::default(), &config);
        self.report(result.map(|artifact| format!("Rendered chart '{}'.", artifact.title)));
    }

    /// "Refresh" on the AI Insights panel.
    pub fn request_insights(&mut self) {
        let result = self.collaborators.insights.analyse(&TabularData::default());
        self.report(result.map(|insights| format!("Generated {} insight(s).", insights.len())));
    }

    /// "Add User" on the Users panel.
    pub fn request_add_user(&mut self) {
        let draft = UserRecord {
            id: 0,
            name: String::new(),
            email: String::new(),
            role: Role::User,
            status: AccountStatus::Active,
        };
        let result = self.collaborators.users.create(draft);
        self.report(result.map(|user| format!("Added user {}.", user.email)));
    }

    /// "Edit" on a row of the Users panel.
    pub fn request_edit_user(&mut self, index: usize, row: &UserRow) {
        let record = UserRecord {
            id: index as u64 + 1,
            name: row.name.to_string(),
            email: row.email.to_string(),
            role: row.role,
            status: row.status,
        };
        let result = self.collaborators.users.update(record);
        self.report(result.map(|user| format!("Updated user {}.", user.email)));
    }

    fn report(&mut self, result: Result<String, CollaboratorError>) {
        self.status_message = match result {
            Ok(message) => message,
            Err(e) => {
                tracing::info!(error = %e, "Collaborator request refused");
                format!("{e}.")
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures;

    fn state() -> AppState {
        AppState::new(&AppConfig::default())
    }

    #[test]
    fn test_recorded_warnings_are_counted_and_surface_first() {
        let mut s = state();
        assert_eq!(s.warning_summary(), None);

        s.record_warnings(vec!["bad theme".to_string()]);
        assert_eq!(s.warning_summary().as_deref(), Some("1 warning"));
        assert_eq!(s.status_message, "bad theme");

        s.record_warnings(vec!["bad level".to_string(), "bad size".to_string()]);
        assert_eq!(s.warning_summary().as_deref(), Some("3 warnings"));
        assert_eq!(s.status_message, "bad level");
    }

    #[test]
    fn test_no_warnings_keeps_ready_message() {
        let mut s = state();
        s.record_warnings(Vec::new());
        assert_eq!(s.status_message, READY_MESSAGE);
        assert_eq!(s.warning_summary(), None);
    }

    #[test]
    fn test_new_state_is_on_landing() {
        let s = state();
        assert!(!s.controller.is_signed_in());
        assert!(s.signed_in_at.is_none());
        assert_eq!(s.status_message, READY_MESSAGE);
    }

    #[test]
    fn test_config_drives_initial_preferences() {
        let config = AppConfig {
            dark_mode: false,
            font_size: 18.0,
            sidebar_open: false,
            animations: false,
            log_level: None,
        };
        let s = AppState::new(&config);
        assert!(!s.dark_mode);
        assert_eq!(s.font_size, 18.0);
        assert!(!s.controller.sidebar_open());
        assert!(!s.animations);
    }

    #[test]
    fn test_sign_in_records_time_and_sign_out_clears_it() {
        let mut s = state();
        s.sign_in(Role::Admin);
        assert!(s.signed_in_at.is_some());
        assert_eq!(s.status_message, "Signed in as Admin User.");
        s.sign_out();
        assert!(s.signed_in_at.is_none());
        assert_eq!(s.controller.role(), Role::Guest);
        assert_eq!(s.controller.active_panel(), None);
    }

    #[test]
    fn test_open_panel_restarts_reveal_only_on_change() {
        let mut s = state();
        s.sign_in(Role::User);
        assert_eq!(s.panel_reveal_start(1.0), 1.0);
        assert!(s.open_panel(PanelId::Dashboard));
        assert_eq!(s.panel_reveal_start(2.0), 1.0);
        assert!(s.open_panel(PanelId::Charts));
        assert_eq!(s.panel_reveal_start(3.0), 3.0);
    }

    #[test]
    fn test_open_disallowed_panel_is_rejected() {
        let mut s = state();
        s.sign_in(Role::User);
        s.panel_reveal_start(1.0);
        assert!(!s.open_panel(PanelId::Users));
        assert_eq!(s.controller.active_panel(), Some(PanelId::Dashboard));
        assert_eq!(s.panel_reveal_start(5.0), 1.0);
    }

    #[test]
    fn test_submit_files_discards_payload_with_stub() {
        let mut s = state();
        s.sign_in(Role::User);
        s.open_panel(PanelId::Upload);
        s.drag_active = true;
        let imported = s.submit_files(&[PathBuf::from("sales_data.xlsx")]);
        assert_eq!(imported, 0);
        assert!(!s.drag_active);
        assert_eq!(
            s.status_message,
            "Spreadsheet import is not available in this build; 1 file(s) discarded."
        );
        assert_eq!(s.controller.active_panel(), Some(PanelId::Upload));
    }

    #[test]
    fn test_collaborator_actions_report_stub_refusal() {
        let mut s = state();
        s.sign_in(Role::Admin);
        s.request_add_user();
        assert_eq!(s.status_message, "User management is not available in this build.");
        s.request_edit_user(0, &fixtures::USERS[0]);
        assert_eq!(s.status_message, "User management is not available in this build.");
        s.request_chart();
        assert_eq!(s.status_message, "Chart rendering is not available in this build.");
        s.request_insights();
        assert_eq!(
            s.status_message,
            "AI insight generation is not available in this build."
        );
        assert_eq!(s.controller.role(), Role::Admin);
    }

    #[test]
    fn test_font_size_is_clamped() {
        let mut s = state();
        s.set_font_size(100.0);
        assert_eq!(s.font_size, MAX_FONT_SIZE);
        s.set_font_size(1.0);
        assert_eq!(s.font_size, MIN_FONT_SIZE);
    }

    #[test]
    fn test_sign_out_resets_landing_clock() {
        let mut s = state();
        assert_eq!(s.landing_reveal_start(1.0), 1.0);
        s.sign_in(Role::User);
        s.sign_out();
        assert_eq!(s.landing_reveal_start(9.0), 9.0);
    }
}
