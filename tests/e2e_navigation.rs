// DataViz Pro - tests/e2e_navigation.rs
//
// End-to-end tests for role selection and panel navigation, driven through
// the same public surface the GUI uses: AppState, the view controller, the
// role registry and config loading from a real file on disk.
//
// No egui context is involved; every user-visible transition the GUI can
// trigger is reachable from these calls.

use dataviz_pro::app::controller::ViewController;
use dataviz_pro::app::state::AppState;
use dataviz_pro::core::model::{PanelId, Role};
use dataviz_pro::core::registry;
use dataviz_pro::platform::config::{load_config, AppConfig};
use dataviz_pro::util::constants::CONFIG_FILE_NAME;
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

fn fresh_state() -> AppState {
    AppState::new(&AppConfig::default())
}

fn menu_ids(role: Role) -> Vec<PanelId> {
    registry::menu(role).iter().map(|e| e.id).collect()
}

// =============================================================================
// Landing -> dashboard -> landing
// =============================================================================

/// A user session walks the whole user menu and logs out again.
#[test]
fn e2e_user_session_round_trip() {
    let mut state = fresh_state();
    assert!(!state.controller.is_signed_in());
    assert_eq!(state.controller.active_panel(), None);

    state.sign_in(Role::User);
    assert_eq!(state.controller.role(), Role::User);
    assert_eq!(state.controller.active_panel(), Some(PanelId::Dashboard));
    assert_eq!(state.status_message, "Signed in as User.");
    assert!(state.signed_in_at.is_some());

    for panel in menu_ids(Role::User) {
        assert!(state.open_panel(panel), "user should reach {panel}");
        assert_eq!(state.controller.active_panel(), Some(panel));
    }

    state.sign_out();
    assert_eq!(state.controller.role(), Role::Guest);
    assert_eq!(state.controller.active_panel(), None);
    assert!(state.signed_in_at.is_none());
}

/// The admin lands on Dashboard and can reach every admin panel, but not the
/// user-only ones.
#[test]
fn e2e_admin_cannot_open_user_panels() {
    let mut state = fresh_state();
    state.sign_in(Role::Admin);
    assert_eq!(state.status_message, "Signed in as Admin User.");

    assert!(state.open_panel(PanelId::Users));
    assert!(!state.open_panel(PanelId::Upload));
    assert!(!state.open_panel(PanelId::Charts));
    assert!(!state.open_panel(PanelId::Insights));
    assert_eq!(state.controller.active_panel(), Some(PanelId::Users));
}

/// A user asking for an admin panel is ignored.
#[test]
fn e2e_user_cannot_open_admin_panels() {
    let mut state = fresh_state();
    state.sign_in(Role::User);
    state.open_panel(PanelId::Charts);

    for panel in [PanelId::Users, PanelId::Analytics, PanelId::Settings] {
        assert!(!state.open_panel(panel));
        assert_eq!(state.controller.active_panel(), Some(PanelId::Charts));
    }
}

/// Switching role by logging out and back in starts at the new role's
/// default panel, never a stale panel from the previous role.
#[test]
fn e2e_role_switch_resets_panel() {
    let mut state = fresh_state();
    state.sign_in(Role::User);
    state.open_panel(PanelId::Insights);
    state.sign_out();

    state.sign_in(Role::Admin);
    assert_eq!(state.controller.active_panel(), Some(PanelId::Dashboard));
}

/// The sidebar flag survives navigation and a full logout.
#[test]
fn e2e_sidebar_flag_survives_logout() {
    let mut state = fresh_state();
    assert!(state.controller.sidebar_open());

    state.sign_in(Role::Admin);
    state.toggle_sidebar();
    state.open_panel(PanelId::Analytics);
    state.sign_out();
    assert!(!state.controller.sidebar_open());

    state.sign_in(Role::User);
    assert!(!state.controller.sidebar_open());
    state.toggle_sidebar();
    assert!(state.controller.sidebar_open());
}

// =============================================================================
// Invariant sweep
// =============================================================================

/// Whatever sequence of requests arrives, the active panel is always one the
/// current role's menu contains, and present exactly when signed in.
#[test]
fn e2e_active_panel_always_in_menu() {
    let mut controller = ViewController::default();
    let panels = PanelId::all();
    let roles = Role::all();

    // Deterministic pseudo-random walk over role and panel requests.
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        match seed % 5 {
            0 => controller.select_role(roles[(seed as usize / 5) % roles.len()]),
            1 => controller.logout(),
            2 => controller.toggle_sidebar(),
            _ => {
                controller.select_panel(panels[(seed as usize / 5) % panels.len()]);
            }
        }

        match controller.active_panel() {
            Some(panel) => {
                assert!(controller.is_signed_in());
                assert!(registry::is_allowed(controller.role(), panel));
            }
            None => assert_eq!(controller.role(), Role::Guest),
        }
    }
}

// =============================================================================
// Collaborator stubs
// =============================================================================

/// Dropping files on the upload panel discards them with a status message.
#[test]
fn e2e_dropped_files_are_discarded() {
    let mut state = fresh_state();
    state.sign_in(Role::User);
    state.open_panel(PanelId::Upload);
    state.drag_active = true;

    let accepted = state.submit_files(&[PathBuf::from("sales.xlsx"), PathBuf::from("q3.csv")]);
    assert_eq!(accepted, 0);
    assert!(!state.drag_active);
    assert_eq!(
        state.status_message,
        "Spreadsheet import is not available in this build; 2 file(s) discarded."
    );
    // Navigation is untouched.
    assert_eq!(state.controller.active_panel(), Some(PanelId::Upload));
}

/// Chart, insight and user actions report the missing service.
#[test]
fn e2e_stub_actions_report_unavailable() {
    let mut state = fresh_state();
    state.sign_in(Role::User);

    state.request_chart();
    assert_eq!(state.status_message, "Chart rendering is not available in this build.");

    state.request_insights();
    assert_eq!(
        state.status_message,
        "AI insight generation is not available in this build."
    );

    state.request_add_user();
    assert_eq!(state.status_message, "User management is not available in this build.");
}

// =============================================================================
// Config on disk
// =============================================================================

/// Preferences from config.toml reach the initial state.
#[test]
fn e2e_config_file_sets_initial_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        "[ui]\ntheme = \"light\"\nfont_size = 16.0\nsidebar_open = false\nanimations = false\n",
    )
    .unwrap();

    let (config, warnings) = load_config(&path);
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");

    let state = AppState::new(&config);
    assert!(!state.dark_mode);
    assert_eq!(state.font_size, 16.0);
    assert!(!state.animations);
    assert!(!state.controller.sidebar_open());
    assert!(!state.controller.is_signed_in());
}

/// A broken config file still yields a usable state, and its warning stays
/// visible after signing in.
#[test]
fn e2e_broken_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[ui\ntheme = ").unwrap();

    let (config, warnings) = load_config(&path);
    assert_eq!(config, AppConfig::default());
    assert_eq!(warnings.len(), 1);

    let mut state = AppState::new(&config);
    state.record_warnings(warnings);
    assert!(state.status_message.starts_with("Config parse error"));

    state.sign_in(Role::Admin);
    assert_eq!(state.controller.active_panel(), Some(PanelId::Dashboard));
    assert_eq!(state.warning_summary().as_deref(), Some("1 warning"));
}
