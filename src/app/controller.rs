// DataViz Pro - app/controller.rs
//
// Session/view controller: current role, active panel and sidebar flag.
// The active panel is always a member of the current role's menu; the
// fields are private so the only way to change the role is through
// select_role / logout, both of which reset the panel.

use crate::core::model::{PanelEntry, PanelId, Role};
use crate::core::registry;

/// Navigation state for the whole application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewController {
    role: Role,
    active_panel: Option<PanelId>,
    sidebar_open: bool,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(crate::util::constants::DEFAULT_SIDEBAR_OPEN)
    }
}

impl ViewController {
    /// Start on the landing page with no role selected.
    pub fn new(sidebar_open: bool) -> Self {
        Self {
            role: Role::Guest,
            active_panel: None,
            sidebar_open,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn active_panel(&self) -> Option<PanelId> {
        self.active_panel
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// True once a user or admin role has been selected.
    pub fn is_signed_in(&self) -> bool {
        self.role != Role::Guest
    }

    /// Sidebar entries for the current role.
    pub fn menu(&self) -> &'static [PanelEntry] {
        registry::menu(self.role)
    }

    /// Switch to `role` and show its default panel. The sidebar flag is kept.
    pub fn select_role(&mut self, role: Role) {
        self.role = role;
        self.active_panel = registry::default_panel(role);
        tracing::info!(role = %role, panel = ?self.active_panel, "Role selected");
    }

    /// Return to the landing page.
    pub fn logout(&mut self) {
        if self.is_signed_in() {
            tracing::info!(role = %self.role, "Logged out");
        }
        self.role = Role::Guest;
        self.active_panel = None;
    }

    /// Show `panel` if the current role may see it.
    ///
    /// Returns false (and changes nothing) for a panel outside the role's
    /// menu.
    pub fn select_panel(&mut self, panel: PanelId) -> bool {
        if !registry::is_allowed(self.role, panel) {
            tracing::debug!(
                role = %self.role,
                panel = %panel,
                "Ignoring panel not offered to role"
            );
            return false;
        }
        self.active_panel = Some(panel);
        tracing::debug!(panel = %panel, "Panel selected");
        true
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in(role: Role, panel: PanelId) -> ViewController {
        let mut c = ViewController::default();
        c.select_role(role);
        assert!(c.select_panel(panel));
        c
    }

    #[test]
    fn test_starts_on_landing() {
        let c = ViewController::default();
        assert_eq!(c.role(), Role::Guest);
        assert_eq!(c.active_panel(), None);
        assert!(c.sidebar_open());
        assert!(!c.is_signed_in());
        assert!(c.menu().is_empty());
    }

    #[test]
    fn test_select_role_shows_default_panel() {
        for &role in Role::all() {
            let mut c = ViewController::default();
            c.select_role(role);
            assert_eq!(c.role(), role);
            assert_eq!(c.active_panel(), registry::default_panel(role));
        }
    }

    #[test]
    fn test_select_user_from_landing() {
        let mut c = ViewController::default();
        c.select_role(Role::User);
        assert_eq!(c.role(), Role::User);
        assert_eq!(c.active_panel(), Some(PanelId::Dashboard));
    }

    #[test]
    fn test_reselecting_role_resets_panel() {
        let mut c = signed_in(Role::User, PanelId::Charts);
        c.select_role(Role::User);
        assert_eq!(c.active_panel(), Some(PanelId::Dashboard));
    }

    #[test]
    fn test_switching_role_never_leaves_foreign_panel() {
        let mut c = signed_in(Role::Admin, PanelId::Settings);
        c.select_role(Role::User);
        assert_eq!(c.active_panel(), Some(PanelId::Dashboard));
    }

    #[test]
    fn test_select_role_keeps_sidebar_flag() {
        let mut c = ViewController::new(false);
        c.select_role(Role::Admin);
        assert!(!c.sidebar_open());
    }

    #[test]
    fn test_disallowed_panel_is_ignored() {
        let mut c = ViewController::default();
        c.select_role(Role::User);
        let before = c.clone();
        assert!(!c.select_panel(PanelId::Settings));
        assert_eq!(c, before);
        assert_eq!(c.active_panel(), Some(PanelId::Dashboard));
    }

    #[test]
    fn test_every_disallowed_panel_is_ignored_for_every_role() {
        for &role in Role::all() {
            let mut c = ViewController::default();
            c.select_role(role);
            for &panel in PanelId::all() {
                if registry::is_allowed(role, panel) {
                    continue;
                }
                let before = c.clone();
                assert!(!c.select_panel(panel));
                assert_eq!(c, before, "{role}: {panel} changed state");
            }
        }
    }

    #[test]
    fn test_allowed_panel_is_selected() {
        let mut c = ViewController::default();
        c.select_role(Role::Admin);
        assert!(c.select_panel(PanelId::Analytics));
        assert_eq!(c.active_panel(), Some(PanelId::Analytics));
    }

    #[test]
    fn test_logout_from_admin_users() {
        let mut c = signed_in(Role::Admin, PanelId::Users);
        c.logout();
        assert_eq!(c.role(), Role::Guest);
        assert_eq!(c.active_panel(), None);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut c = ViewController::default();
        c.logout();
        let once = c.clone();
        c.logout();
        assert_eq!(c, once);
        assert_eq!(c.role(), Role::Guest);
    }

    #[test]
    fn test_logout_keeps_sidebar_flag() {
        let mut c = signed_in(Role::User, PanelId::Upload);
        c.toggle_sidebar();
        c.logout();
        assert!(!c.sidebar_open());
    }

    #[test]
    fn test_toggle_sidebar_twice_restores() {
        for initial in [true, false] {
            let mut c = ViewController::new(initial);
            c.toggle_sidebar();
            assert_eq!(c.sidebar_open(), !initial);
            c.toggle_sidebar();
            assert_eq!(c.sidebar_open(), initial);
        }
    }

    #[test]
    fn test_toggle_sidebar_does_not_touch_navigation() {
        let mut c = signed_in(Role::User, PanelId::Insights);
        c.toggle_sidebar();
        assert_eq!(c.role(), Role::User);
        assert_eq!(c.active_panel(), Some(PanelId::Insights));
    }
}
