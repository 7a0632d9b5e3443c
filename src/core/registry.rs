// DataViz Pro - core/registry.rs
//
// Panel registry: which panels each role may navigate to, in sidebar order.
// Pure lookup tables; the per-panel renderers live in ui::panels.

use crate::core::model::{IconRef, PanelEntry, PanelId, Role, RoleProfile};

const USER_MENU: &[PanelEntry] = &[
    PanelEntry {
        id: PanelId::Dashboard,
        label: "Dashboard",
        icon: IconRef::BarChart,
    },
    PanelEntry {
        id: PanelId::Upload,
        label: "Upload",
        icon: IconRef::Upload,
    },
    PanelEntry {
        id: PanelId::Charts,
        label: "Charts",
        icon: IconRef::BarChart,
    },
    PanelEntry {
        id: PanelId::Insights,
        label: "AI Insights",
        icon: IconRef::Brain,
    },
];

const ADMIN_MENU: &[PanelEntry] = &[
    PanelEntry {
        id: PanelId::Dashboard,
        label: "Dashboard",
        icon: IconRef::BarChart,
    },
    PanelEntry {
        id: PanelId::Users,
        label: "Users",
        icon: IconRef::Users,
    },
    PanelEntry {
        id: PanelId::Analytics,
        label: "Analytics",
        icon: IconRef::BarChart,
    },
    PanelEntry {
        id: PanelId::Settings,
        label: "Settings",
        icon: IconRef::Shield,
    },
];

/// Sidebar entries for `role`, in display order. Empty for a guest.
pub fn menu(role: Role) -> &'static [PanelEntry] {
    match role {
        Role::Guest => &[],
        Role::User => USER_MENU,
        Role::Admin => ADMIN_MENU,
    }
}

/// Whether `panel` may be shown to `role`.
pub fn is_allowed(role: Role, panel: PanelId) -> bool {
    menu(role).iter().any(|entry| entry.id == panel)
}

/// Panel shown immediately after `role` is selected.
pub fn default_panel(role: Role) -> Option<PanelId> {
    match role {
        Role::Guest => None,
        Role::User | Role::Admin => Some(PanelId::Dashboard),
    }
}

/// Profile card content for a signed-in role.
pub fn profile(role: Role) -> Option<RoleProfile> {
    match role {
        Role::Guest => None,
        Role::User => Some(RoleProfile {
            display_name: "User",
            tag: Role::User.tag(),
            icon: IconRef::Users,
        }),
        Role::Admin => Some(RoleProfile {
            display_name: "Admin User",
            tag: Role::Admin.tag(),
            icon: IconRef::Shield,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(role: Role) -> Vec<PanelId> {
        menu(role).iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_user_menu_order() {
        assert_eq!(
            ids(Role::User),
            vec![
                PanelId::Dashboard,
                PanelId::Upload,
                PanelId::Charts,
                PanelId::Insights
            ]
        );
        assert_eq!(menu(Role::User)[3].label, "AI Insights");
    }

    #[test]
    fn test_admin_menu_order() {
        assert_eq!(
            ids(Role::Admin),
            vec![
                PanelId::Dashboard,
                PanelId::Users,
                PanelId::Analytics,
                PanelId::Settings
            ]
        );
    }

    #[test]
    fn test_guest_has_no_panels() {
        assert!(menu(Role::Guest).is_empty());
        assert_eq!(default_panel(Role::Guest), None);
        assert!(PanelId::all()
            .iter()
            .all(|&p| !is_allowed(Role::Guest, p)));
    }

    #[test]
    fn test_default_panel_is_allowed() {
        for &role in Role::all() {
            if let Some(panel) = default_panel(role) {
                assert!(is_allowed(role, panel), "{role}: {panel} not allowed");
            }
        }
    }

    #[test]
    fn test_settings_is_admin_only() {
        assert!(is_allowed(Role::Admin, PanelId::Settings));
        assert!(!is_allowed(Role::User, PanelId::Settings));
        assert!(!is_allowed(Role::Admin, PanelId::Upload));
    }

    #[test]
    fn test_profiles() {
        assert!(profile(Role::Guest).is_none());
        let admin = profile(Role::Admin).unwrap();
        assert_eq!(admin.display_name, "Admin User");
        assert_eq!(admin.tag, "admin");
        assert_eq!(admin.icon, IconRef::Shield);
        assert_eq!(profile(Role::User).unwrap().icon, IconRef::Users);
    }
}
