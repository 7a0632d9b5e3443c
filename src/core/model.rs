// DataViz Pro - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use std::fmt;

// =============================================================================
// Role
// =============================================================================

/// Who the visitor is currently viewing the product as.
///
/// There is no authentication: a role is selected by clicking one of the
/// landing page buttons and cleared by logging out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// No role selected; the marketing page is shown.
    #[default]
    Guest,
    /// Standard user: upload, charts, insights.
    User,
    /// Administrator: users, analytics, settings.
    Admin,
}

impl Role {
    /// Returns all variants.
    pub fn all() -> &'static [Role] {
        &[Role::Guest, Role::User, Role::Admin]
    }

    /// Lower-case tag, as shown under the name on the profile card.
    pub fn tag(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Capitalised label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Guest => "Guest",
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// =============================================================================
// Panels
// =============================================================================

/// Identifier of a dashboard content panel.
///
/// Which identifiers are reachable depends on the role; see
/// [`crate::core::registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Dashboard,
    Upload,
    Charts,
    Insights,
    Users,
    Analytics,
    Settings,
}

impl PanelId {
    /// Returns all variants.
    pub fn all() -> &'static [PanelId] {
        &[
            PanelId::Dashboard,
            PanelId::Upload,
            PanelId::Charts,
            PanelId::Insights,
            PanelId::Users,
            PanelId::Analytics,
            PanelId::Settings,
        ]
    }

    /// Stable lower-case identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            PanelId::Dashboard => "dashboard",
            PanelId::Upload => "upload",
            PanelId::Charts => "charts",
            PanelId::Insights => "insights",
            PanelId::Users => "users",
            PanelId::Analytics => "analytics",
            PanelId::Settings => "settings",
        }
    }

    /// Title shown in the dashboard header (the capitalised identifier).
    pub fn title(&self) -> &'static str {
        match self {
            PanelId::Dashboard => "Dashboard",
            PanelId::Upload => "Upload",
            PanelId::Charts => "Charts",
            PanelId::Insights => "Insights",
            PanelId::Users => "Users",
            PanelId::Analytics => "Analytics",
            PanelId::Settings => "Settings",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One navigable sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelEntry {
    pub id: PanelId,
    pub label: &'static str,
    pub icon: IconRef,
}

/// Display data for the sidebar profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    pub display_name: &'static str,
    pub tag: &'static str,
    pub icon: IconRef,
}

// =============================================================================
// Presentation references
// =============================================================================

/// Symbolic icon reference. The UI layer maps each to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconRef {
    Upload,
    BarChart,
    Brain,
    Shield,
    Users,
    Sparkles,
    ChevronDown,
    Menu,
}

/// Named two-stop accent gradient used on stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    BluePurple,
    PurplePink,
    PinkRed,
    PurpleBlue,
}

// =============================================================================
// Fixture record shapes
// =============================================================================

/// Landing page feature card.
#[derive(Debug, Clone, Copy)]
pub struct FeatureCard {
    pub icon: IconRef,
    pub title: &'static str,
    pub description: &'static str,
}

/// Dashboard counter card.
#[derive(Debug, Clone, Copy)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub icon: IconRef,
    pub accent: Accent,
}

/// Placeholder chart tile on the Charts panel.
#[derive(Debug, Clone, Copy)]
pub struct ChartCard {
    pub number: u8,
    pub caption: &'static str,
}

/// Mock AI insight.
#[derive(Debug, Clone, Copy)]
pub struct InsightEntry {
    pub title: &'static str,
    pub narrative: &'static str,
    /// Confidence in percent (0-100).
    pub confidence: u8,
}

/// Account status shown in the user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountStatus {
    Active,
    Suspended,
}

impl AccountStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Suspended => "Suspended",
        }
    }
}

/// Mock row of the admin user table.
#[derive(Debug, Clone, Copy)]
pub struct UserRow {
    pub name: &'static str,
    pub email: &'static str,
    pub role: Role,
    pub status: AccountStatus,
}

/// Analytics metric card with period-over-period change.
#[derive(Debug, Clone, Copy)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_role_is_guest() {
        assert_eq!(Role::default(), Role::Guest);
    }

    #[test]
    fn test_panel_slugs_are_unique() {
        let mut slugs: Vec<_> = PanelId::all().iter().map(PanelId::slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), PanelId::all().len());
    }

    #[test]
    fn test_panel_title_is_capitalised_slug() {
        for panel in PanelId::all() {
            let slug = panel.slug();
            let mut expected = slug[..1].to_uppercase();
            expected.push_str(&slug[1..]);
            assert_eq!(panel.title(), expected);
        }
    }

    #[test]
    fn test_role_display_uses_tag() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::User.label(), "User");
    }
}
