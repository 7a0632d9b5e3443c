// DataViz Pro - core/fixtures.rs
//
// Static mock content shown on the landing page and dashboard panels.
// Nothing here is created, mutated or destroyed at runtime.

use crate::core::model::{
    AccountStatus, Accent, ChartCard, FeatureCard, IconRef, InsightEntry, MetricCard, Role,
    StatCard, UserRow,
};

/// "Powerful Features" cards on the landing page.
pub const FEATURES: &[FeatureCard] = &[
    FeatureCard {
        icon: IconRef::Upload,
        title: "Excel Upload",
        description: "Drag and drop Excel files with instant preview and validation",
    },
    FeatureCard {
        icon: IconRef::BarChart,
        title: "Dynamic Charts",
        description: "Generate 2D and 3D visualizations with customizable styling",
    },
    FeatureCard {
        icon: IconRef::Brain,
        title: "AI Insights",
        description: "Get intelligent analysis and recommendations from your data",
    },
];

/// Counters at the top of the Dashboard panel.
pub const DASHBOARD_STATS: &[StatCard] = &[
    StatCard {
        title: "Total Uploads",
        value: "24",
        icon: IconRef::Upload,
        accent: Accent::BluePurple,
    },
    StatCard {
        title: "Charts Created",
        value: "18",
        icon: IconRef::BarChart,
        accent: Accent::PurplePink,
    },
    StatCard {
        title: "AI Insights",
        value: "12",
        icon: IconRef::Brain,
        accent: Accent::PinkRed,
    },
];

/// "Recent Activity" log lines.
pub const RECENT_ACTIVITY: &[&str] = &[
    "Uploaded sales_data.xlsx",
    "Generated bar chart for Q4 revenue",
    "AI insight: Revenue increased 15%",
];

/// Placeholder chart tiles.
pub const CHARTS: &[ChartCard] = &[
    ChartCard {
        number: 1,
        caption: "Data visualization",
    },
    ChartCard {
        number: 2,
        caption: "Data visualization",
    },
    ChartCard {
        number: 3,
        caption: "Data visualization",
    },
    ChartCard {
        number: 4,
        caption: "Data visualization",
    },
    ChartCard {
        number: 5,
        caption: "Data visualization",
    },
    ChartCard {
        number: 6,
        caption: "Data visualization",
    },
];

/// Mock AI insights.
pub const INSIGHTS: &[InsightEntry] = &[
    InsightEntry {
        title: "Revenue Growth Analysis",
        narrative: "Your Q4 revenue shows a 15% increase compared to Q3, \
                    driven primarily by product category A.",
        confidence: 92,
    },
    InsightEntry {
        title: "Seasonal Trends",
        narrative: "Data indicates strong seasonal patterns with peaks in November and December.",
        confidence: 87,
    },
    InsightEntry {
        title: "Customer Segmentation",
        narrative: "Three distinct customer segments identified with different purchasing behaviors.",
        confidence: 94,
    },
];

/// Rows of the admin user table.
pub const USERS: &[UserRow] = &[
    UserRow {
        name: "John Doe",
        email: "john@example.com",
        role: Role::User,
        status: AccountStatus::Active,
    },
    UserRow {
        name: "Jane Smith",
        email: "jane@example.com",
        role: Role::User,
        status: AccountStatus::Active,
    },
    UserRow {
        name: "Bob Johnson",
        email: "bob@example.com",
        role: Role::Admin,
        status: AccountStatus::Active,
    },
];

/// Admin analytics counters.
pub const ANALYTICS: &[MetricCard] = &[
    MetricCard {
        title: "Total Users",
        value: "1,234",
        change: "+12%",
    },
    MetricCard {
        title: "Active Sessions",
        value: "89",
        change: "+5%",
    },
    MetricCard {
        title: "Files Uploaded",
        value: "456",
        change: "+23%",
    },
    MetricCard {
        title: "Charts Generated",
        value: "789",
        change: "+18%",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_confidence_is_a_percentage() {
        assert!(INSIGHTS.iter().all(|i| i.confidence <= 100));
    }

    #[test]
    fn test_chart_numbers_are_sequential() {
        let numbers: Vec<u8> = CHARTS.iter().map(|c| c.number).collect();
        assert_eq!(numbers, (1..=6).collect::<Vec<u8>>());
    }

    #[test]
    fn test_user_table_has_no_guests() {
        assert!(USERS.iter().all(|u| u.role != Role::Guest));
        assert_eq!(USERS.iter().filter(|u| u.role == Role::Admin).count(), 1);
    }
}
