// DataViz Pro - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "DataViz Pro";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "DataVizPro";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Copyright line shown in the landing page footer and About dialog.
pub const COPYRIGHT: &str = "\u{00a9} 2024 DataViz Pro. All rights reserved.";

// =============================================================================
// Window
// =============================================================================

/// Initial window size in logical points.
pub const WINDOW_SIZE: [f32; 2] = [1280.0, 820.0];

/// Minimum window size in logical points.
pub const WINDOW_MIN_SIZE: [f32; 2] = [900.0, 560.0];

/// Edge length of the generated window icon in pixels.
pub const ICON_SIZE: u32 = 64;

// =============================================================================
// Motion
// =============================================================================

/// Scroll distance (points) over which landing-page parallax is applied.
/// Beyond this the offsets stay at their end values.
pub const PARALLAX_SCROLL_RANGE: f32 = 500.0;

/// Hero block offset at the end of the parallax range.
pub const PARALLAX_HERO_OFFSET: f32 = -150.0;

/// Background offset at the end of the parallax range.
pub const PARALLAX_BACKGROUND_OFFSET: f32 = -100.0;

/// Subtitle offset at the end of the parallax range.
pub const PARALLAX_SUBTITLE_OFFSET: f32 = -50.0;

/// Hero headline reveal duration (seconds).
pub const HERO_REVEAL_SECS: f32 = 0.8;

/// Delay before the hero subtitle starts revealing (seconds).
pub const HERO_SUBTITLE_DELAY_SECS: f32 = 0.2;

/// Delay before the role buttons start revealing (seconds).
pub const HERO_BUTTONS_DELAY_SECS: f32 = 0.4;

/// Delay before the scroll indicator fades in (seconds).
pub const SCROLL_HINT_DELAY_SECS: f32 = 1.0;

/// Feature card reveal duration (seconds).
pub const FEATURE_REVEAL_SECS: f32 = 0.6;

/// Per-card stagger for feature cards (seconds).
pub const FEATURE_STAGGER_SECS: f32 = 0.2;

/// Dashboard panel fade-in duration (seconds).
pub const PANEL_REVEAL_SECS: f32 = 0.35;

/// Per-card stagger inside dashboard panels (seconds).
pub const CARD_STAGGER_SECS: f32 = 0.1;

/// Vertical slide distance (points) for a card that has not started revealing.
pub const REVEAL_SLIDE_DISTANCE: f32 = 20.0;

/// Period of the background blob pulse (seconds).
pub const BLOB_PULSE_PERIOD_SECS: f64 = 4.0;

/// egui widget animation time, which also drives the sidebar slide (seconds).
pub const WIDGET_ANIMATION_SECS: f32 = 0.25;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Whether the dashboard sidebar starts expanded.
pub const DEFAULT_SIDEBAR_OPEN: bool = true;

/// Whether reveal and parallax animations are enabled.
pub const DEFAULT_ANIMATIONS: bool = true;

/// Spreadsheet extensions offered by the "Choose File" dialog.
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls", "csv"];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
