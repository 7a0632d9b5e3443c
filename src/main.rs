// DataViz Pro - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading and validation
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can
// use `crate::app::...`, `crate::ui::...` etc.
pub use dataviz_pro::app;
pub use dataviz_pro::core;
pub use dataviz_pro::platform;
pub use dataviz_pro::ui;
pub use dataviz_pro::util;

use clap::Parser;
use std::path::PathBuf;

/// Render the window icon: a purple-to-blue disc on a transparent square.
///
/// Generated at startup so the binary carries no image assets.
fn generate_icon() -> egui::IconData {
    let size = util::constants::ICON_SIZE;
    let centre = (size as f32 - 1.0) / 2.0;
    let radius = size as f32 / 2.0;
    let (from, to) = ui::theme::accent_stops(crate::core::model::Accent::PurpleBlue);

    let img = image::RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 - centre;
        let dy = y as f32 - centre;
        if dx * dx + dy * dy > radius * radius {
            return image::Rgba([0, 0, 0, 0]);
        }
        let t = x as f32 / (size as f32 - 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        image::Rgba([
            mix(from.r(), to.r()),
            mix(from.g(), to.g()),
            mix(from.b(), to.b()),
            255,
        ])
    });

    egui::IconData {
        rgba: img.into_raw(),
        width: size,
        height: size,
    }
}

/// Configure fonts for the egui context.
///
/// On Windows, loads Segoe UI Emoji and Segoe UI Symbol from the system font
/// directory as fallbacks so the icon glyphs render. The built-in egui fonts
/// stay first so text metrics are unchanged.
///
/// On non-Windows platforms the egui defaults are used unchanged.
fn configure_fonts(ctx: &egui::Context) {
    #[cfg(target_os = "windows")]
    {
        let mut fonts = egui::FontDefinitions::default();

        let candidates: &[(&str, &str)] = &[
            ("Segoe UI Emoji", r"C:\Windows\Fonts\seguiemj.ttf"),
            ("Segoe UI Symbol", r"C:\Windows\Fonts\seguisym.ttf"),
        ];

        let mut loaded_names: Vec<&str> = Vec::new();
        for (name, path) in candidates {
            match std::fs::read(path) {
                Ok(data) => {
                    fonts
                        .font_data
                        .insert((*name).to_owned(), egui::FontData::from_owned(data).into());
                    loaded_names.push(name);
                    tracing::debug!(font = name, "Loaded Windows system font");
                }
                Err(e) => {
                    tracing::warn!(
                        font = name,
                        error = %e,
                        "Failed to load Windows system font; some icons may render as squares"
                    );
                }
            }
        }

        if !loaded_names.is_empty() {
            if let Some(proportional) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
                for name in &loaded_names {
                    proportional.push((*name).to_owned());
                }
            }
            ctx.set_fonts(fonts);
            tracing::info!(fonts = ?loaded_names, "Windows system fonts configured");
        }
    }

    #[cfg(not(target_os = "windows"))]
    let _ = ctx;
}

/// DataViz Pro - Spreadsheet-to-chart analytics dashboard.
///
/// Opens the product landing page; choose a role to enter the dashboard.
#[derive(Parser, Debug)]
#[command(name = "DataViz Pro", version, about)]
struct Cli {
    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so [logging] level can take effect;
    // its warnings are logged once the subscriber is up.
    let config_file = match cli.config_dir {
        Some(ref dir) => dir.join(util::constants::CONFIG_FILE_NAME),
        None => platform::config::PlatformPaths::resolve().config_file(),
    };
    let (config, config_warnings) = platform::config::load_config(&config_file);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_file.display(),
        "DataViz Pro starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    let mut state = app::state::AppState::new(&config);
    state.record_warnings(config_warnings);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(util::constants::WINDOW_SIZE)
            .with_min_inner_size(util::constants::WINDOW_MIN_SIZE)
            .with_drag_and_drop(true)
            .with_icon(generate_icon()),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            Ok(Box::new(gui::DataVizApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch DataViz Pro GUI: {e}");
        std::process::exit(1);
    }
}
