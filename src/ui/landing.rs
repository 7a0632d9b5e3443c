// DataViz Pro - ui/landing.rs
//
// Marketing landing page: navigation bar, hero with the two role buttons,
// feature cards and footer, over an animated gradient background with
// scroll parallax.

use crate::app::state::AppState;
use crate::core::fixtures::FEATURES;
use crate::core::model::{IconRef, Role};
use crate::ui::motion::{self, Reveal};
use crate::ui::{theme, widgets};
use crate::util::constants::{
    APP_NAME, BLOB_PULSE_PERIOD_SECS, COPYRIGHT, FEATURE_REVEAL_SECS, FEATURE_STAGGER_SECS,
    HERO_BUTTONS_DELAY_SECS, HERO_REVEAL_SECS, HERO_SUBTITLE_DELAY_SECS, PARALLAX_BACKGROUND_OFFSET,
    PARALLAX_HERO_OFFSET, PARALLAX_SCROLL_RANGE, PARALLAX_SUBTITLE_OFFSET, SCROLL_HINT_DELAY_SECS,
};
use egui::{Align, Color32, Layout, RichText, Vec2};

const NAV_HEIGHT: f32 = 72.0;
const HERO_TOP_PADDING: f32 = 160.0;
const SUBTITLE_BASE_GAP: f32 = 24.0;
const BLOB_RADIUS: f32 = 192.0;

/// Render the landing page into the central panel.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new())
        .show(ctx, |ui| {
            let now = ui.input(|i| i.time);
            let elapsed = if state.animations {
                let start = state.landing_reveal_start(now);
                (now - start) as f32
            } else {
                f32::INFINITY
            };

            let viewport = ui.max_rect();
            paint_background(ui, state, viewport, now);

            let output = egui::ScrollArea::vertical()
                .id_salt("landing_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.set_width(viewport.width());
                    nav_bar(ui, state);
                    hero(ui, state, viewport.height() - NAV_HEIGHT, elapsed);
                    features(ui, state, now);
                    footer(ui, state);
                });
            state.landing_scroll_y = output.state.offset.y;

            // Background blobs pulse continuously.
            if state.animations {
                ctx.request_repaint();
            }
        });
}

fn paint_background(ui: &egui::Ui, state: &AppState, rect: egui::Rect, now: f64) {
    let painter = ui.painter();
    theme::paint_page_background(painter, rect, state.dark_mode);

    let shift = if state.animations {
        motion::parallax(
            state.landing_scroll_y,
            PARALLAX_SCROLL_RANGE,
            PARALLAX_BACKGROUND_OFFSET,
        )
    } else {
        0.0
    };
    let (purple_pulse, blue_pulse) = if state.animations {
        (
            motion::pulse(now, BLOB_PULSE_PERIOD_SECS),
            // Second blob runs one second behind the first.
            motion::pulse(now - 1.0, BLOB_PULSE_PERIOD_SECS),
        )
    } else {
        (0.5, 0.5)
    };

    let purple_centre = rect.lerp_inside(Vec2::new(0.25, 0.25)) + Vec2::new(0.0, shift);
    let blue_centre = rect.lerp_inside(Vec2::new(0.75, 0.75)) + Vec2::new(0.0, shift);
    for (centre, colour, pulse) in [
        (purple_centre, theme::PURPLE_500, purple_pulse),
        (blue_centre, theme::BLUE_500, blue_pulse),
    ] {
        // Concentric discs approximate the blur of a soft glow.
        for step in 0..6 {
            let t = step as f32 / 6.0;
            let alpha = 0.02 + 0.03 * pulse;
            painter.circle_filled(
                centre,
                BLOB_RADIUS * (1.0 - t * 0.6),
                colour.gamma_multiply(alpha),
            );
        }
    }
}

fn nav_bar(ui: &mut egui::Ui, state: &mut AppState) {
    let dark = state.dark_mode;
    egui::Frame::new()
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(APP_NAME)
                        .size(24.0)
                        .strong()
                        .color(theme::text_colour(dark)),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let ghost = |text: &str| {
                        egui::Button::new(RichText::new(text).color(theme::text_colour(dark)))
                            .frame(false)
                    };
                    if ui.add(ghost("About")).clicked() {
                        state.show_about = true;
                    }
                    ui.add_space(16.0);
                    if ui.add(ghost("Features")).clicked() {
                        state.scroll_to_features = true;
                    }
                    if let Some(summary) = state.warning_summary() {
                        ui.add_space(16.0);
                        widgets::warning_indicator(ui, &summary, &state.warnings);
                    }
                });
            });
        });
}

fn hero(ui: &mut egui::Ui, state: &mut AppState, height: f32, elapsed: f32) {
    let dark = state.dark_mode;
    let scroll = if state.animations {
        state.landing_scroll_y
    } else {
        0.0
    };
    let hero_shift = motion::parallax(scroll, PARALLAX_SCROLL_RANGE, PARALLAX_HERO_OFFSET);
    let subtitle_shift = motion::parallax(scroll, PARALLAX_SCROLL_RANGE, PARALLAX_SUBTITLE_OFFSET);

    let response = ui
        .vertical_centered(|ui| {
            ui.set_min_height(height.max(0.0));
            ui.add_space((HERO_TOP_PADDING + hero_shift).max(0.0));

            motion::revealed(ui, Reveal::new(0.0, HERO_REVEAL_SECS), elapsed, |ui| {
                ui.label(
                    RichText::new("Transform Data")
                        .size(72.0)
                        .strong()
                        .color(theme::text_colour(dark)),
                );
                ui.label(
                    RichText::new("Into Insights")
                        .size(72.0)
                        .strong()
                        .color(if dark { theme::PURPLE_300 } else { theme::PURPLE_600 }),
                );
            });

            ui.add_space(SUBTITLE_BASE_GAP - PARALLAX_SUBTITLE_OFFSET + subtitle_shift);

            let subtitle = Reveal::new(HERO_SUBTITLE_DELAY_SECS, HERO_REVEAL_SECS);
            motion::revealed(ui, subtitle, elapsed, |ui| {
                for line in [
                    "Upload Excel files, generate stunning charts, and unlock AI-powered insights",
                    "with our advanced data visualization platform",
                ] {
                    ui.label(RichText::new(line).size(22.0).color(theme::muted_colour(dark)));
                }
            });

            ui.add_space(48.0);

            let buttons = Reveal::new(HERO_BUTTONS_DELAY_SECS, HERO_REVEAL_SECS);
            motion::revealed(ui, buttons, elapsed, |ui| {
                // Invisible buttons must not take clicks.
                ui.add_enabled_ui(buttons.has_started(elapsed), |ui| {
                    ui.columns(2, |columns| {
                        columns[0].with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let text = format!("{}  Login as User", theme::glyph(IconRef::Users));
                            if widgets::gradient_button(ui, &text, 18.0).clicked() {
                                state.sign_in(Role::User);
                            }
                        });
                        columns[1].with_layout(Layout::left_to_right(Align::Center), |ui| {
                            ui.add_space(12.0);
                            let text = format!("{}  Login as Admin", theme::glyph(IconRef::Shield));
                            if widgets::outline_button(ui, &text, 18.0, dark).clicked() {
                                state.sign_in(Role::Admin);
                            }
                        });
                    });
                });
            });
        })
        .response;

    // Bouncing scroll hint at the bottom of the hero.
    let hint = Reveal::new(SCROLL_HINT_DELAY_SECS, HERO_REVEAL_SECS).progress(elapsed);
    if hint > 0.0 {
        let bounce = if state.animations {
            motion::pulse(ui.input(|i| i.time), 1.0) * 8.0
        } else {
            0.0
        };
        let pos = response.rect.center_bottom() - Vec2::new(0.0, 40.0 - bounce);
        ui.painter().text(
            pos,
            egui::Align2::CENTER_CENTER,
            theme::glyph(IconRef::ChevronDown),
            egui::FontId::proportional(32.0),
            Color32::from_white_alpha((153.0 * hint) as u8),
        );
    }
}

fn features(ui: &mut egui::Ui, state: &mut AppState, now: f64) {
    let dark = state.dark_mode;
    ui.add_space(80.0);

    // Cards reveal once the section first scrolls into view.
    let seen_id = ui.id().with("features_seen_at");
    let section_top =
        egui::Rect::from_min_size(ui.cursor().min, Vec2::new(ui.available_width(), 1.0));
    let seen_at = if ui.is_rect_visible(section_top) {
        Some(ui.data_mut(|d| *d.get_temp_mut_or_insert_with(seen_id, || now)))
    } else {
        ui.data(|d| d.get_temp::<f64>(seen_id))
    };
    let elapsed = match (state.animations, seen_at) {
        (false, _) => f32::INFINITY,
        (true, Some(at)) => (now - at) as f32,
        (true, None) => 0.0,
    };

    let heading = ui
        .vertical_centered(|ui| {
            ui.label(
                RichText::new("Powerful Features")
                    .size(44.0)
                    .strong()
                    .color(theme::text_colour(dark)),
            )
        })
        .inner;
    if state.scroll_to_features {
        heading.scroll_to_me(Some(Align::TOP));
        state.scroll_to_features = false;
    }

    ui.add_space(48.0);

    egui::Frame::new()
        .inner_margin(egui::Margin::symmetric(48, 0))
        .show(ui, |ui| {
            ui.columns(FEATURES.len(), |columns| {
                for (i, (col, feature)) in columns.iter_mut().zip(FEATURES).enumerate() {
                    let reveal =
                        Reveal::staggered(0.0, FEATURE_STAGGER_SECS, i, FEATURE_REVEAL_SECS);
                    motion::revealed(col, reveal, elapsed, |ui| {
                        theme::card_frame(dark)
                            .inner_margin(egui::Margin::same(32))
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.label(
                                    RichText::new(theme::glyph(feature.icon))
                                        .size(44.0)
                                        .color(theme::PURPLE_400),
                                );
                                ui.add_space(20.0);
                                ui.label(
                                    RichText::new(feature.title)
                                        .size(24.0)
                                        .strong()
                                        .color(theme::text_colour(dark)),
                                );
                                ui.add_space(12.0);
                                ui.label(
                                    RichText::new(feature.description)
                                        .color(theme::muted_colour(dark)),
                                );
                            });
                    });
                }
            });
        });

    ui.add_space(80.0);
}

fn footer(ui: &mut egui::Ui, state: &AppState) {
    let dark = state.dark_mode;
    ui.separator();
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(format!("{}  {APP_NAME}", theme::glyph(IconRef::Sparkles)))
                .size(24.0)
                .strong()
                .color(theme::text_colour(dark)),
        );
        ui.add_space(12.0);
        ui.label(RichText::new(COPYRIGHT).color(theme::GRAY_400));
    });
    ui.add_space(40.0);
}
