// DataViz Pro - ui/shell.rs
//
// Dashboard shell: collapsible sidebar built from the role's menu, header
// with the sidebar toggle and panel title, status bar, and the content
// area for the active panel.

use crate::app::state::AppState;
use crate::core::model::{IconRef, PanelId};
use crate::core::registry;
use crate::ui::{panels, theme, widgets};
use crate::util::constants::APP_NAME;
use egui::{Align, Color32, Layout, RichText};

/// Actions collected while drawing the sidebar, applied afterwards.
enum SidebarAction {
    Open(PanelId),
    Logout,
}

/// Render the full dashboard for the signed-in role.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(panel) = state.controller.active_panel() else {
        return;
    };
    let dark = state.dark_mode;

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(&state.status_message);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if let Some(summary) = state.warning_summary() {
                    widgets::warning_indicator(ui, &summary, &state.warnings);
                    ui.add_space(12.0);
                }
                if let Some(at) = state.signed_in_at {
                    ui.label(
                        RichText::new(format!("Signed in at {}", at.format("%H:%M")))
                            .small()
                            .weak(),
                    );
                }
            });
        });
    });

    let mut action = None;
    let expanded = egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(theme::SIDEBAR_WIDTH)
        .frame(sidebar_frame(dark));
    let collapsed = egui::SidePanel::left("sidebar_rail")
        .resizable(false)
        .exact_width(theme::SIDEBAR_RAIL_WIDTH)
        .frame(sidebar_frame(dark));
    egui::SidePanel::show_animated_between(
        ctx,
        state.controller.sidebar_open(),
        collapsed,
        expanded,
        |ui, how_expanded| {
            action = sidebar(ui, state, panel, how_expanded > 0.5);
        },
    );

    match action {
        Some(SidebarAction::Open(target)) => {
            state.open_panel(target);
        }
        Some(SidebarAction::Logout) => {
            state.sign_out();
            ctx.request_repaint();
            return;
        }
        None => {}
    }
    // A sidebar click may have changed the panel this frame.
    let panel = state.controller.active_panel().unwrap_or(panel);

    egui::TopBottomPanel::top("header")
        .exact_height(theme::HEADER_HEIGHT)
        .frame(
            egui::Frame::new()
                .fill(Color32::from_black_alpha(51))
                .inner_margin(egui::Margin::symmetric(24, 12)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                let toggle = egui::Button::new(
                    RichText::new(theme::glyph(IconRef::Menu))
                        .size(20.0)
                        .color(theme::text_colour(dark)),
                )
                .frame(false);
                if ui
                    .add(toggle)
                    .on_hover_text("Toggle sidebar")
                    .clicked()
                {
                    state.toggle_sidebar();
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    widgets::avatar(ui, None, 40.0);
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            RichText::new(panel.title())
                                .size(24.0)
                                .strong()
                                .color(theme::text_colour(dark)),
                        );
                    });
                });
            });
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::new().inner_margin(egui::Margin::same(24)))
        .show(ctx, |ui| {
            theme::paint_page_background(ui.painter(), ui.max_rect(), dark);
            egui::ScrollArea::vertical()
                .id_salt(("panel_scroll", panel.slug()))
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.set_max_width(theme::CONTENT_MAX_WIDTH);
                    panels::render(ui, state, panel);
                });
        });
}

fn sidebar_frame(dark: bool) -> egui::Frame {
    let fill = if dark {
        Color32::from_black_alpha(200)
    } else {
        Color32::from_white_alpha(230)
    };
    egui::Frame::new()
        .fill(fill)
        .stroke(theme::card_stroke(dark))
        .inner_margin(egui::Margin::same(16))
}

fn sidebar(
    ui: &mut egui::Ui,
    state: &AppState,
    active: PanelId,
    expanded: bool,
) -> Option<SidebarAction> {
    let dark = state.dark_mode;
    let role = state.controller.role();
    let mut action = None;

    // Brand
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(theme::glyph(IconRef::Sparkles))
                .size(28.0)
                .color(theme::PURPLE_400),
        );
        if expanded {
            ui.label(
                RichText::new(APP_NAME)
                    .size(20.0)
                    .strong()
                    .color(theme::text_colour(dark)),
            );
        }
    });
    ui.add_space(24.0);

    // Profile card
    if let Some(profile) = registry::profile(role) {
        if expanded {
            egui::Frame::new()
                .fill(theme::card_fill(dark))
                .corner_radius(egui::CornerRadius::same(12))
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        widgets::avatar(ui, Some(profile.icon), 40.0);
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(profile.display_name)
                                    .strong()
                                    .color(theme::text_colour(dark)),
                            );
                            ui.label(RichText::new(profile.tag).small().color(theme::GRAY_400));
                        });
                    });
                });
        } else {
            widgets::avatar(ui, Some(profile.icon), 24.0);
        }
        ui.add_space(24.0);
    }

    // Menu
    for entry in state.controller.menu() {
        let selected = entry.id == active;
        let text = if expanded {
            format!("{}   {}", theme::glyph(entry.icon), entry.label)
        } else {
            theme::glyph(entry.icon).to_string()
        };
        let colour = if selected {
            Color32::WHITE
        } else {
            theme::muted_colour(dark)
        };
        let button = egui::Button::new(RichText::new(text).size(15.0).color(colour))
            .fill(if selected {
                theme::PURPLE_600
            } else {
                Color32::TRANSPARENT
            })
            .min_size(egui::vec2(ui.available_width(), 40.0));
        let response = ui.add(button);
        let response = if expanded {
            response
        } else {
            response.on_hover_text(entry.label)
        };
        if response.clicked() {
            action = Some(SidebarAction::Open(entry.id));
        }
        ui.add_space(6.0);
    }

    // Logout pinned to the bottom.
    ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
        let label = if expanded { "Logout" } else { "\u{23fb}" };
        let logout = egui::Button::new(RichText::new(label).color(theme::text_colour(dark)))
            .stroke(egui::Stroke::new(1.0, Color32::from_white_alpha(51)))
            .min_size(egui::vec2(ui.available_width(), 36.0));
        if ui.add(logout).clicked() {
            action = Some(SidebarAction::Logout);
        }
    });

    action
}
