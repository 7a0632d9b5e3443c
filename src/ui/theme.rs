// DataViz Pro - ui/theme.rs
//
// Colour scheme, icon glyphs, gradient painting and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::{AccountStatus, Accent, IconRef, Role};
use egui::{Color32, Pos2, Rect};

// Palette (Tailwind names in the trailing comments).
pub const SLATE_900: Color32 = Color32::from_rgb(15, 23, 42);
pub const PURPLE_900: Color32 = Color32::from_rgb(88, 28, 135);
pub const PURPLE_600: Color32 = Color32::from_rgb(147, 51, 234);
pub const PURPLE_500: Color32 = Color32::from_rgb(168, 85, 247);
pub const PURPLE_400: Color32 = Color32::from_rgb(192, 132, 252);
pub const PURPLE_300: Color32 = Color32::from_rgb(216, 180, 254);
pub const BLUE_600: Color32 = Color32::from_rgb(37, 99, 235);
pub const BLUE_500: Color32 = Color32::from_rgb(59, 130, 246);
pub const BLUE_300: Color32 = Color32::from_rgb(147, 197, 253);
pub const PINK_500: Color32 = Color32::from_rgb(236, 72, 153);
pub const RED_500: Color32 = Color32::from_rgb(239, 68, 68);
pub const GREEN_500: Color32 = Color32::from_rgb(34, 197, 94);
pub const GREEN_400: Color32 = Color32::from_rgb(74, 222, 128);
pub const GREEN_300: Color32 = Color32::from_rgb(134, 239, 172);
pub const AMBER_300: Color32 = Color32::from_rgb(252, 211, 77);
pub const GRAY_300: Color32 = Color32::from_rgb(209, 213, 219);
pub const GRAY_400: Color32 = Color32::from_rgb(156, 163, 175);

/// Light-mode page background.
pub const LIGHT_TOP: Color32 = Color32::from_rgb(248, 250, 252); // Slate 50
pub const LIGHT_MID: Color32 = Color32::from_rgb(243, 232, 255); // Purple 100

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 256.0;
pub const SIDEBAR_RAIL_WIDTH: f32 = 56.0;
pub const HEADER_HEIGHT: f32 = 64.0;
pub const CARD_RADIUS: u8 = 16;
pub const CARD_PADDING: i8 = 24;
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;

/// Glyph drawn for an icon reference.
pub fn glyph(icon: IconRef) -> &'static str {
    match icon {
        IconRef::Upload => "\u{2b06}",
        IconRef::BarChart => "\u{1f4ca}",
        IconRef::Brain => "\u{1f9e0}",
        IconRef::Shield => "\u{1f6e1}",
        IconRef::Users => "\u{1f465}",
        IconRef::Sparkles => "\u{2728}",
        IconRef::ChevronDown => "\u{2304}",
        IconRef::Menu => "\u{2630}",
    }
}

/// Start and end colours of an accent gradient.
pub fn accent_stops(accent: Accent) -> (Color32, Color32) {
    match accent {
        Accent::BluePurple => (BLUE_500, PURPLE_500),
        Accent::PurplePink => (PURPLE_500, PINK_500),
        Accent::PinkRed => (PINK_500, RED_500),
        Accent::PurpleBlue => (PURPLE_500, BLUE_500),
    }
}

/// Badge (background, text) colours for a role in the user table.
pub fn role_badge(role: Role) -> (Color32, Color32) {
    match role {
        Role::Admin => (PURPLE_500.gamma_multiply(0.2), PURPLE_300),
        Role::User | Role::Guest => (BLUE_500.gamma_multiply(0.2), BLUE_300),
    }
}

/// Badge (background, text) colours for an account status.
pub fn status_badge(status: AccountStatus) -> (Color32, Color32) {
    match status {
        AccountStatus::Active => (GREEN_500.gamma_multiply(0.2), GREEN_300),
        AccountStatus::Suspended => (AMBER_300.gamma_multiply(0.2), AMBER_300),
    }
}

/// Primary text colour for the current mode.
pub fn text_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::WHITE
    } else {
        SLATE_900
    }
}

/// Secondary text colour for the current mode.
pub fn muted_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        GRAY_300
    } else {
        Color32::from_rgb(71, 85, 105) // Slate 600
    }
}

/// Translucent card fill for the current mode.
pub fn card_fill(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_white_alpha(26)
    } else {
        Color32::from_white_alpha(200)
    }
}

/// Card outline colour for the current mode.
pub fn card_stroke(dark_mode: bool) -> egui::Stroke {
    if dark_mode {
        egui::Stroke::new(1.0, Color32::from_white_alpha(51))
    } else {
        egui::Stroke::new(1.0, Color32::from_black_alpha(20))
    }
}

/// The glass card frame used by every content block.
pub fn card_frame(dark_mode: bool) -> egui::Frame {
    egui::Frame::new()
        .fill(card_fill(dark_mode))
        .stroke(card_stroke(dark_mode))
        .corner_radius(egui::CornerRadius::same(CARD_RADIUS))
        .inner_margin(egui::Margin::same(CARD_PADDING))
}

/// Paint a horizontal two-stop gradient into `rect`.
pub fn paint_horizontal_gradient(
    painter: &egui::Painter,
    rect: Rect,
    left: Color32,
    right: Color32,
) {
    paint_quad(painter, rect, [left, right, right, left]);
}

/// Paint the page background: a diagonal slate-purple-slate gradient.
pub fn paint_page_background(painter: &egui::Painter, rect: Rect, dark_mode: bool) {
    let (edge, mid) = if dark_mode {
        (SLATE_900, PURPLE_900)
    } else {
        (LIGHT_TOP, LIGHT_MID)
    };
    // Top-left and bottom-right take the edge colour, the other diagonal the mid.
    paint_quad(painter, rect, [edge, mid, edge, mid]);
}

/// Vertex colours in order: top-left, top-right, bottom-right, bottom-left.
fn paint_quad(painter: &egui::Painter, rect: Rect, colours: [Color32; 4]) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ];
    let mut mesh = egui::Mesh::default();
    for (pos, colour) in corners.iter().zip(colours) {
        mesh.colored_vertex(Pos2::new(pos.x, pos.y), colour);
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// Apply dark/light visuals and the body font size to the context.
pub fn apply_style(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        use egui::TextStyle;
        style.animation_time = crate::util::constants::WIDGET_ANIMATION_SECS;
        let scale = font_size / crate::util::constants::DEFAULT_FONT_SIZE;
        for (text_style, font) in style.text_styles.iter_mut() {
            let base = match text_style {
                TextStyle::Small => 10.0,
                TextStyle::Body | TextStyle::Button => 14.5,
                TextStyle::Monospace => 13.0,
                TextStyle::Heading => 20.0,
                TextStyle::Name(_) => continue,
            };
            font.size = base * scale;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_a_glyph() {
        for icon in [
            IconRef::Upload,
            IconRef::BarChart,
            IconRef::Brain,
            IconRef::Shield,
            IconRef::Users,
            IconRef::Sparkles,
            IconRef::ChevronDown,
            IconRef::Menu,
        ] {
            assert!(!glyph(icon).is_empty());
        }
    }

    #[test]
    fn test_admin_badge_differs_from_user() {
        assert_ne!(role_badge(Role::Admin), role_badge(Role::User));
    }
}
