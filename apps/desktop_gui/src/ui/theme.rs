//! Fixed CinemaMatch theme: dark indigo chrome with purple accents.

use eframe::egui;

pub struct CinemaMatchPalette {
    // Backgrounds:
    pub app_background: egui::Color32,
    pub header_background: egui::Color32,
    pub card_background: egui::Color32,
    pub input_background: egui::Color32,
    pub example_hover: egui::Color32,

    // Main Text:
    pub body_text: egui::Color32,
    pub hint_text: egui::Color32,
    pub footer_text: egui::Color32,

    // Title Text:
    pub title_text: egui::Color32,
    pub tagline_text: egui::Color32,

    // Accents and strokes:
    pub accent: egui::Color32,
    pub accent_hover: egui::Color32,
    pub card_stroke: egui::Color32,

    // Error panel:
    pub error_background: egui::Color32,
    pub error_stroke: egui::Color32,
    pub error_text: egui::Color32,
}

pub fn cinema_match_palette() -> CinemaMatchPalette {
    CinemaMatchPalette {
        // Backgrounds:
        app_background: egui::Color32::from_rgb(48, 38, 115),
        header_background: egui::Color32::from_rgb(33, 26, 79),
        card_background: egui::Color32::from_rgb(67, 57, 129),
        input_background: egui::Color32::from_rgb(57, 47, 121),
        example_hover: egui::Color32::from_rgb(78, 68, 140),
        // Main Text:
        body_text: egui::Color32::from_rgb(229, 231, 235),
        hint_text: egui::Color32::from_rgb(156, 163, 175),
        footer_text: egui::Color32::from_rgb(107, 114, 128),
        // Title Text:
        title_text: egui::Color32::from_rgb(255, 255, 255),
        tagline_text: egui::Color32::from_rgb(216, 180, 254),
        // Accents and strokes:
        accent: egui::Color32::from_rgb(147, 51, 234),
        accent_hover: egui::Color32::from_rgb(126, 34, 206),
        card_stroke: egui::Color32::from_rgba_unmultiplied(255, 255, 255, 51),
        // Error panel:
        error_background: egui::Color32::from_rgb(74, 41, 95),
        error_stroke: egui::Color32::from_rgb(172, 71, 87),
        error_text: egui::Color32::from_rgb(254, 202, 202),
    }
}

fn visuals_for_palette(palette: &CinemaMatchPalette) -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.override_text_color = Some(palette.body_text);
    visuals.window_fill = palette.card_background;
    visuals.panel_fill = palette.app_background;
    visuals.extreme_bg_color = palette.input_background;
    visuals.faint_bg_color = palette.input_background;

    visuals.hyperlink_color = palette.accent;
    visuals.selection.bg_fill = palette.accent;
    visuals.window_corner_radius = egui::CornerRadius::same(12);
    visuals.menu_corner_radius = egui::CornerRadius::same(8);

    visuals.widgets.noninteractive.bg_fill = palette.app_background;
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, palette.card_stroke);
    visuals.widgets.inactive.bg_fill = palette.input_background;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.card_stroke);
    visuals.widgets.hovered.bg_fill = palette.example_hover;
    visuals.widgets.hovered.bg_stroke =
        egui::Stroke::new(1.0, palette.accent.gamma_multiply(0.85));
    visuals.widgets.active.bg_fill = palette.accent_hover;
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.2, palette.accent);

    let radius = egui::CornerRadius::same(8);
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    visuals.widgets.open.corner_radius = radius;
    visuals.widgets.noninteractive.corner_radius = radius;

    visuals
}

/// One-shot style setup; the theme never changes at runtime.
pub fn apply_theme(ctx: &egui::Context) {
    let palette = cinema_match_palette();
    let mut style = (*ctx.style()).clone();
    style.visuals = visuals_for_palette(&palette);
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.spacing.interact_size = egui::vec2(40.0, 30.0);
    ctx.set_style(style);
}
