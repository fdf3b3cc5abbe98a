//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2, Visuals};
use stockchat_types::config::ThemeMode;

pub const ACCENT: Color32 = Color32::from_rgb(99, 102, 241);
pub const ON_ACCENT: Color32 = Color32::from_rgb(248, 248, 252);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);

pub const DARK_BG_PRIMARY: Color32 = Color32::from_rgb(24, 24, 27);
pub const DARK_BG_SECONDARY: Color32 = Color32::from_rgb(39, 39, 42);
pub const DARK_BG_SURFACE: Color32 = Color32::from_rgb(52, 52, 56);
pub const DARK_TEXT: Color32 = Color32::from_rgb(228, 228, 231);
pub const DARK_TEXT_MUTED: Color32 = Color32::from_rgb(161, 161, 170);

pub const LIGHT_BG_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
pub const LIGHT_BG_SECONDARY: Color32 = Color32::from_rgb(244, 244, 245);
pub const LIGHT_BG_SURFACE: Color32 = Color32::from_rgb(228, 228, 231);
pub const LIGHT_TEXT: Color32 = Color32::from_rgb(24, 24, 27);
pub const LIGHT_TEXT_MUTED: Color32 = Color32::from_rgb(113, 113, 122);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

/// Colours for one theme mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_surface: Color32,
    pub text: Color32,
    pub text_muted: Color32,
}

impl Palette {
    pub const DARK: Palette = Palette {
        bg_primary: DARK_BG_PRIMARY,
        bg_secondary: DARK_BG_SECONDARY,
        bg_surface: DARK_BG_SURFACE,
        text: DARK_TEXT,
        text_muted: DARK_TEXT_MUTED,
    };

    pub const LIGHT: Palette = Palette {
        bg_primary: LIGHT_BG_PRIMARY,
        bg_secondary: LIGHT_BG_SECONDARY,
        bg_surface: LIGHT_BG_SURFACE,
        text: LIGHT_TEXT,
        text_muted: LIGHT_TEXT_MUTED,
    };

    /// `System` has no browser hook here and renders dark
    pub fn for_mode(mode: ThemeMode) -> Palette {
        match mode {
            ThemeMode::Light => Palette::LIGHT,
            ThemeMode::Dark | ThemeMode::System => Palette::DARK,
        }
    }

    /// Palette matching the visuals currently applied to `ui`
    pub fn of(ui: &egui::Ui) -> Palette {
        if ui.visuals().dark_mode {
            Palette::DARK
        } else {
            Palette::LIGHT
        }
    }
}

/// Apply the theme for `mode` to an egui context
pub fn apply_theme(ctx: &egui::Context, mode: ThemeMode) {
    let palette = Palette::for_mode(mode);
    let mut visuals = match mode {
        ThemeMode::Light => Visuals::light(),
        ThemeMode::Dark | ThemeMode::System => Visuals::dark(),
    };

    visuals.panel_fill = palette.bg_primary;
    visuals.window_fill = palette.bg_secondary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text);

    visuals.widgets.inactive.bg_fill = palette.bg_surface;
    visuals.widgets.inactive.weak_bg_fill = palette.bg_surface;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette.text_muted);
    visuals.widgets.hovered.bg_fill = palette.bg_surface;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, palette.text);
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, ON_ACCENT);

    visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = Vec2::new(8.0, 6.0);
    ctx.set_style(style);
}
