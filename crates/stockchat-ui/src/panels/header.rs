//! Page shell — top bar and page heading.

use egui::{self, Align, Layout, RichText};
use stockchat_types::config::ThemeMode;
use crate::state::UiState;
use crate::theme::*;

pub const APP_TITLE: &str = "Stock Market Insights";
pub const PAGE_HEADING: &str = "AI-Powered Stock Analysis";
pub const PAGE_SUBTITLE: &str =
    "Ask questions about stocks, get recommendations, compare companies, and analyze market trends.";

pub enum HeaderAction {
    None,
    ToggleTheme,
}

/// Render the top bar. Panel toggles are applied to `state` directly.
pub fn top_bar(ui: &mut egui::Ui, theme: ThemeMode, state: &mut UiState) -> HeaderAction {
    let palette = Palette::of(ui);
    let mut action = HeaderAction::None;

    ui.horizontal(|ui| {
        ui.label(RichText::new(APP_TITLE).strong().color(ACCENT).size(16.0));

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let theme_icon = match theme {
                ThemeMode::Light => "🌙",
                ThemeMode::Dark | ThemeMode::System => "☀",
            };
            if ui
                .button(theme_icon)
                .on_hover_text("Toggle theme")
                .clicked()
            {
                action = HeaderAction::ToggleTheme;
            }
            if ui.selectable_label(state.show_settings, "Settings").clicked() {
                state.show_settings = !state.show_settings;
            }
            if ui.selectable_label(state.show_market, "Market").clicked() {
                state.show_market = !state.show_market;
            }

            let status_color = if state.is_busy() {
                WARNING
            } else if state.last_error.is_some() {
                ERROR
            } else {
                palette.text_muted
            };
            ui.label(RichText::new(&state.status_text).color(status_color).small());
        });
    });

    action
}

pub fn page_heading(ui: &mut egui::Ui) {
    let palette = Palette::of(ui);
    ui.vertical_centered(|ui| {
        ui.add_space(4.0);
        ui.label(RichText::new(PAGE_HEADING).color(ACCENT).strong().size(26.0));
        ui.label(RichText::new(PAGE_SUBTITLE).color(palette.text_muted));
        ui.add_space(6.0);
    });
}
