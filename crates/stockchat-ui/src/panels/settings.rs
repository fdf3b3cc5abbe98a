//! Settings panel — insight latency/timeout, market data API key, theme.
//! Changes take effect when the user clicks Apply.

use egui::{self, RichText, Vec2};
use stockchat_types::config::{AppConfig, ThemeMode, DEFAULT_MARKET_BASE_URL};
use crate::theme::*;

/// What the caller should do after rendering the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Nothing changed
    None,
    /// A field was edited but not applied yet
    Changed,
    /// The user clicked Apply; rebuild adapters from the config
    ApplyClicked,
}

/// Render the settings panel. Returns an action for the caller to handle.
pub fn settings_panel(ui: &mut egui::Ui, config: &mut AppConfig, dirty: bool) -> SettingsAction {
    let palette = Palette::of(ui);
    let mut changed = false;
    let mut apply_clicked = false;

    egui::Frame::default()
        .fill(palette.bg_secondary)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(palette.text));
            ui.separator();

            // ── Insights Section ─────────────────────────────
            ui.label(RichText::new("Insights").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Simulated latency (ms)").color(palette.text_muted).small());
            changed |= ui
                .add(egui::Slider::new(&mut config.insights.latency_ms, 0..=5000))
                .changed();

            ui.label(RichText::new("Timeout (ms)").color(palette.text_muted).small());
            changed |= ui
                .add(egui::Slider::new(&mut config.insights.timeout_ms, 1000..=120_000).logarithmic(true))
                .changed();
            if config.insights.timeout_too_short() {
                ui.label(
                    RichText::new("Timeout is below the latency; Apply raises it to match")
                        .color(WARNING)
                        .small(),
                );
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            // ── Market Data Section ──────────────────────────
            ui.label(RichText::new("Market data").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("API Key").color(palette.text_muted).small());
            changed |= ui
                .add(
                    egui::TextEdit::singleline(&mut config.market_data.api_key)
                        .password(true)
                        .hint_text("financialmodelingprep.com key"),
                )
                .changed();

            ui.add_space(4.0);

            ui.label(RichText::new("API Base URL").color(palette.text_muted).small());
            changed |= ui
                .add(
                    egui::TextEdit::singleline(&mut config.market_data.base_url)
                        .hint_text(DEFAULT_MARKET_BASE_URL),
                )
                .changed();

            ui.label(RichText::new("News items").color(palette.text_muted).small());
            changed |= ui
                .add(egui::Slider::new(&mut config.market_data.news_limit, 1..=20))
                .changed();

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            // ── Appearance Section ───────────────────────────
            ui.label(RichText::new("Appearance").color(ACCENT).strong());
            egui::ComboBox::from_id_salt("theme_mode")
                .selected_text(config.theme.label())
                .show_ui(ui, |ui| {
                    for mode in ThemeMode::all() {
                        changed |= ui
                            .selectable_value(&mut config.theme, *mode, mode.label())
                            .changed();
                    }
                });

            // ── Apply Button ─────────────────────────────────
            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(RichText::new("Apply").color(ON_ACCENT).strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(120.0, 28.0)),
                );
                if btn.clicked() {
                    apply_clicked = true;
                }
                if dirty {
                    ui.label(RichText::new("Unapplied changes").color(WARNING).small());
                }
            });
        });

    if apply_clicked {
        SettingsAction::ApplyClicked
    } else if changed {
        SettingsAction::Changed
    } else {
        SettingsAction::None
    }
}
