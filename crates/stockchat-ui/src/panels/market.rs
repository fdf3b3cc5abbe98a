//! Market panel — quote and news lookup for a ticker symbol.
//! Independent of the chat flow.

use egui::{self, RichText, ScrollArea};
use crate::state::MarketView;
use crate::theme::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketRequest {
    Quote(String),
    News(String),
}

pub fn market_panel(ui: &mut egui::Ui, view: &mut MarketView, has_api_key: bool) -> Option<MarketRequest> {
    let palette = Palette::of(ui);
    let mut request = None;

    ui.heading(RichText::new("Market").color(palette.text));
    ui.separator();

    if !has_api_key {
        ui.label(
            RichText::new("Set an API key in Settings to fetch market data.")
                .color(WARNING)
                .small(),
        );
    }

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut view.symbol)
                .hint_text("AAPL")
                .desired_width(90.0),
        );
        let enabled = has_api_key && !view.loading && !view.symbol.trim().is_empty();
        if ui.add_enabled(enabled, egui::Button::new("Quote")).clicked() {
            request = Some(MarketRequest::Quote(view.symbol.clone()));
        }
        if ui.add_enabled(enabled, egui::Button::new("News")).clicked() {
            request = Some(MarketRequest::News(view.symbol.clone()));
        }
        if view.loading {
            ui.add(egui::Spinner::new());
        }
    });

    if let Some(err) = &view.error {
        ui.label(RichText::new(err).color(ERROR).small());
    }

    if let Some(quote) = &view.quote {
        ui.add_space(6.0);
        egui::Frame::default()
            .fill(palette.bg_secondary)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                if let Some(name) = &quote.name {
                    ui.label(RichText::new(name).color(palette.text_muted).small());
                }
                let color = match quote.change {
                    Some(c) if c < 0.0 => ERROR,
                    Some(_) => SUCCESS,
                    None => palette.text,
                };
                ui.label(RichText::new(quote.headline()).color(color).strong().monospace());
                if let (Some(low), Some(high)) = (quote.day_low, quote.day_high) {
                    ui.label(
                        RichText::new(format!("Day range {:.2} – {:.2}", low, high))
                            .color(palette.text_muted)
                            .small(),
                    );
                }
            });
    }

    if !view.news.is_empty() {
        ui.add_space(6.0);
        ScrollArea::vertical().id_salt("market_news").show(ui, |ui| {
            for item in &view.news {
                match &item.url {
                    Some(url) => {
                        ui.hyperlink_to(item.title.as_str(), url);
                    }
                    None => {
                        ui.label(RichText::new(&item.title).strong());
                    }
                }
                let meta = [item.site.as_deref(), item.published_date.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" · ");
                if !meta.is_empty() {
                    ui.label(RichText::new(meta).color(palette.text_muted).small());
                }
                ui.add_space(4.0);
            }
        });
    }

    request
}
