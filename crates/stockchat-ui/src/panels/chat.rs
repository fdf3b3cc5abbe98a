//! Chat panel — displays the active session's messages and the input form.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use stockchat_types::message::{Message, Role};
use stockchat_types::session::Session;
use crate::state::UiState;
use crate::theme::*;

pub const INPUT_HINT: &str = "Ask about stocks, market trends, or comparisons...";

/// Render the chat panel. Returns Some(message) when user submits input.
///
/// With no active session the message list is empty and Send stays
/// disabled, so typed text is kept until a chat exists.
pub fn chat_panel(ui: &mut egui::Ui, session: Option<&Session>, state: &mut UiState) -> Option<String> {
    let palette = Palette::of(ui);
    let mut submitted = None;
    let session_id = session.map(|s| s.id.as_str());

    ui.vertical(|ui| {
        // Messages area
        let available_height = ui.available_height() - 56.0;
        ScrollArea::vertical()
            .max_height(available_height)
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.add_space(8.0);
                if let Some(session) = session {
                    for message in &session.messages {
                        render_message(ui, message, palette);
                        ui.add_space(8.0);
                    }
                }
                if state.is_waiting_in(session_id) {
                    ui.horizontal(|ui| {
                        ui.add(egui::Spinner::new().color(ACCENT));
                        ui.label(RichText::new("Thinking...").color(palette.text_muted).small());
                    });
                }
            });

        ui.separator();

        // Input area
        ui.horizontal(|ui| {
            let input = egui::TextEdit::singleline(&mut state.input_text)
                .hint_text(INPUT_HINT)
                .desired_width(ui.available_width() - 80.0)
                .font(egui::FontId::proportional(14.0));

            let response = ui.add(input);

            let send_enabled = state.can_submit(session.is_some());
            let label = if state.is_busy() { "…" } else { "Send ➤" };
            let send_btn = ui.add_enabled(
                send_enabled,
                egui::Button::new(RichText::new(label).color(ON_ACCENT))
                    .fill(if send_enabled { ACCENT } else { palette.bg_surface })
                    .corner_radius(BUBBLE_ROUNDING)
                    .min_size(Vec2::new(70.0, 0.0)),
            );

            // Submit on Enter or button click
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if (enter || send_btn.clicked()) && send_enabled {
                submitted = Some(std::mem::take(&mut state.input_text));
                response.request_focus();
            }
        });
    });

    submitted
}

fn render_message(ui: &mut egui::Ui, message: &Message, palette: Palette) {
    let (layout, fill, text_color) = match message.role {
        Role::User => (Layout::right_to_left(Align::TOP), ACCENT, ON_ACCENT),
        Role::Assistant => (Layout::left_to_right(Align::TOP), palette.bg_secondary, palette.text),
    };
    let max_width = ui.available_width() * 0.8;

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(fill)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(message.role.label())
                            .color(text_color)
                            .strong()
                            .small(),
                    );
                    ui.add(egui::Label::new(RichText::new(&message.content).color(text_color)).wrap());
                });
            });
    });
}
