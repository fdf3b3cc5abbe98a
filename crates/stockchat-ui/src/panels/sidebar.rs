//! Sidebar — session list with new/rename/share/delete actions.

use egui::{self, RichText, ScrollArea, Vec2};
use stockchat_types::session::SessionSummary;
use crate::state::UiState;
use crate::theme::*;

const MENU_BUTTON_WIDTH: f32 = 32.0;

/// What the caller should apply to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    NewChat,
    Switch(String),
    Rename { session_id: String, title: String },
    Share(String),
    Delete(String),
}

/// Render the sidebar. Returns the actions triggered this frame, in order.
pub fn sidebar_panel(
    ui: &mut egui::Ui,
    sessions: &[SessionSummary],
    active_id: Option<&str>,
    state: &mut UiState,
) -> Vec<SidebarAction> {
    let palette = Palette::of(ui);
    let mut actions = Vec::new();

    ui.add_space(8.0);
    let new_chat = ui.add(
        egui::Button::new(RichText::new("+  New Chat").color(ON_ACCENT).strong())
            .fill(ACCENT)
            .corner_radius(PANEL_ROUNDING)
            .min_size(Vec2::new(ui.available_width(), 32.0)),
    );
    if new_chat.clicked() {
        actions.push(SidebarAction::NewChat);
    }
    ui.add_space(8.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for session in sessions {
                let is_active = active_id == Some(session.id.as_str());
                let fill = if is_active { palette.bg_surface } else { palette.bg_primary };

                egui::Frame::default()
                    .fill(fill)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(4.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            if state.is_renaming(&session.id) {
                                render_rename_editor(ui, state, &mut actions);
                            } else {
                                render_entry(ui, session, is_active, palette, state, &mut actions);
                            }
                        });
                    });
                ui.add_space(2.0);
            }
        });

    actions
}

fn render_entry(
    ui: &mut egui::Ui,
    session: &SessionSummary,
    is_active: bool,
    palette: Palette,
    state: &mut UiState,
    actions: &mut Vec<SidebarAction>,
) {
    let text_color = if is_active { palette.text } else { palette.text_muted };
    // leave room for the menu button
    let label_width = (ui.available_width() - MENU_BUTTON_WIDTH).max(0.0);
    let entry = ui
        .allocate_ui(Vec2::new(label_width, ui.spacing().interact_size.y), |ui| {
            ui.add(
                egui::Label::new(RichText::new(format!("💬 {}", session.title)).color(text_color))
                    .truncate()
                    .sense(egui::Sense::click()),
            )
        })
        .inner;
    if entry.clicked() && !is_active {
        actions.push(SidebarAction::Switch(session.id.clone()));
    }

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        ui.menu_button("⋯", |ui| {
            if ui.button("✏ Rename").clicked() {
                state.start_rename(&session.id, &session.title);
            }
            if ui.button("🔗 Share").clicked() {
                actions.push(SidebarAction::Share(session.id.clone()));
            }
            if ui.button(RichText::new("🗑 Delete").color(ERROR)).clicked() {
                actions.push(SidebarAction::Delete(session.id.clone()));
            }
        });
    });
}

/// Inline title editor; commits on Enter or when focus leaves the field.
fn render_rename_editor(ui: &mut egui::Ui, state: &mut UiState, actions: &mut Vec<SidebarAction>) {
    let Some(draft) = state.rename.as_mut() else {
        return;
    };

    let response = ui.add(
        egui::TextEdit::singleline(&mut draft.title).desired_width(ui.available_width()),
    );
    if draft.needs_focus {
        response.request_focus();
        draft.needs_focus = false;
    } else if response.lost_focus() {
        if let Some((session_id, title)) = state.finish_rename() {
            log::debug!("Rename committed for {}", session_id);
            actions.push(SidebarAction::Rename { session_id, title });
        }
    }
}
