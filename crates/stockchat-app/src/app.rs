//! Main egui application — composes all panels and owns the chat controller.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use stockchat_core::controller::{submit, ChatController};
use stockchat_core::event_bus::EventBus;
use stockchat_core::ports::{InsightPort, MarketDataPort};
use stockchat_platform::insights::{MockInsightProvider, TimeoutInsights};
use stockchat_platform::market::FmpClient;
use stockchat_types::config::AppConfig;
use stockchat_ui::panels::header::{self, HeaderAction};
use stockchat_ui::panels::market::{self, MarketRequest};
use stockchat_ui::panels::settings::{self, SettingsAction};
use stockchat_ui::panels::sidebar::{self, SidebarAction};
use stockchat_ui::panels::chat;
use stockchat_ui::state::{MarketView, UiState};
use stockchat_ui::theme;

/// The main application state
pub struct StockChatApp {
    ui_state: UiState,
    /// Config the adapters were built from
    config: AppConfig,
    /// Copy edited by the settings panel until Apply
    draft_config: AppConfig,
    settings_dirty: bool,
    event_bus: EventBus,
    controller: Rc<RefCell<ChatController>>,
    insights: Rc<dyn InsightPort>,
    market: Rc<dyn MarketDataPort>,
    market_view: Rc<RefCell<MarketView>>,
    first_frame: bool,
}

impl StockChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::default();
        let event_bus = EventBus::new();
        let controller = ChatController::new(event_bus.clone());

        Self {
            ui_state: UiState::new(),
            draft_config: config.clone(),
            settings_dirty: false,
            insights: build_insights(&config),
            market: build_market(&config),
            config,
            event_bus,
            controller: Rc::new(RefCell::new(controller)),
            market_view: Rc::new(RefCell::new(MarketView::default())),
            first_frame: true,
        }
    }

    fn apply_settings(&mut self, ctx: &egui::Context) {
        if self.draft_config.insights.clamp_timeout() {
            log::warn!(
                "Insight timeout raised to {}ms to cover the simulated latency",
                self.draft_config.insights.timeout_ms
            );
        }
        self.config = self.draft_config.clone();
        self.insights = build_insights(&self.config);
        self.market = build_market(&self.config);
        theme::apply_theme(ctx, self.config.theme);
        self.settings_dirty = false;
        log::info!(
            "Settings applied (insights: {}, latency {}ms, timeout {}ms)",
            self.insights.name(),
            self.config.insights.latency_ms,
            self.config.insights.timeout_ms
        );
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.config.theme = self.config.theme.toggled();
        self.draft_config.theme = self.config.theme;
        theme::apply_theme(ctx, self.config.theme);
    }

    fn handle_sidebar(&mut self, actions: Vec<SidebarAction>) {
        let mut controller = self.controller.borrow_mut();
        for action in actions {
            match action {
                SidebarAction::NewChat => {
                    controller.new_chat();
                }
                SidebarAction::Switch(id) => {
                    controller.switch_chat(&id);
                }
                SidebarAction::Rename { session_id, title } => {
                    controller.rename_chat(&session_id, title);
                }
                SidebarAction::Share(id) => controller.share_chat(&id),
                SidebarAction::Delete(id) => {
                    controller.delete_chat(&id);
                }
            }
        }
    }
}

fn build_insights(config: &AppConfig) -> Rc<dyn InsightPort> {
    Rc::new(TimeoutInsights::new(
        MockInsightProvider::from_config(&config.insights),
        config.insights.timeout_ms,
    ))
}

fn build_market(config: &AppConfig) -> Rc<dyn MarketDataPort> {
    Rc::new(FmpClient::new(config.market_data.clone()))
}

impl eframe::App for StockChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx, self.config.theme);
            self.first_frame = false;
        }

        // Drain events from the controller
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() || self.market_view.borrow().loading {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        let header_action = TopBottomPanel::top("top_bar")
            .show(ctx, |ui| header::top_bar(ui, self.config.theme, &mut self.ui_state))
            .inner;
        if let HeaderAction::ToggleTheme = header_action {
            self.toggle_theme(ctx);
        }

        // ── Notice bar ───────────────────────────────────────
        if let Some(notice) = self.ui_state.notice.clone() {
            TopBottomPanel::bottom("notice_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(notice).color(theme::WARNING));
                    if ui.small_button("✕").clicked() {
                        self.ui_state.dismiss_notice();
                    }
                });
            });
        }

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            let action = SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    settings::settings_panel(ui, &mut self.draft_config, self.settings_dirty)
                })
                .inner;
            match action {
                SettingsAction::ApplyClicked => self.apply_settings(ctx),
                SettingsAction::Changed => self.settings_dirty = true,
                SettingsAction::None => {}
            }
        }

        // ── Market side panel ────────────────────────────────
        if self.ui_state.show_market {
            let has_key = self.config.market_data.has_api_key();
            let request = SidePanel::right("market_panel")
                .min_width(260.0)
                .max_width(340.0)
                .show(ctx, |ui| {
                    market::market_panel(ui, &mut self.market_view.borrow_mut(), has_key)
                })
                .inner;
            if let Some(request) = request {
                self.dispatch_market(request, ctx);
            }
        }

        // ── Session sidebar ──────────────────────────────────
        let (summaries, active_id) = {
            let controller = self.controller.borrow();
            (
                controller.store.summaries(),
                controller.store.active_id().map(str::to_string),
            )
        };
        let actions = SidePanel::left("session_sidebar")
            .exact_width(240.0)
            .show(ctx, |ui| {
                sidebar::sidebar_panel(ui, &summaries, active_id.as_deref(), &mut self.ui_state)
            })
            .inner;
        if !actions.is_empty() {
            self.handle_sidebar(actions);
            ctx.request_repaint();
        }

        // ── Main content ─────────────────────────────────────
        let submitted = CentralPanel::default()
            .show(ctx, |ui| {
                header::page_heading(ui);
                let controller = self.controller.borrow();
                let submitted = chat::chat_panel(ui, controller.store.active(), &mut self.ui_state);
                submitted
            })
            .inner;
        if let Some(text) = submitted {
            self.dispatch_message(text, ctx);
        }
    }
}

impl StockChatApp {
    /// Run a submission through the controller (async)
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let controller = self.controller.clone();
        let insights = self.insights.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(reason) = submit(&controller, insights.as_ref(), &text).await {
                log::debug!("Submission ignored: {:?}", reason);
            }
            ctx.request_repaint();
        });
    }

    /// Fetch a quote or news for the market panel (async)
    fn dispatch_market(&self, request: MarketRequest, ctx: &egui::Context) {
        let market = self.market.clone();
        let view = self.market_view.clone();
        let news_limit = self.config.market_data.news_limit;
        let ctx = ctx.clone();

        view.borrow_mut().begin_lookup();

        wasm_bindgen_futures::spawn_local(async move {
            match request {
                MarketRequest::Quote(symbol) => match market.quote(&symbol).await {
                    Ok(quote) => view.borrow_mut().set_quote(quote),
                    Err(e) => view.borrow_mut().set_error(e.to_string()),
                },
                MarketRequest::News(symbol) => match market.news(&symbol, news_limit).await {
                    Ok(items) => view.borrow_mut().set_news(items),
                    Err(e) => view.borrow_mut().set_error(e.to_string()),
                },
            }
            ctx.request_repaint();
        });
    }
}
