//! UI-level state that drives rendering.
//! Session data lives in the controller; this only holds what the panels
//! need between frames, updated each frame by draining the EventBus.

use stockchat_types::event::ChatEvent;
use stockchat_types::market::{NewsItem, Quote};

pub const SHARE_UNAVAILABLE_NOTICE: &str = "Sharing functionality to be implemented";

/// State visible to UI panels
pub struct UiState {
    /// Input field content
    pub input_text: String,
    /// Sidebar title being edited, if any
    pub rename: Option<RenameDraft>,
    /// A lookup is in flight; the Send button is disabled
    pub pending: bool,
    /// Session the in-flight lookup will answer into
    pub pending_session: Option<String>,
    pub show_settings: bool,
    pub show_market: bool,
    /// Status line text
    pub status_text: String,
    /// Last lookup failure, shown until the next turn starts
    pub last_error: Option<String>,
    /// Transient message for the user (e.g. share placeholder)
    pub notice: Option<String>,
}

/// In-progress inline rename of a sidebar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameDraft {
    pub session_id: String,
    pub title: String,
    /// Focus is requested once, on the first frame the editor is shown
    pub needs_focus: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            rename: None,
            pending: false,
            pending_session: None,
            show_settings: false,
            show_market: false,
            status_text: "Ready".to_string(),
            last_error: None,
            notice: None,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::TurnStart { session_id, .. } => {
                    self.pending = true;
                    self.pending_session = Some(session_id);
                    self.last_error = None;
                    self.status_text = "Thinking...".to_string();
                }
                ChatEvent::InsightReady { .. } => {}
                ChatEvent::InsightFailed { message, .. } => {
                    self.last_error = Some(message);
                }
                ChatEvent::ResponseDiscarded { .. } => {
                    self.notice = Some("Reply dropped: its chat was deleted".to_string());
                }
                ChatEvent::TurnEnd { .. } => {
                    self.pending = false;
                    self.pending_session = None;
                    self.status_text = match &self.last_error {
                        Some(e) => format!("Error: {}", e),
                        None => "Ready".to_string(),
                    };
                }
                ChatEvent::SessionCreated { .. } => {
                    self.input_text.clear();
                }
                ChatEvent::SessionDeleted { session_id } => {
                    if self.rename.as_ref().map(|r| r.session_id == session_id) == Some(true) {
                        self.rename = None;
                    }
                }
                ChatEvent::ShareUnavailable { .. } => {
                    self.notice = Some(SHARE_UNAVAILABLE_NOTICE.to_string());
                }
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending
    }

    pub fn can_send(&self) -> bool {
        !self.pending && !self.input_text.trim().is_empty()
    }

    /// Like `can_send`, but there must be a session to send into.
    pub fn can_submit(&self, has_session: bool) -> bool {
        has_session && self.can_send()
    }

    /// True when the displayed session is the one awaiting a reply.
    pub fn is_waiting_in(&self, session_id: Option<&str>) -> bool {
        self.pending && session_id.is_some() && self.pending_session.as_deref() == session_id
    }

    pub fn start_rename(&mut self, session_id: &str, current_title: &str) {
        self.rename = Some(RenameDraft {
            session_id: session_id.to_string(),
            title: current_title.to_string(),
            needs_focus: true,
        });
    }

    /// Commit the draft. Returns `(session_id, title)` to apply.
    pub fn finish_rename(&mut self) -> Option<(String, String)> {
        self.rename.take().map(|d| (d.session_id, d.title))
    }

    pub fn is_renaming(&self, session_id: &str) -> bool {
        self.rename.as_ref().map(|r| r.session_id == session_id) == Some(true)
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Market panel state ──────────────────────────────────────

/// Results of the last quote/news lookup. Shared with the async fetch
/// tasks through `Rc<RefCell<_>>` by the app.
#[derive(Default)]
pub struct MarketView {
    pub symbol: String,
    pub loading: bool,
    pub quote: Option<Quote>,
    pub news: Vec<NewsItem>,
    pub error: Option<String>,
}

impl MarketView {
    pub fn begin_lookup(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_quote(&mut self, quote: Quote) {
        self.loading = false;
        self.quote = Some(quote);
    }

    pub fn set_news(&mut self, news: Vec<NewsItem>) {
        self.loading = false;
        self.news = news;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}
