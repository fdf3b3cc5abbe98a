//! Session store. The ordered collection of chat sessions plus the
//! active-session pointer.
//!
//! All transitions are plain `&mut self` methods so they can be tested
//! without any rendering.

use stockchat_types::{
    message::Message,
    session::{title_from_text, Session, SessionSummary},
};

pub struct SessionStore {
    sessions: Vec<Session>,
    active: Option<String>,
}

impl SessionStore {
    /// Store with a single default session, already active
    pub fn new() -> Self {
        let mut store = Self::empty();
        store.create_session();
        store
    }

    pub fn empty() -> Self {
        Self {
            sessions: Vec::new(),
            active: None,
        }
    }

    /// Append a fresh session and make it active. Returns its id.
    pub fn create_session(&mut self) -> String {
        let mut session = Session::with_random_id();
        // v4 collisions are practically impossible, but ids must stay unique
        while self.contains(&session.id) {
            session = Session::with_random_id();
        }
        let id = session.id.clone();
        self.sessions.push(session);
        self.active = Some(id.clone());
        log::debug!("Session created: {}", id);
        id
    }

    /// Remove a session. If it was active, the first remaining session
    /// becomes active (or none when the store is empty).
    pub fn delete_session(&mut self, id: &str) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != id);
        let removed = self.sessions.len() != before;

        if removed && self.active.as_deref() == Some(id) {
            self.active = self.sessions.first().map(|s| s.id.clone());
        }
        removed
    }

    /// Replace a session's title. Any text is accepted, including "".
    pub fn rename_session(&mut self, id: &str, title: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(session) => {
                session.title = title.into();
                true
            }
            None => false,
        }
    }

    pub fn append_message(&mut self, session_id: &str, message: Message) -> bool {
        match self.get_mut(session_id) {
            Some(session) => {
                session.messages.push(message);
                true
            }
            None => false,
        }
    }

    /// Set the title from the first user message, but only while the
    /// session still carries the placeholder title.
    pub fn derive_title_from_first_message(&mut self, session_id: &str, text: &str) -> bool {
        match self.get_mut(session_id) {
            Some(session) if session.has_default_title() => {
                session.title = title_from_text(text);
                true
            }
            _ => false,
        }
    }

    pub fn switch_session(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.active = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn summaries(&self) -> Vec<SessionSummary> {
        self.sessions.iter().map(Session::summary).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Session> {
        self.sessions.iter_mut().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&Session> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
