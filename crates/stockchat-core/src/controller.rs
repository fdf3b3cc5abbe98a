//! Chat controller. Owns the session store and drives the submission
//! state machine.
//!
//! A submission moves `Idle → AwaitingResponse → Idle`:
//! 1. `begin_submit` validates input, appends the user message and
//!    captures the target session id
//! 2. the caller awaits the insight lookup without holding any borrow
//! 3. `complete_submit` appends the reply (or the apology) to the
//!    captured session and returns to idle

use std::cell::RefCell;

use stockchat_types::{
    Result,
    event::ChatEvent,
    message::Message,
};
use crate::event_bus::EventBus;
use crate::ports::InsightPort;
use crate::store::SessionStore;

/// Shown in place of a reply when the lookup fails
pub const APOLOGY_MESSAGE: &str =
    "Sorry, I encountered an error while fetching the information. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    AwaitingResponse { turn_id: u64, session_id: String },
}

/// A submission that has been accepted and is waiting for its reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    pub turn_id: u64,
    pub session_id: String,
    pub query: String,
}

/// Why a submission was not accepted. Nothing is appended in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    EmptyInput,
    Busy,
    NoActiveSession,
}

pub struct ChatController {
    pub store: SessionStore,
    pub state: SubmissionState,
    pub event_bus: EventBus,
    turn_counter: u64,
}

impl ChatController {
    pub fn new(event_bus: EventBus) -> Self {
        Self::with_store(SessionStore::new(), event_bus)
    }

    pub fn with_store(store: SessionStore, event_bus: EventBus) -> Self {
        Self {
            store,
            state: SubmissionState::Idle,
            event_bus,
            turn_counter: 0,
        }
    }

    pub fn is_busy(&self) -> bool {
        !matches!(self.state, SubmissionState::Idle)
    }

    /// Accept a submission for the active session.
    pub fn begin_submit(&mut self, input: &str) -> std::result::Result<PendingTurn, SubmitRejected> {
        if input.trim().is_empty() {
            return Err(SubmitRejected::EmptyInput);
        }
        if self.is_busy() {
            log::warn!("Submission rejected: a lookup is already pending");
            return Err(SubmitRejected::Busy);
        }
        let session_id = match self.store.active_id() {
            Some(id) => id.to_string(),
            None => return Err(SubmitRejected::NoActiveSession),
        };

        self.store.append_message(&session_id, Message::user(input));

        self.turn_counter += 1;
        let turn_id = self.turn_counter;
        self.state = SubmissionState::AwaitingResponse {
            turn_id,
            session_id: session_id.clone(),
        };
        log::debug!("Turn {} started for session {}", turn_id, session_id);
        self.event_bus.emit(ChatEvent::TurnStart {
            turn_id,
            session_id: session_id.clone(),
        });

        Ok(PendingTurn {
            turn_id,
            session_id,
            query: input.to_string(),
        })
    }

    /// Land the lookup result in the session captured at submission time.
    pub fn complete_submit(&mut self, turn: PendingTurn, result: Result<String>) {
        let PendingTurn { turn_id, session_id, query } = turn;

        if !self.store.contains(&session_id) {
            log::warn!(
                "Session {} was deleted while turn {} was pending; reply discarded",
                session_id, turn_id
            );
            self.event_bus.emit(ChatEvent::ResponseDiscarded {
                turn_id,
                session_id,
            });
        } else {
            match result {
                Ok(text) => {
                    self.store.append_message(&session_id, Message::assistant(text.clone()));
                    self.store.derive_title_from_first_message(&session_id, &query);
                    self.event_bus.emit(ChatEvent::InsightReady { session_id, text });
                }
                Err(e) => {
                    log::error!("Error fetching stock insights: {}", e);
                    self.store
                        .append_message(&session_id, Message::assistant(APOLOGY_MESSAGE));
                    self.event_bus.emit(ChatEvent::InsightFailed {
                        session_id,
                        message: e.to_string(),
                    });
                }
            }
        }

        self.state = SubmissionState::Idle;
        self.event_bus.emit(ChatEvent::TurnEnd { turn_id });
    }

    // ─── Sidebar actions ─────────────────────────────────────

    pub fn new_chat(&mut self) -> String {
        let id = self.store.create_session();
        log::info!("New chat {}", id);
        self.event_bus.emit(ChatEvent::SessionCreated {
            session_id: id.clone(),
        });
        id
    }

    pub fn delete_chat(&mut self, id: &str) -> bool {
        let removed = self.store.delete_session(id);
        if removed {
            log::info!("Deleted chat {}", id);
            self.event_bus.emit(ChatEvent::SessionDeleted {
                session_id: id.to_string(),
            });
        }
        removed
    }

    pub fn rename_chat(&mut self, id: &str, title: impl Into<String>) -> bool {
        self.store.rename_session(id, title)
    }

    pub fn switch_chat(&mut self, id: &str) -> bool {
        self.store.switch_session(id)
    }

    /// Sharing has no backing service yet; this only reports that.
    pub fn share_chat(&mut self, id: &str) {
        log::info!("Sharing chat {}", id);
        self.event_bus.emit(ChatEvent::ShareUnavailable {
            session_id: id.to_string(),
        });
    }
}

/// Run one full submission against `insights`.
///
/// The controller borrow is released while the lookup is in flight, so
/// the UI can keep rendering (and switching or deleting sessions).
/// Returns the turn id of the accepted submission.
pub async fn submit(
    controller: &RefCell<ChatController>,
    insights: &dyn InsightPort,
    input: &str,
) -> std::result::Result<u64, SubmitRejected> {
    let turn = controller.borrow_mut().begin_submit(input)?;
    let turn_id = turn.turn_id;

    let result = insights.ask(&turn.query).await;

    controller.borrow_mut().complete_submit(turn, result);
    Ok(turn_id)
}
