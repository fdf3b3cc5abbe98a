use serde::{Deserialize, Serialize};

/// Events emitted by the chat controller.
/// UI subscribes to these for status updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A submission was accepted and the insight lookup started
    TurnStart { turn_id: u64, session_id: String },

    /// The lookup answered and the reply was appended
    InsightReady { session_id: String, text: String },

    /// The lookup failed; an apology was appended instead
    InsightFailed { session_id: String, message: String },

    /// The reply arrived after its session was deleted
    ResponseDiscarded { turn_id: u64, session_id: String },

    /// The controller is idle again
    TurnEnd { turn_id: u64 },

    /// A new session was created and activated
    SessionCreated { session_id: String },

    /// A session was removed
    SessionDeleted { session_id: String },

    /// Sharing was requested but no sharing service exists yet
    ShareUnavailable { session_id: String },
}
