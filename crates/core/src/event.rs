//! Domain events published by the session.
//!
//! The session publishes an event whenever something observable happens.
//! Renderers, the HTTP event stream, and tests subscribe without the session
//! knowing about them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::agent::Agent;
use crate::language::Language;
use crate::speech::SpeechRequest;
use crate::turn::Turn;

/// All domain events in the system.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A turn was appended to an agent's thread
    TurnAppended {
        agent: Agent,
        turn: Turn,
    },

    /// The active agent changed
    AgentSwitched {
        from: Agent,
        to: Agent,
        greeted: bool,
        timestamp: DateTime<Utc>,
    },

    /// The session language changed
    LanguageChanged {
        from: Language,
        to: Language,
        timestamp: DateTime<Utc>,
    },

    /// A turn was handed to speech output
    SpeechRequested {
        request: SpeechRequest,
    },

    /// Speech started or finished
    SpeakingChanged {
        is_speaking: bool,
        timestamp: DateTime<Utc>,
    },

    /// An error was recovered from
    ErrorOccurred {
        context: String,
        error_message: String,
        timestamp: DateTime<Utc>,
    },
}

/// A broadcast-based event bus for domain events.
///
/// Uses `tokio::sync::broadcast` for multi-consumer pub/sub.
pub struct EventBus {
    sender: broadcast::Sender<Arc<DomainEvent>>,
}

impl EventBus {
    /// Create a new event bus with the given capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers.
    pub fn publish(&self, event: DomainEvent) {
        // No subscribers is fine
        let _ = self.sender.send(Arc::new(event));
    }

    /// Subscribe to receive events.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<DomainEvent>> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
