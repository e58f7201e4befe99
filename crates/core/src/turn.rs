//! Conversation turns and per-agent threads.
//!
//! A [`Thread`] is append-only: turns are pushed in chronological order and
//! never reordered, edited, or removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::agent::Agent;
use crate::context::Context;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Agent,
}

/// A single message in a thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Unique turn ID
    pub id: String,

    /// Who said it
    pub speaker: Speaker,

    /// The persona that spoke; `None` for user turns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<Agent>,

    /// The text content
    pub text: String,

    /// Perceived context at the moment the user submitted this turn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    /// Timestamp
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Create a user turn carrying the perceived context (if any).
    pub fn user(text: impl Into<String>, context: Option<Context>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            speaker: Speaker::User,
            agent: None,
            text: text.into(),
            context,
            timestamp: Utc::now(),
        }
    }

    /// Create a turn spoken by `agent`.
    pub fn agent(agent: Agent, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            speaker: Speaker::Agent,
            agent: Some(agent),
            text: text.into(),
            context: None,
            timestamp: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.speaker == Speaker::User
    }
}

/// The ordered turn history for one agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thread {
    turns: Vec<Turn>,
}

impl Thread {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn. This is the only way a thread changes.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
