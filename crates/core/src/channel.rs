//! Input sources: where guest input comes from.
//!
//! A source (terminal, browser speech recognition bridge, kiosk buttons)
//! emits discrete [`InputEvent`]s. Each final transcript or typed line becomes
//! one `Submit`; UI actions map to the other variants.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::agent::Agent;
use crate::context::Context;
use crate::error::ChannelError;
use crate::language::Language;

/// Unique identifier for an input source instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId(pub String);

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One discrete event from an input source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Typed text or a final speech transcript
    Submit { text: String },
    /// The guest picked a persona explicitly
    SwitchAgent { agent: Agent },
    /// The guest picked a language
    ChangeLanguage { language: Language },
    /// A new perception reading (or `None` when nobody is in frame)
    Perceive { context: Option<Context> },
    /// One of the canned quick-action prompts, by zero-based index
    QuickAction { index: usize },
}

/// Input source trait.
#[async_trait]
pub trait InputSource: Send + Sync {
    fn name(&self) -> &str;

    fn id(&self) -> &ChannelId;

    /// Start producing events. The stream ends when the source closes.
    async fn start(
        &self,
    ) -> Result<mpsc::Receiver<Result<InputEvent, ChannelError>>, ChannelError>;
}
