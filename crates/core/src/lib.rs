//! # Frontdesk Core
//!
//! Domain types, collaborator traits, and error definitions for the Frontdesk
//! multi-persona concierge runtime. This crate has **no framework
//! dependencies**; it defines the model every other crate builds against.
//!
//! ## Layout
//!
//! - The closed sets the runtime reasons about: [`Agent`], [`Language`],
//!   [`Emotion`], [`AgeCategory`].
//! - Conversation values: [`Turn`] and [`Thread`].
//! - Narrow traits for the collaborators the session drives but does not own:
//!   [`Provider`] (generative text), [`SpeechOutput`], [`InputSource`] and
//!   [`PerceptionSource`].

pub mod agent;
pub mod channel;
pub mod context;
pub mod error;
pub mod event;
pub mod language;
pub mod message;
pub mod provider;
pub mod speech;
pub mod turn;

// Re-export key types at crate root for ergonomics
pub use agent::{Agent, AgentProfile};
pub use channel::{ChannelId, InputEvent, InputSource};
pub use context::{AgeCategory, Context, Emotion, NoPerception, PerceptionSource, WatchPerception};
pub use error::{Error, Result};
pub use event::{DomainEvent, EventBus};
pub use language::Language;
pub use message::{Message, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse};
pub use speech::{SilentSpeech, SpeechOutput, SpeechRequest, VoiceGender, VoiceProfile, speaking_time};
pub use turn::{Speaker, Thread, Turn};
