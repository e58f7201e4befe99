//! The Frontdesk conversation pipeline.
//!
//! A guest message flows through four stages:
//!
//! 1. **Route**: the [`KeywordRouter`] picks the persona (host, concierge,
//!    support) by trigger substrings, in priority order
//! 2. **Script**: the [`ScriptedResolver`] looks for a canned reply in the
//!    persona's table for the session language (whole-word triggers)
//! 3. **Generate**: otherwise the [`ReplyGenerator`] asks the provider, with a
//!    templated fallback when it cannot
//! 4. **Speak**: the [`SessionManager`] appends the reply to the persona's
//!    thread and hands it to speech output
//!
//! The session also owns greetings, language changes, and the busy flag that
//! keeps submissions one at a time.

pub mod catalog;
pub mod generator;
pub mod router;
pub mod scripted;
pub mod selector;
pub mod session;
pub mod templates;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use generator::{FallbackGenerator, ReplyGenerator};
pub use router::{KeywordRouter, RouteDecision, RoutingTable};
pub use scripted::{CatalogError, ScriptTable, ScriptedMatch, ScriptedResolver};
pub use selector::{FirstSelector, RandomSelector, ReplySelector};
pub use session::{RenderState, ReplySource, SessionManager, SessionSnapshot, TurnOutcome};
pub use templates::quick_actions;
