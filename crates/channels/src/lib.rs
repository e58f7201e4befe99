//! Terminal-side collaborators for Frontdesk.
//!
//! - **CLI input**: typed lines and slash commands from stdin
//! - **Terminal speech**: prints each agent turn and holds the speaking state
//!   for roughly as long as reading it aloud would take

pub mod cli;
pub mod speech;

pub use cli::{CliChannel, parse_line};
pub use speech::TerminalSpeech;
