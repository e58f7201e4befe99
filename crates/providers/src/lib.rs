//! Generative text providers for Frontdesk.
//!
//! All providers implement the `frontdesk_core::Provider` trait.
//! The router builds them from configuration; the fallback chain wraps
//! several of them behind one name.

pub mod fallback;
pub mod openai_compat;
pub mod router;

pub use fallback::FallbackProvider;
pub use openai_compat::OpenAiCompatProvider;
pub use router::{ProviderRouter, build_from_config};
