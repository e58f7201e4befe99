//! Terminal speech output.
//!
//! Prints each agent turn with the persona's name and badge, then holds the
//! call open for [`speaking_time`] so the session's speaking state lasts
//! about as long as the line would take to say.

use std::time::Duration;

use async_trait::async_trait;
use frontdesk_config::SpeechConfig;
use frontdesk_core::error::SpeechError;
use frontdesk_core::speech::{SpeechOutput, SpeechRequest, speaking_time};
use tracing::debug;

pub struct TerminalSpeech {
    words_per_second: f32,
}

impl TerminalSpeech {
    /// `words_per_second` of zero disables pacing.
    pub fn new(words_per_second: f32) -> Self {
        Self { words_per_second }
    }

    pub fn from_config(config: &SpeechConfig) -> Self {
        if config.enabled {
            Self::new(config.words_per_second)
        } else {
            Self::new(0.0)
        }
    }

    /// How long speaking `text` is assumed to take.
    pub fn duration_for(&self, text: &str) -> Duration {
        speaking_time(text, self.words_per_second)
    }
}

impl Default for TerminalSpeech {
    fn default() -> Self {
        Self::new(2.5)
    }
}

#[async_trait]
impl SpeechOutput for TerminalSpeech {
    fn name(&self) -> &str {
        "terminal"
    }

    async fn speak(&self, request: &SpeechRequest) -> Result<(), SpeechError> {
        let profile = request.agent.profile();
        println!("\n  {} ({}): {}\n", profile.name, profile.badge, request.text);

        let duration = self.duration_for(&request.text);
        debug!(
            agent = %request.agent,
            voice_lang = request.voice.lang,
            millis = duration.as_millis() as u64,
            "Speaking"
        );
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
        Ok(())
    }
}
