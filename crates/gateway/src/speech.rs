//! Speech output for browser clients.
//!
//! The browser does the actual synthesis from the `speech_requested` events
//! on `/v1/events`. This side only holds the session's speaking state open for
//! roughly as long as the browser will take, so the busy flag and the
//! avatar's mouth stay in step with the audio.

use std::time::Duration;

use async_trait::async_trait;
use frontdesk_config::SpeechConfig;
use frontdesk_core::error::SpeechError;
use frontdesk_core::speech::{SpeechOutput, SpeechRequest, speaking_time};
use tracing::debug;

pub struct BrowserSpeech {
    words_per_second: f32,
}

impl BrowserSpeech {
    pub fn new(words_per_second: f32) -> Self {
        Self { words_per_second }
    }

    /// Disabled speech holds for nothing.
    pub fn from_config(config: &SpeechConfig) -> Self {
        Self::new(if config.enabled { config.words_per_second } else { 0.0 })
    }

    fn hold_for(&self, text: &str) -> Duration {
        speaking_time(text, self.words_per_second)
    }
}

#[async_trait]
impl SpeechOutput for BrowserSpeech {
    fn name(&self) -> &str {
        "browser"
    }

    async fn speak(&self, request: &SpeechRequest) -> Result<(), SpeechError> {
        let hold = self.hold_for(&request.text);
        debug!(agent = %request.agent, millis = hold.as_millis() as u64, "Holding for browser speech");
        if !hold.is_zero() {
            tokio::time::sleep(hold).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontdesk_core::{Agent, Language};

    #[test]
    fn disabled_config_never_holds() {
        let speech = BrowserSpeech::from_config(&SpeechConfig {
            enabled: false,
            words_per_second: 3.0,
        });
        assert_eq!(speech.hold_for("one two three"), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn holds_in_proportion_to_word_count() {
        let speech = BrowserSpeech::new(4.0);
        let request = SpeechRequest::new("Which dates would you like?", Agent::Concierge, Language::En);

        let started = tokio::time::Instant::now();
        speech.speak(&request).await.unwrap();
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(1250), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(1350), "{elapsed:?}");
    }

    #[test]
    fn chinese_reply_holds_per_character() {
        let speech = BrowserSpeech::new(2.0);
        // 8 Han characters
        let hold = speech.hold_for("请问您需要几间房");
        assert!(hold >= Duration::from_secs(2), "{hold:?}");
    }
}
