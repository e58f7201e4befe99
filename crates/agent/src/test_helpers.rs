//! Shared test doubles for providers, generators, and speech output.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use frontdesk_core::error::{ProviderError, SpeechError};
use frontdesk_core::provider::{Provider, ProviderRequest, ProviderResponse, Usage};
use frontdesk_core::{Agent, Context, Language, Message, SpeechOutput, SpeechRequest};
use tokio::sync::Notify;

use crate::generator::ReplyGenerator;

/// Answers every request with the same text and records what it was asked.
pub struct MockProvider {
    reply: String,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl MockProvider {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ProviderRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        self.requests.lock().unwrap().push(request);
        Ok(ProviderResponse {
            message: Message::assistant(&self.reply),
            usage: Some(Usage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            }),
            model: "mock-model".into(),
        })
    }
}

pub struct FailingProvider;

#[async_trait]
impl Provider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn complete(&self, _request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        Err(ProviderError::ApiError {
            status_code: 503,
            message: "Service Unavailable".into(),
        })
    }
}

pub struct HangingProvider;

#[async_trait]
impl Provider for HangingProvider {
    fn name(&self) -> &str {
        "hanging"
    }

    async fn complete(&self, _request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Err(ProviderError::Timeout("unreachable".into()))
    }
}

/// Answers after a fixed delay.
pub struct SlowProvider {
    pub delay: Duration,
    pub reply: &'static str,
}

#[async_trait]
impl Provider for SlowProvider {
    fn name(&self) -> &str {
        "slow"
    }

    async fn complete(&self, _request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        tokio::time::sleep(self.delay).await;
        Ok(ProviderResponse {
            message: Message::assistant(self.reply),
            usage: None,
            model: "slow-model".into(),
        })
    }
}

/// A generator that always errors.
pub struct FailingGenerator;

#[async_trait]
impl ReplyGenerator for FailingGenerator {
    async fn generate(
        &self,
        _text: &str,
        _context: Option<Context>,
        _agent: Agent,
        _language: Language,
    ) -> Result<String, ProviderError> {
        Err(ProviderError::Network("connection reset".into()))
    }
}

/// Holds every generation until the gate is notified.
pub struct GatedGenerator {
    gate: Arc<Notify>,
}

impl GatedGenerator {
    pub fn new(gate: Arc<Notify>) -> Self {
        Self { gate }
    }
}

#[async_trait]
impl ReplyGenerator for GatedGenerator {
    async fn generate(
        &self,
        text: &str,
        _context: Option<Context>,
        agent: Agent,
        _language: Language,
    ) -> Result<String, ProviderError> {
        self.gate.notified().await;
        Ok(format!("{agent} looked into: {text}"))
    }
}

/// Records spoken text; optionally fails the first `n` requests.
pub struct RecordingSpeech {
    spoken: Mutex<Vec<String>>,
    failures_left: Mutex<usize>,
}

impl RecordingSpeech {
    pub fn new() -> Self {
        Self::failing_first(0)
    }

    pub fn failing_first(n: usize) -> Self {
        Self {
            spoken: Mutex::new(Vec::new()),
            failures_left: Mutex::new(n),
        }
    }

    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechOutput for RecordingSpeech {
    fn name(&self) -> &str {
        "recording"
    }

    async fn speak(&self, request: &SpeechRequest) -> Result<(), SpeechError> {
        {
            let mut left = self.failures_left.lock().unwrap();
            if *left > 0 {
                *left -= 1;
                return Err(SpeechError::PlaybackFailed("no audio device".into()));
            }
        }
        self.spoken.lock().unwrap().push(request.text.clone());
        Ok(())
    }
}
