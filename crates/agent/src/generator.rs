//! Generated replies for messages no script covers.
//!
//! [`FallbackGenerator`] asks the configured provider for a reply in the
//! persona's voice, tinted by the guest's perceived mood and age. Provider
//! failures, timeouts, and empty completions are absorbed here: the guest
//! gets a fixed templated reply instead.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use frontdesk_config::AppConfig;
use frontdesk_core::error::ProviderError;
use frontdesk_core::{AgeCategory, Agent, Context, Language, Message, Provider, ProviderRequest};
use tracing::{debug, warn};

use crate::templates;

/// Produces a free-form reply for one guest message.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    async fn generate(
        &self,
        text: &str,
        context: Option<Context>,
        agent: Agent,
        language: Language,
    ) -> Result<String, ProviderError>;
}

/// Provider-backed generator with a deterministic templated fallback.
///
/// `generate` never returns `Err`.
pub struct FallbackGenerator {
    provider: Option<Arc<dyn Provider>>,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
    timeout: Duration,
    hotel_name: String,
}

impl FallbackGenerator {
    pub fn new(provider: Option<Arc<dyn Provider>>) -> Self {
        Self {
            provider,
            model: "gemini-2.0-flash".into(),
            temperature: 0.7,
            max_tokens: Some(512),
            timeout: Duration::from_secs(15),
            hotel_name: "Hotel Rafaela".into(),
        }
    }

    /// Generator using the model, limits, and hotel name from `config`.
    pub fn from_config(config: &AppConfig, provider: Option<Arc<dyn Provider>>) -> Self {
        let model = config
            .providers
            .get(&config.default_provider)
            .and_then(|p| p.default_model.clone())
            .unwrap_or_else(|| config.default_model.clone());

        Self {
            provider,
            model,
            temperature: config.default_temperature,
            max_tokens: Some(config.default_max_tokens),
            timeout: Duration::from_secs(config.generation_timeout_secs),
            hotel_name: config.hotel_name.clone(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Prompt messages sent to the provider.
    pub fn build_prompt(
        &self,
        text: &str,
        context: Option<Context>,
        agent: Agent,
        language: Language,
    ) -> Vec<Message> {
        let mut system = persona_prompt(agent, &self.hotel_name);
        system.push_str(&format!("\n\nReply in {}.", language.display_name()));

        let directives = tone_directives(context);
        if !directives.is_empty() {
            system.push_str("\n\nTone:");
            for directive in directives {
                system.push_str("\n- ");
                system.push_str(directive);
            }
        }

        vec![Message::system(system), Message::user(text)]
    }

    async fn ask_provider(
        &self,
        provider: &dyn Provider,
        request: ProviderRequest,
    ) -> Result<String, ProviderError> {
        let response = tokio::time::timeout(self.timeout, provider.complete(request))
            .await
            .map_err(|_| {
                ProviderError::Timeout(format!(
                    "no reply from '{}' within {}ms",
                    provider.name(),
                    self.timeout.as_millis()
                ))
            })??;

        let content = response.message.content.trim();
        if content.is_empty() {
            return Err(ProviderError::EmptyCompletion);
        }
        Ok(content.to_string())
    }
}

#[async_trait]
impl ReplyGenerator for FallbackGenerator {
    async fn generate(
        &self,
        text: &str,
        context: Option<Context>,
        agent: Agent,
        language: Language,
    ) -> Result<String, ProviderError> {
        let Some(provider) = &self.provider else {
            debug!(agent = %agent, "No provider configured, using templated reply");
            return Ok(templates::fallback_reply(agent, language, text));
        };

        let request = ProviderRequest {
            model: self.model.clone(),
            messages: self.build_prompt(text, context, agent, language),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        match self.ask_provider(provider.as_ref(), request).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                warn!(provider = %provider.name(), agent = %agent, error = %e, "Generation failed, using templated reply");
                Ok(templates::fallback_reply(agent, language, text))
            }
        }
    }
}

fn persona_prompt(agent: Agent, hotel_name: &str) -> String {
    let profile = agent.profile();
    let duties = match agent {
        Agent::Host => {
            "You welcome guests and answer questions about general information, hotel facilities, \
             amenities, directions, and policies. Refer bookings to Daisy and operational issues to John."
        }
        Agent::Concierge => {
            "You handle reservations, availability, room types, pricing, payments, and cancellations."
        }
        Agent::Support => {
            "You resolve operational issues: housekeeping, maintenance, lost items, noise, \
             in-room equipment, and emergencies."
        }
    };
    format!(
        "You are {}, the {} at {hotel_name} ({}). {duties} Keep replies to two or three short \
         sentences; they are spoken aloud.",
        profile.name, profile.role, profile.responsibilities
    )
}

fn tone_directives(context: Option<Context>) -> Vec<&'static str> {
    let Some(context) = context else {
        return Vec::new();
    };

    let mut directives = Vec::new();
    if context.emotion.is_distressed() {
        directives.push("The guest seems upset; respond with extra empathy.");
    } else if context.emotion.is_hostile() {
        directives.push("The guest seems frustrated; stay calm, apologize, and focus on resolving the issue.");
    } else if context.emotion.is_positive() {
        directives.push("The guest seems cheerful; match their enthusiasm.");
    }
    if context.age_category == AgeCategory::Child {
        directives.push("The guest appears to be a child; use simpler phrasing.");
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{FailingProvider, HangingProvider, MockProvider, SlowProvider};
    use frontdesk_providers::FallbackProvider;
    use frontdesk_core::{Emotion, Role};

    #[tokio::test]
    async fn returns_provider_reply() {
        let provider = Arc::new(MockProvider::new("The pool is open until 10 PM."));
        let generator = FallbackGenerator::new(Some(provider.clone()));

        let reply = generator
            .generate("pool hours", None, Agent::Host, Language::En)
            .await
            .unwrap();
        assert_eq!(reply, "The pool is open until 10 PM.");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn provider_error_yields_template() {
        let generator = FallbackGenerator::new(Some(Arc::new(FailingProvider)));
        let reply = generator
            .generate("late dinner", None, Agent::Concierge, Language::Tl)
            .await
            .unwrap();
        assert_eq!(reply, templates::fallback_reply(Agent::Concierge, Language::Tl, "late dinner"));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_yields_template() {
        let generator = FallbackGenerator::new(Some(Arc::new(HangingProvider)))
            .with_timeout(Duration::from_millis(100));
        let reply = generator
            .generate("the elevator", None, Agent::Support, Language::En)
            .await
            .unwrap();
        assert!(reply.starts_with("I'm here to help with \"the elevator\""));
    }

    #[tokio::test(start_paused = true)]
    async fn backup_provider_answers_when_primary_hangs() {
        let budget = Duration::from_secs(15);
        let chain = FallbackProvider::new("fallback", budget)
            .then(Arc::new(HangingProvider))
            .then(Arc::new(SlowProvider {
                delay: Duration::from_millis(200),
                reply: "Breakfast is served from 6:30 to 10.",
            }));
        let generator = FallbackGenerator::new(Some(Arc::new(chain))).with_timeout(budget);

        let reply = generator
            .generate("breakfast hours", None, Agent::Host, Language::En)
            .await
            .unwrap();
        assert_eq!(reply, "Breakfast is served from 6:30 to 10.");
    }

    #[tokio::test]
    async fn blank_completion_yields_template() {
        let generator = FallbackGenerator::new(Some(Arc::new(MockProvider::new("   "))));
        let reply = generator
            .generate("spa", None, Agent::Host, Language::En)
            .await
            .unwrap();
        assert!(reply.contains("\"spa\""));
    }

    #[tokio::test]
    async fn no_provider_yields_template() {
        let generator = FallbackGenerator::new(None);
        let reply = generator
            .generate("karaoke", None, Agent::Host, Language::Ko)
            .await
            .unwrap();
        assert_eq!(reply, templates::fallback_reply(Agent::Host, Language::Ko, "karaoke"));
    }

    #[tokio::test]
    async fn request_carries_persona_and_limits() {
        let provider = Arc::new(MockProvider::new("ok"));
        let generator = FallbackGenerator::from_config(&AppConfig::default(), Some(provider.clone()));

        generator
            .generate("pool", None, Agent::Support, Language::Ja)
            .await
            .unwrap();

        let request = provider.last_request().unwrap();
        assert_eq!(request.model, "gemini-2.0-flash");
        assert_eq!(request.max_tokens, Some(512));
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert!(request.messages[0].content.starts_with("You are John, the Support Manager at Hotel Rafaela"));
        assert!(request.messages[0].content.contains("Reply in Japanese."));
        assert_eq!(request.messages[1].content, "pool");
    }

    #[test]
    fn tone_follows_context() {
        let generator = FallbackGenerator::new(None);
        let prompt = |ctx| generator.build_prompt("hi", ctx, Agent::Host, Language::En)[0].content.clone();

        assert!(!prompt(None).contains("Tone:"));
        assert!(prompt(Some(Context::new(AgeCategory::Adult, Emotion::Sad))).contains("extra empathy"));
        assert!(prompt(Some(Context::new(AgeCategory::Adult, Emotion::Fearful))).contains("extra empathy"));
        assert!(prompt(Some(Context::new(AgeCategory::Adult, Emotion::Angry))).contains("stay calm, apologize"));
        assert!(prompt(Some(Context::new(AgeCategory::Adult, Emotion::Happy))).contains("match their enthusiasm"));

        let child = prompt(Some(Context::new(AgeCategory::Child, Emotion::Neutral)));
        assert!(child.contains("simpler phrasing"));
        assert!(!child.contains("empathy"));
    }
}
