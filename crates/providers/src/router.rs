//! Provider router: selects the generative backend based on config.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use frontdesk_config::AppConfig;
use frontdesk_core::provider::Provider;
use tracing::debug;

use crate::fallback::FallbackProvider;
use crate::openai_compat::OpenAiCompatProvider;

/// Holds the configured providers by name.
pub struct ProviderRouter {
    providers: HashMap<String, Arc<dyn Provider>>,
    default_provider: String,
}

impl ProviderRouter {
    pub fn new(default_provider: impl Into<String>) -> Self {
        Self {
            providers: HashMap::new(),
            default_provider: default_provider.into(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn Provider>) {
        self.providers.insert(name.into(), provider);
    }

    /// Get the default provider.
    pub fn default(&self) -> Option<Arc<dyn Provider>> {
        self.providers.get(&self.default_provider).cloned()
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Provider>> {
        self.providers.get(name).cloned()
    }

    /// List all registered provider names, sorted.
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// The provider the reply generator should call.
    ///
    /// With fallbacks configured this is a [`FallbackProvider`] that tries the
    /// default first and then each named fallback in order, all within
    /// `budget`. Names that were never registered are skipped.
    pub fn primary(&self, fallbacks: &[String], budget: Duration) -> Option<Arc<dyn Provider>> {
        let default = self.default()?;
        if fallbacks.is_empty() {
            return Some(default);
        }

        let mut chain = FallbackProvider::new("fallback", budget).then(default);
        for name in fallbacks.iter().filter(|n| **n != self.default_provider) {
            match self.get(name) {
                Some(provider) => chain = chain.then(provider),
                None => debug!(provider = %name, "Skipping unknown fallback provider"),
            }
        }
        debug!(
            providers = ?chain.provider_names(),
            attempt_timeout_ms = chain.attempt_timeout().as_millis() as u64,
            "Provider chain ready"
        );
        Some(Arc::new(chain))
    }
}

/// Build providers from configuration.
///
/// Every entry under `[providers]` is registered, and every name listed in
/// `fallback_providers`. The default provider is always registered, falling
/// back to the top-level API key when it has none of its own.
pub fn build_from_config(config: &AppConfig) -> ProviderRouter {
    let mut router = ProviderRouter::new(&config.default_provider);

    let names = config
        .providers
        .keys()
        .chain(config.fallback_providers.iter())
        .chain(std::iter::once(&config.default_provider));

    for name in names {
        if router.get(name).is_some() {
            continue;
        }

        let provider_config = config.providers.get(name);
        let api_key = provider_config
            .and_then(|p| p.api_key.clone())
            .or_else(|| config.api_key.clone())
            .unwrap_or_default();
        let base_url = provider_config
            .and_then(|p| p.api_url.clone())
            .unwrap_or_else(|| default_base_url(name));

        router.register(
            name.clone(),
            Arc::new(OpenAiCompatProvider::new(name, &base_url, &api_key)),
        );
    }

    router
}

/// Get the default base URL for well-known providers.
fn default_base_url(provider_name: &str) -> String {
    match provider_name {
        "gemini" | "google" => "https://generativelanguage.googleapis.com/v1beta/openai".into(),
        "openrouter" => "https://openrouter.ai/api/v1".into(),
        "openai" => "https://api.openai.com/v1".into(),
        "ollama" => "http://localhost:11434/v1".into(),
        "deepseek" => "https://api.deepseek.com/v1".into(),
        "groq" => "https://api.groq.com/openai/v1".into(),
        "together" => "https://api.together.xyz/v1".into(),
        "vllm" => "http://localhost:8000/v1".into(),
        "llamacpp" | "llama.cpp" => "http://localhost:8080/v1".into(),
        _ => format!("https://{provider_name}.api.example.com/v1"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontdesk_config::ProviderConfig;

    #[test]
    fn router_register_and_lookup() {
        let mut router = ProviderRouter::new("gemini");
        router.register("gemini", Arc::new(OpenAiCompatProvider::gemini("key")));

        assert!(router.get("gemini").is_some());
        assert!(router.get("nonexistent").is_none());
        assert!(router.default().is_some());
    }

    #[test]
    fn default_base_urls() {
        assert!(default_base_url("gemini").contains("generativelanguage.googleapis.com"));
        assert!(default_base_url("openai").contains("api.openai.com"));
        assert!(default_base_url("ollama").contains("localhost:11434"));
    }

    #[test]
    fn build_from_default_config() {
        let config = AppConfig::default();
        let router = build_from_config(&config);
        assert_eq!(router.list(), vec!["gemini"]);
        let primary = router.primary(&config.fallback_providers, Duration::from_secs(5));
        assert_eq!(primary.unwrap().name(), "gemini");
    }

    #[test]
    fn fallback_chain_from_config() {
        let mut config = AppConfig::default();
        config.fallback_providers = vec!["ollama".into(), "gemini".into(), "missing".into()];
        config.providers.insert(
            "ollama".into(),
            ProviderConfig {
                api_key: None,
                api_url: Some("http://localhost:11434/v1".into()),
                default_model: None,
            },
        );

        let mut router = build_from_config(&config);
        assert_eq!(router.list(), vec!["gemini", "missing", "ollama"]);

        // Drop one so the chain has to skip it
        router.providers.remove("missing");
        let primary = router
            .primary(&config.fallback_providers, Duration::from_secs(5))
            .unwrap();
        assert_eq!(primary.name(), "fallback");
    }

    #[test]
    fn no_default_means_no_primary() {
        let router = ProviderRouter::new("gemini");
        assert!(router.primary(&[], Duration::from_secs(1)).is_none());
    }
}
