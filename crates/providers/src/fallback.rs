//! Provider chain sharing one generation budget.
//!
//! The reply generator gives the whole chain `generation_timeout_secs`. Each
//! provider gets an equal share of that budget, so a hung primary still
//! leaves the backups time to answer before the generator gives up.

use async_trait::async_trait;
use frontdesk_core::error::ProviderError;
use frontdesk_core::provider::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Tries providers in order until one answers.
pub struct FallbackProvider {
    name: String,
    providers: Vec<Arc<dyn Provider>>,
    budget: Duration,
}

impl FallbackProvider {
    /// An empty chain whose attempts together take at most `budget`.
    pub fn new(name: impl Into<String>, budget: Duration) -> Self {
        Self {
            name: name.into(),
            providers: Vec::new(),
            budget,
        }
    }

    /// Append a provider to try after the ones already chained.
    pub fn then(mut self, provider: Arc<dyn Provider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// The share of the budget one attempt may use.
    pub fn attempt_timeout(&self) -> Duration {
        let attempts = u32::try_from(self.providers.len()).unwrap_or(u32::MAX).max(1);
        self.budget / attempts
    }
}

#[async_trait]
impl Provider for FallbackProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(
        &self,
        request: ProviderRequest,
    ) -> std::result::Result<ProviderResponse, ProviderError> {
        let per_attempt = self.attempt_timeout();
        let mut last_error = ProviderError::NotConfigured("provider chain is empty".into());

        for provider in &self.providers {
            debug!(provider = provider.name(), timeout_ms = per_attempt.as_millis() as u64, "Asking provider");

            last_error = match tokio::time::timeout(per_attempt, provider.complete(request.clone())).await {
                Ok(Ok(response)) => return Ok(response),
                Ok(Err(e)) => e,
                Err(_) => ProviderError::Timeout(format!(
                    "'{}' gave no reply within {}ms",
                    provider.name(),
                    per_attempt.as_millis()
                )),
            };
            warn!(provider = provider.name(), error = %last_error, "Provider failed, moving down the chain");
        }

        Err(last_error)
    }

    async fn health_check(&self) -> std::result::Result<bool, ProviderError> {
        for provider in &self.providers {
            if let Ok(true) = provider.health_check().await {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
