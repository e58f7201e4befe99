//! The conversation session: one guest, three personas.
//!
//! [`SessionManager`] owns a thread per agent, the active agent, the reply
//! language, and the greeting bookkeeping, and drives each submission through
//! routing, scripted lookup, generation, and speech.
//!
//! Every method takes `&self`. State sits behind a `std::sync::Mutex` that is
//! only held for short synchronous sections, never across an `.await`, so
//! agent switches and language changes go through while a reply is still
//! being generated or spoken. Submissions are serialized by a busy flag: a
//! second submission while one is in flight is rejected, not queued.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use frontdesk_config::AppConfig;
use frontdesk_core::error::{SessionError, SpeechError};
use frontdesk_core::event::{DomainEvent, EventBus};
use frontdesk_core::{
    Agent, Emotion, Language, NoPerception, PerceptionSource, SpeechOutput, SpeechRequest, Thread,
    Turn,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::generator::{FallbackGenerator, ReplyGenerator};
use crate::router::KeywordRouter;
use crate::scripted::{CatalogError, ScriptTable, ScriptedResolver};
use crate::selector::RandomSelector;
use crate::templates;

/// Where a submitted message's reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Scripted,
    Generated,
    Apology,
}

/// Result of one accepted submission.
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    /// The agent the message was routed to
    pub agent: Agent,
    /// The routing trigger, if one matched
    pub trigger: Option<String>,
    pub reply: String,
    pub source: ReplySource,
    /// Speech failed and an apology turn followed the reply
    pub speech_failed: bool,
}

/// Read-only view for avatar renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderState {
    pub active_agent: Agent,
    pub is_speaking: bool,
    pub emotion: Emotion,
    pub spoken_text: Option<String>,
}

/// Point-in-time summary of the session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub active_agent: Agent,
    pub language: Language,
    pub busy: bool,
    pub speaking: bool,
    pub greeted: Vec<Agent>,
    pub thread_lengths: BTreeMap<Agent, usize>,
}

struct SessionState {
    threads: [Thread; 3],
    active_agent: Agent,
    language: Language,
    greeted: BTreeSet<Agent>,
    started: bool,
    speaking: bool,
    spoken_text: Option<String>,
}

impl SessionState {
    fn new(language: Language) -> Self {
        Self {
            threads: Default::default(),
            active_agent: Agent::DEFAULT,
            language,
            greeted: BTreeSet::new(),
            started: false,
            speaking: false,
            spoken_text: None,
        }
    }

    fn thread_mut(&mut self, agent: Agent) -> &mut Thread {
        &mut self.threads[agent.index()]
    }
}

/// Clears the busy flag when dropped, on every exit path.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// The session aggregate and its state machine.
pub struct SessionManager {
    state: Mutex<SessionState>,
    busy: AtomicBool,
    router: KeywordRouter,
    resolver: ScriptedResolver,
    generator: Arc<dyn ReplyGenerator>,
    speech: Arc<dyn SpeechOutput>,
    perception: Arc<dyn PerceptionSource>,
    events: Arc<EventBus>,
    hotel_name: String,
}

impl SessionManager {
    /// Create a session with the built-in router, no perception, English
    /// replies, and a private event bus.
    pub fn new(
        resolver: ScriptedResolver,
        generator: Arc<dyn ReplyGenerator>,
        speech: Arc<dyn SpeechOutput>,
    ) -> Self {
        Self {
            state: Mutex::new(SessionState::new(Language::default())),
            busy: AtomicBool::new(false),
            router: KeywordRouter::default(),
            resolver,
            generator,
            speech,
            perception: Arc::new(NoPerception),
            events: Arc::new(EventBus::default()),
            hotel_name: "Hotel Rafaela".into(),
        }
    }

    /// Wire a full session from configuration: built-in tables, the
    /// configured provider chain, and a selector seeded from `[selector]`.
    pub fn from_config(config: &AppConfig, speech: Arc<dyn SpeechOutput>) -> Result<Self, CatalogError> {
        let selector = config
            .selector
            .seed
            .map(RandomSelector::seeded)
            .unwrap_or_default();
        let resolver = ScriptedResolver::new(ScriptTable::builtin()?, Arc::new(selector));

        let provider = if config.has_api_key() || is_keyless(&config.default_provider) {
            frontdesk_providers::build_from_config(config).primary(
                &config.fallback_providers,
                Duration::from_secs(config.generation_timeout_secs),
            )
        } else {
            info!("No API key configured, generated replies will use templates");
            None
        };
        let generator = FallbackGenerator::from_config(config, provider);

        Ok(Self::new(resolver, Arc::new(generator), speech)
            .with_language(config.default_language)
            .with_hotel_name(&config.hotel_name))
    }

    pub fn with_router(mut self, router: KeywordRouter) -> Self {
        self.router = router;
        self
    }

    pub fn with_perception(mut self, perception: Arc<dyn PerceptionSource>) -> Self {
        self.perception = perception;
        self
    }

    pub fn with_event_bus(mut self, events: Arc<EventBus>) -> Self {
        self.events = events;
        self
    }

    /// Initial reply language.
    pub fn with_language(self, language: Language) -> Self {
        self.state().language = language;
        self
    }

    pub fn with_hotel_name(mut self, hotel_name: impl Into<String>) -> Self {
        self.hotel_name = hotel_name.into();
        self
    }

    pub fn event_bus(&self) -> Arc<EventBus> {
        self.events.clone()
    }

    pub fn router(&self) -> &KeywordRouter {
        &self.router
    }

    // --- Operations ---

    /// Greet the guest with the host's welcome. Only the first call does anything.
    pub async fn start(&self) {
        let language = {
            let mut state = self.state();
            if state.started {
                return;
            }
            state.started = true;
            if !state.greeted.insert(Agent::DEFAULT) {
                return;
            }
            state.language
        };

        info!(agent = %Agent::DEFAULT, language = %language, "Session started");
        let welcome = templates::welcome(language, &self.hotel_name);
        self.append(Agent::DEFAULT, Turn::agent(Agent::DEFAULT, &welcome));
        if let Err(e) = self.speak(Agent::DEFAULT, &welcome, language).await {
            self.report("welcome speech", &e);
        }
    }

    /// Make `agent` the active agent.
    ///
    /// The first switch to an agent that has never been greeted and has an
    /// empty thread appends and speaks its introduction. Returns whether it did.
    pub async fn switch_agent(&self, agent: Agent) -> bool {
        let (from, language, greet) = {
            let mut state = self.state();
            let from = state.active_agent;
            if from == agent {
                return false;
            }
            state.active_agent = agent;
            let greet = !state.greeted.contains(&agent) && state.threads[agent.index()].is_empty();
            if greet {
                state.greeted.insert(agent);
            }
            (from, state.language, greet)
        };

        info!(from = %from, to = %agent, greeted = greet, "Switched agent");
        self.events.publish(DomainEvent::AgentSwitched {
            from,
            to: agent,
            greeted: greet,
            timestamp: Utc::now(),
        });

        if greet {
            let intro = templates::introduction(agent, language);
            self.append(agent, Turn::agent(agent, &intro));
            if let Err(e) = self.speak(agent, &intro, language).await {
                self.report("introduction speech", &e);
            }
        }
        greet
    }

    /// Handle one guest message end to end.
    ///
    /// The message is routed and the routed agent becomes active without an
    /// introduction; that first contact counts as its greeting. The user turn
    /// and the reply both land in the routed agent's thread, even if the guest
    /// switches away before the reply is ready.
    pub async fn submit(&self, text: &str) -> Result<TurnOutcome, SessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyInput);
        }
        let _busy = BusyGuard::acquire(&self.busy).ok_or(SessionError::Busy)?;

        let decision = self.router.route_explained(text);
        let agent = decision.agent;
        let context = self.perception.latest();

        let (from, language) = {
            let mut state = self.state();
            let from = state.active_agent;
            state.active_agent = agent;
            state.greeted.insert(agent);
            (from, state.language)
        };
        if from != agent {
            info!(from = %from, to = %agent, "Routed message switched agent");
            self.events.publish(DomainEvent::AgentSwitched {
                from,
                to: agent,
                greeted: false,
                timestamp: Utc::now(),
            });
        }
        self.append(agent, Turn::user(text, context));

        let (reply, source) = match self.resolver.resolve(text, agent, language) {
            Some(reply) => (reply, ReplySource::Scripted),
            None => match self.generator.generate(text, context, agent, language).await {
                Ok(reply) => (reply, ReplySource::Generated),
                Err(e) => {
                    self.report("reply generation", &e);
                    (templates::apology(self.language()).to_string(), ReplySource::Apology)
                }
            },
        };
        debug!(agent = %agent, source = ?source, "Reply resolved");

        self.append(agent, Turn::agent(agent, &reply));
        let mut speech_failed = false;
        if let Err(e) = self.speak(agent, &reply, language).await {
            self.report("reply speech", &e);
            speech_failed = true;
            if source != ReplySource::Apology {
                let current = self.language();
                let apology = templates::apology(current);
                self.append(agent, Turn::agent(agent, apology));
                if let Err(e) = self.speak(agent, apology, current).await {
                    warn!(agent = %agent, error = %e, "Apology could not be spoken");
                }
            }
        }

        Ok(TurnOutcome {
            agent,
            trigger: decision.trigger,
            reply,
            source,
            speech_failed,
        })
    }

    /// Switch the reply language and confirm it under the active agent.
    ///
    /// Returns `false` when `language` is already selected.
    pub async fn change_language(&self, language: Language) -> bool {
        let (from, agent) = {
            let mut state = self.state();
            let from = state.language;
            if from == language {
                return false;
            }
            state.language = language;
            (from, state.active_agent)
        };

        info!(from = %from, to = %language, "Language changed");
        self.events.publish(DomainEvent::LanguageChanged {
            from,
            to: language,
            timestamp: Utc::now(),
        });

        let confirmation = templates::language_confirmation(language);
        self.append(agent, Turn::agent(agent, confirmation));
        if let Err(e) = self.speak(agent, confirmation, language).await {
            self.report("language confirmation speech", &e);
        }
        true
    }

    // --- Accessors ---

    pub fn active_agent(&self) -> Agent {
        self.state().active_agent
    }

    pub fn language(&self) -> Language {
        self.state().language
    }

    pub fn thread(&self, agent: Agent) -> Thread {
        self.state().threads[agent.index()].clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// True while speech output is playing. Reported by `render_state` and
    /// snapshots; the gateway refuses voice transcripts while it is set.
    pub fn is_speaking(&self) -> bool {
        self.state().speaking
    }

    pub fn is_greeted(&self, agent: Agent) -> bool {
        self.state().greeted.contains(&agent)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let busy = self.is_busy();
        let state = self.state();
        SessionSnapshot {
            active_agent: state.active_agent,
            language: state.language,
            busy,
            speaking: state.speaking,
            greeted: state.greeted.iter().copied().collect(),
            thread_lengths: Agent::ALL
                .iter()
                .map(|a| (*a, state.threads[a.index()].len()))
                .collect(),
        }
    }

    pub fn render_state(&self) -> RenderState {
        let emotion = self
            .perception
            .latest()
            .map(|c| c.emotion)
            .unwrap_or_default();
        let state = self.state();
        RenderState {
            active_agent: state.active_agent,
            is_speaking: state.speaking,
            emotion,
            spoken_text: state.spoken_text.clone(),
        }
    }

    // --- Internals ---

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn append(&self, agent: Agent, turn: Turn) {
        self.state().thread_mut(agent).push(turn.clone());
        self.events.publish(DomainEvent::TurnAppended { agent, turn });
    }

    async fn speak(&self, agent: Agent, text: &str, language: Language) -> Result<(), SpeechError> {
        let request = SpeechRequest::new(text, agent, language);
        {
            let mut state = self.state();
            state.speaking = true;
            state.spoken_text = Some(request.text.clone());
        }
        self.events.publish(DomainEvent::SpeakingChanged {
            is_speaking: true,
            timestamp: Utc::now(),
        });
        self.events.publish(DomainEvent::SpeechRequested {
            request: request.clone(),
        });

        let result = self.speech.speak(&request).await;

        {
            let mut state = self.state();
            state.speaking = false;
            state.spoken_text = None;
        }
        self.events.publish(DomainEvent::SpeakingChanged {
            is_speaking: false,
            timestamp: Utc::now(),
        });
        result
    }

    fn report(&self, context: &str, error: &dyn std::error::Error) {
        warn!(context, error = %error, "Recovered from failure");
        self.events.publish(DomainEvent::ErrorOccurred {
            context: context.to_string(),
            error_message: error.to_string(),
            timestamp: Utc::now(),
        });
    }
}

fn is_keyless(provider: &str) -> bool {
    matches!(provider, "ollama" | "vllm" | "llamacpp" | "llama.cpp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::FirstSelector;
    use crate::test_helpers::{FailingGenerator, GatedGenerator, RecordingSpeech};
    use frontdesk_core::{AgeCategory, Context, Speaker, WatchPerception};

    fn resolver() -> ScriptedResolver {
        ScriptedResolver::new(ScriptTable::builtin().unwrap(), Arc::new(FirstSelector))
    }

    fn session_with(generator: Arc<dyn ReplyGenerator>, speech: Arc<RecordingSpeech>) -> SessionManager {
        SessionManager::new(resolver(), generator, speech)
    }

    fn session() -> (SessionManager, Arc<RecordingSpeech>) {
        let speech = Arc::new(RecordingSpeech::new());
        let session = session_with(Arc::new(FallbackGenerator::new(None)), speech.clone());
        (session, speech)
    }

    #[tokio::test]
    async fn start_welcomes_once() {
        let (session, speech) = session();
        session.start().await;
        session.start().await;

        let host = session.thread(Agent::Host);
        assert_eq!(host.len(), 1);
        assert!(host.turns()[0].text.starts_with("Hello! Welcome to Hotel Rafaela."));
        assert!(session.is_greeted(Agent::Host));
        assert_eq!(speech.spoken(), vec![host.turns()[0].text.clone()]);
    }

    #[tokio::test]
    async fn switching_greets_each_agent_at_most_once() {
        let (session, _speech) = session();
        session.start().await;

        assert!(session.switch_agent(Agent::Support).await);
        assert!(!session.switch_agent(Agent::Host).await);
        assert!(!session.switch_agent(Agent::Support).await);

        let support = session.thread(Agent::Support);
        assert_eq!(support.len(), 1);
        assert_eq!(
            support.turns()[0].text,
            "Hi! I'm John, your Support Manager. I specialize in Operations & Assistance. How can I help you?"
        );
        assert_eq!(session.active_agent(), Agent::Support);
    }

    #[tokio::test]
    async fn switching_to_active_agent_is_a_noop() {
        let (session, speech) = session();
        assert!(!session.switch_agent(Agent::Host).await);
        assert!(session.thread(Agent::Host).is_empty());
        assert!(speech.spoken().is_empty());
    }

    #[tokio::test]
    async fn routed_first_contact_supersedes_greeting() {
        let (session, _speech) = session();
        session.start().await;

        let outcome = session.submit("I want to book a room").await.unwrap();
        assert_eq!(outcome.agent, Agent::Concierge);
        assert_eq!(session.active_agent(), Agent::Concierge);
        assert!(session.is_greeted(Agent::Concierge));

        session.switch_agent(Agent::Host).await;
        assert!(!session.switch_agent(Agent::Concierge).await);
        let concierge = session.thread(Agent::Concierge);
        assert_eq!(concierge.len(), 2);
        assert_eq!(concierge.turns()[0].speaker, Speaker::User);
    }

    #[tokio::test]
    async fn scripted_reply_is_spoken() {
        let (session, speech) = session();
        let outcome = session.submit("My towels are dirty").await.unwrap();

        assert_eq!(outcome.agent, Agent::Support);
        assert_eq!(outcome.source, ReplySource::Scripted);
        assert_eq!(outcome.trigger.as_deref(), Some("towels"));
        assert_eq!(speech.spoken(), vec![outcome.reply.clone()]);
        assert!(!session.is_speaking());
    }

    #[tokio::test]
    async fn unscripted_message_is_generated() {
        let (session, _speech) = session();
        let outcome = session.submit("Where is the spa?").await.unwrap();

        assert_eq!(outcome.agent, Agent::Host);
        assert_eq!(outcome.source, ReplySource::Generated);
        assert!(outcome.reply.contains("\"Where is the spa?\""));
    }

    #[tokio::test]
    async fn empty_input_is_rejected() {
        let (session, _speech) = session();
        assert_eq!(session.submit("   ").await.unwrap_err(), SessionError::EmptyInput);
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn generator_failure_becomes_apology() {
        let speech = Arc::new(RecordingSpeech::new());
        let session = session_with(Arc::new(FailingGenerator), speech.clone());

        let outcome = session.submit("Where is the spa?").await.unwrap();
        assert_eq!(outcome.source, ReplySource::Apology);
        assert_eq!(outcome.reply, templates::apology(Language::En));

        let host = session.thread(Agent::Host);
        assert_eq!(host.len(), 2);
        assert_eq!(host.last().unwrap().text, templates::apology(Language::En));
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn speech_failure_appends_apology_and_keeps_reply() {
        let speech = Arc::new(RecordingSpeech::failing_first(1));
        let session = session_with(Arc::new(FallbackGenerator::new(None)), speech.clone());

        let outcome = session.submit("My towels are dirty").await.unwrap();
        assert!(outcome.speech_failed);
        assert_eq!(outcome.source, ReplySource::Scripted);

        let support = session.thread(Agent::Support);
        let texts: Vec<&str> = support.turns().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[1], outcome.reply);
        assert_eq!(texts[2], templates::apology(Language::En));
        assert_eq!(speech.spoken(), vec![templates::apology(Language::En).to_string()]);
        assert!(!session.is_busy());
        assert!(!session.is_speaking());
    }

    #[tokio::test]
    async fn apology_speech_failure_is_only_logged() {
        let speech = Arc::new(RecordingSpeech::failing_first(2));
        let session = session_with(Arc::new(FallbackGenerator::new(None)), speech.clone());

        let outcome = session.submit("towels").await.unwrap();
        assert!(outcome.speech_failed);
        assert_eq!(session.thread(Agent::Support).len(), 3);
        assert!(session.submit("towels").await.is_ok());
    }

    #[tokio::test]
    async fn concurrent_submission_is_rejected() {
        let gate = Arc::new(tokio::sync::Notify::new());
        let speech = Arc::new(RecordingSpeech::new());
        let session = Arc::new(session_with(
            Arc::new(GatedGenerator::new(gate.clone())),
            speech,
        ));

        let first = tokio::spawn({
            let session = session.clone();
            async move { session.submit("Where is the spa?").await }
        });
        while !session.is_busy() {
            tokio::task::yield_now().await;
        }

        assert_eq!(session.submit("towels").await.unwrap_err(), SessionError::Busy);

        gate.notify_one();
        let outcome = first.await.unwrap().unwrap();
        assert_eq!(outcome.source, ReplySource::Generated);
        assert!(!session.is_busy());
        assert!(session.submit("towels").await.is_ok());
    }

    #[tokio::test]
    async fn in_flight_reply_lands_in_its_target_thread() {
        let gate = Arc::new(tokio::sync::Notify::new());
        let speech = Arc::new(RecordingSpeech::new());
        let session = Arc::new(session_with(
            Arc::new(GatedGenerator::new(gate.clone())),
            speech,
        ));

        let pending = tokio::spawn({
            let session = session.clone();
            async move { session.submit("Where is the spa?").await }
        });
        while !session.is_busy() {
            tokio::task::yield_now().await;
        }

        // The guest wanders off to the concierge tab mid-reply
        assert!(session.switch_agent(Agent::Concierge).await);
        gate.notify_one();
        pending.await.unwrap().unwrap();

        assert_eq!(session.active_agent(), Agent::Concierge);
        assert_eq!(session.thread(Agent::Host).len(), 2);
        assert_eq!(session.thread(Agent::Concierge).len(), 1);
    }

    #[tokio::test]
    async fn language_change_confirms_under_active_agent() {
        let (session, _speech) = session();
        session.switch_agent(Agent::Concierge).await;

        assert!(session.change_language(Language::Ko).await);
        assert!(!session.change_language(Language::Ko).await);

        let concierge = session.thread(Agent::Concierge);
        assert_eq!(concierge.len(), 2);
        assert_eq!(concierge.last().unwrap().text, templates::language_confirmation(Language::Ko));
        assert_eq!(session.language(), Language::Ko);
        assert!(session.thread(Agent::Host).is_empty());
    }

    #[tokio::test]
    async fn language_change_is_not_a_greeting() {
        let (session, _speech) = session();
        session.change_language(Language::Tl).await;
        assert!(!session.is_greeted(Agent::Host));
    }

    #[tokio::test]
    async fn user_turn_carries_latest_perception() {
        let perception = WatchPerception::new();
        let (session, _speech) = session();
        let session = session.with_perception(Arc::new(perception.clone()));

        let ctx = Context::new(AgeCategory::Child, Emotion::Sad);
        perception.publish(Some(ctx));
        session.submit("towels").await.unwrap();

        let support = session.thread(Agent::Support);
        assert_eq!(support.turns()[0].context, Some(ctx));
        assert_eq!(support.turns()[1].context, None);
        assert_eq!(session.render_state().emotion, Emotion::Sad);

        perception.publish(None);
        assert_eq!(session.render_state().emotion, Emotion::Happy);
    }

    #[tokio::test]
    async fn events_follow_a_submission() {
        let (session, _speech) = session();
        let mut rx = session.event_bus().subscribe();
        session.submit("towels").await.unwrap();

        let mut kinds = Vec::new();
        while let Ok(event) = rx.try_recv() {
            kinds.push(match event.as_ref() {
                DomainEvent::AgentSwitched { .. } => "switched",
                DomainEvent::TurnAppended { .. } => "turn",
                DomainEvent::SpeakingChanged { .. } => "speaking",
                DomainEvent::SpeechRequested { .. } => "speech",
                DomainEvent::LanguageChanged { .. } => "language",
                DomainEvent::ErrorOccurred { .. } => "error",
            });
        }
        assert_eq!(kinds, vec!["switched", "turn", "turn", "speaking", "speech", "speaking"]);
    }

    #[tokio::test]
    async fn snapshot_reports_thread_sizes() {
        let (session, _speech) = session();
        session.start().await;
        session.submit("towels").await.unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.active_agent, Agent::Support);
        assert_eq!(snapshot.thread_lengths[&Agent::Host], 1);
        assert_eq!(snapshot.thread_lengths[&Agent::Support], 2);
        assert_eq!(snapshot.greeted, vec![Agent::Host, Agent::Support]);
        assert!(!snapshot.busy);
    }

    #[test]
    fn from_default_config_builds_without_provider() {
        let session = SessionManager::from_config(
            &AppConfig::default(),
            Arc::new(frontdesk_core::SilentSpeech),
        )
        .unwrap();
        assert_eq!(session.language(), Language::En);
        assert_eq!(session.active_agent(), Agent::Host);
    }
}
