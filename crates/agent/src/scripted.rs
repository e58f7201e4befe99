//! Scripted reply resolution.
//!
//! Each (agent, language) pair owns an ordered list of triggers. A trigger
//! matches when it appears as a whole word, ignoring case; the first matching
//! trigger wins and the [`ReplySelector`] picks among its candidates. A
//! language with no table for the agent falls back to English.

use std::collections::HashMap;
use std::sync::Arc;

use frontdesk_core::{Agent, Language};
use regex_lite::Regex;
use thiserror::Error;
use tracing::debug;

use crate::catalog;
use crate::selector::{RandomSelector, ReplySelector};

/// Problems found while building a [`ScriptTable`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no {language} table configured for {agent}")]
    MissingDefaultTable { agent: Agent, language: Language },

    #[error("empty trigger in the {agent}/{language} table")]
    EmptyTrigger { agent: Agent, language: Language },

    #[error("trigger '{trigger}' in the {agent}/{language} table has no replies")]
    NoCandidates {
        agent: Agent,
        language: Language,
        trigger: String,
    },

    #[error("trigger '{trigger}' could not be compiled: {reason}")]
    InvalidTrigger { trigger: String, reason: String },
}

#[derive(Debug, Clone)]
struct ScriptEntry {
    trigger: String,
    pattern: Regex,
    candidates: Vec<String>,
}

/// A validated, compiled set of scripted replies.
#[derive(Debug, Clone)]
pub struct ScriptTable {
    tables: HashMap<(Agent, Language), Vec<ScriptEntry>>,
}

/// Collects raw entries before validation.
#[derive(Debug, Default)]
pub struct ScriptTableBuilder {
    raw: Vec<(Agent, Language, String, Vec<String>)>,
}

impl ScriptTableBuilder {
    pub fn entry<I, S>(mut self, agent: Agent, language: Language, trigger: &str, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw.push((
            agent,
            language,
            trigger.to_string(),
            candidates.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Compile and validate. Every agent needs an English table.
    pub fn build(self) -> Result<ScriptTable, CatalogError> {
        let mut tables: HashMap<(Agent, Language), Vec<ScriptEntry>> = HashMap::new();

        for (agent, language, trigger, candidates) in self.raw {
            if trigger.trim().is_empty() {
                return Err(CatalogError::EmptyTrigger { agent, language });
            }
            if candidates.is_empty() {
                return Err(CatalogError::NoCandidates {
                    agent,
                    language,
                    trigger,
                });
            }

            let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex_lite::escape(&trigger)))
                .map_err(|e| CatalogError::InvalidTrigger {
                    trigger: trigger.clone(),
                    reason: e.to_string(),
                })?;

            tables.entry((agent, language)).or_default().push(ScriptEntry {
                trigger,
                pattern,
                candidates,
            });
        }

        for agent in Agent::ALL {
            if !tables.contains_key(&(agent, Language::FALLBACK)) {
                return Err(CatalogError::MissingDefaultTable {
                    agent,
                    language: Language::FALLBACK,
                });
            }
        }

        Ok(ScriptTable { tables })
    }
}

impl ScriptTable {
    pub fn builder() -> ScriptTableBuilder {
        ScriptTableBuilder::default()
    }

    /// The hotel's built-in replies in all five languages.
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut builder = Self::builder();
        for (agent, language, entries) in catalog::scripted_tables() {
            for (trigger, candidates) in entries {
                builder = builder.entry(agent, language, trigger, candidates.iter().copied());
            }
        }
        builder.build()
    }

    /// Whether `agent` has its own table for `language`.
    pub fn has_table(&self, agent: Agent, language: Language) -> bool {
        self.tables.contains_key(&(agent, language))
    }

    fn entries(&self, agent: Agent, language: Language) -> &[ScriptEntry] {
        self.tables
            .get(&(agent, language))
            .or_else(|| self.tables.get(&(agent, Language::FALLBACK)))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// A scripted reply and the trigger that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedMatch {
    pub trigger: String,
    pub reply: String,
}

/// Looks up canned replies for an (agent, language) pair.
#[derive(Clone)]
pub struct ScriptedResolver {
    table: Arc<ScriptTable>,
    selector: Arc<dyn ReplySelector>,
}

impl ScriptedResolver {
    pub fn new(table: ScriptTable, selector: Arc<dyn ReplySelector>) -> Self {
        Self {
            table: Arc::new(table),
            selector,
        }
    }

    /// Built-in tables with a random selector.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(ScriptTable::builtin()?, Arc::new(RandomSelector::new())))
    }

    pub fn table(&self) -> &ScriptTable {
        &self.table
    }

    pub fn resolve(&self, text: &str, agent: Agent, language: Language) -> Option<String> {
        self.resolve_match(text, agent, language).map(|m| m.reply)
    }

    pub fn resolve_match(&self, text: &str, agent: Agent, language: Language) -> Option<ScriptedMatch> {
        let entry = self
            .table
            .entries(agent, language)
            .iter()
            .find(|e| e.pattern.is_match(text));

        let Some(entry) = entry else {
            debug!(agent = %agent, language = %language, "No scripted reply");
            return None;
        };

        let index = self
            .selector
            .choose(entry.candidates.len())
            .min(entry.candidates.len() - 1);
        debug!(agent = %agent, language = %language, trigger = %entry.trigger, "Scripted reply matched");

        Some(ScriptedMatch {
            trigger: entry.trigger.clone(),
            reply: entry.candidates[index].clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::FirstSelector;

    fn resolver() -> ScriptedResolver {
        ScriptedResolver::new(ScriptTable::builtin().unwrap(), Arc::new(FirstSelector))
    }

    #[test]
    fn builtin_tables_validate() {
        let table = ScriptTable::builtin().unwrap();
        for agent in Agent::ALL {
            for language in Language::ALL {
                assert!(table.has_table(agent, language));
            }
        }
    }

    #[test]
    fn whole_word_match_only() {
        let r = resolver();
        assert!(r.resolve("hi there", Agent::Host, Language::En).is_some());
        // "hi" inside "this" is not a whole word
        assert!(r.resolve("this is nice", Agent::Host, Language::En).is_none());
    }

    #[test]
    fn first_declared_trigger_wins() {
        let m = resolver()
            .resolve_match("what room types and what price", Agent::Concierge, Language::En)
            .unwrap();
        assert_eq!(m.trigger, "price");
    }

    #[test]
    fn matching_ignores_case() {
        let m = resolver()
            .resolve_match("Need more pillows please", Agent::Support, Language::En)
            .unwrap();
        assert_eq!(m.trigger, "Pillows");
        assert!(m.reply.contains("pillows"));
    }

    #[test]
    fn multi_word_trigger_matches() {
        let reply = resolver().resolve("When is check in?", Agent::Host, Language::En).unwrap();
        assert!(reply.starts_with("Check-in time is 2:00 PM"));
    }

    #[test]
    fn unconfigured_trigger_in_language_is_a_miss() {
        // The Chinese concierge table has "room types" but no bare "room"
        let r = resolver();
        assert!(r.resolve("a room", Agent::Concierge, Language::Zh).is_none());
        assert!(r.resolve("a room", Agent::Concierge, Language::En).is_some());
    }

    #[test]
    fn language_specific_trigger() {
        let reply = resolver().resolve("magkano ang bayad", Agent::Concierge, Language::Tl).unwrap();
        assert!(reply.starts_with("Tumatanggap kami"));
        assert!(resolver().resolve("bayad", Agent::Concierge, Language::En).is_none());
    }

    #[test]
    fn missing_language_falls_back_to_english() {
        let table = ScriptTable::builder()
            .entry(Agent::Host, Language::En, "pool", ["The pool opens at 7."])
            .entry(Agent::Concierge, Language::En, "book", ["Sure."])
            .entry(Agent::Support, Language::En, "towels", ["On the way."])
            .build()
            .unwrap();
        let r = ScriptedResolver::new(table, Arc::new(FirstSelector));

        assert_eq!(
            r.resolve("pool hours?", Agent::Host, Language::Ja).as_deref(),
            Some("The pool opens at 7.")
        );
    }

    #[test]
    fn classification_is_stable_and_values_are_candidates() {
        let r = ScriptedResolver::builtin().unwrap();
        let candidates = [
            "I'd be happy to help you with a booking! What dates are you looking for?",
            "Wonderful, let's find you a room! Which dates would you like to stay with us?",
        ];
        for _ in 0..50 {
            let reply = r.resolve("I want to book a room", Agent::Concierge, Language::En).unwrap();
            assert!(candidates.contains(&reply.as_str()), "{reply}");
            assert!(r.resolve("nothing here", Agent::Concierge, Language::En).is_none());
        }
    }

    #[test]
    fn table_without_english_is_rejected() {
        let err = ScriptTable::builder()
            .entry(Agent::Host, Language::En, "pool", ["Open."])
            .entry(Agent::Concierge, Language::Ja, "book", ["Hai."])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::MissingDefaultTable {
                agent: Agent::Concierge,
                language: Language::En
            }
        );
    }

    #[test]
    fn empty_candidates_are_rejected() {
        let err = ScriptTable::builder()
            .entry(Agent::Host, Language::En, "pool", Vec::<String>::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::NoCandidates { .. }));
    }

    #[test]
    fn blank_trigger_is_rejected() {
        let err = ScriptTable::builder()
            .entry(Agent::Host, Language::En, "  ", ["x"])
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTrigger { .. }));
    }

    #[test]
    fn trigger_punctuation_is_escaped() {
        let table = ScriptTable::builder()
            .entry(Agent::Host, Language::En, "wi-fi", ["Password is on the card."])
            .entry(Agent::Concierge, Language::En, "book", ["Sure."])
            .entry(Agent::Support, Language::En, "towels", ["On the way."])
            .build()
            .unwrap();
        let r = ScriptedResolver::new(table, Arc::new(FirstSelector));
        assert!(r.resolve("Is there wi-fi?", Agent::Host, Language::En).is_some());
        assert!(r.resolve("Is there wifi?", Agent::Host, Language::En).is_none());
    }
}
