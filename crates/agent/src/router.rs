//! Keyword router: decides which persona answers a message.
//!
//! Matching is plain substring containment on the lowercased, alias-normalized
//! text, so a short trigger can fire inside a longer word ("ac" inside
//! "space"). Agents are tried in table order; the first agent with any
//! matching trigger wins regardless of where the trigger sits in the text.

use frontdesk_core::Agent;
use serde::Serialize;
use tracing::debug;

use crate::catalog;

/// Ordered routing configuration.
#[derive(Debug, Clone)]
pub struct RoutingTable {
    entries: Vec<(Agent, Vec<String>)>,
    aliases: Vec<(String, String)>,
    default_agent: Agent,
}

impl RoutingTable {
    /// Start an empty table that routes everything to `default_agent`.
    pub fn new(default_agent: Agent) -> Self {
        Self {
            entries: Vec::new(),
            aliases: Vec::new(),
            default_agent,
        }
    }

    /// Append an agent with its triggers. Earlier agents take priority.
    pub fn with_agent<I, S>(mut self, agent: Agent, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let triggers = triggers
            .into_iter()
            .map(|t| t.into().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        self.entries.push((agent, triggers));
        self
    }

    /// Rewrite `from` to `to` before matching.
    pub fn with_alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.aliases.push((from.into().to_lowercase(), to.into()));
        self
    }

    /// The hotel's built-in table: host, concierge, support.
    pub fn builtin() -> Self {
        let mut table = Self::new(Agent::DEFAULT);
        for agent in Agent::ALL {
            table = table.with_agent(agent, catalog::routing_triggers(agent).iter().copied());
        }
        for (from, to) in catalog::ROUTING_ALIASES {
            table = table.with_alias(*from, *to);
        }
        table
    }

    /// Agents in priority order.
    pub fn priority(&self) -> impl Iterator<Item = Agent> + '_ {
        self.entries.iter().map(|(agent, _)| *agent)
    }

    fn normalize(&self, text: &str) -> String {
        let mut normalized = text.to_lowercase();
        for (from, to) in &self.aliases {
            if normalized.contains(from.as_str()) {
                normalized = normalized.replace(from.as_str(), to);
            }
        }
        normalized
    }
}

impl Default for RoutingTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Which agent was picked, and the trigger that picked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDecision {
    pub agent: Agent,
    /// `None` when no trigger matched and the default agent was used
    pub trigger: Option<String>,
}

/// Pure, total text-to-agent router.
#[derive(Debug, Clone, Default)]
pub struct KeywordRouter {
    table: RoutingTable,
}

impl KeywordRouter {
    pub fn new(table: RoutingTable) -> Self {
        Self { table }
    }

    pub fn route(&self, text: &str) -> Agent {
        self.route_explained(text).agent
    }

    pub fn route_explained(&self, text: &str) -> RouteDecision {
        let normalized = self.table.normalize(text);

        for (agent, triggers) in &self.table.entries {
            if let Some(trigger) = triggers.iter().find(|t| normalized.contains(t.as_str())) {
                debug!(agent = %agent, trigger = %trigger, "Routed message");
                return RouteDecision {
                    agent: *agent,
                    trigger: Some(trigger.clone()),
                };
            }
        }

        debug!(agent = %self.table.default_agent, "No trigger matched, using default agent");
        RouteDecision {
            agent: self.table.default_agent,
            trigger: None,
        }
    }
}
