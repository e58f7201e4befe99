//! The fixed set of concierge personas.
//!
//! Agents are a closed enum: they exist from process start and are never
//! created or destroyed. Display metadata is static and only used for
//! presentation; the routing and session logic treat [`Agent`] as an opaque
//! identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three customer-service personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    /// Sarah: general information and directions.
    Host,
    /// Daisy: bookings and payments.
    Concierge,
    /// John: housekeeping and maintenance issues.
    Support,
}

impl Agent {
    /// Every agent, in routing priority order.
    pub const ALL: [Agent; 3] = [Agent::Host, Agent::Concierge, Agent::Support];

    /// The agent that owns the session at start and receives unrouted text.
    pub const DEFAULT: Agent = Agent::Host;

    pub fn as_str(&self) -> &'static str {
        match self {
            Agent::Host => "host",
            Agent::Concierge => "concierge",
            Agent::Support => "support",
        }
    }

    /// Static display metadata for this agent.
    pub fn profile(&self) -> &'static AgentProfile {
        match self {
            Agent::Host => &HOST,
            Agent::Concierge => &CONCIERGE,
            Agent::Support => &SUPPORT,
        }
    }

    /// Position in [`Agent::ALL`], usable as a dense array index.
    pub fn index(&self) -> usize {
        match self {
            Agent::Host => 0,
            Agent::Concierge => 1,
            Agent::Support => 2,
        }
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Agent {
    type Err = String;

    /// Accepts the role identifier or the persona's first name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "host" | "sarah" => Ok(Agent::Host),
            "concierge" | "daisy" => Ok(Agent::Concierge),
            "support" | "john" => Ok(Agent::Support),
            other => Err(format!("unknown agent '{other}'")),
        }
    }
}

/// Presentation metadata for an agent.
#[derive(Debug, Clone, Serialize)]
pub struct AgentProfile {
    pub agent: Agent,
    pub name: &'static str,
    pub role: &'static str,
    pub badge: &'static str,
    pub color: &'static str,
    pub responsibilities: &'static str,
}

static HOST: AgentProfile = AgentProfile {
    agent: Agent::Host,
    name: "Sarah",
    role: "Welcoming Host",
    badge: "Host",
    color: "#6b9b76",
    responsibilities: "General & Logistics",
};

static CONCIERGE: AgentProfile = AgentProfile {
    agent: Agent::Concierge,
    name: "Daisy",
    role: "Booking Specialist",
    badge: "Concierge",
    color: "#d4a574",
    responsibilities: "Scheduling & Payments",
};

static SUPPORT: AgentProfile = AgentProfile {
    agent: Agent::Support,
    name: "John",
    role: "Support Manager",
    badge: "Support",
    color: "#7c6a5c",
    responsibilities: "Operations & Assistance",
};
