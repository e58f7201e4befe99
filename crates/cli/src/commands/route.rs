//! `frontdesk route`: Explain routing and scripted lookup for one message.

use std::fmt::Write;
use std::sync::Arc;

use frontdesk_agent::{FirstSelector, KeywordRouter, RouteDecision, ScriptTable, ScriptedMatch, ScriptedResolver};
use frontdesk_core::Language;

pub fn run(text: &str, language: Language) -> Result<(), Box<dyn std::error::Error>> {
    let router = KeywordRouter::default();
    let resolver = ScriptedResolver::new(ScriptTable::builtin()?, Arc::new(FirstSelector));

    let decision = router.route_explained(text);
    let scripted = resolver.resolve_match(text, decision.agent, language);
    print!("{}", describe(&decision, scripted.as_ref(), language));
    Ok(())
}

fn describe(decision: &RouteDecision, scripted: Option<&ScriptedMatch>, language: Language) -> String {
    let profile = decision.agent.profile();
    let mut out = String::new();
    let _ = writeln!(out, "  Agent:     {} ({})", profile.name, decision.agent);
    match &decision.trigger {
        Some(trigger) => {
            let _ = writeln!(out, "  Trigger:   \"{trigger}\"");
        }
        None => {
            let _ = writeln!(out, "  Trigger:   none (default agent)");
        }
    }
    let _ = writeln!(out, "  Language:  {}", language.display_name());
    match scripted {
        Some(m) => {
            let _ = writeln!(out, "  Scripted:  \"{}\"", m.trigger);
            let _ = writeln!(out, "  Reply:     {}", m.reply);
        }
        None => {
            let _ = writeln!(out, "  Scripted:  none, the reply would be generated");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontdesk_core::Agent;

    fn explain(text: &str, language: Language) -> String {
        let decision = KeywordRouter::default().route_explained(text);
        let resolver = ScriptedResolver::new(ScriptTable::builtin().unwrap(), Arc::new(FirstSelector));
        let scripted = resolver.resolve_match(text, decision.agent, language);
        describe(&decision, scripted.as_ref(), language)
    }

    #[test]
    fn towels_go_to_john_with_a_scripted_reply() {
        let out = explain("My towels are dirty", Language::En);
        assert!(out.contains("John (support)"), "{out}");
        assert!(out.contains("Scripted:  \"towels\""), "{out}");
        assert!(out.contains("fresh towels"), "{out}");
    }

    #[test]
    fn unmatched_text_falls_back_to_the_host() {
        let decision = KeywordRouter::default().route_explained("Tell me a story");
        assert_eq!(decision.agent, Agent::Host);

        let out = explain("Tell me a story", Language::En);
        assert!(out.contains("none (default agent)"), "{out}");
        assert!(out.contains("would be generated"), "{out}");
    }
}
