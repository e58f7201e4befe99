//! `frontdesk chat`: Interactive or single-message chat mode.

use std::io::Write;
use std::sync::Arc;

use frontdesk_agent::{SessionManager, quick_actions};
use frontdesk_channels::{CliChannel, TerminalSpeech};
use frontdesk_config::AppConfig;
use frontdesk_core::channel::{InputEvent, InputSource};
use frontdesk_core::error::ChannelError;
use frontdesk_core::{Agent, Language, WatchPerception};
use tracing::debug;

pub async fn run(message: Option<String>, language: Option<Language>) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let perception = WatchPerception::new();
    let speech = Arc::new(TerminalSpeech::from_config(&config.speech));
    let mut session =
        SessionManager::from_config(&config, speech)?.with_perception(Arc::new(perception.clone()));
    if let Some(language) = language {
        session = session.with_language(language);
    }

    if let Some(msg) = message {
        // Single message mode: the reply is printed by the speech output
        let outcome = session.submit(&msg).await?;
        debug!(agent = %outcome.agent, source = ?outcome.source, "Single message answered");
        return Ok(());
    }

    print_banner(&config, &session);
    session.start().await;

    let channel = CliChannel::new();
    let mut rx = channel.start().await.map_err(|e| format!("Channel error: {e}"))?;

    prompt()?;
    while let Some(result) = rx.recv().await {
        match result {
            Ok(event) => handle_event(&session, &perception, event).await,
            Err(ChannelError::InvalidInput(msg)) => eprintln!("  [Input] {msg}"),
            Err(e) => {
                eprintln!("  [Channel Error] {e}");
                break;
            }
        }
        prompt()?;
    }

    println!();
    println!("  Thank you for visiting {}. Goodbye!", config.hotel_name);
    println!();

    Ok(())
}

/// Apply one input event to the session.
pub(crate) async fn handle_event(session: &SessionManager, perception: &WatchPerception, event: InputEvent) {
    match event {
        InputEvent::Submit { text } => submit(session, &text).await,
        InputEvent::QuickAction { index } => match quick_actions().get(index) {
            Some(label) => {
                println!("  You > {label}");
                submit(session, label).await;
            }
            None => eprintln!("  [Input] There are only {} quick actions", quick_actions().len()),
        },
        InputEvent::SwitchAgent { agent } => {
            if session.active_agent() == agent {
                println!("  {} is already with you.", agent.profile().name);
            } else if !session.switch_agent(agent).await {
                println!("  Back with {}.", agent.profile().name);
            }
        }
        InputEvent::ChangeLanguage { language } => {
            if !session.change_language(language).await {
                println!("  Already speaking {}.", language.display_name());
            }
        }
        InputEvent::Perceive { context } => {
            perception.publish(context);
            match context {
                Some(ctx) => println!("  (guest looks {}, {:?})", ctx.emotion, ctx.age_category),
                None => println!("  (no guest in view)"),
            }
        }
    }
}

async fn submit(session: &SessionManager, text: &str) {
    if let Err(e) = session.submit(text).await {
        eprintln!("  [Session] {e}");
    }
}

fn print_banner(config: &AppConfig, session: &SessionManager) {
    println!();
    println!("  ==============================================");
    println!("    {}: Front Desk", config.hotel_name);
    println!("  ==============================================");
    println!();
    for agent in Agent::ALL {
        let profile = agent.profile();
        println!("  {:<6} {:<20} {}", profile.name, profile.role, profile.responsibilities);
    }
    println!();
    println!("  Language:  {}", session.language().display_name());
    if config.has_api_key() {
        println!("  Provider:  {} ({})", config.default_provider, config.default_model);
    } else {
        println!("  Provider:  none, unscripted questions get canned replies");
    }
    println!();
    println!("  Quick actions:");
    for (i, label) in quick_actions().iter().enumerate() {
        println!("    /quick {}  {label}", i + 1);
    }
    println!();
    println!("  Commands: /switch <agent>, /lang <code>, /guest <emotion> [age], exit");
    println!();
}

fn prompt() -> std::io::Result<()> {
    print!("  You > ");
    std::io::stdout().flush()
}
