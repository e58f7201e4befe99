//! CLI input: interactive terminal chat.
//!
//! Reads lines from stdin. Plain lines are guest messages; a few slash
//! commands stand in for the widget's buttons and camera:
//!
//! | command | event |
//! |---|---|
//! | `/switch <agent>` | explicit agent switch (`host`, `daisy`, ...) |
//! | `/lang <code>` | language change (`en`, `tl`, `zh`, `ja`, `ko`) |
//! | `/quick <n>` | quick action `n` (1-based) |
//! | `/guest <emotion> [age]` | perception reading; `/guest none` clears it |

use async_trait::async_trait;
use frontdesk_core::channel::{ChannelId, InputEvent, InputSource};
use frontdesk_core::context::{AgeCategory, Context};
use frontdesk_core::error::ChannelError;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Interactive CLI input source.
pub struct CliChannel {
    id: ChannelId,
}

impl CliChannel {
    pub fn new() -> Self {
        Self {
            id: ChannelId("cli".into()),
        }
    }
}

impl Default for CliChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one typed line.
///
/// Returns `None` for blank lines and for exit commands; callers tell them
/// apart with [`is_exit`].
pub fn parse_line(line: &str) -> Option<Result<InputEvent, ChannelError>> {
    let line = line.trim();
    if line.is_empty() || is_exit(line) {
        return None;
    }

    let Some(command) = line.strip_prefix('/') else {
        return Some(Ok(InputEvent::Submit { text: line.into() }));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    let event = match (name, args.as_slice()) {
        ("switch", [agent]) => agent
            .parse()
            .map(|agent| InputEvent::SwitchAgent { agent })
            .map_err(ChannelError::InvalidInput),
        ("lang", [language]) => language
            .parse()
            .map(|language| InputEvent::ChangeLanguage { language })
            .map_err(ChannelError::InvalidInput),
        ("quick", [n]) => match n.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(InputEvent::QuickAction { index: n - 1 }),
            _ => Err(ChannelError::InvalidInput(format!(
                "quick action must be a number from 1, got '{n}'"
            ))),
        },
        ("guest", ["none" | "off"]) => Ok(InputEvent::Perceive { context: None }),
        ("guest", [emotion, rest @ ..]) if rest.len() <= 1 => parse_guest(emotion, rest.first().copied()),
        _ => Err(ChannelError::InvalidInput(format!(
            "unknown command '/{command}'. Try /switch, /lang, /quick, /guest, or exit"
        ))),
    };
    Some(event)
}

/// Whether `line` ends the chat.
pub fn is_exit(line: &str) -> bool {
    matches!(line.trim(), "exit" | "quit" | "/exit" | "/quit" | ":q")
}

fn parse_guest(emotion: &str, age: Option<&str>) -> Result<InputEvent, ChannelError> {
    let emotion = emotion.parse().map_err(ChannelError::InvalidInput)?;
    let age_category = match age {
        None => AgeCategory::Adult,
        Some(age) => match age.parse::<u32>() {
            Ok(years) => AgeCategory::from_age(years),
            Err(_) => age.parse().map_err(ChannelError::InvalidInput)?,
        },
    };
    Ok(InputEvent::Perceive {
        context: Some(Context::new(age_category, emotion)),
    })
}

#[async_trait]
impl InputSource for CliChannel {
    fn name(&self) -> &str {
        "cli"
    }

    fn id(&self) -> &ChannelId {
        &self.id
    }

    async fn start(
        &self,
    ) -> Result<mpsc::Receiver<Result<InputEvent, ChannelError>>, ChannelError> {
        let (tx, rx) = mpsc::channel(32);

        tokio::spawn(async move {
            let stdin = io::stdin();
            let reader = BufReader::new(stdin);
            let mut lines = reader.lines();

            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if is_exit(&line) {
                            break;
                        }
                        let Some(event) = parse_line(&line) else {
                            continue;
                        };
                        if tx.send(event).await.is_err() {
                            break;
                        }
                    }
                    Ok(None) => break, // EOF (Ctrl+D)
                    Err(e) => {
                        let _ = tx.send(Err(ChannelError::ConnectionLost(e.to_string()))).await;
                        break;
                    }
                }
            }
        });

        Ok(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontdesk_core::{Agent, Emotion, Language};

    fn parsed(line: &str) -> InputEvent {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn cli_channel_properties() {
        let ch = CliChannel::new();
        assert_eq!(ch.name(), "cli");
        assert_eq!(ch.id().0, "cli");
    }

    #[test]
    fn plain_text_is_a_submission() {
        assert_eq!(
            parsed("  My towels are dirty "),
            InputEvent::Submit {
                text: "My towels are dirty".into()
            }
        );
    }

    #[test]
    fn blank_and_exit_lines_produce_nothing() {
        assert!(parse_line("   ").is_none());
        assert!(parse_line("quit").is_none());
        assert!(is_exit(":q"));
        assert!(!is_exit("quit smoking"));
    }

    #[test]
    fn switch_accepts_roles_and_names() {
        assert_eq!(parsed("/switch daisy"), InputEvent::SwitchAgent { agent: Agent::Concierge });
        assert_eq!(parsed("/switch support"), InputEvent::SwitchAgent { agent: Agent::Support });
    }

    #[test]
    fn lang_command() {
        assert_eq!(parsed("/lang ja"), InputEvent::ChangeLanguage { language: Language::Ja });
        assert!(parse_line("/lang klingon").unwrap().is_err());
    }

    #[test]
    fn quick_actions_are_one_based() {
        assert_eq!(parsed("/quick 1"), InputEvent::QuickAction { index: 0 });
        assert!(parse_line("/quick 0").unwrap().is_err());
        assert!(parse_line("/quick two").unwrap().is_err());
    }

    #[test]
    fn guest_readings() {
        assert_eq!(
            parsed("/guest sad 9"),
            InputEvent::Perceive {
                context: Some(Context::new(AgeCategory::Child, Emotion::Sad))
            }
        );
        assert_eq!(
            parsed("/guest angry"),
            InputEvent::Perceive {
                context: Some(Context::new(AgeCategory::Adult, Emotion::Angry))
            }
        );
        assert_eq!(parsed("/guest none"), InputEvent::Perceive { context: None });
        assert!(parse_line("/guest sleepy").unwrap().is_err());
    }

    #[test]
    fn unknown_command_is_invalid_input() {
        match parse_line("/dance") {
            Some(Err(ChannelError::InvalidInput(msg))) => assert!(msg.contains("/dance")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}
