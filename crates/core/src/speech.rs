//! Speech output collaborator and per-persona voice hints.
//!
//! The session hands every agent turn to a [`SpeechOutput`] and awaits its
//! completion before releasing the busy flag. The backend decides how to make
//! it audible; [`VoiceProfile`] tells it which voice suits the persona.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::agent::Agent;
use crate::error::SpeechError;
use crate::language::Language;

/// Voice gender used when matching installed synthesis voices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    Female,
    Male,
}

/// How a persona should sound in a given language.
#[derive(Debug, Clone, Serialize)]
pub struct VoiceProfile {
    /// BCP-47 tag, e.g. "ja-JP"
    pub lang: &'static str,
    pub gender: VoiceGender,
    /// Installed voice names to try first, in order
    pub preferred_names: &'static [&'static str],
    pub pitch: f32,
    pub rate: f32,
}

impl VoiceProfile {
    /// The voice for `agent` speaking `language`.
    ///
    /// John speaks with male voices and a lower pitch; Sarah and Daisy share
    /// the female voice set.
    pub fn for_agent(agent: Agent, language: Language) -> Self {
        let gender = match agent {
            Agent::Support => VoiceGender::Male,
            Agent::Host | Agent::Concierge => VoiceGender::Female,
        };
        let pitch = match gender {
            VoiceGender::Male => 0.9,
            VoiceGender::Female => 1.1,
        };
        Self {
            lang: language.speech_tag(),
            gender,
            preferred_names: preferred_names(gender, language),
            pitch,
            rate: 1.0,
        }
    }
}

fn preferred_names(gender: VoiceGender, language: Language) -> &'static [&'static str] {
    match (gender, language) {
        (VoiceGender::Male, Language::En) => &[
            "Google US English Male",
            "Microsoft David - English (United States)",
            "Alex",
            "Daniel",
        ],
        (VoiceGender::Male, Language::Tl) => &[
            "Google Filipino (Philippines) Male",
            "Google Filipino Male",
            "Microsoft Filipino Male",
        ],
        (VoiceGender::Male, Language::Zh) => &[
            "Google 普通话（中国大陆）Male",
            "Microsoft Yunyang - Chinese (Mainland)",
            "Kangkang",
        ],
        (VoiceGender::Male, Language::Ja) => &[
            "Google 日本語 Male",
            "Microsoft Ichiro - Japanese (Japan)",
            "Otoya",
        ],
        (VoiceGender::Male, Language::Ko) => &["Google 한국의 Male", "Microsoft Korean Male", "Minsu"],
        (VoiceGender::Female, Language::En) => &[
            "Google US English Female",
            "Microsoft Zira - English (United States)",
            "Samantha",
            "Victoria",
        ],
        (VoiceGender::Female, Language::Tl) => &[
            "Google Filipino (Philippines) Female",
            "Google Filipino Female",
            "Microsoft Filipino Female",
            "Rosa",
        ],
        (VoiceGender::Female, Language::Zh) => &[
            "Google 普通话（中国大陆）Female",
            "Microsoft Huihui - Chinese (Simplified, PRC)",
            "Yaoyao",
        ],
        (VoiceGender::Female, Language::Ja) => &[
            "Google 日本語 Female",
            "Microsoft Ayumi - Japanese (Japan)",
            "Kyoko",
        ],
        (VoiceGender::Female, Language::Ko) => &[
            "Google 한국의 Female",
            "Microsoft Heami - Korean (Korea)",
            "Yuna",
        ],
    }
}

/// Unspaced Chinese or Japanese characters that make up one spoken word.
const CJK_CHARS_PER_WORD: f32 = 2.0;

/// How long saying `text` takes at `words_per_second`.
///
/// Whitespace-separated tokens count as one word each, except that runs of
/// Han or kana are counted by character. A rate that is zero, negative or
/// not a number means no pacing, as does a duration too long to represent.
pub fn speaking_time(text: &str, words_per_second: f32) -> Duration {
    if words_per_second.is_nan() || words_per_second <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f32(spoken_words(text) / words_per_second).unwrap_or(Duration::ZERO)
}

fn spoken_words(text: &str) -> f32 {
    text.split_whitespace()
        .map(|token| {
            let cjk = token.chars().filter(|c| is_cjk(*c)).count();
            if cjk == 0 {
                1.0
            } else {
                (cjk as f32 / CJK_CHARS_PER_WORD).max(1.0)
            }
        })
        .sum()
}

fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30FF}'     // hiragana, katakana
        | '\u{3400}'..='\u{4DBF}'   // CJK extension A
        | '\u{4E00}'..='\u{9FFF}'   // CJK unified ideographs
        | '\u{F900}'..='\u{FAFF}')  // compatibility ideographs
}

/// Everything a speech backend needs to voice one agent turn.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechRequest {
    pub text: String,
    pub agent: Agent,
    pub language: Language,
    pub voice: VoiceProfile,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, agent: Agent, language: Language) -> Self {
        Self {
            text: text.into(),
            agent,
            language,
            voice: VoiceProfile::for_agent(agent, language),
        }
    }
}

/// Speech synthesis collaborator.
///
/// `speak` resolves when playback has finished (or failed). Failures are
/// reported as values; the session decides how to recover.
#[async_trait]
pub trait SpeechOutput: Send + Sync {
    fn name(&self) -> &str;

    async fn speak(&self, request: &SpeechRequest) -> std::result::Result<(), SpeechError>;

    /// Stop any playback in progress.
    fn stop(&self) {}
}

/// A speech output that discards everything immediately.
pub struct SilentSpeech;

#[async_trait]
impl SpeechOutput for SilentSpeech {
    fn name(&self) -> &str {
        "silent"
    }

    async fn speak(&self, _request: &SpeechRequest) -> std::result::Result<(), SpeechError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_speaks_with_male_voice() {
        let voice = VoiceProfile::for_agent(Agent::Support, Language::Ja);
        assert_eq!(voice.gender, VoiceGender::Male);
        assert_eq!(voice.lang, "ja-JP");
        assert!((voice.pitch - 0.9).abs() < f32::EPSILON);
        assert!(voice.preferred_names.contains(&"Otoya"));
    }

    #[test]
    fn host_and_concierge_share_female_voices() {
        let host = VoiceProfile::for_agent(Agent::Host, Language::En);
        let concierge = VoiceProfile::for_agent(Agent::Concierge, Language::En);
        assert_eq!(host.gender, VoiceGender::Female);
        assert_eq!(host.preferred_names, concierge.preferred_names);
        assert!((host.pitch - 1.1).abs() < f32::EPSILON);
    }

    #[test]
    fn spaced_text_is_paced_per_word() {
        assert_eq!(speaking_time("one two three four five", 2.5), Duration::from_secs(2));
        assert_eq!(speaking_time("   ", 2.5), Duration::ZERO);
    }

    #[test]
    fn unspaced_cjk_is_paced_per_character() {
        // 11 Han characters, closing punctuation not counted
        let zh = speaking_time("好的！我现在会用中文回复。", 2.5);
        assert!(zh > Duration::from_millis(2150) && zh < Duration::from_millis(2250), "{zh:?}");

        let ja = speaking_time("フロントデスクへようこそ", 2.0);
        assert_eq!(ja, Duration::from_secs(3));

        // Korean is written with spaces and stays word-paced
        assert_eq!(speaking_time("안녕하세요 반갑습니다", 2.0), Duration::from_secs(1));
    }

    #[test]
    fn unusable_rates_disable_pacing() {
        for rate in [0.0, -1.0, f32::NAN, 1e-40] {
            assert_eq!(speaking_time("Your room is ready", rate), Duration::ZERO, "rate {rate}");
        }
    }

    #[tokio::test]
    async fn silent_speech_always_succeeds() {
        let request = SpeechRequest::new("Hello", Agent::Host, Language::En);
        assert!(SilentSpeech.speak(&request).await.is_ok());
    }
}
