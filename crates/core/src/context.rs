//! Perceived user context and the perception collaborator.
//!
//! A [`Context`] is an ephemeral snapshot produced by an external face/emotion
//! detector. The session reads the latest value at the moment of a submission,
//! attaches it to the user turn, and the generator consumes it once to flavor
//! the reply's tone.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tokio::sync::watch;

/// Coarse age bucket inferred from the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeCategory {
    Child,
    Adult,
}

impl AgeCategory {
    /// Estimated ages below 18 count as minors.
    pub fn from_age(age: u32) -> Self {
        if age < 18 { Self::Child } else { Self::Adult }
    }
}

impl FromStr for AgeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "child" | "minor" | "kid" => Ok(Self::Child),
            "adult" => Ok(Self::Adult),
            other => Err(format!("unknown age category '{other}'")),
        }
    }
}

/// Dominant facial expression reported by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    #[default]
    Happy,
    Sad,
    Angry,
    Surprised,
    Neutral,
    Fearful,
    Disgusted,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Surprised => "surprised",
            Emotion::Neutral => "neutral",
            Emotion::Fearful => "fearful",
            Emotion::Disgusted => "disgusted",
        }
    }

    pub fn is_distressed(&self) -> bool {
        matches!(self, Emotion::Sad | Emotion::Fearful)
    }

    pub fn is_hostile(&self) -> bool {
        matches!(self, Emotion::Angry | Emotion::Disgusted)
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Emotion::Happy | Emotion::Surprised)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "happy" => Ok(Emotion::Happy),
            "sad" => Ok(Emotion::Sad),
            "angry" => Ok(Emotion::Angry),
            "surprised" => Ok(Emotion::Surprised),
            "neutral" => Ok(Emotion::Neutral),
            "fearful" => Ok(Emotion::Fearful),
            "disgusted" => Ok(Emotion::Disgusted),
            other => Err(format!("unknown emotion '{other}'")),
        }
    }
}

/// A perceived snapshot of the user at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub age_category: AgeCategory,
    pub emotion: Emotion,
}

impl Context {
    pub fn new(age_category: AgeCategory, emotion: Emotion) -> Self {
        Self {
            age_category,
            emotion,
        }
    }
}

/// Anything that can report the most recent perceived context.
///
/// Implementations update asynchronously; the session only ever reads the
/// latest value and never blocks on it.
pub trait PerceptionSource: Send + Sync {
    fn latest(&self) -> Option<Context>;
}

/// In-process perception source backed by a `tokio::sync::watch` channel.
///
/// Detector adapters hold a clone and call [`WatchPerception::publish`];
/// the session holds another clone and reads [`PerceptionSource::latest`].
#[derive(Clone)]
pub struct WatchPerception {
    tx: std::sync::Arc<watch::Sender<Option<Context>>>,
    rx: watch::Receiver<Option<Context>>,
}

impl WatchPerception {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(None);
        Self {
            tx: std::sync::Arc::new(tx),
            rx,
        }
    }

    /// Replace the current detection. `None` means no face in frame.
    pub fn publish(&self, context: Option<Context>) {
        // send_replace never fails, even without receivers
        self.tx.send_replace(context);
    }

    /// Subscribe to detection changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Context>> {
        self.tx.subscribe()
    }
}

impl Default for WatchPerception {
    fn default() -> Self {
        Self::new()
    }
}

impl PerceptionSource for WatchPerception {
    fn latest(&self) -> Option<Context> {
        *self.rx.borrow()
    }
}

/// A perception source that never sees anyone.
pub struct NoPerception;

impl PerceptionSource for NoPerception {
    fn latest(&self) -> Option<Context> {
        None
    }
}
