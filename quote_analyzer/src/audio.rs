//! Audio feedback capability and percent-change banding.
//!
//! The analyzer classifies the percent change since close into an [`AudioBand`]
//! and forwards at most one play command to an [`AudioSink`]:
//!
//! | fraction (`change / close`) | band      | sink call            |
//! |-----------------------------|-----------|----------------------|
//! | `> 0`                       | `Happy`   | `play_happy_music()` |
//! | `<= -0.01`                  | `Sad`     | `play_sad_music()`   |
//! | `(-0.01, 0]`                | `Neutral` | none                 |
//! | no quote fetched            | `Error`   | `play_error_music()` |
use strum_macros::Display;

/// Fraction at or below which a drop counts as sad.
pub const SAD_THRESHOLD: f64 = -0.01;

/// Fire-and-forget audio cues.
pub trait AudioSink {
    /// Plays the cue for a price above the previous close.
    fn play_happy_music(&self);
    /// Plays the cue for a drop of at least one percent.
    fn play_sad_music(&self);
    /// Plays the cue for missing quote data.
    fn play_error_music(&self);
}

/// Feedback classification of the percent change since close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AudioBand {
    /// Strictly positive change.
    Happy,
    /// Drop of one percent or more.
    Sad,
    /// Flat or a drop smaller than one percent.
    Neutral,
    /// No quote available.
    Error,
}

impl AudioBand {
    /// Classifies a change-since-close fraction.
    ///
    /// NaN compares false against both thresholds and lands in `Neutral`.
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction > 0.0 {
            AudioBand::Happy
        } else if fraction <= SAD_THRESHOLD {
            AudioBand::Sad
        } else {
            AudioBand::Neutral
        }
    }

    /// Issues this band's play command, if it has one.
    pub fn play(self, sink: &dyn AudioSink) {
        match self {
            AudioBand::Happy => sink.play_happy_music(),
            AudioBand::Sad => sink.play_sad_music(),
            AudioBand::Error => sink.play_error_music(),
            AudioBand::Neutral => {}
        }
    }
}
