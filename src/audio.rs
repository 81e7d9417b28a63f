//! Audio feedback
//!
//! Each feedback event is a single fixed sine beep. Playback blocks the
//! caller for the tone's duration; input handling is serialized anyway.

use std::time::Duration;

use crate::consts::SPEAKER_ACQUIRE_TIMEOUT;
use crate::platform::{Speaker, SpeakerLease};

/// Feedback event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackEvent {
    /// Both life totals reset
    Reset,
    /// A life total changed (also used to confirm a settings save)
    LifeChanged,
    /// The active player switched
    PlayerChanged,
}

/// A beep: frequency (Hz), how long it plays, and volume (0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub duration: Duration,
    pub volume: f32,
}

impl FeedbackEvent {
    pub fn tone(&self) -> Tone {
        match self {
            FeedbackEvent::Reset => Tone {
                frequency: 320.0,
                duration: Duration::from_millis(400),
                volume: 0.8,
            },
            FeedbackEvent::LifeChanged => Tone {
                frequency: 440.0,
                duration: Duration::from_millis(100),
                volume: 0.8,
            },
            FeedbackEvent::PlayerChanged => Tone {
                frequency: 580.0,
                duration: Duration::from_millis(100),
                volume: 0.8,
            },
        }
    }
}

/// Plays feedback tones on the host speaker
pub struct AudioManager<S: Speaker> {
    speaker: S,
}

impl<S: Speaker> AudioManager<S> {
    pub fn new(speaker: S) -> Self {
        Self { speaker }
    }

    /// Play the tone for `event`, unless sound is disabled
    pub fn play(&mut self, event: FeedbackEvent, sound_enabled: bool) {
        if !sound_enabled {
            return;
        }
        self.beep(event.tone());
    }

    /// Make some noise. Skipped if the speaker stays busy past the timeout.
    fn beep(&mut self, tone: Tone) {
        let Some(mut speaker) = SpeakerLease::acquire(&mut self.speaker, SPEAKER_ACQUIRE_TIMEOUT)
        else {
            log::debug!("Speaker busy, skipping {} Hz tone", tone.frequency);
            return;
        };
        speaker.start(tone.frequency, tone.volume);
        speaker.delay(tone.duration);
        speaker.stop();
    }
}
