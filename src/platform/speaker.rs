//! Tone generator access
//!
//! The speaker is shared with the rest of the firmware, so it must be
//! acquired (with a timeout) before use and released afterwards.
//! `SpeakerLease` ties the release to scope.

use std::ops::{Deref, DerefMut};
use std::time::Duration;

/// Sine tone generator provided by the host
pub trait Speaker {
    /// Try to take exclusive use of the speaker within `timeout`
    fn acquire(&mut self, timeout: Duration) -> bool;

    /// Start a sine tone. Volume is 0.0 - 1.0.
    fn start(&mut self, frequency: f32, volume: f32);

    fn stop(&mut self);

    /// Give the speaker back. Only called after a successful `acquire`.
    fn release(&mut self);

    /// Block while a tone plays
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Exclusive use of a speaker, released on drop
pub struct SpeakerLease<'a, S: Speaker + ?Sized> {
    speaker: &'a mut S,
}

impl<'a, S: Speaker + ?Sized> SpeakerLease<'a, S> {
    /// Acquire `speaker`, or `None` if it stayed busy for `timeout`
    pub fn acquire(speaker: &'a mut S, timeout: Duration) -> Option<Self> {
        if speaker.acquire(timeout) {
            Some(Self { speaker })
        } else {
            None
        }
    }
}

impl<S: Speaker + ?Sized> Deref for SpeakerLease<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.speaker
    }
}

impl<S: Speaker + ?Sized> DerefMut for SpeakerLease<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.speaker
    }
}

impl<S: Speaker + ?Sized> Drop for SpeakerLease<'_, S> {
    fn drop(&mut self) {
        self.speaker.release();
    }
}
