//! Key-driven counter mutations

use crate::audio::FeedbackEvent;

use super::state::CounterState;

/// Keys that mutate the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKey {
    Up,
    Down,
    Left,
    Right,
}

/// Apply one key to the state and return the feedback it triggers
pub fn apply_key(state: &mut CounterState, key: CounterKey) -> FeedbackEvent {
    match key {
        CounterKey::Up => {
            state.adjust_active(1);
            FeedbackEvent::LifeChanged
        }
        CounterKey::Down => {
            // No floor: negative totals are shown as-is
            state.adjust_active(-1);
            FeedbackEvent::LifeChanged
        }
        CounterKey::Left | CounterKey::Right => {
            state.toggle_active_player();
            FeedbackEvent::PlayerChanged
        }
    }
}
