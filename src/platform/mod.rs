//! Platform abstraction layer
//!
//! Narrow traits over what the host firmware provides:
//! - Drawing primitives
//! - Input events
//! - Backlight control
//! - Tone generator
//! - Time
//!
//! File storage lives in `persistence`.

pub mod backlight;
pub mod canvas;
pub mod input;
pub mod speaker;
pub mod time;

pub use backlight::{Backlight, BacklightMode};
pub use canvas::{Align, Canvas, Direction, DrawOp, Font, Icon, RecordingCanvas};
pub use input::{InputEvent, InputKey, InputType};
pub use speaker::{Speaker, SpeakerLease};
pub use time::{Clock, PeriodicTimer, SystemClock};

use crate::persistence::Storage;

/// The set of host services an `App` runs against
pub trait Platform {
    type Speaker: Speaker;
    type Backlight: Backlight;
    type Storage: Storage;
    type Clock: Clock;
}

/// Host service instances handed to `App::new`
pub struct Host<P: Platform> {
    pub speaker: P::Speaker,
    pub backlight: P::Backlight,
    pub storage: P::Storage,
    pub clock: P::Clock,
}
