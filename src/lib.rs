//! Life Counter - two-player life totals for tabletop card games
//!
//! Core modules:
//! - `counter`: Life totals, active player and the key-driven mutations
//! - `settings`: Persisted preferences and their line-based record format
//! - `audio`: Feedback tones gated by the sound preference
//! - `ui`: Screens, navigation table and per-screen rendering
//! - `app`: Screen dispatcher owning the state and the host services
//! - `platform`: Host collaborator traits (canvas, input, speaker, backlight, time)
//! - `persistence`: File storage seam

pub mod app;
pub mod audio;
pub mod counter;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod ui;

pub use app::{App, Control};
pub use counter::{CounterState, Player};
pub use settings::{Settings, SettingsStore};

/// Application configuration constants
pub mod consts {
    use std::time::Duration;

    /// Display dimensions
    pub const SCREEN_WIDTH: i32 = 128;
    pub const SCREEN_HEIGHT: i32 = 64;

    /// Redraw period while the counter screen is active
    pub const REFRESH_PERIOD: Duration = Duration::from_millis(200);

    /// How long to wait for the speaker before skipping a tone
    pub const SPEAKER_ACQUIRE_TIMEOUT: Duration = Duration::from_millis(500);

    /// Settings file name inside the app data directory
    pub const CONFIG_FILENAME: &str = "lifecounter.cfg";
    /// Per-application data directory (relative to the host's storage root)
    pub const APP_DATA_DIR: &str = "apps_data/lifecounter";

    /// Counter layout: each player owns one half of the screen
    pub const PANEL_WIDTH: i32 = SCREEN_WIDTH / 2;
    pub const FRAME_RADIUS: i32 = 4;
    /// Inset of the selection frame inside a panel
    pub const SELECTION_INSET: i32 = 4;
    pub const TRIANGLE_BASE: i32 = 8;
    pub const TRIANGLE_HEIGHT: i32 = 6;
    /// Arrow positions above/below the life total
    pub const ARROW_UP_Y: i32 = 20;
    pub const ARROW_DOWN_Y: i32 = 44;

    /// Row height for menu and settings lists
    pub const LIST_ROW_HEIGHT: i32 = 16;
}
