//! Live counter state

use serde::Serialize;

use crate::settings::Settings;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// The application's single mutable model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterState {
    /// Value both totals start from and reset to
    pub default_life: i32,
    /// Player whose total responds to Up/Down
    pub active_player: Player,
    /// Current totals, indexed by player. Unbounded; negative is valid.
    life: [i32; 2],
    pub backlight_always_on: bool,
    pub sound_enabled: bool,
}

impl Default for CounterState {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl CounterState {
    /// Fresh state: both totals at the default, player one active
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            default_life: settings.default_life,
            active_player: Player::One,
            life: [settings.default_life; 2],
            backlight_always_on: settings.backlight_always_on,
            sound_enabled: settings.sound_enabled,
        }
    }

    /// The persisted subset
    pub fn settings(&self) -> Settings {
        Settings {
            default_life: self.default_life,
            backlight_always_on: self.backlight_always_on,
            sound_enabled: self.sound_enabled,
        }
    }

    pub fn life(&self, player: Player) -> i32 {
        self.life[player.index()]
    }

    pub fn set_life(&mut self, player: Player, value: i32) {
        self.life[player.index()] = value;
    }

    /// Add `delta` to the active player's total
    pub fn adjust_active(&mut self, delta: i32) {
        let slot = &mut self.life[self.active_player.index()];
        *slot = slot.wrapping_add(delta);
    }

    pub fn toggle_active_player(&mut self) {
        self.active_player = self.active_player.other();
    }

    /// Both totals back to `default_life`
    pub fn reset(&mut self) {
        self.life = [self.default_life; 2];
    }
}
