//! Settings screen list state
//!
//! Three option rows plus a Save row. Each option row holds an index into
//! its choice list; indexes stop at the ends instead of wrapping.

use crate::settings::{Choice, STARTING_LIFE_CHOICES, Settings, TOGGLE_CHOICES, choice_index_or_first};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    StartingLife,
    Backlight,
    AudioFeedback,
    Save,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 4] = [
        SettingsRow::StartingLife,
        SettingsRow::Backlight,
        SettingsRow::AudioFeedback,
        SettingsRow::Save,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsRow::StartingLife => "Starting life",
            SettingsRow::Backlight => "Backlight",
            SettingsRow::AudioFeedback => "Audio feedback",
            SettingsRow::Save => "Save settings",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsList {
    cursor: usize,
    life: usize,
    backlight: usize,
    audio: usize,
}

impl SettingsList {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            cursor: 0,
            life: choice_index_or_first(&STARTING_LIFE_CHOICES, &settings.default_life),
            backlight: choice_index_or_first(&TOGGLE_CHOICES, &settings.backlight_always_on),
            audio: choice_index_or_first(&TOGGLE_CHOICES, &settings.sound_enabled),
        }
    }

    pub fn selected_row(&self) -> SettingsRow {
        SettingsRow::ALL[self.cursor]
    }

    pub fn move_up(&mut self) {
        let len = SettingsRow::ALL.len();
        self.cursor = (self.cursor + len - 1) % len;
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % SettingsRow::ALL.len();
    }

    /// Current option index and option count for `row` (`None` for Save)
    pub fn position(&self, row: SettingsRow) -> Option<(usize, usize)> {
        match row {
            SettingsRow::StartingLife => Some((self.life, STARTING_LIFE_CHOICES.len())),
            SettingsRow::Backlight => Some((self.backlight, TOGGLE_CHOICES.len())),
            SettingsRow::AudioFeedback => Some((self.audio, TOGGLE_CHOICES.len())),
            SettingsRow::Save => None,
        }
    }

    /// Label of the current option for `row`
    pub fn value_label(&self, row: SettingsRow) -> Option<&'static str> {
        match row {
            SettingsRow::StartingLife => Some(STARTING_LIFE_CHOICES[self.life].label),
            SettingsRow::Backlight => Some(TOGGLE_CHOICES[self.backlight].label),
            SettingsRow::AudioFeedback => Some(TOGGLE_CHOICES[self.audio].label),
            SettingsRow::Save => None,
        }
    }

    /// Step the selected row's option. Returns false at either end or on Save.
    pub fn step(&mut self, forward: bool) -> bool {
        let (slot, count) = match self.selected_row() {
            SettingsRow::StartingLife => (&mut self.life, STARTING_LIFE_CHOICES.len()),
            SettingsRow::Backlight => (&mut self.backlight, TOGGLE_CHOICES.len()),
            SettingsRow::AudioFeedback => (&mut self.audio, TOGGLE_CHOICES.len()),
            SettingsRow::Save => return false,
        };
        if forward && *slot + 1 < count {
            *slot += 1;
            true
        } else if !forward && *slot > 0 {
            *slot -= 1;
            true
        } else {
            false
        }
    }

    pub fn starting_life(&self) -> Choice<i32> {
        STARTING_LIFE_CHOICES[self.life]
    }

    pub fn backlight_always_on(&self) -> bool {
        TOGGLE_CHOICES[self.backlight].value
    }

    pub fn sound_enabled(&self) -> bool {
        TOGGLE_CHOICES[self.audio].value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflects_settings() {
        let list = SettingsList::from_settings(&Settings {
            default_life: 40,
            backlight_always_on: true,
            sound_enabled: false,
        });
        assert_eq!(list.value_label(SettingsRow::StartingLife), Some("Forty"));
        assert_eq!(list.value_label(SettingsRow::Backlight), Some("On"));
        assert_eq!(list.value_label(SettingsRow::AudioFeedback), Some("Off"));
        assert_eq!(list.value_label(SettingsRow::Save), None);
    }

    #[test]
    fn unknown_life_selects_first_option() {
        let list = SettingsList::from_settings(&Settings {
            default_life: 25,
            ..Settings::default()
        });
        assert_eq!(list.starting_life().value, 0);
        assert_eq!(list.value_label(SettingsRow::StartingLife), Some("Zero"));
    }

    #[test]
    fn step_stops_at_ends() {
        let mut list = SettingsList::from_settings(&Settings::default());
        assert_eq!(list.starting_life().value, 20);
        assert!(list.step(true));
        assert!(list.step(true));
        assert!(!list.step(true));
        assert_eq!(list.starting_life().label, "Hundred");

        for _ in 0..4 {
            assert!(list.step(false));
        }
        assert!(!list.step(false));
        assert_eq!(list.starting_life().label, "Zero");
    }

    #[test]
    fn toggles_and_save_row() {
        let mut list = SettingsList::from_settings(&Settings::default());
        list.move_down();
        assert_eq!(list.selected_row(), SettingsRow::Backlight);
        assert!(list.step(true));
        assert!(list.backlight_always_on());
        list.move_down();
        assert!(list.step(true));
        assert!(list.sound_enabled());
        list.move_down();
        assert_eq!(list.selected_row(), SettingsRow::Save);
        assert!(!list.step(true));
        list.move_down();
        assert_eq!(list.selected_row(), SettingsRow::StartingLife);
    }

    #[test]
    fn position_reports_count() {
        let list = SettingsList::from_settings(&Settings::default());
        assert_eq!(list.position(SettingsRow::StartingLife), Some((2, 5)));
        assert_eq!(list.position(SettingsRow::Backlight), Some((0, 2)));
        assert_eq!(list.position(SettingsRow::Save), None);
    }
}
