//! Persisted preferences
//!
//! Stored as a three-line text record (`default_life`, backlight 0/1,
//! sound 0/1), read once at startup and rewritten on every Save.

use std::path::{Path, PathBuf};

use crate::consts::{APP_DATA_DIR, CONFIG_FILENAME};
use crate::error::{RecordError, RecordErrorKind, StorageError};
use crate::persistence::Storage;

/// One selectable value of a settings row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice<T> {
    pub value: T,
    pub label: &'static str,
}

impl<T> Choice<T> {
    pub const fn new(value: T, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Starting life options, in display order
pub const STARTING_LIFE_CHOICES: [Choice<i32>; 5] = [
    Choice::new(0, "Zero"),
    Choice::new(10, "Ten"),
    Choice::new(20, "Twenty"),
    Choice::new(40, "Forty"),
    Choice::new(100, "Hundred"),
];

/// Options for on/off rows
pub const TOGGLE_CHOICES: [Choice<bool>; 2] = [Choice::new(false, "Off"), Choice::new(true, "On")];

/// Position of `value` in `choices` by exact match
pub fn choice_index<T: PartialEq>(choices: &[Choice<T>], value: &T) -> Option<usize> {
    choices.iter().position(|c| c.value == *value)
}

/// Like `choice_index`, falling back to the first entry when nothing matches
pub fn choice_index_or_first<T>(choices: &[Choice<T>], value: &T) -> usize
where
    T: PartialEq + std::fmt::Debug,
{
    choice_index(choices, value).unwrap_or_else(|| {
        log::warn!("{:?} is not a selectable option, using {}", value, choices[0].label);
        0
    })
}

/// User preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Life total both players start from (and reset to)
    pub default_life: i32,
    /// Keep the display lit instead of letting it time out
    pub backlight_always_on: bool,
    /// Beep on life/player changes
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_life: 20,
            backlight_always_on: false,
            sound_enabled: false,
        }
    }
}

impl Settings {
    /// Number of lines in a complete record
    const RECORD_LINES: usize = 3;

    /// Parse a settings record.
    ///
    /// Lines are read in order; the first missing or non-integer line stops
    /// reading and every field from there on keeps its default. The error
    /// describing where reading stopped is returned alongside.
    pub fn from_record(text: &str) -> (Self, Option<RecordError>) {
        let mut settings = Self::default();
        let mut lines = text.lines();

        for line in 0..Self::RECORD_LINES {
            let Some(raw) = lines.next() else {
                return (
                    settings,
                    Some(RecordError {
                        line,
                        kind: RecordErrorKind::Missing,
                    }),
                );
            };
            let Ok(value) = raw.trim().parse::<i32>() else {
                return (
                    settings,
                    Some(RecordError {
                        line,
                        kind: RecordErrorKind::Invalid(raw.to_string()),
                    }),
                );
            };
            log::trace!("Read value {}: {}", line, value);

            match line {
                0 => settings.default_life = value,
                1 => settings.backlight_always_on = value != 0,
                _ => settings.sound_enabled = value != 0,
            }
        }

        (settings, None)
    }

    /// Serialize to the on-disk record
    pub fn to_record(&self) -> String {
        format!(
            "{}\n{}\n{}\n",
            self.default_life,
            u8::from(self.backlight_always_on),
            u8::from(self.sound_enabled)
        )
    }

    /// Index of `default_life` in `STARTING_LIFE_CHOICES` (first entry if absent)
    pub fn starting_life_index(&self) -> usize {
        choice_index_or_first(&STARTING_LIFE_CHOICES, &self.default_life)
    }

    /// Snap `default_life` onto the selectable options
    pub fn normalized(mut self) -> Self {
        self.default_life = STARTING_LIFE_CHOICES[self.starting_life_index()].value;
        self
    }
}

/// Loads and saves `Settings` through the host's storage
pub struct SettingsStore<S: Storage> {
    storage: S,
    path: PathBuf,
}

impl<S: Storage> SettingsStore<S> {
    /// Store at the default app data location
    pub fn new(storage: S) -> Self {
        Self::with_path(storage, Path::new(APP_DATA_DIR).join(CONFIG_FILENAME))
    }

    pub fn with_path(storage: S, path: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings, falling back to defaults for anything unreadable
    pub fn load(&mut self) -> Settings {
        log::debug!("Reading config from {}", self.path.display());

        let settings = match self.storage.read_to_string(&self.path) {
            Ok(text) => {
                let (settings, stopped) = Settings::from_record(&text);
                if let Some(err) = stopped {
                    log::error!("Config {}: {}", self.path.display(), err);
                }
                settings
            }
            Err(err) => {
                log::error!("{}", err);
                Settings::default()
            }
        };

        log::trace!(
            "Configuration state - Life: {}, Backlight: {}, Sound: {}",
            settings.default_life,
            settings.backlight_always_on,
            settings.sound_enabled
        );
        settings
    }

    /// Overwrite the settings file. Failures are logged and returned.
    pub fn save(&mut self, settings: &Settings) -> Result<(), StorageError> {
        log::debug!("Saving configuration to {}", self.path.display());

        let record = settings.to_record();
        match self.storage.write(&self.path, &record) {
            Ok(()) => {
                log::trace!("Configuration saved - ({:?})", record);
                Ok(())
            }
            Err(err) => {
                log::error!("{}", err);
                Err(err)
            }
        }
    }
}
