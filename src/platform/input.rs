//! Input events as delivered by the host

/// Logical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    Up,
    Down,
    Left,
    Right,
    Ok,
    Back,
}

impl InputKey {
    pub const ALL: [InputKey; 6] = [
        InputKey::Up,
        InputKey::Down,
        InputKey::Left,
        InputKey::Right,
        InputKey::Ok,
        InputKey::Back,
    ];

    /// Bit used to track held keys
    pub(crate) fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Phase of a key interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// Key went down
    Press,
    /// Key went up
    Release,
    /// Press and release within the short-press window
    Short,
    /// Key held past the long-press threshold
    Long,
    /// Auto-repeat while held
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: InputKey,
    pub kind: InputType,
}

impl InputEvent {
    pub const fn new(key: InputKey, kind: InputType) -> Self {
        Self { key, kind }
    }

    /// Events for a complete short press: Press, Short, Release
    pub fn short_press(key: InputKey) -> [InputEvent; 3] {
        [
            Self::new(key, InputType::Press),
            Self::new(key, InputType::Short),
            Self::new(key, InputType::Release),
        ]
    }

    /// Events for a held key: Press, Long, Release
    pub fn long_press(key: InputKey) -> [InputEvent; 3] {
        [
            Self::new(key, InputType::Press),
            Self::new(key, InputType::Long),
            Self::new(key, InputType::Release),
        ]
    }

    pub fn is_short(&self, key: InputKey) -> bool {
        self.key == key && self.kind == InputType::Short
    }

    pub fn is_press(&self, key: InputKey) -> bool {
        self.key == key && self.kind == InputType::Press
    }
}
