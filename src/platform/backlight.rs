//! Display backlight control

/// Backlight policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacklightMode {
    /// Host default: dim after inactivity
    Auto,
    /// Never dim while the app runs
    AlwaysOn,
}

impl BacklightMode {
    pub fn from_always_on(always_on: bool) -> Self {
        if always_on {
            BacklightMode::AlwaysOn
        } else {
            BacklightMode::Auto
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BacklightMode::Auto => "auto",
            BacklightMode::AlwaysOn => "always on",
        }
    }
}

/// Backlight provided by the host
pub trait Backlight {
    fn set_mode(&mut self, mode: BacklightMode);
}
