//! Screen transition table

use super::Screen;
use super::menu::MenuEntry;

/// What the user asked for, as far as navigation is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// OK on a screen without its own selection
    Confirm,
    /// The back gesture
    Back,
    /// A menu entry was chosen
    Select(MenuEntry),
    /// "Save settings" was chosen
    Save,
}

/// Where to go next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    To(Screen),
    /// Leave the application
    Exit,
}

/// Next screen for `action` on `from`, or `None` if the action does not navigate
pub fn transition(from: Screen, action: NavAction) -> Option<Transition> {
    use NavAction::*;
    use Screen::*;

    let next = match (from, action) {
        (Splash, Confirm | Back) => Transition::To(Counter),
        (Menu, Select(MenuEntry::ReturnToCounter | MenuEntry::Reset)) => Transition::To(Counter),
        (Menu, Select(MenuEntry::Configure)) => Transition::To(Settings),
        (Menu, Back) => Transition::Exit,
        (Settings, Save | Back) => Transition::To(Menu),
        (Counter, Confirm | Back) => Transition::To(Menu),
        _ => return None,
    };
    Some(next)
}
