//! Top-level menu

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    ReturnToCounter,
    Reset,
    Configure,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 3] = [
        MenuEntry::ReturnToCounter,
        MenuEntry::Reset,
        MenuEntry::Configure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::ReturnToCounter => "Return to life view",
            MenuEntry::Reset => "Reset life totals",
            MenuEntry::Configure => "Configure settings",
        }
    }
}

/// Cursor over `MenuEntry::ALL`; wraps at both ends
#[derive(Debug, Clone, Default)]
pub struct Menu {
    cursor: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> MenuEntry {
        MenuEntry::ALL[self.cursor]
    }

    pub fn move_up(&mut self) {
        let len = MenuEntry::ALL.len();
        self.cursor = (self.cursor + len - 1) % len;
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % MenuEntry::ALL.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_return() {
        assert_eq!(Menu::new().selected(), MenuEntry::ReturnToCounter);
    }

    #[test]
    fn wraps_both_ways() {
        let mut menu = Menu::new();
        menu.move_up();
        assert_eq!(menu.selected(), MenuEntry::Configure);
        menu.move_down();
        assert_eq!(menu.selected(), MenuEntry::ReturnToCounter);
        menu.move_down();
        menu.move_down();
        menu.move_down();
        assert_eq!(menu.cursor(), 0);
    }
}
