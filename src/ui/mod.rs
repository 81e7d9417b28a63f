//! User interface: four mutually exclusive screens
//!
//! Each screen implements `ScreenHandler`; the `App` dispatches host events
//! to the active one and applies the navigation table to what it returns.

pub mod menu;
pub mod navigation;
pub mod render;
pub mod screens;
pub mod settings_list;

pub use menu::{Menu, MenuEntry};
pub use navigation::{NavAction, Transition, transition};
pub use screens::{CounterScreen, MenuScreen, SettingsScreen, SplashScreen};
pub use settings_list::{SettingsList, SettingsRow};

use crate::app::Context;
use crate::counter::CounterState;
use crate::platform::{Canvas, InputEvent, Platform};

/// Screens (views) the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Splash,
    Menu,
    Settings,
    Counter,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Splash, Screen::Menu, Screen::Settings, Screen::Counter];
}

/// Outcome of delivering an input event to a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Handled, stay on this screen
    Consumed,
    /// Not for this screen; the dispatcher may treat it as Back
    Ignored,
    /// Handled, and navigation was requested
    Navigate(NavAction),
}

/// Per-screen event handlers
pub trait ScreenHandler<P: Platform> {
    fn on_enter(&mut self, _ctx: &mut Context<P>) {}

    fn on_exit(&mut self, _ctx: &mut Context<P>) {}

    fn on_input(&mut self, event: InputEvent, ctx: &mut Context<P>) -> InputResult;

    /// Periodic refresh tick (only delivered while a timer is running)
    fn on_tick(&mut self, _ctx: &mut Context<P>) {}

    fn draw(&self, canvas: &mut dyn Canvas, model: &CounterState);
}
