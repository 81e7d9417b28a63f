//! Screen handlers

use crate::app::Context;
use crate::audio::FeedbackEvent;
use crate::counter::{CounterKey, CounterState, apply_key};
use crate::platform::{Canvas, InputEvent, InputKey, InputType, Platform};
use crate::settings::Settings;

use super::menu::{Menu, MenuEntry};
use super::render;
use super::settings_list::{SettingsList, SettingsRow};
use super::{InputResult, NavAction, ScreenHandler};

/// Splash artwork until OK is pressed
#[derive(Debug, Default)]
pub struct SplashScreen;

impl<P: Platform> ScreenHandler<P> for SplashScreen {
    fn on_input(&mut self, event: InputEvent, _ctx: &mut Context<P>) -> InputResult {
        if event.is_press(InputKey::Ok) {
            return InputResult::Navigate(NavAction::Confirm);
        }
        InputResult::Ignored
    }

    fn draw(&self, canvas: &mut dyn Canvas, _model: &CounterState) {
        render::draw_splash(canvas);
    }
}

/// Top-level menu
#[derive(Debug, Default)]
pub struct MenuScreen {
    menu: Menu,
}

impl MenuScreen {
    pub fn menu(&self) -> &Menu {
        &self.menu
    }
}

impl<P: Platform> ScreenHandler<P> for MenuScreen {
    fn on_input(&mut self, event: InputEvent, ctx: &mut Context<P>) -> InputResult {
        let stepping = matches!(event.kind, InputType::Short | InputType::Repeat);
        match event.key {
            InputKey::Up if stepping => self.menu.move_up(),
            InputKey::Down if stepping => self.menu.move_down(),
            InputKey::Ok if event.kind == InputType::Short => {
                let entry = self.menu.selected();
                if entry == MenuEntry::Reset {
                    ctx.model.reset();
                    ctx.feedback(FeedbackEvent::Reset);
                }
                return InputResult::Navigate(NavAction::Select(entry));
            }
            _ => return InputResult::Ignored,
        }
        ctx.request_redraw();
        InputResult::Consumed
    }

    fn draw(&self, canvas: &mut dyn Canvas, _model: &CounterState) {
        render::draw_menu(canvas, &self.menu);
    }
}

/// Preference list with a Save row
#[derive(Debug)]
pub struct SettingsScreen {
    list: SettingsList,
}

impl SettingsScreen {
    pub fn new(settings: &Settings) -> Self {
        Self {
            list: SettingsList::from_settings(settings),
        }
    }

    pub fn list(&self) -> &SettingsList {
        &self.list
    }

    /// Push the selected row's value into the model
    fn apply_row<P: Platform>(&self, ctx: &mut Context<P>) {
        match self.list.selected_row() {
            SettingsRow::StartingLife => {
                ctx.model.default_life = self.list.starting_life().value;
            }
            SettingsRow::Backlight => {
                ctx.model.backlight_always_on = self.list.backlight_always_on();
                ctx.apply_backlight();
            }
            SettingsRow::AudioFeedback => {
                ctx.model.sound_enabled = self.list.sound_enabled();
            }
            SettingsRow::Save => {}
        }
    }
}

impl<P: Platform> ScreenHandler<P> for SettingsScreen {
    fn on_input(&mut self, event: InputEvent, ctx: &mut Context<P>) -> InputResult {
        let stepping = matches!(event.kind, InputType::Short | InputType::Repeat);
        match event.key {
            InputKey::Up if stepping => self.list.move_up(),
            InputKey::Down if stepping => self.list.move_down(),
            InputKey::Left | InputKey::Right if stepping => {
                if self.list.step(event.key == InputKey::Right) {
                    self.apply_row(ctx);
                }
            }
            InputKey::Ok if event.kind == InputType::Short => {
                if self.list.selected_row() != SettingsRow::Save {
                    return InputResult::Consumed;
                }
                ctx.feedback(FeedbackEvent::LifeChanged);
                ctx.save_settings();
                return InputResult::Navigate(NavAction::Save);
            }
            _ => return InputResult::Ignored,
        }
        ctx.request_redraw();
        InputResult::Consumed
    }

    fn draw(&self, canvas: &mut dyn Canvas, _model: &CounterState) {
        render::draw_settings(canvas, &self.list);
    }
}

/// Live life totals
#[derive(Debug, Default)]
pub struct CounterScreen;

impl CounterScreen {
    fn counter_key(key: InputKey) -> Option<CounterKey> {
        match key {
            InputKey::Up => Some(CounterKey::Up),
            InputKey::Down => Some(CounterKey::Down),
            InputKey::Left => Some(CounterKey::Left),
            InputKey::Right => Some(CounterKey::Right),
            InputKey::Ok | InputKey::Back => None,
        }
    }
}

impl<P: Platform> ScreenHandler<P> for CounterScreen {
    fn on_enter(&mut self, ctx: &mut Context<P>) {
        ctx.start_refresh();
    }

    fn on_exit(&mut self, ctx: &mut Context<P>) {
        ctx.stop_refresh();
    }

    fn on_input(&mut self, event: InputEvent, ctx: &mut Context<P>) -> InputResult {
        if event.is_press(InputKey::Ok) {
            return InputResult::Navigate(NavAction::Confirm);
        }

        ctx.request_redraw();
        match Self::counter_key(event.key) {
            Some(key) if event.kind == InputType::Short => {
                let feedback = apply_key(&mut ctx.model, key);
                ctx.feedback(feedback);
                InputResult::Consumed
            }
            _ => InputResult::Ignored,
        }
    }

    fn on_tick(&mut self, ctx: &mut Context<P>) {
        ctx.request_redraw();
    }

    fn draw(&self, canvas: &mut dyn Canvas, model: &CounterState) {
        render::draw_counter(canvas, model);
    }
}
