//! Screen dispatcher
//!
//! `App` owns the counter model and the host services, routes every host
//! event to the active screen's handler, and applies the navigation table
//! to whatever the handler asks for. All calls are expected from one thread,
//! one at a time.

use std::mem;
use std::time::Instant;

use crate::audio::{AudioManager, FeedbackEvent};
use crate::consts::REFRESH_PERIOD;
use crate::counter::CounterState;
use crate::platform::{
    Backlight, BacklightMode, Canvas, Clock, Host, InputEvent, InputKey, InputType,
    PeriodicTimer, Platform,
};
use crate::settings::SettingsStore;
use crate::ui::{
    CounterScreen, InputResult, MenuScreen, NavAction, Screen, ScreenHandler, SettingsScreen,
    SplashScreen, Transition, transition,
};

/// Whether the host loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// State and services shared by every screen handler
pub struct Context<P: Platform> {
    pub model: CounterState,
    audio: AudioManager<P::Speaker>,
    backlight: P::Backlight,
    store: SettingsStore<P::Storage>,
    clock: P::Clock,
    refresh: Option<PeriodicTimer>,
    redraw: bool,
}

impl<P: Platform> Context<P> {
    /// Play feedback for `event` if sound is enabled
    pub fn feedback(&mut self, event: FeedbackEvent) {
        self.audio.play(event, self.model.sound_enabled);
    }

    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Push the model's backlight preference to the host
    pub fn apply_backlight(&mut self) {
        let mode = BacklightMode::from_always_on(self.model.backlight_always_on);
        log::debug!("Backlight {}", mode.as_str());
        self.backlight.set_mode(mode);
    }

    /// Persist the model's preferences. Failures are logged by the store and
    /// leave the file in whatever state the write reached.
    pub fn save_settings(&mut self) {
        let settings = self.model.settings();
        if let Err(err) = self.store.save(&settings) {
            log::trace!("Keeping unsaved settings in memory ({})", err.path().display());
        }
    }

    /// Start the periodic redraw timer. Exactly one may exist.
    pub fn start_refresh(&mut self) {
        assert!(self.refresh.is_none(), "refresh timer already running");
        self.refresh = Some(PeriodicTimer::start(REFRESH_PERIOD, self.clock.now()));
    }

    pub fn stop_refresh(&mut self) {
        if self.refresh.take().is_none() {
            log::warn!("Refresh timer stopped while not running");
        }
    }

    pub fn refresh_running(&self) -> bool {
        self.refresh.is_some()
    }
}

/// One handler per screen
struct Screens {
    splash: SplashScreen,
    menu: MenuScreen,
    settings: SettingsScreen,
    counter: CounterScreen,
}

impl Screens {
    fn get<P: Platform>(&self, screen: Screen) -> &dyn ScreenHandler<P> {
        match screen {
            Screen::Splash => &self.splash,
            Screen::Menu => &self.menu,
            Screen::Settings => &self.settings,
            Screen::Counter => &self.counter,
        }
    }

    fn get_mut<P: Platform>(&mut self, screen: Screen) -> &mut dyn ScreenHandler<P> {
        match screen {
            Screen::Splash => &mut self.splash,
            Screen::Menu => &mut self.menu,
            Screen::Settings => &mut self.settings,
            Screen::Counter => &mut self.counter,
        }
    }
}

/// The running application
pub struct App<P: Platform> {
    ctx: Context<P>,
    screens: Screens,
    screen: Screen,
    /// Keys currently held, as `InputKey::mask` bits
    held: u8,
    /// Screen that saw the first press of the current key sequence
    input_owner: Option<Screen>,
    exited: bool,
}

impl<P: Platform> App<P> {
    /// Load settings, apply the backlight preference and show the splash
    pub fn new(host: Host<P>) -> Self {
        let mut store = SettingsStore::new(host.storage);
        let settings = store.load().normalized();
        let model = CounterState::from_settings(&settings);

        let mut ctx = Context {
            model,
            audio: AudioManager::new(host.speaker),
            backlight: host.backlight,
            store,
            clock: host.clock,
            refresh: None,
            redraw: true,
        };
        ctx.apply_backlight();

        let mut app = Self {
            ctx,
            screens: Screens {
                splash: SplashScreen,
                menu: MenuScreen::default(),
                settings: SettingsScreen::new(&settings),
                counter: CounterScreen,
            },
            screen: Screen::Splash,
            held: 0,
            input_owner: None,
            exited: false,
        };
        app.screens
            .get_mut::<P>(Screen::Splash)
            .on_enter(&mut app.ctx);
        app
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn model(&self) -> &CounterState {
        &self.ctx.model
    }

    pub fn context(&self) -> &Context<P> {
        &self.ctx
    }

    pub fn menu(&self) -> &MenuScreen {
        &self.screens.menu
    }

    pub fn settings(&self) -> &SettingsScreen {
        &self.screens.settings
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Deliver one input event to the active screen
    pub fn handle_input(&mut self, event: InputEvent) -> Control {
        if self.exited {
            return Control::Exit;
        }
        if !self.track_sequence(event) {
            log::trace!("Dropping {:?}: sequence began on another screen", event);
            return Control::Continue;
        }

        let screen = self.screen;
        let result = self
            .screens
            .get_mut::<P>(screen)
            .on_input(event, &mut self.ctx);

        let action = match result {
            InputResult::Navigate(action) => action,
            InputResult::Ignored if event.is_short(InputKey::Back) => NavAction::Back,
            _ => return Control::Continue,
        };
        match transition(screen, action) {
            Some(Transition::To(next)) => {
                self.switch_to(next);
                Control::Continue
            }
            Some(Transition::Exit) => {
                self.exit();
                Control::Exit
            }
            None => Control::Continue,
        }
    }

    /// Run the periodic refresh if it is due
    pub fn tick(&mut self) {
        let now = self.ctx.clock.now();
        let due = self.ctx.refresh.as_mut().is_some_and(|timer| timer.poll(now));
        if due {
            self.screens
                .get_mut::<P>(self.screen)
                .on_tick(&mut self.ctx);
        }
    }

    /// When `tick` next has work to do, if ever
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ctx.refresh.as_ref().map(PeriodicTimer::next_due)
    }

    /// True once per redraw request
    pub fn take_redraw(&mut self) -> bool {
        mem::replace(&mut self.ctx.redraw, false)
    }

    /// Draw the active screen
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.clear();
        self.screens
            .get::<P>(self.screen)
            .draw(canvas, &self.ctx.model);
    }

    /// Track held keys; returns whether `event` belongs to the active screen.
    fn track_sequence(&mut self, event: InputEvent) -> bool {
        let mask = event.key.mask();
        if event.kind == InputType::Press {
            if self.held == 0 {
                self.input_owner = Some(self.screen);
            }
            self.held |= mask;
        }

        let deliver = self.input_owner.is_none_or(|owner| owner == self.screen);

        if event.kind == InputType::Release {
            self.held &= !mask;
            if self.held == 0 {
                self.input_owner = None;
            }
        }
        deliver
    }

    fn switch_to(&mut self, next: Screen) {
        let prev = self.screen;
        log::debug!("Screen {:?} -> {:?}", prev, next);
        self.screens.get_mut::<P>(prev).on_exit(&mut self.ctx);
        self.screen = next;
        self.screens.get_mut::<P>(next).on_enter(&mut self.ctx);
        self.ctx.request_redraw();
    }

    fn exit(&mut self) {
        log::debug!("Exiting from {:?}", self.screen);
        self.screens
            .get_mut::<P>(self.screen)
            .on_exit(&mut self.ctx);
        self.exited = true;
    }
}

impl<P: Platform> Drop for App<P> {
    fn drop(&mut self) {
        self.ctx.refresh = None;
        self.ctx.backlight.set_mode(BacklightMode::Auto);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::tests::RecordingSpeaker;
    use crate::counter::Player;
    use crate::persistence::MemoryStorage;
    use crate::platform::{Font, RecordingCanvas};
    use crate::ui::{MenuEntry, SettingsRow};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    const CONFIG: &str = "apps_data/lifecounter/lifecounter.cfg";

    #[derive(Clone, Default)]
    struct RecordingBacklight {
        modes: Rc<RefCell<Vec<BacklightMode>>>,
    }

    impl Backlight for RecordingBacklight {
        fn set_mode(&mut self, mode: BacklightMode) {
            self.modes.borrow_mut().push(mode);
        }
    }

    #[derive(Clone)]
    struct ManualClock {
        now: Rc<Cell<Instant>>,
    }

    impl ManualClock {
        fn advance(&self, by: Duration) {
            self.now.set(self.now.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.now.get()
        }
    }

    struct TestPlatform;

    impl Platform for TestPlatform {
        type Speaker = RecordingSpeaker;
        type Backlight = RecordingBacklight;
        type Storage = MemoryStorage;
        type Clock = ManualClock;
    }

    struct Harness {
        app: App<TestPlatform>,
        speaker: RecordingSpeaker,
        backlight: RecordingBacklight,
        storage: MemoryStorage,
        clock: ManualClock,
    }

    impl Harness {
        fn new(config: Option<&str>) -> Self {
            let speaker = RecordingSpeaker::default();
            let backlight = RecordingBacklight::default();
            let storage = MemoryStorage::new();
            if let Some(text) = config {
                storage.insert(CONFIG, text);
            }
            let clock = ManualClock {
                now: Rc::new(Cell::new(Instant::now())),
            };
            let app = App::new(Host::<TestPlatform> {
                speaker: speaker.clone(),
                backlight: backlight.clone(),
                storage: storage.clone(),
                clock: clock.clone(),
            });
            Self {
                app,
                speaker,
                backlight,
                storage,
                clock,
            }
        }

        fn press(&mut self, key: InputKey) -> Control {
            let mut control = Control::Continue;
            for event in InputEvent::short_press(key) {
                control = self.app.handle_input(event);
            }
            control
        }

        fn lives(&self) -> (i32, i32) {
            let model = self.app.model();
            (model.life(Player::One), model.life(Player::Two))
        }

        fn shown_lives(&self) -> Vec<String> {
            let mut canvas = RecordingCanvas::new();
            self.app.draw(&mut canvas);
            canvas
                .texts_in(Font::BigNumbers)
                .into_iter()
                .map(str::to_string)
                .collect()
        }
    }

    #[test]
    fn play_through_scenario() {
        let mut h = Harness::new(None);
        assert_eq!(h.app.screen(), Screen::Splash);

        h.press(InputKey::Ok);
        assert_eq!(h.app.screen(), Screen::Counter);
        assert_eq!(h.shown_lives(), vec!["20", "20"]);

        h.press(InputKey::Up);
        assert_eq!(h.shown_lives(), vec!["21", "20"]);

        h.press(InputKey::Left);
        assert_eq!(h.app.model().active_player, Player::Two);

        h.press(InputKey::Down);
        assert_eq!(h.shown_lives(), vec!["21", "19"]);

        h.press(InputKey::Ok);
        assert_eq!(h.app.screen(), Screen::Menu);

        h.press(InputKey::Down);
        assert_eq!(h.app.menu().menu().selected(), MenuEntry::Reset);
        h.press(InputKey::Ok);
        assert_eq!(h.app.screen(), Screen::Counter);
        assert_eq!(h.shown_lives(), vec!["20", "20"]);
    }

    #[test]
    fn startup_applies_defaults_and_backlight() {
        let h = Harness::new(None);
        assert_eq!(*h.app.model(), CounterState::default());
        assert_eq!(*h.backlight.modes.borrow(), vec![BacklightMode::Auto]);
    }

    #[test]
    fn startup_reads_config() {
        let h = Harness::new(Some("100\n1\n1\n"));
        assert_eq!(h.lives(), (100, 100));
        assert!(h.app.model().sound_enabled);
        assert_eq!(*h.backlight.modes.borrow(), vec![BacklightMode::AlwaysOn]);
    }

    #[test]
    fn unknown_stored_life_falls_back_to_first_option() {
        let h = Harness::new(Some("25\n0\n0\n"));
        assert_eq!(h.app.model().default_life, 0);
        assert_eq!(h.lives(), (0, 0));
    }

    #[test]
    fn splash_back_goes_to_counter() {
        let mut h = Harness::new(None);
        h.press(InputKey::Back);
        assert_eq!(h.app.screen(), Screen::Counter);
    }

    #[test]
    fn counter_back_goes_to_menu_and_menu_back_exits() {
        let mut h = Harness::new(None);
        h.press(InputKey::Ok);
        assert_eq!(h.press(InputKey::Back), Control::Continue);
        assert_eq!(h.app.screen(), Screen::Menu);
        assert_eq!(h.press(InputKey::Back), Control::Exit);
        assert!(h.app.has_exited());
        assert_eq!(h.press(InputKey::Up), Control::Exit);
    }

    #[test]
    fn drop_restores_auto_backlight() {
        let h = Harness::new(Some("20\n1\n0\n"));
        let modes = h.backlight.modes.clone();
        drop(h);
        assert_eq!(
            *modes.borrow(),
            vec![BacklightMode::AlwaysOn, BacklightMode::Auto]
        );
    }

    #[test]
    fn ok_press_is_not_replayed_on_next_screen() {
        let mut h = Harness::new(None);
        h.press(InputKey::Ok);
        h.press(InputKey::Ok);
        // The Short OK of the same press must not select "Return to life view"
        assert_eq!(h.app.screen(), Screen::Menu);
        assert_eq!(h.app.menu().menu().cursor(), 0);
    }

    #[test]
    fn refresh_timer_lives_only_on_counter() {
        let mut h = Harness::new(None);
        assert!(!h.app.context().refresh_running());
        assert_eq!(h.app.next_deadline(), None);

        h.press(InputKey::Ok);
        assert!(h.app.context().refresh_running());
        assert!(h.app.next_deadline().is_some());

        h.app.take_redraw();
        h.clock.advance(Duration::from_millis(100));
        h.app.tick();
        assert!(!h.app.take_redraw());
        h.clock.advance(Duration::from_millis(100));
        h.app.tick();
        assert!(h.app.take_redraw());

        h.press(InputKey::Ok);
        assert!(!h.app.context().refresh_running());
        h.app.take_redraw();
        h.clock.advance(Duration::from_secs(1));
        h.app.tick();
        assert!(!h.app.take_redraw());

        // Re-entering creates a fresh timer
        h.press(InputKey::Ok);
        assert_eq!(h.app.screen(), Screen::Counter);
        assert!(h.app.context().refresh_running());
    }

    #[test]
    #[should_panic(expected = "refresh timer already running")]
    fn second_refresh_timer_is_rejected() {
        let mut h = Harness::new(None);
        h.press(InputKey::Ok);
        assert!(h.app.context().refresh_running());
        h.app.ctx.start_refresh();
    }

    #[test]
    fn counter_input_requests_redraw() {
        let mut h = Harness::new(None);
        h.press(InputKey::Ok);
        h.app.take_redraw();
        h.press(InputKey::Up);
        assert!(h.app.take_redraw());
        assert!(!h.app.take_redraw());
    }

    #[test]
    fn silent_by_default() {
        let mut h = Harness::new(None);
        h.press(InputKey::Ok);
        h.press(InputKey::Up);
        h.press(InputKey::Right);
        assert!(h.speaker.calls.borrow().is_empty());
    }

    #[test]
    fn tones_follow_counter_events() {
        let mut h = Harness::new(Some("20\n0\n1\n"));
        h.press(InputKey::Ok);
        h.press(InputKey::Up);
        h.press(InputKey::Right);
        h.press(InputKey::Ok);
        h.press(InputKey::Down);
        h.press(InputKey::Ok);
        assert_eq!(
            h.speaker.tones(),
            vec![
                (440.0, Duration::from_millis(100)),
                (580.0, Duration::from_millis(100)),
                (320.0, Duration::from_millis(400)),
            ]
        );
    }

    #[test]
    fn configure_and_save() {
        let mut h = Harness::new(None);
        h.press(InputKey::Ok); // counter
        h.press(InputKey::Ok); // menu
        h.press(InputKey::Up); // wraps to "Configure settings"
        h.press(InputKey::Ok);
        assert_eq!(h.app.screen(), Screen::Settings);

        h.press(InputKey::Right); // Twenty -> Forty
        assert_eq!(h.app.model().default_life, 40);
        assert_eq!(h.lives(), (20, 20));

        h.press(InputKey::Down);
        h.press(InputKey::Right); // backlight on
        assert!(h.app.model().backlight_always_on);
        assert_eq!(
            h.backlight.modes.borrow().last(),
            Some(&BacklightMode::AlwaysOn)
        );

        h.press(InputKey::Down);
        h.press(InputKey::Down);
        h.press(InputKey::Ok); // save
        assert_eq!(h.app.screen(), Screen::Menu);
        assert_eq!(h.storage.get(CONFIG).as_deref(), Some("40\n1\n0\n"));
        // Sound is still off, so the confirmation stays silent
        assert!(h.speaker.tones().is_empty());

        h.press(InputKey::Up); // Configure -> Reset
        assert_eq!(h.app.menu().menu().selected(), MenuEntry::Reset);
        h.press(InputKey::Ok);
        assert_eq!(h.lives(), (40, 40));
    }

    #[test]
    fn enabling_sound_confirms_save_with_tone() {
        let mut h = Harness::new(None);
        h.press(InputKey::Ok);
        h.press(InputKey::Ok);
        h.press(InputKey::Up);
        h.press(InputKey::Ok);
        h.press(InputKey::Down);
        h.press(InputKey::Down);
        h.press(InputKey::Right); // audio on
        h.press(InputKey::Down);
        h.press(InputKey::Ok);
        assert_eq!(h.speaker.tones(), vec![(440.0, Duration::from_millis(100))]);
        assert_eq!(h.storage.get(CONFIG).as_deref(), Some("20\n0\n1\n"));
    }

    #[test]
    fn settings_back_does_not_save() {
        let mut h = Harness::new(Some("20\n0\n0\n"));
        h.press(InputKey::Ok);
        h.press(InputKey::Ok);
        h.press(InputKey::Up);
        h.press(InputKey::Ok);
        h.press(InputKey::Left); // Twenty -> Ten
        h.press(InputKey::Back);
        assert_eq!(h.app.screen(), Screen::Menu);
        assert_eq!(h.storage.get(CONFIG).as_deref(), Some("20\n0\n0\n"));
        // The in-memory change sticks
        assert_eq!(h.app.model().default_life, 10);
    }

    #[test]
    fn failed_save_still_returns_to_menu() {
        let mut h = Harness::new(None);
        h.storage.set_read_only(true);
        h.press(InputKey::Ok);
        h.press(InputKey::Ok);
        h.press(InputKey::Up);
        h.press(InputKey::Ok);
        h.press(InputKey::Up); // wraps to Save
        assert_eq!(h.app.settings().list().selected_row(), SettingsRow::Save);
        h.press(InputKey::Ok);
        assert_eq!(h.app.screen(), Screen::Menu);
        assert!(h.storage.get(CONFIG).is_none());
    }

    #[test]
    fn repeat_and_long_do_not_change_life() {
        let mut h = Harness::new(None);
        h.press(InputKey::Ok);
        for event in InputEvent::long_press(InputKey::Up) {
            h.app.handle_input(event);
        }
        h.app.handle_input(InputEvent::new(InputKey::Up, InputType::Repeat));
        assert_eq!(h.lives(), (20, 20));
    }
}
