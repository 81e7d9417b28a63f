//! Life Counter console host
//!
//! Drives the app from stdin commands and prints each frame as a small
//! character grid. Settings are stored under the current directory.

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use lifecounter::consts::*;
use lifecounter::persistence::FsStorage;
use lifecounter::platform::{
    Align, Backlight, BacklightMode, Direction, DrawOp, Host, Icon, InputEvent, InputKey,
    Platform, RecordingCanvas, Speaker, SystemClock,
};
use lifecounter::{App, Control};

/// Grid cell size in display pixels
const CELL_WIDTH: i32 = 4;
const CELL_HEIGHT: i32 = 8;
const GRID_COLUMNS: usize = (SCREEN_WIDTH / CELL_WIDTH) as usize;
const GRID_ROWS: usize = (SCREEN_HEIGHT / CELL_HEIGHT) as usize;

/// Upper bound on Back presses sent by `quit`
const MAX_BACK_PRESSES: usize = 8;

/// Prints tones instead of playing them
struct ConsoleSpeaker;

impl Speaker for ConsoleSpeaker {
    fn acquire(&mut self, _timeout: Duration) -> bool {
        true
    }

    fn start(&mut self, frequency: f32, volume: f32) {
        println!("~ beep {:.0} Hz (volume {:.1})", frequency, volume);
    }

    fn stop(&mut self) {}

    fn release(&mut self) {}
}

struct ConsoleBacklight;

impl Backlight for ConsoleBacklight {
    fn set_mode(&mut self, mode: BacklightMode) {
        log::info!("Backlight: {}", mode.as_str());
    }
}

struct ConsolePlatform;

impl Platform for ConsolePlatform {
    type Speaker = ConsoleSpeaker;
    type Backlight = ConsoleBacklight;
    type Storage = FsStorage;
    type Clock = SystemClock;
}

enum Command {
    Keys(Vec<InputEvent>),
    State,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let key = match line.trim().to_ascii_lowercase().as_str() {
        "w" | "up" => InputKey::Up,
        "s" | "down" => InputKey::Down,
        "a" | "left" => InputKey::Left,
        "d" | "right" => InputKey::Right,
        "" | "e" | "ok" => InputKey::Ok,
        "b" | "back" => InputKey::Back,
        "hold" => return Some(Command::Keys(InputEvent::long_press(InputKey::Ok).to_vec())),
        "state" => return Some(Command::State),
        "h" | "help" | "?" => return Some(Command::Help),
        "q" | "quit" | "exit" => return Some(Command::Quit),
        _ => return None,
    };
    Some(Command::Keys(InputEvent::short_press(key).to_vec()))
}

fn print_help() {
    println!("Commands: w/up s/down a/left d/right e/ok (or empty line) b/back");
    println!("          hold (long OK), state (JSON snapshot), q/quit");
}

/// Character-grid rendering of recorded primitives
struct TextGrid {
    cells: [[char; GRID_COLUMNS]; GRID_ROWS],
}

impl TextGrid {
    fn new() -> Self {
        Self {
            cells: [[' '; GRID_COLUMNS]; GRID_ROWS],
        }
    }

    fn put(&mut self, col: i32, row: i32, ch: char) {
        if (0..GRID_COLUMNS as i32).contains(&col) && (0..GRID_ROWS as i32).contains(&row) {
            self.cells[row as usize][col as usize] = ch;
        }
    }

    fn text(&mut self, x: i32, y: i32, horizontal: Align, vertical: Align, text: &str) {
        let len = text.chars().count() as i32;
        let mut col = x / CELL_WIDTH;
        match horizontal {
            Align::Center => col -= len / 2,
            Align::Right => col -= len,
            _ => {}
        }
        let row = match vertical {
            Align::Bottom => (y - 1) / CELL_HEIGHT,
            _ => y / CELL_HEIGHT,
        };
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, ch);
        }
    }

    fn frame(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let (left, right) = (x / CELL_WIDTH, (x + width - 1) / CELL_WIDTH);
        let (top, bottom) = (y / CELL_HEIGHT, (y + height - 1) / CELL_HEIGHT);
        for col in left..=right {
            self.put(col, top, '-');
            self.put(col, bottom, '-');
        }
        for row in top..=bottom {
            self.put(left, row, '|');
            self.put(right, row, '|');
        }
        for (col, row) in [(left, top), (right, top), (left, bottom), (right, bottom)] {
            self.put(col, row, '+');
        }
    }

    fn draw(&mut self, op: &DrawOp) {
        match op {
            DrawOp::Text {
                x,
                y,
                horizontal,
                vertical,
                text,
                ..
            } => self.text(*x, *y, *horizontal, *vertical, text),
            DrawOp::RFrame {
                x,
                y,
                width,
                height,
                ..
            } => self.frame(*x, *y, *width, *height),
            DrawOp::Triangle {
                x, y, direction, ..
            } => {
                let ch = match direction {
                    Direction::BottomToTop => '^',
                    Direction::TopToBottom => 'v',
                };
                self.put(x / CELL_WIDTH, y / CELL_HEIGHT, ch);
            }
            DrawOp::Icon {
                icon: Icon::Splash, ..
            } => {
                let mid = SCREEN_WIDTH / 2;
                self.text(mid, 2 * CELL_HEIGHT, Align::Center, Align::Top, "LIFE COUNTER");
                self.text(mid, 5 * CELL_HEIGHT, Align::Center, Align::Top, "press OK");
            }
        }
    }

    fn render(ops: &[DrawOp]) -> String {
        let mut grid = Self::new();
        // Text last so frames never hide it
        for op in ops.iter().filter(|op| !matches!(op, DrawOp::Text { .. })) {
            grid.draw(op);
        }
        for op in ops.iter().filter(|op| matches!(op, DrawOp::Text { .. })) {
            grid.draw(op);
        }

        let border = format!("+{}+", "=".repeat(GRID_COLUMNS));
        let mut out = String::with_capacity((GRID_COLUMNS + 3) * (GRID_ROWS + 2));
        out.push_str(&border);
        out.push('\n');
        for row in &grid.cells {
            out.push('|');
            out.extend(row.iter());
            out.push_str("|\n");
        }
        out.push_str(&border);
        out
    }
}

/// Console front end: owns the app and the last frame printed
struct Console {
    app: App<ConsolePlatform>,
    last_frame: String,
}

impl Console {
    fn new() -> Self {
        let app = App::new(Host::<ConsolePlatform> {
            speaker: ConsoleSpeaker,
            backlight: ConsoleBacklight,
            storage: FsStorage::new("."),
            clock: SystemClock,
        });
        Self {
            app,
            last_frame: String::new(),
        }
    }

    /// Print the screen if a redraw was requested and the frame changed
    fn present(&mut self) {
        if !self.app.take_redraw() {
            return;
        }
        let mut canvas = RecordingCanvas::new();
        self.app.draw(&mut canvas);
        let frame = TextGrid::render(canvas.ops());
        if frame != self.last_frame {
            println!("{}", frame);
            self.last_frame = frame;
        }
    }

    fn send(&mut self, events: &[InputEvent]) -> Control {
        for event in events {
            if self.app.handle_input(*event) == Control::Exit {
                return Control::Exit;
            }
        }
        Control::Continue
    }

    /// Back out of every screen until the app exits
    fn quit(&mut self) {
        for _ in 0..MAX_BACK_PRESSES {
            if self.send(&InputEvent::short_press(InputKey::Back)) == Control::Exit {
                return;
            }
        }
        log::warn!("App did not exit after {} Back presses", MAX_BACK_PRESSES);
    }

    fn print_state(&self) {
        match serde_json::to_string_pretty(self.app.model()) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize state: {}", e),
        }
    }

    /// Wait for the next line, ticking the app whenever its timer is due.
    /// Returns `None` once stdin is closed.
    fn next_line(&mut self, lines: &Receiver<String>) -> Option<String> {
        loop {
            self.present();
            let Some(deadline) = self.app.next_deadline() else {
                return lines.recv().ok();
            };
            let wait = deadline.saturating_duration_since(Instant::now());
            match lines.recv_timeout(wait) {
                Ok(line) => return Some(line),
                Err(RecvTimeoutError::Timeout) => self.app.tick(),
                Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    fn run(&mut self, lines: Receiver<String>) {
        while let Some(line) = self.next_line(&lines) {
            match parse_command(&line) {
                Some(Command::Keys(events)) => {
                    if self.send(&events) == Control::Exit {
                        return;
                    }
                }
                Some(Command::State) => self.print_state(),
                Some(Command::Help) => print_help(),
                Some(Command::Quit) => break,
                None => println!("Unknown command {:?}, try `help`", line.trim()),
            }
        }
        self.quit();
    }
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn main() {
    env_logger::init();
    log::info!(
        "Life Counter starting (settings in ./{}/{})",
        APP_DATA_DIR,
        CONFIG_FILENAME
    );
    print_help();

    let lines = spawn_stdin_reader();
    let mut console = Console::new();
    console.run(lines);
    console.present();
    log::info!("Life Counter exited");
}
