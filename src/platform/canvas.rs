//! Drawing primitives for the 128x64 monochrome display
//!
//! The host rasterizes; the app only issues primitives with explicit pixel
//! coordinates. `RecordingCanvas` captures them as `DrawOp`s so a frame can
//! be inspected or replayed by another backend.

/// Text styles available on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    #[default]
    Primary,
    Secondary,
    /// Large digits, used for life totals
    BigNumbers,
}

/// Text anchor along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

/// Which way a triangle points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Apex at the top
    BottomToTop,
    /// Apex at the bottom
    TopToBottom,
}

/// Bitmaps bundled with the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// 128x64 splash artwork
    Splash,
}

/// Display surface provided by the host
pub trait Canvas {
    fn clear(&mut self);

    fn set_font(&mut self, font: Font);

    /// Draw `text` anchored at (`x`, `y`)
    fn draw_str_aligned(&mut self, x: i32, y: i32, horizontal: Align, vertical: Align, text: &str);

    /// Rounded rectangle outline
    fn draw_rframe(&mut self, x: i32, y: i32, width: i32, height: i32, radius: i32);

    /// Isosceles triangle whose center is at (`x`, `y`)
    fn draw_triangle(&mut self, x: i32, y: i32, base: i32, height: i32, direction: Direction);

    fn draw_icon(&mut self, x: i32, y: i32, icon: Icon);
}

/// A single recorded primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Text {
        x: i32,
        y: i32,
        horizontal: Align,
        vertical: Align,
        font: Font,
        text: String,
    },
    RFrame {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        radius: i32,
    },
    Triangle {
        x: i32,
        y: i32,
        base: i32,
        height: i32,
        direction: Direction,
    },
    Icon {
        x: i32,
        y: i32,
        icon: Icon,
    },
}

/// Canvas that records primitives instead of drawing them
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    font: Font,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Text drawn with `font`, in order
    pub fn texts_in(&self, font: Font) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, font: f, .. } if *f == font => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn frames(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::RFrame { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.ops.clear();
        self.font = Font::default();
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn draw_str_aligned(&mut self, x: i32, y: i32, horizontal: Align, vertical: Align, text: &str) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            horizontal,
            vertical,
            font: self.font,
            text: text.to_string(),
        });
    }

    fn draw_rframe(&mut self, x: i32, y: i32, width: i32, height: i32, radius: i32) {
        self.ops.push(DrawOp::RFrame {
            x,
            y,
            width,
            height,
            radius,
        });
    }

    fn draw_triangle(&mut self, x: i32, y: i32, base: i32, height: i32, direction: Direction) {
        self.ops.push(DrawOp::Triangle {
            x,
            y,
            base,
            height,
            direction,
        });
    }

    fn draw_icon(&mut self, x: i32, y: i32, icon: Icon) {
        self.ops.push(DrawOp::Icon { x, y, icon });
    }
}
