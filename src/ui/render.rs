//! Per-screen drawing
//!
//! Pure functions of the screen state and the model; the host owns the
//! pixels.

use crate::consts::*;
use crate::counter::{CounterState, Player};
use crate::platform::{Align, Canvas, Direction, Font, Icon};

use super::menu::{Menu, MenuEntry};
use super::settings_list::{SettingsList, SettingsRow};

/// Full-screen splash artwork
pub fn draw_splash(canvas: &mut dyn Canvas) {
    canvas.draw_icon(0, 0, Icon::Splash);
}

/// Two life panels side by side; the active one gets an inner frame and arrows
pub fn draw_counter(canvas: &mut dyn Canvas, model: &CounterState) {
    let center_y = SCREEN_HEIGHT / 2;

    canvas.set_font(Font::BigNumbers);
    for player in [Player::One, Player::Two] {
        let x = panel_center(player);
        let life = model.life(player).to_string();
        canvas.draw_str_aligned(x, center_y, Align::Center, Align::Center, &life);
    }

    canvas.draw_rframe(0, 0, PANEL_WIDTH, SCREEN_HEIGHT, FRAME_RADIUS);
    canvas.draw_rframe(PANEL_WIDTH, 0, PANEL_WIDTH, SCREEN_HEIGHT, FRAME_RADIUS);

    let active = model.active_player;
    let left = panel_left(active);
    canvas.draw_rframe(
        left + SELECTION_INSET,
        SELECTION_INSET,
        PANEL_WIDTH - 2 * SELECTION_INSET,
        SCREEN_HEIGHT - 2 * SELECTION_INSET,
        FRAME_RADIUS,
    );
    let x = panel_center(active);
    canvas.draw_triangle(x, ARROW_UP_Y, TRIANGLE_BASE, TRIANGLE_HEIGHT, Direction::BottomToTop);
    canvas.draw_triangle(x, ARROW_DOWN_Y, TRIANGLE_BASE, TRIANGLE_HEIGHT, Direction::TopToBottom);
}

pub fn draw_menu(canvas: &mut dyn Canvas, menu: &Menu) {
    canvas.set_font(Font::Primary);
    for (row, entry) in MenuEntry::ALL.iter().enumerate() {
        let top = row as i32 * LIST_ROW_HEIGHT;
        if row == menu.cursor() {
            canvas.draw_rframe(0, top, SCREEN_WIDTH, LIST_ROW_HEIGHT, FRAME_RADIUS);
        }
        canvas.draw_str_aligned(6, top + LIST_ROW_HEIGHT / 2, Align::Left, Align::Center, entry.label());
    }
}

pub fn draw_settings(canvas: &mut dyn Canvas, list: &SettingsList) {
    canvas.set_font(Font::Secondary);
    for (row, item) in SettingsRow::ALL.iter().enumerate() {
        let top = row as i32 * LIST_ROW_HEIGHT;
        let mid = top + LIST_ROW_HEIGHT / 2;
        if *item == list.selected_row() {
            canvas.draw_rframe(0, top, SCREEN_WIDTH, LIST_ROW_HEIGHT, FRAME_RADIUS);
        }
        canvas.draw_str_aligned(6, mid, Align::Left, Align::Center, item.label());

        if let (Some(label), Some((index, count))) = (list.value_label(*item), list.position(*item)) {
            let left = if index > 0 { "<" } else { "" };
            let right = if index + 1 < count { ">" } else { "" };
            let value = format!("{}{}{}", left, label, right);
            canvas.draw_str_aligned(SCREEN_WIDTH - 6, mid, Align::Right, Align::Center, &value);
        }
    }
}

fn panel_left(player: Player) -> i32 {
    match player {
        Player::One => 0,
        Player::Two => PANEL_WIDTH,
    }
}

fn panel_center(player: Player) -> i32 {
    panel_left(player) + PANEL_WIDTH / 2
}
