//! Shared colors of the card table screens

use sdl2::pixels::Color;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color { r, g, b, a: 255 }
}

pub const BLACK: Color = rgb(0, 0, 0);
pub const WHITE: Color = rgb(255, 255, 255);
pub const GREEN: Color = rgb(35, 203, 167);
pub const BRIGHT_GREEN: Color = rgb(57, 255, 20);
pub const SILVER: Color = rgb(191, 191, 191);
pub const BORDER: Color = rgb(40, 40, 50);

/// Felt behind the menus
pub const MENU_BACKGROUND: Color = rgb(66, 152, 66);
/// Felt of the card table
pub const TABLE_BACKGROUND: Color = rgb(24, 96, 48);
pub const RACK: Color = rgb(255, 0, 0);
pub const CLAIMED_LABEL: Color = rgb(168, 235, 254);
pub const TEXT: Color = rgb(20, 20, 30);
