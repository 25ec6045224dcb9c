//! Theme constants and colors for the chess UI.

use gpui::{Rgba, rgb};

// Window geometry. The board spans the full window width; the leftover
// height splits into equal header/footer margins for the player banners.
pub const WINDOW_WIDTH: f32 = 600.0;
pub const WINDOW_HEIGHT: f32 = 713.0;

// Auxiliary windows
pub const REVIEW_WIDTH: f32 = 700.0;
pub const REVIEW_HEIGHT: f32 = 300.0;
pub const DETAIL_WIDTH: f32 = 250.0;
pub const DETAIL_HEIGHT: f32 = 400.0;

// Layout constants
pub const PIECE_SCALE: f32 = 0.98; // piece size relative to square

// Board colors
pub const LIGHT_SQUARE: u32 = 0xEEEED2;
pub const DARK_SQUARE: u32 = 0x769656;
pub const TILE_LABEL: u32 = 0x000000;

// Chrome colors
pub const MARGIN_BG: u32 = 0x000000;
pub const PANEL_BG: u32 = 0x2a2a2a;
pub const BORDER_COLOR: u32 = 0x4a4a4a;
pub const TEXT_PRIMARY: u32 = 0xffffff;
pub const TEXT_SECONDARY: u32 = 0x888888;
pub const WARNING_COLOR: u32 = 0xf87171;

/// Get the color for a board square based on its position
pub fn square_color(row: usize, col: usize) -> Rgba {
    if (row + col) % 2 == 0 {
        rgb(LIGHT_SQUARE)
    } else {
        rgb(DARK_SQUARE)
    }
}
