pub mod piece;
pub mod tile;

pub use piece::{render_held_piece, render_piece};
pub use tile::render_tile;
