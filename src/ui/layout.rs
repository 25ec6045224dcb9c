//! Board geometry - tile size, margins, and the square <-> pixel mapping.

use shakmaty::Square;

use crate::domain::to_square;
use crate::ui::theme::{PIECE_SCALE, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Fixed-window board geometry. Tiles are an eighth of the window width and
/// the grid is centered vertically, leaving equal margins above and below
/// for the player banners.
#[derive(Clone, Copy, Debug)]
pub struct BoardLayout {
    width: f32,
    height: f32,
}

impl BoardLayout {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn tile_size(&self) -> f32 {
        self.width / 8.0
    }

    pub fn piece_size(&self) -> f32 {
        self.tile_size() * PIECE_SCALE
    }

    /// Height of the header margin above the board (the footer matches).
    pub fn y_offset(&self) -> f32 {
        (self.height - self.width).max(0.0) / 2.0
    }

    /// Top-left corner of a square's tile, in window coordinates.
    /// Rank 8 is the top row, file a the left column.
    pub fn square_origin(&self, square: Square) -> (f32, f32) {
        let tile = self.tile_size();
        let col = square.file() as usize as f32;
        let row = (7 - square.rank() as usize) as f32;
        (col * tile, self.y_offset() + row * tile)
    }

    /// The square whose tile contains the given window coordinate, if any.
    /// The header and footer margins resolve to no square.
    pub fn square_at(&self, x: f32, y: f32) -> Option<Square> {
        let board_y = y - self.y_offset();
        if x < 0.0 || board_y < 0.0 {
            return None;
        }
        let tile = self.tile_size();
        let col = (x / tile) as usize;
        let row = (board_y / tile) as usize;
        if row < 8 && col < 8 {
            Some(to_square(row, col))
        } else {
            None
        }
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_size_is_an_eighth_of_width() {
        let layout = BoardLayout::default();
        assert_eq!(layout.tile_size(), WINDOW_WIDTH / 8.0);
    }

    #[test]
    fn test_vertical_centering() {
        let layout = BoardLayout::default();
        assert_eq!(layout.y_offset(), (WINDOW_HEIGHT - WINDOW_WIDTH) / 2.0);
        // grid bottom plus the footer margin fills the window exactly
        let bottom = layout.y_offset() + 8.0 * layout.tile_size();
        assert_eq!(bottom + layout.y_offset(), WINDOW_HEIGHT);
    }

    #[test]
    fn test_square_origin_corners() {
        let layout = BoardLayout::default();
        let tile = layout.tile_size();

        assert_eq!(layout.square_origin(Square::A8), (0.0, layout.y_offset()));
        assert_eq!(
            layout.square_origin(Square::H1),
            (7.0 * tile, layout.y_offset() + 7.0 * tile)
        );
    }

    #[test]
    fn test_square_at_round_trips_every_square() {
        let layout = BoardLayout::default();
        let half = layout.tile_size() / 2.0;
        for row in 0..8 {
            for col in 0..8 {
                let square = to_square(row, col);
                let (x, y) = layout.square_origin(square);
                assert_eq!(layout.square_at(x + half, y + half), Some(square));
            }
        }
    }

    #[test]
    fn test_margins_resolve_to_no_square() {
        let layout = BoardLayout::default();
        let mid = WINDOW_WIDTH / 2.0;
        // header
        assert_eq!(layout.square_at(mid, layout.y_offset() / 2.0), None);
        // footer
        assert_eq!(layout.square_at(mid, WINDOW_HEIGHT - 10.0), None);
    }

    #[test]
    fn test_out_of_window_resolves_to_no_square() {
        let layout = BoardLayout::default();
        assert_eq!(layout.square_at(-1.0, 100.0), None);
        assert_eq!(layout.square_at(WINDOW_WIDTH + 10.0, WINDOW_HEIGHT / 2.0), None);
    }
}
