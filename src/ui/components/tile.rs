//! Tile rendering component.

use gpui::{div, prelude::*, px, rgb};
use shakmaty::{File, Rank, Square};

use crate::ui::layout::BoardLayout;
use crate::ui::theme::{TILE_LABEL, square_color};

/// Whether a tile carries its coordinate label. The bottom rank and the
/// a-file are labelled, like a printed board.
pub fn wants_label(square: Square) -> bool {
    square.rank() == Rank::First || square.file() == File::A
}

/// Coordinate shown on labelled tiles, "a1" through "h8".
pub fn tile_label(square: Square) -> String {
    square.to_string()
}

/// Render one board tile at its window position, with the coordinate label
/// in the lower-left corner where it applies.
pub fn render_tile(square: Square, layout: BoardLayout) -> impl IntoElement {
    let (x, y) = layout.square_origin(square);
    let row = 7 - square.rank() as usize;
    let col = square.file() as usize;

    div()
        .absolute()
        .left(px(x))
        .top(px(y))
        .size(px(layout.tile_size()))
        .bg(square_color(row, col))
        .when(wants_label(square), |el| {
            el.child(
                div()
                    .absolute()
                    .left(px(4.0))
                    .bottom(px(2.0))
                    .text_size(px(16.0))
                    .text_color(rgb(TILE_LABEL))
                    .child(tile_label(square)),
            )
        })
}
