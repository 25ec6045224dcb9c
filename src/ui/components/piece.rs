//! Piece rendering components.

use gpui::{div, img, prelude::*, px};

use crate::models::PieceSprite;
use crate::ui::layout::BoardLayout;

/// Render a resting piece centered on its square.
pub fn render_piece(sprite: PieceSprite, layout: BoardLayout) -> impl IntoElement {
    let (x, y) = layout.square_origin(sprite.square);
    let piece_size = layout.piece_size();
    let inset = (layout.tile_size() - piece_size) / 2.0;

    div()
        .absolute()
        .left(px(x + inset))
        .top(px(y + inset))
        .size(px(piece_size))
        .child(img(sprite.piece.svg_path()).size(px(piece_size)))
}

/// Render the held piece centered on the pointer instead of its square.
pub fn render_held_piece(
    sprite: PieceSprite,
    pointer: (f32, f32),
    layout: BoardLayout,
) -> impl IntoElement {
    let piece_size = layout.piece_size();

    div()
        .absolute()
        .left(px(pointer.0 - piece_size / 2.0))
        .top(px(pointer.1 - piece_size / 2.0))
        .size(px(piece_size))
        .child(img(sprite.piece.svg_path()).size(px(piece_size)))
}
