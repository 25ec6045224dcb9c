//! Pure chess piece types and square mapping.
//! No GPUI dependencies - this is the domain layer.

use shakmaty::{File, Rank, Square};
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceColor {
    White,
    Black,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

/// A position-string letter that names no chess piece. Rebuilding the board
/// from such a string is an invariant violation, so this is fatal upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("piece character must be one of 'prnbqk' in either case, got {0:?}")]
pub struct InvalidPieceError(pub char);

impl Piece {
    /// Parse a FEN board-field letter: uppercase is white, lowercase black.
    pub fn from_fen_char(c: char) -> Result<Piece, InvalidPieceError> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return Err(InvalidPieceError(c)),
        };
        let color = if c.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        Ok(Piece { kind, color })
    }

    pub fn svg_path(&self) -> &'static str {
        match (self.kind, self.color) {
            (PieceKind::Pawn, PieceColor::White) => "assets/pawn-white.svg",
            (PieceKind::Pawn, PieceColor::Black) => "assets/pawn-black.svg",
            (PieceKind::Rook, PieceColor::White) => "assets/rook-white.svg",
            (PieceKind::Rook, PieceColor::Black) => "assets/rook-black.svg",
            (PieceKind::Knight, PieceColor::White) => "assets/knight-white.svg",
            (PieceKind::Knight, PieceColor::Black) => "assets/knight-black.svg",
            (PieceKind::Bishop, PieceColor::White) => "assets/bishop-white.svg",
            (PieceKind::Bishop, PieceColor::Black) => "assets/bishop-black.svg",
            (PieceKind::Queen, PieceColor::White) => "assets/queen-white.svg",
            (PieceKind::Queen, PieceColor::Black) => "assets/queen-black.svg",
            (PieceKind::King, PieceColor::White) => "assets/king-white.svg",
            (PieceKind::King, PieceColor::Black) => "assets/king-black.svg",
        }
    }
}

/// Convert row/col (0-indexed, row 0 = rank 8) to shakmaty Square
pub fn to_square(row: usize, col: usize) -> Square {
    let file = File::new(col as u32);
    let rank = Rank::new(7 - row as u32); // row 0 = rank 8, row 7 = rank 1
    Square::from_coords(file, rank)
}
