//! Rebuilding piece placements from the engine's position string.

use shakmaty::Square;

use super::pieces::{InvalidPieceError, Piece, to_square};

/// One piece standing on one square, as read out of a position string.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlacedPiece {
    pub piece: Piece,
    pub square: Square,
}

/// Parse the board field of a FEN string (ranks 8 down to 1, files a to h)
/// into one placed piece per occupied square. A digit advances the file
/// cursor by that many empty squares, a letter places a piece and advances
/// by one, and '/' starts the next rank down.
///
/// Accepts a full FEN; only the first whitespace-separated field is read.
pub fn pieces_from_fen(fen: &str) -> Result<Vec<PlacedPiece>, InvalidPieceError> {
    let board_field = fen.split_whitespace().next().unwrap_or("");

    let mut placed = Vec::new();
    let mut row = 0usize;
    let mut col = 0usize;
    for c in board_field.chars() {
        if let Some(skip) = c.to_digit(10) {
            col += skip as usize;
        } else if c == '/' {
            col = 0;
            row += 1;
        } else {
            let piece = Piece::from_fen_char(c)?;
            placed.push(PlacedPiece {
                piece,
                square: to_square(row, col),
            });
            col += 1;
        }
    }
    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pieces::{PieceColor, PieceKind};

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn piece_on(placed: &[PlacedPiece], square: Square) -> Option<Piece> {
        placed.iter().find(|p| p.square == square).map(|p| p.piece)
    }

    #[test]
    fn test_start_position_has_32_pieces() {
        let placed = pieces_from_fen(START_FEN).unwrap();
        assert_eq!(placed.len(), 32);
    }

    #[test]
    fn test_start_position_spot_checks() {
        let placed = pieces_from_fen(START_FEN).unwrap();

        let a8 = piece_on(&placed, Square::A8).unwrap();
        assert_eq!(a8.kind, PieceKind::Rook);
        assert_eq!(a8.color, PieceColor::Black);

        let e1 = piece_on(&placed, Square::E1).unwrap();
        assert_eq!(e1.kind, PieceKind::King);
        assert_eq!(e1.color, PieceColor::White);

        let e2 = piece_on(&placed, Square::E2).unwrap();
        assert_eq!(e2.kind, PieceKind::Pawn);
        assert_eq!(e2.color, PieceColor::White);

        assert!(piece_on(&placed, Square::E4).is_none());
    }

    #[test]
    fn test_digits_skip_squares() {
        // position after 1. e4: the e-pawn sits on e4, e2 is empty
        let placed =
            pieces_from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        assert_eq!(placed.len(), 32);
        assert!(piece_on(&placed, Square::E2).is_none());

        let e4 = piece_on(&placed, Square::E4).unwrap();
        assert_eq!(e4.kind, PieceKind::Pawn);
        assert_eq!(e4.color, PieceColor::White);
    }

    #[test]
    fn test_count_matches_letters_in_board_field() {
        let fens = [
            START_FEN,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "8/8/8/3k4/8/3K4/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K2R w K - 0 1",
        ];
        for fen in fens {
            let letters = fen
                .split_whitespace()
                .next()
                .unwrap()
                .chars()
                .filter(|c| c.is_ascii_alphabetic())
                .count();
            let placed = pieces_from_fen(fen).unwrap();
            assert_eq!(placed.len(), letters, "count mismatch for {fen}");
        }
    }

    #[test]
    fn test_empty_board() {
        let placed = pieces_from_fen("8/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        assert!(placed.is_empty());
    }

    #[test]
    fn test_unknown_letter_is_an_error() {
        let err = pieces_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1")
            .unwrap_err();
        assert_eq!(err, InvalidPieceError('X'));
    }

    #[test]
    fn test_board_field_alone_is_accepted() {
        let placed = pieces_from_fen("8/8/8/4p3/8/8/8/8").unwrap();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].square, Square::E5);
    }
}
