//! Formatting game results: the ledger's move log and winner column, the
//! result banner, and the review table's move preview.

use shakmaty::{Color, Move};

use super::session::{Terminal, drag_candidate};

/// Format the move stack the way the ledger stores it: numbered pairs, the
/// white half opening a line, the black half closing it.
///
/// `[e2e4, e7e5, g1f3]` formats to `"1. e2 to e4, e7 to e5.\n2. g1 to f3, "`.
/// Moves render as origin and destination split by " to ", so promotions
/// keep their queen suffix (`e7 to e8q`) and castling shows the king's path
/// (`e1 to g1`).
pub fn format_move_log(moves: &[Move]) -> String {
    let mut log = String::new();
    for (ply, m) in moves.iter().enumerate() {
        let Some(candidate) = drag_candidate(m) else {
            continue;
        };
        let mut rest = candidate.to.to_string();
        if candidate.promotion.is_some() {
            // promotion is always to a queen here
            rest.push('q');
        }
        if ply % 2 == 0 {
            log.push_str(&format!("{}. {} to {}, ", ply / 2 + 1, candidate.from, rest));
        } else {
            log.push_str(&format!("{} to {}.\n", candidate.from, rest));
        }
    }
    log
}

/// Winner column value for the ledger: the mating side's color, or
/// "Stalemate" for every drawing condition.
pub fn winner_label(terminal: Terminal) -> &'static str {
    match terminal {
        Terminal::Checkmate {
            winner: Color::White,
        } => "White",
        Terminal::Checkmate {
            winner: Color::Black,
        } => "Black",
        Terminal::Stalemate { .. } | Terminal::ThreefoldRepetition | Terminal::FiftyMoves => {
            "Stalemate"
        }
    }
}

/// Title and one-line description for the result banner.
pub fn banner_text(terminal: Terminal) -> (&'static str, &'static str) {
    match terminal {
        Terminal::Checkmate {
            winner: Color::White,
        } => ("Checkmate", "White wins via checkmate."),
        Terminal::Checkmate {
            winner: Color::Black,
        } => ("Checkmate", "Black wins via checkmate."),
        Terminal::Stalemate {
            stuck: Color::White,
        } => ("Stalemate", "White is out of playable moves."),
        Terminal::Stalemate {
            stuck: Color::Black,
        } => ("Stalemate", "Black is out of playable moves."),
        Terminal::ThreefoldRepetition => ("Stalemate", "The position has been repeated 3 times."),
        Terminal::FiftyMoves => (
            "Stalemate",
            "50 non-pawn moves have been made without a piece being captured.",
        ),
    }
}

/// First line of a stored move log plus a ".." marker, for the review table.
pub fn move_preview(moves: &str) -> String {
    format!("{}..", moves.lines().next().unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pieces::Piece;
    use crate::domain::session::{GameSession, MoveCandidate};
    use pretty_assertions::assert_eq;
    use shakmaty::Square;

    fn played(moves: &[(Square, Square)]) -> GameSession {
        let mut session = GameSession::new();
        for &(from, to) in moves {
            assert!(session.submit(MoveCandidate {
                from,
                to,
                promotion: None
            }));
        }
        session
    }

    #[test]
    fn test_move_log_odd_stack() {
        let session = played(&[
            (Square::E2, Square::E4),
            (Square::E7, Square::E5),
            (Square::G1, Square::F3),
        ]);
        assert_eq!(
            format_move_log(session.moves()),
            "1. e2 to e4, e7 to e5.\n2. g1 to f3, "
        );
    }

    #[test]
    fn test_move_log_complete_pair() {
        let session = played(&[(Square::E2, Square::E4), (Square::E7, Square::E5)]);
        assert_eq!(format_move_log(session.moves()), "1. e2 to e4, e7 to e5.\n");
    }

    #[test]
    fn test_move_log_empty() {
        assert_eq!(format_move_log(&[]), "");
    }

    #[test]
    fn test_move_log_promotion_keeps_suffix() {
        let mut session = GameSession::from_fen("7k/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let pawn = Piece::from_fen_char('P').unwrap();
        assert!(session.submit(MoveCandidate::for_drop(pawn, Square::E7, Square::E8)));
        assert_eq!(format_move_log(session.moves()), "1. e7 to e8q, ");
    }

    #[test]
    fn test_move_log_castling_shows_king_path() {
        let mut session = GameSession::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        assert!(session.submit(MoveCandidate {
            from: Square::E1,
            to: Square::G1,
            promotion: None
        }));
        assert_eq!(format_move_log(session.moves()), "1. e1 to g1, ");
    }

    #[test]
    fn test_winner_labels() {
        assert_eq!(
            winner_label(Terminal::Checkmate {
                winner: Color::White
            }),
            "White"
        );
        assert_eq!(
            winner_label(Terminal::Checkmate {
                winner: Color::Black
            }),
            "Black"
        );
        assert_eq!(
            winner_label(Terminal::Stalemate {
                stuck: Color::White
            }),
            "Stalemate"
        );
        assert_eq!(winner_label(Terminal::ThreefoldRepetition), "Stalemate");
        assert_eq!(winner_label(Terminal::FiftyMoves), "Stalemate");
    }

    #[test]
    fn test_banner_text_by_terminal() {
        assert_eq!(
            banner_text(Terminal::Checkmate {
                winner: Color::White
            }),
            ("Checkmate", "White wins via checkmate.")
        );
        assert_eq!(
            banner_text(Terminal::Checkmate {
                winner: Color::Black
            }),
            ("Checkmate", "Black wins via checkmate.")
        );
        assert_eq!(
            banner_text(Terminal::Stalemate {
                stuck: Color::White
            }),
            ("Stalemate", "White is out of playable moves.")
        );
        assert_eq!(
            banner_text(Terminal::Stalemate {
                stuck: Color::Black
            }),
            ("Stalemate", "Black is out of playable moves.")
        );
        assert_eq!(
            banner_text(Terminal::ThreefoldRepetition),
            ("Stalemate", "The position has been repeated 3 times.")
        );
        assert_eq!(
            banner_text(Terminal::FiftyMoves),
            (
                "Stalemate",
                "50 non-pawn moves have been made without a piece being captured."
            )
        );
    }

    #[test]
    fn test_move_preview_truncates_to_first_line() {
        let log = "1. e2 to e4, e7 to e5.\n2. g1 to f3, ";
        assert_eq!(move_preview(log), "1. e2 to e4, e7 to e5...");
    }

    #[test]
    fn test_move_preview_single_line() {
        assert_eq!(move_preview("1. e2 to e4, "), "1. e2 to e4, ..");
        assert_eq!(move_preview(""), "..");
    }
}
