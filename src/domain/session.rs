//! Rules facade over shakmaty for one live game.
//!
//! shakmaty keeps no history, so the session records the played-move stack
//! and the position log needed for the threefold-repetition claim.

use shakmaty::fen::{Epd, Fen};
use shakmaty::{
    CastlingMode, Chess, Color, EnPassantMode, File, Move, MoveList, Position, Rank, Role, Square,
};

use super::pieces::{Piece, PieceColor, PieceKind};

/// A move attempt built from a drag: origin, destination, and the promotion
/// annotation, to be matched against the engine's legal moves.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveCandidate {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl MoveCandidate {
    /// Candidate for dropping `piece` (picked up on `from`) onto `to`.
    ///
    /// A pawn leaving its second-to-last rank is always annotated as a queen
    /// promotion; no underpromotion is offered. The annotation is applied
    /// even when the promotion turns out to be illegal, in which case the
    /// candidate simply matches nothing.
    pub fn for_drop(piece: Piece, from: Square, to: Square) -> Self {
        let promoting = piece.kind == PieceKind::Pawn
            && match piece.color {
                PieceColor::White => from.rank() == Rank::Seventh,
                PieceColor::Black => from.rank() == Rank::Second,
            };
        MoveCandidate {
            from,
            to,
            promotion: promoting.then_some(Role::Queen),
        }
    }
}

/// A condition that ends the game. Checkmate takes precedence; the three
/// draw conditions are distinct so the result banner can name them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Terminal {
    Checkmate { winner: Color },
    Stalemate { stuck: Color },
    ThreefoldRepetition,
    FiftyMoves,
}

/// One game in progress: the current position plus the move history.
pub struct GameSession {
    position: Chess,
    moves: Vec<Move>,
    /// Repetition keys (EPD) of every position reached, starting position
    /// included.
    seen: Vec<String>,
}

impl GameSession {
    pub fn new() -> Self {
        let position = Chess::default();
        let seen = vec![repetition_key(&position)];
        Self {
            position,
            moves: Vec::new(),
            seen,
        }
    }

    /// Start from an arbitrary position instead of the initial one.
    #[allow(dead_code)]
    pub fn from_fen(fen: &str) -> anyhow::Result<Self> {
        let position: Chess = fen.parse::<Fen>()?.into_position(CastlingMode::Standard)?;
        let seen = vec![repetition_key(&position)];
        Ok(Self {
            position,
            moves: Vec::new(),
            seen,
        })
    }

    /// Current position in FEN notation.
    pub fn fen(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    #[allow(dead_code)]
    pub fn legal_moves(&self) -> MoveList {
        self.position.legal_moves()
    }

    /// Moves played so far, in play order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Apply the candidate if it matches a legal move, returning whether it
    /// did. Anything that matches no legal move - wrong side, blocked path,
    /// origin equals destination, promotion that is not available - is
    /// rejected without further diagnosis.
    pub fn submit(&mut self, candidate: MoveCandidate) -> bool {
        for m in &self.position.legal_moves() {
            if drag_candidate(m) != Some(candidate) {
                continue;
            }
            if let Ok(next) = self.position.clone().play(m.clone()) {
                self.position = next;
                self.moves.push(m.clone());
                self.seen.push(repetition_key(&self.position));
                return true;
            }
        }
        false
    }

    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    /// Whether the current position (pieces, side to move, castling and
    /// en-passant rights) has occurred three or more times this game.
    pub fn can_claim_threefold_repetition(&self) -> bool {
        let current = repetition_key(&self.position);
        self.seen.iter().filter(|k| **k == current).count() >= 3
    }

    /// Fifty full moves without a capture or a pawn move.
    pub fn can_claim_fifty_moves(&self) -> bool {
        self.position.halfmoves() >= 100
    }

    /// The checkmated side's opponent, or `None` while the game is live or
    /// drawn.
    pub fn winner(&self) -> Option<Color> {
        if !self.is_checkmate() {
            return None;
        }
        Some(match self.turn() {
            Color::White => Color::Black,
            Color::Black => Color::White,
        })
    }

    /// Check the terminal conditions in fixed order: checkmate before any
    /// draw, then stalemate, threefold repetition, and the fifty-move rule
    /// each exactly once.
    pub fn terminal(&self) -> Option<Terminal> {
        if self.is_checkmate() {
            return Some(Terminal::Checkmate {
                winner: self.winner()?,
            });
        }
        if self.is_stalemate() {
            return Some(Terminal::Stalemate { stuck: self.turn() });
        }
        if self.can_claim_threefold_repetition() {
            return Some(Terminal::ThreefoldRepetition);
        }
        if self.can_claim_fifty_moves() {
            return Some(Terminal::FiftyMoves);
        }
        None
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// The candidate a drag would have to produce to select this legal move.
/// Castling is identified by the king's two-square hop to the g- or c-file;
/// drop-in moves have no board origin and never match a drag.
pub(crate) fn drag_candidate(m: &Move) -> Option<MoveCandidate> {
    match m {
        Move::Normal {
            from, to, promotion, ..
        } => Some(MoveCandidate {
            from: *from,
            to: *to,
            promotion: *promotion,
        }),
        Move::EnPassant { from, to, .. } => Some(MoveCandidate {
            from: *from,
            to: *to,
            promotion: None,
        }),
        Move::Castle { king, rook, .. } => {
            let king_dest = if rook.file() == File::H {
                Square::from_coords(File::G, rook.rank())
            } else {
                Square::from_coords(File::C, rook.rank())
            };
            Some(MoveCandidate {
                from: *king,
                to: king_dest,
                promotion: None,
            })
        }
        Move::Put { .. } => None,
    }
}

fn repetition_key(position: &Chess) -> String {
    Epd::from_position(position, EnPassantMode::Legal).to_string()
}
