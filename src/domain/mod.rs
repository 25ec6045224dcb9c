pub mod pieces;
pub mod placement;
pub mod players;
pub mod report;
pub mod session;

pub use pieces::{Piece, PieceColor, to_square};
pub use placement::pieces_from_fen;
pub use players::{PlayerEntry, Players};
pub use report::{banner_text, format_move_log, move_preview, winner_label};
pub use session::{GameSession, MoveCandidate, Terminal};
