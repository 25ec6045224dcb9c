pub mod game;
pub mod phase;

pub use game::{GameModel, GameReport, PieceSprite};
pub use phase::AppPhase;
