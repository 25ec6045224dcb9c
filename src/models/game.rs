//! Game coordinator - the application layer between pointer input, the
//! rules session, and the sprites the board renders.

use log::{debug, info};
use shakmaty::{Color as SColor, Square};

use crate::domain::{
    GameSession, MoveCandidate, Piece, PieceColor, Players, Terminal, format_move_log,
    pieces_from_fen, winner_label,
};
use crate::ui::layout::BoardLayout;

/// One on-screen piece. Sprites are rebuilt from the position after every
/// accepted move, so their squares always mirror the session.
#[derive(Clone, Copy, Debug)]
pub struct PieceSprite {
    pub piece: Piece,
    pub square: Square,
    /// Whether this sprite follows the pointer instead of sitting on its
    /// square.
    pub held: bool,
}

/// Everything worth recording about a finished game.
#[derive(Clone, Debug)]
pub struct GameReport {
    pub players: Players,
    pub winner: &'static str,
    pub move_log: String,
    pub terminal: Terminal,
}

/// The live game: rules session, player identities, and the sprite and
/// pointer state behind the drag interaction.
pub struct GameModel {
    session: GameSession,
    players: Players,
    sprites: Vec<PieceSprite>,
    /// Last reported pointer position, in window coordinates.
    pointer: (f32, f32),
    layout: BoardLayout,
    over: Option<Terminal>,
}

impl GameModel {
    pub fn new(players: Players) -> Self {
        let mut model = Self {
            session: GameSession::new(),
            players,
            sprites: Vec::new(),
            pointer: (0.0, 0.0),
            layout: BoardLayout::default(),
            over: None,
        };
        model.resynchronize();
        model
    }

    /// Rebuild the sprite list from the session's position. Drops any held
    /// flag, which is what snaps a rejected drag back to its origin square.
    fn resynchronize(&mut self) {
        let placed = pieces_from_fen(&self.session.fen())
            .expect("the session always produces a well-formed board field");
        self.sprites = placed
            .iter()
            .map(|p| PieceSprite {
                piece: p.piece,
                square: p.square,
                held: false,
            })
            .collect();
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn side_to_move(&self) -> PieceColor {
        match self.session.turn() {
            SColor::White => PieceColor::White,
            SColor::Black => PieceColor::Black,
        }
    }

    pub fn sprites(&self) -> &[PieceSprite] {
        &self.sprites
    }

    pub fn held_sprite(&self) -> Option<&PieceSprite> {
        self.sprites.iter().find(|s| s.held)
    }

    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    pub fn layout(&self) -> BoardLayout {
        self.layout
    }

    pub fn is_over(&self) -> bool {
        self.over.is_some()
    }

    pub fn terminal(&self) -> Option<Terminal> {
        self.over
    }

    /// Pick up the side-to-move piece under the pointer, if there is one.
    /// Presses on empty squares, opposing pieces, the window margins, a
    /// finished game, or while a piece is already held do nothing.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        if self.over.is_some() {
            return;
        }
        // at most one sprite is ever held
        if self.sprites.iter().any(|s| s.held) {
            return;
        }
        let Some(square) = self.layout.square_at(x, y) else {
            debug!("press at ({}, {}) outside the grid", x, y);
            return;
        };
        let color = self.side_to_move();
        if let Some(sprite) = self
            .sprites
            .iter_mut()
            .find(|s| s.square == square && s.piece.color == color)
        {
            sprite.held = true;
            self.pointer = (x, y);
        }
    }

    /// Track the pointer while a piece is held.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if self.sprites.iter().any(|s| s.held) {
            self.pointer = (x, y);
        }
    }

    /// Drop the held piece. An accepted move advances the session and, when
    /// it ends the game, yields the report to persist; everything else snaps
    /// the piece back silently.
    pub fn on_pointer_up(&mut self, x: f32, y: f32) -> Option<GameReport> {
        let held = self.held_sprite()?;
        let (piece, from) = (held.piece, held.square);
        for sprite in &mut self.sprites {
            sprite.held = false;
        }

        let Some(to) = self.layout.square_at(x, y) else {
            debug!("release at ({}, {}) outside the grid", x, y);
            return None;
        };

        if !self.session.submit(MoveCandidate::for_drop(piece, from, to)) {
            debug!("rejected {} to {}", from, to);
            return None;
        }
        info!("played {} to {}", from, to);
        self.resynchronize();

        let terminal = self.session.terminal()?;
        self.over = Some(terminal);
        Some(GameReport {
            players: self.players.clone(),
            winner: winner_label(terminal),
            move_log: format_move_log(self.session.moves()),
            terminal,
        })
    }
}
