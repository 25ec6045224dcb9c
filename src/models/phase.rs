//! The small state machine behind the main window.

/// Lifecycle of the main window: the setup form, one game, the game-over
/// idle, and shutdown. Transitions that do not apply are ignored.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppPhase {
    Setup,
    Playing,
    GameOver,
    Closed,
}

impl AppPhase {
    /// Start-button press with valid input. Only leaves the setup form.
    pub fn start_game(&mut self) -> bool {
        if *self == AppPhase::Setup {
            *self = AppPhase::Playing;
            true
        } else {
            false
        }
    }

    /// A terminal condition was detected during play.
    pub fn game_over(&mut self) -> bool {
        if *self == AppPhase::Playing {
            *self = AppPhase::GameOver;
            true
        } else {
            false
        }
    }

    /// Window-close signal. Applies from every phase.
    pub fn close(&mut self) {
        *self = AppPhase::Closed;
    }
}
