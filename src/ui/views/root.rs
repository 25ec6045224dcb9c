//! Root view - switches the main window between its phases.

use gpui::{Context, Entity, Subscription, Window, div, prelude::*};
use log::{info, warn};

use crate::domain::{PlayerEntry, Players};
use crate::models::{AppPhase, GameModel};
use crate::ui::views::board::BoardView;
use crate::ui::views::setup::{SetupInputs, render_setup};

/// Top-level view of the main window. Holds the phase machine, the setup
/// inputs, and the board once a game starts.
pub struct AppRoot {
    phase: AppPhase,
    inputs: SetupInputs,
    warn: bool,
    board: Option<Entity<BoardView>>,
    _model_subscription: Option<Subscription>,
}

impl AppRoot {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        Self {
            phase: AppPhase::Setup,
            inputs: SetupInputs::new(window, cx),
            warn: false,
            board: None,
            _model_subscription: None,
        }
    }

    /// Validate the entered player details and begin play.
    pub fn start_game(&mut self, cx: &mut Context<Self>) {
        let players = Players {
            white: PlayerEntry::from_input(
                &self.inputs.white_name.read(cx).value(),
                &self.inputs.white_elo.read(cx).value(),
            ),
            black: PlayerEntry::from_input(
                &self.inputs.black_name.read(cx).value(),
                &self.inputs.black_elo.read(cx).value(),
            ),
        };
        if !players.is_valid() {
            warn!("rejected game start: invalid player details");
            self.warn = true;
            cx.notify();
            return;
        }
        if self.phase.start_game() {
            info!(
                "starting {} vs {}",
                players.white.banner(),
                players.black.banner()
            );
            let model = cx.new(|_| GameModel::new(players));
            self._model_subscription = Some(cx.observe(&model, |this, model, cx| {
                if model.read(cx).is_over() {
                    this.phase.game_over();
                }
                cx.notify();
            }));
            self.board = Some(cx.new(|cx| BoardView::new(model, cx)));
            self.warn = false;
            cx.notify();
        }
    }

    /// The window is gone; retire the phase machine.
    pub fn close(&mut self) {
        self.phase.close();
    }
}

impl Render for AppRoot {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        match self.phase {
            AppPhase::Setup => {
                render_setup(&self.inputs, self.warn, cx.entity()).into_any_element()
            }
            AppPhase::Playing | AppPhase::GameOver => match self.board.clone() {
                Some(board) => board.into_any_element(),
                None => div().into_any_element(),
            },
            AppPhase::Closed => div().into_any_element(),
        }
    }
}
