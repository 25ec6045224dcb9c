//! Board view - drag-and-drop play over the game coordinator.

use gpui::{
    Context, Entity, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Subscription,
    Window, div, prelude::*, px, rgb,
};
use log::info;

use crate::domain::{banner_text, to_square};
use crate::models::{GameModel, GameReport};
use crate::store::GamesDb;
use crate::ui::components::{render_held_piece, render_piece, render_tile};
use crate::ui::theme::{MARGIN_BG, TEXT_PRIMARY, WINDOW_HEIGHT};

/// The board view that observes a GameModel.
pub struct BoardView {
    model: Entity<GameModel>,
    _subscription: Subscription,
}

impl BoardView {
    pub fn new(model: Entity<GameModel>, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        Self {
            model,
            _subscription,
        }
    }
}

/// Write a finished game to the ledger, returning its assigned ID.
fn record_game(report: &GameReport) -> anyhow::Result<i64> {
    let db = GamesDb::open_default()?;
    let id = db.add_game(
        &report.players.white.name,
        &report.players.white.elo,
        &report.players.black.name,
        &report.players.black.elo,
        report.winner,
        &report.move_log,
    )?;
    db.close()?;
    Ok(id)
}

impl Render for BoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let model_down = self.model.clone();
        let model_move = self.model.clone();
        let model_up = self.model.clone();

        let game = self.model.read(cx);
        let layout = game.layout();
        let players = game.players().clone();
        let sprites = game.sprites().to_vec();
        let pointer = game.pointer();
        let over = game.terminal();

        // Player banners fill the margins: Black above the board, White below
        let header = div()
            .absolute()
            .top_0()
            .left_0()
            .w_full()
            .h(px(layout.y_offset()))
            .flex()
            .items_center()
            .justify_center()
            .text_size(px(28.0))
            .text_color(rgb(TEXT_PRIMARY))
            .child(players.black.banner());
        let footer = div()
            .absolute()
            .bottom_0()
            .left_0()
            .w_full()
            .h(px(layout.y_offset()))
            .flex()
            .items_center()
            .justify_center()
            .text_size(px(28.0))
            .text_color(rgb(TEXT_PRIMARY))
            .child(players.white.banner());

        // Held piece renders last so it floats above the grid
        let held = sprites
            .iter()
            .find(|s| s.held)
            .map(|s| render_held_piece(*s, pointer, layout));

        // Result banner across the middle of the window once the game ends
        let overlay = over.map(|terminal| {
            let (title, desc) = banner_text(terminal);
            div()
                .absolute()
                .left_0()
                .top(px((WINDOW_HEIGHT - WINDOW_HEIGHT / 4.0) / 2.0))
                .w_full()
                .h(px(WINDOW_HEIGHT / 4.0))
                .bg(rgb(MARGIN_BG))
                .flex()
                .flex_col()
                .items_center()
                .justify_center()
                .gap(px(12.0))
                .text_color(rgb(TEXT_PRIMARY))
                .child(div().text_size(px(48.0)).child(title))
                .child(div().text_size(px(20.0)).child(desc))
        });

        div()
            .relative()
            .size_full()
            .bg(rgb(MARGIN_BG))
            .font_family("Arial")
            .children((0..8).flat_map(|row| {
                (0..8).map(move |col| render_tile(to_square(row, col), layout))
            }))
            .children(
                sprites
                    .iter()
                    .filter(|s| !s.held)
                    .map(|s| render_piece(*s, layout)),
            )
            .child(header)
            .child(footer)
            .when_some(held, |el, piece| el.child(piece))
            .when_some(overlay, |el, banner| el.child(banner))
            .on_mouse_down(
                MouseButton::Left,
                move |ev: &MouseDownEvent, _window, cx| {
                    model_down.update(cx, |game, cx| {
                        game.on_pointer_down(ev.position.x.into(), ev.position.y.into());
                        cx.notify();
                    });
                },
            )
            .on_mouse_move(move |ev: &MouseMoveEvent, _, cx| {
                model_move.update(cx, |game, cx| {
                    if game.held_sprite().is_some() {
                        game.on_pointer_move(ev.position.x.into(), ev.position.y.into());
                        cx.notify();
                    }
                });
            })
            .on_mouse_up(MouseButton::Left, move |ev: &MouseUpEvent, _window, cx| {
                model_up.update(cx, |game, cx| {
                    if let Some(report) =
                        game.on_pointer_up(ev.position.x.into(), ev.position.y.into())
                    {
                        let id = record_game(&report).expect("write to the game ledger");
                        info!("game {} recorded, winner: {}", id, report.winner);
                    }
                    cx.notify();
                });
            })
    }
}
