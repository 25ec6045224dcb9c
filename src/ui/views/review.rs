//! Review windows - the recorded-game table and the per-game detail view.

use gpui::{
    App, Bounds, Context, Div, Entity, SharedString, TitlebarOptions, Window, WindowBounds,
    WindowOptions, div, prelude::*, px, rgb, size,
};
use gpui_component::Root;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::{Input, InputState};
use log::debug;

use crate::domain::move_preview;
use crate::store::{GameRecord, GamesDb};
use crate::ui::theme::{
    BORDER_COLOR, DETAIL_HEIGHT, DETAIL_WIDTH, PANEL_BG, REVIEW_HEIGHT, REVIEW_WIDTH,
    TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Table columns with their widths.
const COLUMNS: [(&str, f32); 7] = [
    ("ID", 30.0),
    ("White's name", 120.0),
    ("White's ELO", 80.0),
    ("Black's Name", 120.0),
    ("Black's ELO", 80.0),
    ("Winner", 80.0),
    ("Moves played", 170.0),
];

/// Open the recorded-games window.
pub fn open_review_window(cx: &mut App) {
    let bounds = Bounds::centered(None, size(px(REVIEW_WIDTH), px(REVIEW_HEIGHT)), cx);
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Recorded Games".into()),
                ..Default::default()
            }),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| ReviewView::new(window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    )
    .unwrap();
}

fn open_detail_window(record: GameRecord, cx: &mut App) {
    let bounds = Bounds::centered(None, size(px(DETAIL_WIDTH), px(DETAIL_HEIGHT)), cx);
    let text: SharedString = format!("{}\nWINNER: {}", record.moves, record.winner).into();
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(format!("Game {}", record.id).into()),
                ..Default::default()
            }),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|_| DetailView { text });
            cx.new(|cx| Root::new(view, window, cx))
        },
    )
    .unwrap();
}

/// Read every record from the ledger in one short-lived connection.
fn load_records() -> anyhow::Result<Vec<GameRecord>> {
    let db = GamesDb::open_default()?;
    let records = db.games()?;
    db.close()?;
    Ok(records)
}

/// Look up one recorded game by ID. Lookups read the ledger rather than
/// the table's open-time rows, so games recorded while the window is open
/// are found.
fn find_game(db: &GamesDb, id: i64) -> anyhow::Result<Option<GameRecord>> {
    Ok(db.games()?.into_iter().find(|r| r.id == id))
}

fn cell(text: String, width: f32) -> Div {
    div()
        .w(px(width))
        .flex_shrink_0()
        .flex()
        .justify_center()
        .overflow_hidden()
        .text_ellipsis()
        .child(text)
}

/// Table over every recorded game, with lookup by ID.
pub struct ReviewView {
    records: Vec<GameRecord>,
    id_input: Entity<InputState>,
}

impl ReviewView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let records = load_records().expect("read the game ledger");
        let id_input = cx.new(|cx| InputState::new(window, cx));
        Self { records, id_input }
    }
}

impl Render for ReviewView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let header = div()
            .flex()
            .py_1()
            .border_b_1()
            .border_color(rgb(BORDER_COLOR))
            .text_color(rgb(TEXT_SECONDARY))
            .children(
                COLUMNS
                    .iter()
                    .map(|(title, width)| cell((*title).to_string(), *width)),
            );

        let rows = self
            .records
            .iter()
            .map(|record| {
                div()
                    .flex()
                    .py_1()
                    .border_b_1()
                    .border_color(rgb(BORDER_COLOR))
                    .child(cell(record.id.to_string(), COLUMNS[0].1))
                    .child(cell(record.white_name.clone(), COLUMNS[1].1))
                    .child(cell(record.white_elo.clone(), COLUMNS[2].1))
                    .child(cell(record.black_name.clone(), COLUMNS[3].1))
                    .child(cell(record.black_elo.clone(), COLUMNS[4].1))
                    .child(cell(record.winner.clone(), COLUMNS[5].1))
                    .child(cell(move_preview(&record.moves), COLUMNS[6].1))
            })
            .collect::<Vec<_>>();

        let id_input = self.id_input.clone();

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(rgb(PANEL_BG))
            .font_family("Arial")
            .text_size(px(13.0))
            .text_color(rgb(TEXT_PRIMARY))
            .child(header)
            .child(
                div()
                    .id("review-table")
                    .flex_1()
                    .overflow_y_scroll()
                    .children(rows),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_2()
                    .p_2()
                    .border_t_1()
                    .border_color(rgb(BORDER_COLOR))
                    .child("Enter game ID to view the full list of moves:")
                    .child(div().w(px(120.0)).child(Input::new(&self.id_input)))
                    .child(
                        Button::new("view-game")
                            .label("View")
                            .primary()
                            .on_click(move |_, _, cx| {
                                let value = id_input.read(cx).value().to_string();
                                if value.is_empty()
                                    || !value.chars().all(|c| c.is_ascii_digit())
                                {
                                    debug!("ignoring game ID {:?}", value);
                                    return;
                                }
                                let Ok(id) = value.parse::<i64>() else {
                                    debug!("ignoring game ID {:?}", value);
                                    return;
                                };
                                let found = GamesDb::open_default().and_then(|db| {
                                    let found = find_game(&db, id)?;
                                    db.close()?;
                                    Ok(found)
                                });
                                match found {
                                    Ok(Some(record)) => open_detail_window(record, cx),
                                    Ok(None) => debug!("no recorded game with ID {}", id),
                                    Err(err) => {
                                        debug!("could not read the game ledger: {}", err)
                                    }
                                }
                            }),
                    ),
            )
    }
}

/// Full move log of one recorded game.
struct DetailView {
    text: SharedString,
}

impl Render for DetailView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("game-detail")
            .size_full()
            .overflow_y_scroll()
            .flex()
            .flex_col()
            .items_center()
            .p_2()
            .bg(rgb(PANEL_BG))
            .font_family("Arial")
            .text_size(px(13.0))
            .text_color(rgb(TEXT_PRIMARY))
            .children(self.text.lines().map(|line| div().child(line.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Fresh database file under the system temp directory.
    fn scratch(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("review-{}-{}.db", name, std::process::id()));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn test_lookup_finds_games_recorded_after_the_window_opened() {
        let path = scratch("late-lookup");
        let db = GamesDb::open(&path).unwrap();
        assert!(find_game(&db, 1).unwrap().is_none());

        let id = db
            .add_game("Anna", "1400", "Ben", "1350", "White", "1. e2 to e4, ")
            .unwrap();
        let record = find_game(&db, id).unwrap().expect("the new game is found");
        assert_eq!(record.white_name, "Anna");
        assert_eq!(record.winner, "White");

        db.close().unwrap();
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_lookup_misses_unknown_id() {
        let path = scratch("unknown-id");
        let db = GamesDb::open(&path).unwrap();
        db.add_game("Anna", "1400", "Ben", "1350", "White", "x")
            .unwrap();
        assert!(find_game(&db, 99).unwrap().is_none());
        db.close().unwrap();
        let _ = std::fs::remove_file(&path);
    }
}
