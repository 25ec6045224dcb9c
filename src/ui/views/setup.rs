//! Setup form - player details, validation hint, and the entry buttons.

use gpui::{App, Div, Entity, Window, div, prelude::*, px, rgb};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::{Input, InputState};

use crate::ui::theme::{PANEL_BG, TEXT_PRIMARY, WARNING_COLOR};
use crate::ui::views::{AppRoot, open_review_window};

/// Shown invisibly below the fields until a start attempt fails validation.
const HINT: &str = "Names should be between 1 and 20\ncharacters long, and ELO ratings\nmust be integers between 1 and 5000.";

/// Entry fields for both players.
pub struct SetupInputs {
    pub white_name: Entity<InputState>,
    pub white_elo: Entity<InputState>,
    pub black_name: Entity<InputState>,
    pub black_elo: Entity<InputState>,
}

impl SetupInputs {
    pub fn new(window: &mut Window, cx: &mut App) -> Self {
        Self {
            white_name: cx.new(|cx| InputState::new(window, cx)),
            white_elo: cx.new(|cx| InputState::new(window, cx)),
            black_name: cx.new(|cx| InputState::new(window, cx)),
            black_elo: cx.new(|cx| InputState::new(window, cx)),
        }
    }
}

fn section_header(title: &'static str) -> Div {
    div().text_size(px(20.0)).child(title)
}

fn entry_row(label: &'static str, input: &Entity<InputState>) -> Div {
    div()
        .flex()
        .items_center()
        .gap_2()
        .child(div().w(px(56.0)).child(label))
        .child(div().w(px(180.0)).child(Input::new(input)))
}

/// Render the setup phase: four entry fields, the validity hint, and the
/// Start Game / View Database / Quit buttons.
pub fn render_setup(inputs: &SetupInputs, warn: bool, root: Entity<AppRoot>) -> Div {
    let hint_color = if warn {
        rgb(WARNING_COLOR)
    } else {
        // same color as the panel, invisible until it matters
        rgb(PANEL_BG)
    };

    div()
        .size_full()
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .gap_3()
        .bg(rgb(PANEL_BG))
        .font_family("Arial")
        .text_size(px(14.0))
        .text_color(rgb(TEXT_PRIMARY))
        .child(section_header("White"))
        .child(entry_row("Name: ", &inputs.white_name))
        .child(entry_row("ELO: ", &inputs.white_elo))
        .child(section_header("Black"))
        .child(entry_row("Name: ", &inputs.black_name))
        .child(entry_row("ELO: ", &inputs.black_elo))
        .child(
            div()
                .flex()
                .flex_col()
                .items_center()
                .text_size(px(13.0))
                .text_color(hint_color)
                .children(HINT.lines().map(|line| div().child(line.to_string()))),
        )
        .child(
            div()
                .flex()
                .gap_2()
                .child(
                    Button::new("start-game")
                        .label("Start Game")
                        .primary()
                        .on_click(move |_, _, cx| {
                            root.update(cx, |root, cx| root.start_game(cx));
                        }),
                )
                .child(
                    Button::new("view-database")
                        .label("View Database")
                        .on_click(|_, _, cx| open_review_window(cx)),
                )
                .child(Button::new("quit").label("Quit").on_click(|_, _, cx| cx.quit())),
        )
}
