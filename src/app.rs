//! Application setup and window creation.

use gpui::{App, Bounds, TitlebarOptions, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;

use crate::ui::theme::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::ui::views::AppRoot;

/// Initialize the app and open the main window.
pub fn run(cx: &mut App) {
    gpui_component::init(cx);

    let bounds = Bounds::centered(None, size(px(WINDOW_WIDTH), px(WINDOW_HEIGHT)), cx);
    let mut app_root = None;
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Chess".into()),
                ..Default::default()
            }),
            is_resizable: false,
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| AppRoot::new(window, cx));
            app_root = Some(view.clone());
            cx.new(|cx| Root::new(view, window, cx))
        },
    )
    .unwrap();

    // quit once the last window is gone
    cx.on_window_closed(move |cx| {
        if cx.windows().is_empty() {
            if let Some(root) = app_root.as_ref() {
                root.update(cx, |root, _| root.close());
            }
            cx.quit();
        }
    })
    .detach();
}
