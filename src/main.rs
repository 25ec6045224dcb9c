mod app;
mod domain;
mod models;
mod store;
mod ui;

use gpui::Application;

use crate::ui::assets::FileAssets;

fn main() {
    env_logger::init();

    Application::new()
        .with_assets(FileAssets::new())
        .run(app::run);
}
