mod board;
mod review;
mod root;
mod setup;

pub use review::open_review_window;
pub use root::AppRoot;
