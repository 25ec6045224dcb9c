//! Filesystem-based asset source for the piece sprites.

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use gpui::{AssetSource, SharedString};

/// Loads assets from disk, probing next to the executable, the working
/// directory, and the crate root so `cargo run` finds the sprites too.
pub struct FileAssets {
    base_path: PathBuf,
}

impl FileAssets {
    pub fn new() -> Self {
        let base_path = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        Self { base_path }
    }
}

impl Default for FileAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for FileAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        let candidates = [
            self.base_path.join(path),
            PathBuf::from(path),
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(path),
        ];

        for candidate in &candidates {
            if let Ok(data) = fs::read(candidate) {
                return Ok(Some(Cow::Owned(data)));
            }
        }
        Ok(None)
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let mut results = Vec::new();
        if let Ok(entries) = fs::read_dir(self.base_path.join(path)) {
            for entry in entries.flatten() {
                if let Some(name) = entry.file_name().to_str() {
                    results.push(SharedString::from(name.to_string()));
                }
            }
        }
        Ok(results)
    }
}
