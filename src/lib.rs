//! Gallery TUI Library
//!
//! Exposes modules for testing

pub mod api;
pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod ui;
pub mod utils;

pub use api::{GalleryClient, ImageRecord};
pub use app::App;
pub use config::Config;
pub use model::Model;

use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag for debug mode
pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Append a line to the debug log (no-op unless --debug was passed)
pub fn log_debug(msg: &str) {
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

/// Ordering of the image store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Loaded,   // Server order from the last fetch
    ByName,   // Case-insensitive name sort
    Shuffled, // Random permutation
}

impl SortOrder {
    pub fn as_str(&self) -> &str {
        match self {
            SortOrder::Loaded => "Loaded",
            SortOrder::ByName => "Name",
            SortOrder::Shuffled => "Shuffled",
        }
    }
}
