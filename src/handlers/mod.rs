//! Event Handlers
//!
//! Free functions that take &mut App and process one event each:
//! - api: responses from the background API service
//! - keyboard: user keyboard input
//! - mouse: clicks, swipes and scrolling

pub mod api;
pub mod keyboard;
pub mod mouse;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
pub use mouse::handle_mouse;
