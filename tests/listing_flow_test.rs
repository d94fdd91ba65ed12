//! Integration tests for listing loads and grid navigation
//!
//! These tests verify the complete flow:
//! 1. App starts with a listing fetch in flight → loading flag set
//! 2. ImagesResult arrives → store populates, cursor lands on (0)
//! 3. A failed fetch reads as an empty gallery, not an error screen
//! 4. Arrow keys and Enter drive the cursor and the viewer

use anyhow::anyhow;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use galtui::api::ImageRecord;
use galtui::config::Controls;
use galtui::handlers;
use galtui::model::ViewerState;
use galtui::services::api::ApiResponse;
use galtui::{App, Config, SortOrder};

/// Config that never reaches the network or queries the terminal
fn test_config() -> Config {
    Config {
        api_url: "http://127.0.0.1:9/images".to_string(),
        download_dir: None,
        image_preview_enabled: false,
        image_protocol: "auto".to_string(),
        controls: Controls::default(),
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn records(count: usize) -> Vec<ImageRecord> {
    (0..count)
        .map(|i| ImageRecord {
            name: Some(format!("Image {}", i)),
            url: format!("http://x/{}.jpg", i),
        })
        .collect()
}

fn deliver_listing(app: &mut App, result: Result<Vec<ImageRecord>, anyhow::Error>) {
    handlers::handle_api_response(app, ApiResponse::ImagesResult { records: result });
}

/// Test: a fresh app is loading until the first listing lands
#[tokio::test]
async fn test_startup_waits_on_first_listing() {
    let mut app = App::new(test_config());

    assert!(app.model.ui.loading_images, "Fetch kicked off at startup");
    assert!(!app.model.gallery.loaded);

    deliver_listing(&mut app, Ok(records(3)));

    assert!(!app.model.ui.loading_images);
    assert!(app.model.gallery.loaded);
    assert_eq!(app.model.gallery.len(), 3);
    assert_eq!(app.model.gallery.selected, Some(0));
    assert_eq!(app.model.gallery.sort_order, SortOrder::Loaded);
}

/// Test: a failed fetch reads as an empty gallery
#[tokio::test]
async fn test_failed_listing_reads_as_empty() {
    let mut app = App::new(test_config());

    deliver_listing(&mut app, Err(anyhow!("connection refused")));

    assert!(!app.model.ui.loading_images);
    assert!(app.model.gallery.loaded, "Failure still counts as a load");
    assert!(app.model.gallery.is_empty());
    assert_eq!(app.model.gallery.selected, None);
    assert!(app.model.ui.alert.is_none(), "No blocking error dialog");
}

/// Test: a reload replaces the store wholesale and resets ordering
#[tokio::test]
async fn test_reload_replaces_store_and_resets_order() {
    let mut app = App::new(test_config());
    deliver_listing(&mut app, Ok(records(4)));

    // Sort, move the cursor, then reload
    handlers::handle_key(&mut app, key(KeyCode::Char('s')));
    assert_eq!(app.model.gallery.sort_order, SortOrder::ByName);
    handlers::handle_key(&mut app, key(KeyCode::Right));

    handlers::handle_key(&mut app, key(KeyCode::Char('r')));
    assert!(app.model.ui.loading_images, "Reload sets the loading flag");
    deliver_listing(&mut app, Ok(records(2)));

    assert_eq!(app.model.gallery.len(), 2);
    assert_eq!(app.model.gallery.selected, Some(0));
    assert_eq!(app.model.gallery.sort_order, SortOrder::Loaded);
}

/// Test: arrow keys walk the cursor with the column stride from the last render
#[tokio::test]
async fn test_arrow_keys_walk_the_grid() {
    let mut app = App::new(test_config());
    deliver_listing(&mut app, Ok(records(6)));

    // Pretend the last render fit three columns
    app.grid_columns = 3;

    handlers::handle_key(&mut app, key(KeyCode::Right));
    assert_eq!(app.model.gallery.selected, Some(1));

    handlers::handle_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.model.gallery.selected, Some(4));

    handlers::handle_key(&mut app, key(KeyCode::Up));
    assert_eq!(app.model.gallery.selected, Some(1));

    handlers::handle_key(&mut app, key(KeyCode::Left));
    assert_eq!(app.model.gallery.selected, Some(0));

    // Edges clamp instead of wrapping
    handlers::handle_key(&mut app, key(KeyCode::Left));
    assert_eq!(app.model.gallery.selected, Some(0));
}

/// Test: Enter opens the viewer on the cursor, Escape returns to the grid
#[tokio::test]
async fn test_enter_opens_viewer_on_cursor() {
    let mut app = App::new(test_config());
    deliver_listing(&mut app, Ok(records(3)));

    handlers::handle_key(&mut app, key(KeyCode::Right));
    handlers::handle_key(&mut app, key(KeyCode::Enter));

    assert_eq!(app.model.viewer.state, ViewerState::Open { index: 1 });

    handlers::handle_key(&mut app, key(KeyCode::Esc));
    assert_eq!(app.model.viewer.state, ViewerState::Closed);
    assert_eq!(app.model.gallery.selected, Some(1));
}

/// Test: a listing that shrank under an open viewer closes it
#[tokio::test]
async fn test_shrunken_listing_closes_the_viewer() {
    let mut app = App::new(test_config());
    deliver_listing(&mut app, Ok(records(3)));

    handlers::handle_key(&mut app, key(KeyCode::Right));
    handlers::handle_key(&mut app, key(KeyCode::Right));
    handlers::handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.model.viewer.state, ViewerState::Open { index: 2 });

    // Reload comes back with fewer records than the viewer points at
    deliver_listing(&mut app, Ok(records(2)));

    assert_eq!(app.model.viewer.state, ViewerState::Closed);
    assert_eq!(app.model.gallery.len(), 2);
}

/// Test: `q` on the grid quits, and Ctrl+C quits from inside a dialog
#[tokio::test]
async fn test_quit_keys() {
    let mut app = App::new(test_config());
    deliver_listing(&mut app, Ok(records(1)));

    handlers::handle_key(&mut app, key(KeyCode::Char('q')));
    assert!(app.model.ui.should_quit);

    let mut app = App::new(test_config());
    handlers::handle_key(&mut app, key(KeyCode::Char('a')));
    handlers::handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.model.ui.should_quit, "Ctrl+C cuts through the form");
}
