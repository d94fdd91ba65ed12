//! Keyboard Input Handler
//!
//! Precedence mirrors what is stacked on screen: the alert swallows
//! everything, then the add form, then the viewer, then the grid.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::grid::GridDirection;
use crate::model::AddFormState;
use crate::App;

/// Handle one keyboard event
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C quits from anywhere; raw mode eats the signal
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return;
    }

    // Any key dismisses the alert
    if app.model.ui.alert.is_some() {
        app.model.ui.alert = None;
        return;
    }

    if app.model.ui.add_form.is_some() {
        handle_add_form_key(app, key);
        return;
    }

    if app.model.viewer.is_open() {
        handle_viewer_key(app, key);
        return;
    }

    handle_grid_key(app, key);
}

fn handle_add_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.model.ui.add_form = None;
        }
        KeyCode::Enter => app.submit_add_form(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            if let Some(form) = app.model.ui.add_form.as_mut() {
                form.toggle_focus();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = app.model.ui.add_form.as_mut() {
                form.focused_field_mut().pop();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(form) = app.model.ui.add_form.as_mut() {
                form.focused_field_mut().push(c);
            }
        }
        _ => {}
    }
}

fn handle_viewer_key(app: &mut App, key: KeyEvent) {
    let store_len = app.model.gallery.images.len();

    match key.code {
        KeyCode::Esc => app.close_viewer(),
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Left => app.model.viewer.prev(store_len),
        KeyCode::Right | KeyCode::Char(' ') => app.model.viewer.next(store_len),
        KeyCode::Char('d') => app.download_current(),
        _ => {}
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Left => app.move_grid_selection(GridDirection::Left),
        KeyCode::Right => app.move_grid_selection(GridDirection::Right),
        KeyCode::Up => app.move_grid_selection(GridDirection::Up),
        KeyCode::Down => app.move_grid_selection(GridDirection::Down),
        KeyCode::Enter => {
            if let Some(index) = app.model.gallery.selected {
                app.open_viewer_for(index);
            }
        }
        KeyCode::Char('a') if app.controls.add => {
            app.model.ui.add_form = Some(AddFormState::new());
        }
        KeyCode::Char('s') if app.controls.sort => app.sort_images(),
        KeyCode::Char('x') if app.controls.shuffle => app.shuffle_images(),
        KeyCode::Char('r') => app.reload_images(),
        _ => {}
    }
}
