//! Mouse Input Handler
//!
//! Hit-testing runs against rects the renderer recorded on the last
//! frame. In the viewer a press-drag-release that travels far enough
//! becomes a swipe; shorter releases fall through to a plain click.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::logic::gesture::{column_to_px, detect_swipe, SwipeAction};
use crate::logic::grid::GridDirection;
use crate::App;

/// Handle one mouse event
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let position = Position::new(mouse.column, mouse.row);

    // Any click dismisses the alert
    if app.model.ui.alert.is_some() {
        if matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left)) {
            app.model.ui.alert = None;
        }
        return;
    }

    if app.model.ui.add_form.is_some() {
        if matches!(mouse.kind, MouseEventKind::Up(MouseButton::Left))
            && !app.add_form_rect.contains(position)
        {
            // Scrim click closes the dialog
            app.model.ui.add_form = None;
        }
        return;
    }

    if app.model.viewer.is_open() {
        handle_viewer_mouse(app, mouse, position);
        return;
    }

    handle_grid_mouse(app, mouse, position);
}

fn handle_viewer_mouse(app: &mut App, mouse: MouseEvent, position: Position) {
    let store_len = app.model.gallery.images.len();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.model.viewer.drag_start_px = Some(column_to_px(mouse.column, app.font_size.0));
        }
        MouseEventKind::Up(MouseButton::Left) => {
            // A long enough drag is a swipe, not a click
            if let Some(start) = app.model.viewer.drag_start_px.take() {
                let end = column_to_px(mouse.column, app.font_size.0);
                match detect_swipe(start, end) {
                    Some(SwipeAction::Next) => {
                        app.model.viewer.next(store_len);
                        return;
                    }
                    Some(SwipeAction::Prev) => {
                        app.model.viewer.prev(store_len);
                        return;
                    }
                    None => {}
                }
            }

            let hits = app.viewer_hits;
            if hits.close.contains(position) {
                app.close_viewer();
            } else if hits.prev.contains(position) {
                app.model.viewer.prev(store_len);
            } else if hits.next.contains(position) {
                app.model.viewer.next(store_len);
            } else if hits.download.contains(position) {
                app.download_current();
            } else if hits.content.contains(position) {
                // Clicks on the image and caption stay put
            } else {
                app.close_viewer();
            }
        }
        _ => {}
    }
}

fn handle_grid_mouse(app: &mut App, mouse: MouseEvent, position: Position) {
    match mouse.kind {
        MouseEventKind::Up(MouseButton::Left) => {
            let hit = app
                .card_hits
                .iter()
                .find(|(rect, _)| rect.contains(position))
                .map(|(_, index)| *index);

            if let Some(index) = hit {
                app.open_viewer_for(index);
            }
        }
        MouseEventKind::ScrollUp => app.move_grid_selection(GridDirection::Up),
        MouseEventKind::ScrollDown => app.move_grid_selection(GridDirection::Down),
        _ => {}
    }
}
