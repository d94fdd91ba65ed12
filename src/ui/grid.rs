//! Thumbnail Grid UI
//!
//! Renders the gallery as bordered cards in a grid sized by the
//! terminal width. Card rects are recorded on the app for mouse
//! hit-testing, and the scroll offset is reconciled here where the
//! real viewport height is known.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui_image::StatefulImage;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::images::ImageSlotState;
use crate::logic;
use crate::logic::grid::{CELL_HEIGHT, CELL_WIDTH};
use crate::App;

/// Render the thumbnail grid
pub fn render_grid(f: &mut Frame, app: &mut App, area: Rect) {
    app.card_hits.clear();

    let columns = logic::grid::columns_for_width(area.width);
    app.grid_columns = columns;

    let count = app.model.gallery.images.len();
    if count == 0 {
        render_empty_state(f, area, !app.model.gallery.loaded);
        return;
    }

    let visible_rows = (area.height / CELL_HEIGHT).max(1) as usize;

    // Scroll catches up with the cursor here
    let selected = app.model.gallery.selected.unwrap_or(0);
    app.model.gallery.scroll_row = logic::grid::scroll_offset(
        selected,
        columns,
        visible_rows,
        app.model.gallery.scroll_row,
    );
    let scroll_row = app.model.gallery.scroll_row;

    // Trailing Min(0) soaks up leftover space so the last row and
    // column keep the fixed cell size
    let mut row_constraints: Vec<Constraint> = (0..visible_rows)
        .map(|_| Constraint::Length(CELL_HEIGHT))
        .collect();
    row_constraints.push(Constraint::Min(0));

    let mut col_constraints: Vec<Constraint> = (0..columns)
        .map(|_| Constraint::Length(CELL_WIDTH))
        .collect();
    col_constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row_idx, row_area) in rows.iter().take(visible_rows).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints.clone())
            .split(*row_area);

        for (col_idx, cell_area) in cols.iter().take(columns).enumerate() {
            let index = (scroll_row + row_idx) * columns + col_idx;
            if index >= count {
                break;
            }
            render_card(f, app, *cell_area, index);
        }
    }
}

fn render_card(f: &mut Frame, app: &mut App, area: Rect, index: usize) {
    let (name, url, is_selected) = {
        let record = &app.model.gallery.images[index];
        (
            record.display_name().to_string(),
            record.url.clone(),
            app.model.gallery.selected == Some(index),
        )
    };

    let border_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = truncate_title(&name, area.width.saturating_sub(4) as usize);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let inner = block.inner(area);
    f.render_widget(block, area);
    app.card_hits.push((area, index));

    // Skip if area too small
    if inner.width < 2 || inner.height < 2 {
        return;
    }

    if app.image_picker.is_none() {
        render_cell_note(f, inner, "preview off");
        return;
    }

    match app.thumbnails.get_mut(&url) {
        Some(ImageSlotState::Ready { protocol, .. }) => {
            f.render_stateful_widget(StatefulImage::default(), inner, protocol);
        }
        Some(ImageSlotState::Failed { protocol }) => {
            if let Some(protocol) = protocol {
                f.render_stateful_widget(StatefulImage::default(), inner, protocol);
            } else {
                render_cell_note(f, inner, "✗");
            }
        }
        Some(ImageSlotState::Loading) | None => {
            render_cell_note(f, inner, "Loading...");
        }
    }
}

/// Centered single-line note inside a card
fn render_cell_note(f: &mut Frame, inner: Rect, note: &str) {
    let widget = Paragraph::new(note)
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center);

    if inner.height > 1 {
        let centered = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
        f.render_widget(widget, centered);
    } else {
        f.render_widget(widget, inner);
    }
}

fn render_empty_state(f: &mut Frame, area: Rect, loading: bool) {
    let (message, style) = if loading {
        (
            "Loading gallery...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        (
            "Gallery is empty. Add the first image!",
            Style::default().fg(Color::Gray),
        )
    };

    let widget = Paragraph::new(message)
        .style(style)
        .alignment(Alignment::Center);

    if area.height > 1 {
        let centered = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        f.render_widget(widget, centered);
    } else {
        f.render_widget(widget, area);
    }
}

/// Truncate a card title to the given display width, ellipsis last
fn truncate_title(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    let budget = max_width.saturating_sub(1);

    for ch in name.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }

    out.push('…');
    out
}
