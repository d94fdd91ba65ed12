//! Lightbox Viewer UI
//!
//! Fullscreen overlay: black scrim, the image fitted and centered,
//! close and arrow controls, caption with position counter, and the
//! download button. Control rects are recorded for mouse hit-testing.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use ratatui_image::StatefulImage;
use unicode_width::UnicodeWidthStr;

use crate::app::images::{ImageSlotState, PLACEHOLDER_DIMS};
use crate::logic;
use crate::model::ViewerPhase;
use crate::App;

/// Clickable regions of the viewer, recorded at render time
///
/// `content` covers the image and caption, where clicks do nothing;
/// anywhere else on the scrim closes the viewer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewerHitAreas {
    pub close: Rect,
    pub prev: Rect,
    pub next: Rect,
    pub download: Rect,
    pub content: Rect,
}

/// Render the lightbox over the whole screen
pub fn render_viewer(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(Clear, area);
    f.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        area,
    );

    let mut hits = ViewerHitAreas::default();

    if area.width < 12 || area.height < 8 {
        app.viewer_hits = hits;
        return;
    }

    // Close control, top right
    let close = Rect::new(area.right().saturating_sub(4), area.y, 3, 1);
    f.render_widget(
        Paragraph::new("×")
            .alignment(Alignment::Center)
            .style(control_style()),
        close,
    );
    hits.close = close;

    // Prev / next arrows flank the content
    let mid_y = area.y + area.height / 2;
    let prev = Rect::new(area.x, mid_y.saturating_sub(1), 3, 3);
    let next = Rect::new(area.right().saturating_sub(3), mid_y.saturating_sub(1), 3, 3);
    f.render_widget(arrow_paragraph("‹"), prev);
    f.render_widget(arrow_paragraph("›"), next);
    hits.prev = prev;
    hits.next = next;

    // Image goes between the arrows, above the caption rows
    let content_area = Rect {
        x: area.x + 4,
        y: area.y + 1,
        width: area.width.saturating_sub(8),
        height: area.height.saturating_sub(4),
    };

    let phase = app.model.viewer.phase.clone();
    let displayed_url = app
        .model
        .viewer
        .displayed
        .as_ref()
        .map(|d| d.record.url.clone());

    let image_rect = match (&phase, displayed_url) {
        // Opening fade, nothing on screen yet
        (_, None) => None,
        // New record swapped in, bytes still in flight
        (ViewerPhase::Loading, Some(_)) => {
            render_center_note(f, content_area, "Loading...");
            None
        }
        // FadeOut keeps the old image up until the swap
        (_, Some(url)) => render_slot(f, app, content_area, &url),
    };

    // Caption with position counter
    let caption_y = area.bottom().saturating_sub(3);
    let caption_rect = match app.model.viewer.caption_text() {
        Some(caption) => {
            let rect = centered_line_rect(area, caption_y, caption.width() as u16);
            f.render_widget(
                Paragraph::new(caption)
                    .alignment(Alignment::Center)
                    .style(
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                rect,
            );
            Some(rect)
        }
        None => None,
    };

    // Download button under the caption
    let label = "⬇ Download (d)";
    let download = centered_line_rect(area, caption_y + 1, label.width() as u16);
    f.render_widget(
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(control_style()),
        download,
    );
    hits.download = download;

    hits.content = match (image_rect, caption_rect) {
        (Some(img), Some(cap)) => img.union(cap),
        (Some(img), None) => img,
        (None, Some(cap)) => cap,
        (None, None) => Rect::default(),
    };

    app.viewer_hits = hits;
}

/// Render the decoded slot for `url`, returning the rect it occupied
fn render_slot(f: &mut Frame, app: &mut App, content_area: Rect, url: &str) -> Option<Rect> {
    let font_size = app.font_size;

    match app.full_images.get_mut(url) {
        Some(ImageSlotState::Ready { protocol, natural }) => {
            let image_rect = fitted_rect(content_area, *natural, font_size);
            f.render_stateful_widget(StatefulImage::default(), image_rect, protocol);
            Some(image_rect)
        }
        Some(ImageSlotState::Failed { protocol }) => match protocol {
            Some(protocol) => {
                let image_rect = fitted_rect(content_area, PLACEHOLDER_DIMS, font_size);
                f.render_stateful_widget(StatefulImage::default(), image_rect, protocol);

                // Label the placeholder on the row beneath it
                if image_rect.bottom() < content_area.bottom() {
                    let note = Rect::new(
                        content_area.x,
                        image_rect.bottom(),
                        content_area.width,
                        1,
                    );
                    f.render_widget(
                        Paragraph::new("Image not found")
                            .alignment(Alignment::Center)
                            .style(Style::default().fg(Color::Red)),
                        note,
                    );
                }
                Some(image_rect)
            }
            None => {
                render_center_note(f, content_area, "Image not found");
                None
            }
        },
        Some(ImageSlotState::Loading) | None => {
            render_center_note(f, content_area, "Loading...");
            None
        }
    }
}

/// Cell rect for an image of `natural` pixel size, fitted to the
/// viewport and centered
fn fitted_rect(content_area: Rect, natural: (u32, u32), font_size: (u16, u16)) -> Rect {
    let font_w = font_size.0.max(1) as u32;
    let font_h = font_size.1.max(1) as u32;

    let viewport_px = (
        content_area.width as u32 * font_w,
        content_area.height as u32 * font_h,
    );
    let (fit_w, fit_h) = logic::fit::fit_within(natural, viewport_px);

    let cell_w = ((fit_w + font_w - 1) / font_w)
        .clamp(1, content_area.width as u32) as u16;
    let cell_h = ((fit_h + font_h - 1) / font_h)
        .clamp(1, content_area.height as u32) as u16;

    Rect::new(
        content_area.x + (content_area.width - cell_w) / 2,
        content_area.y + (content_area.height - cell_h) / 2,
        cell_w,
        cell_h,
    )
}

fn render_center_note(f: &mut Frame, content_area: Rect, note: &str) {
    let widget = Paragraph::new(note)
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center);

    let centered = Rect::new(
        content_area.x,
        content_area.y + content_area.height / 2,
        content_area.width,
        1,
    );
    f.render_widget(widget, centered);
}

/// Single-line rect of `width` cells centered on `row`
fn centered_line_rect(area: Rect, row: u16, width: u16) -> Rect {
    let width = width.clamp(1, area.width);
    Rect::new(area.x + (area.width - width) / 2, row, width, 1)
}

fn control_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn arrow_paragraph(glyph: &str) -> Paragraph<'_> {
    Paragraph::new(vec![
        Line::raw(""),
        Line::from(glyph),
        Line::raw(""),
    ])
    .alignment(Alignment::Center)
    .style(control_style())
}
