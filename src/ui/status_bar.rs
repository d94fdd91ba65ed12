use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the bottom status bar
/// - Grid view: image count, sort order, selected record
/// - Viewer open: the record on screen with its position
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    image_count: usize,
    sort_order: &str,
    selected_name: Option<&str>,
    viewer_caption: Option<&str>,
    loading: bool,
) {
    let mut metrics = Vec::new();

    if let Some(caption) = viewer_caption {
        metrics.push(format!("Viewing: {}", caption));
    } else {
        metrics.push(format!("Images: {}", image_count));
        metrics.push(format!("Sort: {}", sort_order));

        if let Some(name) = selected_name {
            metrics.push(format!("Selected: {}", name));
        }
    }

    if loading {
        metrics.push("Loading...".to_string());
    }

    let status_line = metrics.join(" | ");

    // Color the labels (before colons)
    let mut status_spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            status_spans.push(Span::raw(" | "));
        }

        if let Some(colon_pos) = part.find(':') {
            // Split on first colon to separate label from value
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            status_spans.push(Span::styled(label, Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(value));
        } else {
            status_spans.push(Span::raw(part));
        }
    }

    let status_bar = Paragraph::new(Line::from(status_spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
