use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render_title_bar(f: &mut Frame, area: Rect, api_url: &str, loading: bool) {
    let mut spans = vec![
        Span::styled(
            "Image Gallery",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled("Source:", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}", api_url)),
    ];

    if loading {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let title_widget = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(title_widget, area);
}
