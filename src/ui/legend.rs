use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::Controls;

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(viewer_open: bool, form_open: bool, controls: &Controls) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if form_open {
        hotkey_spans.extend(vec![
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(":Switch Field  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(":Submit  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(":Cancel"),
        ]);
        return hotkey_spans;
    }

    if viewer_open {
        hotkey_spans.extend(vec![
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::raw(":Prev/Next  "),
            Span::styled("Space", Style::default().fg(Color::Yellow)),
            Span::raw(":Next  "),
            Span::styled("d", Style::default().fg(Color::Yellow)),
            Span::raw(":Download  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(":Close  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(":Quit"),
        ]);
        return hotkey_spans;
    }

    // Grid view
    hotkey_spans.extend(vec![
        Span::styled("↑↓←→", Style::default().fg(Color::Yellow)),
        Span::raw(":Nav  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(":View  "),
    ]);

    if controls.add {
        hotkey_spans.extend(vec![
            Span::styled("a", Style::default().fg(Color::Yellow)),
            Span::raw(":Add  "),
        ]);
    }

    if controls.sort {
        hotkey_spans.extend(vec![
            Span::styled("s", Style::default().fg(Color::Yellow)),
            Span::raw(":Sort  "),
        ]);
    }

    if controls.shuffle {
        hotkey_spans.extend(vec![
            Span::styled("x", Style::default().fg(Color::Yellow)),
            Span::raw(":Shuffle  "),
        ]);
    }

    hotkey_spans.extend(vec![
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(":Reload  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(
    viewer_open: bool,
    form_open: bool,
    controls: &Controls,
) -> Paragraph<'static> {
    let hotkey_spans = build_hotkey_spans(viewer_open, form_open, controls);
    let hotkey_line = Line::from(hotkey_spans);

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend (contents follow what is on screen)
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    viewer_open: bool,
    form_open: bool,
    controls: &Controls,
) {
    let legend = build_legend_paragraph(viewer_open, form_open, controls);
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    viewer_open: bool,
    form_open: bool,
    controls: &Controls,
) -> u16 {
    // Build paragraph WITHOUT block borders for accurate line counting
    // (line_count() doesn't account for borders correctly when block is attached)
    let hotkey_spans = build_hotkey_spans(viewer_open, form_open, controls);
    let hotkey_line = Line::from(hotkey_spans);

    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    // Calculate available width (subtract left + right borders)
    let available_width = terminal_width.saturating_sub(2);

    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
