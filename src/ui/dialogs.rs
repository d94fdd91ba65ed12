use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{AddFormField, AddFormState};

/// Render the add image form
///
/// Returns the dialog rect so mouse handling can tell scrim clicks
/// from clicks inside the form.
pub fn render_add_form(f: &mut Frame, form: &AddFormState) -> Rect {
    // Center the dialog
    let area = f.area();
    let form_width = 60.min(area.width);
    let form_height = 9.min(area.height);
    let form_area = Rect {
        x: (area.width.saturating_sub(form_width)) / 2,
        y: (area.height.saturating_sub(form_height)) / 2,
        width: form_width,
        height: form_height,
    };

    f.render_widget(Clear, form_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Add Image")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(form_area);
    f.render_widget(block, form_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title input
            Constraint::Length(3), // Url input
            Constraint::Length(1), // Hint line
        ])
        .split(inner);

    render_input(
        f,
        chunks[0],
        "Title",
        &form.title,
        form.focus == AddFormField::Title,
    );
    render_input(
        f,
        chunks[1],
        "Image URL",
        &form.url,
        form.focus == AddFormField::Url,
    );

    let hint = Paragraph::new("Tab to switch, Enter to submit, Esc to cancel")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(hint, chunks[2]);

    form_area
}

fn render_input(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if focused {
        Line::from(vec![
            Span::raw(value.to_string()),
            Span::styled("█", cursor_style), // Blinking cursor
        ])
    } else {
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(Color::Gray),
        ))
    };

    let input = Paragraph::new(vec![input_line]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(label)
            .border_style(border_style),
    );

    f.render_widget(input, area);
}

/// Render a blocking alert message
pub fn render_alert(f: &mut Frame, message: &str) {
    let prompt_text = format!("{}\n\nPress any key to continue", message);

    // Center the prompt
    let area = f.area();
    let prompt_width = 44.min(area.width);
    let prompt_height = 7.min(area.height);
    let prompt_area = Rect {
        x: (area.width.saturating_sub(prompt_width)) / 2,
        y: (area.height.saturating_sub(prompt_height)) / 2,
        width: prompt_width,
        height: prompt_height,
    };

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Alert")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}
