use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top title bar area
    pub title_area: Rect,
    /// Thumbnail grid area
    pub grid_area: Rect,
    /// Hotkey legend area (first thing dropped on short terminals)
    pub legend_area: Option<Rect>,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Terminal height below which the legend is dropped entirely
const LEGEND_MIN_TERMINAL_HEIGHT: u16 = 12;

/// Calculate the screen layout for all UI components
pub fn calculate_layout(
    terminal_size: Rect,
    viewer_open: bool,
    form_open: bool,
    controls: &crate::config::Controls,
) -> LayoutInfo {
    // Calculate dynamic legend height based on terminal width and content
    let legend_height = if terminal_size.height < LEGEND_MIN_TERMINAL_HEIGHT {
        0
    } else {
        super::legend::calculate_legend_height(terminal_size.width, viewer_open, form_open, controls)
    };

    // Create main layout: title bar (top) + grid + legend + status bar (bottom)
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title bar (3 lines: top border, text, bottom border)
            Constraint::Min(3),                // Thumbnail grid
            Constraint::Length(legend_height), // Legend area (dynamic height, exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        title_area: main_chunks[0],
        grid_area: main_chunks[1],
        legend_area: if legend_height > 0 {
            Some(main_chunks[2])
        } else {
            None
        },
        status_area: main_chunks[3],
    }
}
