//! Card grid geometry
//!
//! Pure math for the thumbnail grid: column fit, row scrolling, and
//! selection movement. All inputs are in terminal cells.

/// Card cell footprint in terminal cells, border included
pub const CELL_WIDTH: u16 = 26;
pub const CELL_HEIGHT: u16 = 12;

/// Direction the grid cursor can move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Number of card columns that fit in the given width
///
/// Always at least one so a narrow terminal still shows a single column.
pub fn columns_for_width(width: u16) -> usize {
    (width / CELL_WIDTH).max(1) as usize
}

/// Number of grid rows needed for `count` cards
pub fn row_count(count: usize, columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    (count + columns - 1) / columns
}

/// First visible row after scrolling the selection into view
///
/// Keeps the current offset when the selected row is already visible,
/// otherwise moves just far enough to show it.
pub fn scroll_offset(
    selected: usize,
    columns: usize,
    visible_rows: usize,
    current_offset: usize,
) -> usize {
    if columns == 0 || visible_rows == 0 {
        return 0;
    }

    let row = selected / columns;

    if row < current_offset {
        row
    } else if row >= current_offset + visible_rows {
        row + 1 - visible_rows
    } else {
        current_offset
    }
}

/// Move the grid cursor one step, clamping at the edges
///
/// Left and right walk the linear order; up and down jump a full column
/// stride. Steps that would leave the card range keep the cursor where
/// it is.
pub fn move_selection(
    selected: usize,
    count: usize,
    columns: usize,
    direction: GridDirection,
) -> usize {
    if count == 0 || columns == 0 {
        return 0;
    }

    let selected = selected.min(count - 1);

    match direction {
        GridDirection::Left => selected.saturating_sub(1),
        GridDirection::Right => (selected + 1).min(count - 1),
        GridDirection::Up => {
            if selected >= columns {
                selected - columns
            } else {
                selected
            }
        }
        GridDirection::Down => {
            let candidate = selected + columns;
            if candidate < count {
                candidate
            } else {
                selected
            }
        }
    }
}
