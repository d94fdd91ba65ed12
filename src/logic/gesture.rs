//! Swipe detection
//!
//! Pure functions for interpreting horizontal drags over the viewer.
//! Drag state lives on the viewer model, not in free-floating globals.

/// Minimum horizontal travel, in pixels, for a drag to count as a swipe
pub const SWIPE_THRESHOLD_PX: i32 = 50;

/// Direction a completed swipe navigates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    Next,
    Prev,
}

/// Interpret a completed drag
///
/// Coordinates are pixel offsets from the left edge of the terminal. A
/// drag that travels the threshold or less is not a swipe; the release
/// falls through to click handling instead. Right-to-left travel
/// advances, left-to-right steps back.
///
/// # Examples
/// ```
/// use galtui::logic::gesture::{detect_swipe, SwipeAction};
///
/// // 60px right-to-left: next image
/// assert_eq!(detect_swipe(100, 40), Some(SwipeAction::Next));
///
/// // 30px is under the threshold: not a swipe
/// assert_eq!(detect_swipe(100, 70), None);
/// ```
pub fn detect_swipe(start_x: i32, end_x: i32) -> Option<SwipeAction> {
    let diff = start_x - end_x;

    if diff.abs() <= SWIPE_THRESHOLD_PX {
        return None;
    }

    if diff > 0 {
        Some(SwipeAction::Next)
    } else {
        Some(SwipeAction::Prev)
    }
}

/// Convert a terminal column to an approximate pixel offset
///
/// Terminal mice report cells, not pixels, so the drag distance is
/// reconstructed from the detected cell width.
pub fn column_to_px(column: u16, cell_width_px: u16) -> i32 {
    column as i32 * cell_width_px.max(1) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_to_left_swipe_advances() {
        assert_eq!(detect_swipe(200, 140), Some(SwipeAction::Next));
        assert_eq!(detect_swipe(51, 0), Some(SwipeAction::Next));
    }

    #[test]
    fn test_left_to_right_swipe_steps_back() {
        assert_eq!(detect_swipe(140, 200), Some(SwipeAction::Prev));
        assert_eq!(detect_swipe(0, 51), Some(SwipeAction::Prev));
    }

    #[test]
    fn test_short_drags_are_not_swipes() {
        assert_eq!(detect_swipe(100, 70), None);
        assert_eq!(detect_swipe(70, 100), None);
        assert_eq!(detect_swipe(10, 10), None);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // Exactly 50px in either direction is still a click
        assert_eq!(detect_swipe(50, 0), None);
        assert_eq!(detect_swipe(0, 50), None);
    }

    #[test]
    fn test_column_to_px_scales_by_cell_width() {
        assert_eq!(column_to_px(10, 8), 80);
        assert_eq!(column_to_px(0, 8), 0);
        // Degenerate cell width is clamped so drags still register
        assert_eq!(column_to_px(10, 0), 10);
    }
}
