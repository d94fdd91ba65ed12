//! Viewer navigation logic
//!
//! Pure functions for stepping through the image store with circular wrapping.

use crate::api::ImageRecord;

/// Calculate the next viewer index with wrapping
///
/// Advances to the following record, wrapping from the last back to the
/// first. Stores with zero or one record cannot be navigated, so the
/// index comes back unchanged.
///
/// # Arguments
/// * `current` - Index the viewer currently points at
/// * `len` - Total number of records in the store
///
/// # Examples
/// ```
/// use galtui::logic::navigation::next_index;
///
/// // Normal progression
/// assert_eq!(next_index(0, 3), 1);
/// assert_eq!(next_index(1, 3), 2);
///
/// // Wrapping at the end
/// assert_eq!(next_index(2, 3), 0);
///
/// // Too few records to move
/// assert_eq!(next_index(0, 1), 0);
/// assert_eq!(next_index(0, 0), 0);
/// ```
pub fn next_index(current: usize, len: usize) -> usize {
    if len <= 1 {
        return current;
    }
    (current + 1) % len
}

/// Calculate the previous viewer index with wrapping
///
/// Steps back to the preceding record, wrapping from the first to the
/// last. Stores with zero or one record cannot be navigated, so the
/// index comes back unchanged.
///
/// # Examples
/// ```
/// use galtui::logic::navigation::prev_index;
///
/// // Normal progression
/// assert_eq!(prev_index(2, 3), 1);
/// assert_eq!(prev_index(1, 3), 0);
///
/// // Wrapping at the start
/// assert_eq!(prev_index(0, 3), 2);
///
/// // Too few records to move
/// assert_eq!(prev_index(0, 1), 0);
/// assert_eq!(prev_index(0, 0), 0);
/// ```
pub fn prev_index(current: usize, len: usize) -> usize {
    if len <= 1 {
        return current;
    }
    (current + len - 1) % len
}

/// Locate the store position for an opened card
///
/// Matches both url and name. Records sharing identical url+name are
/// indistinguishable, so the first match always wins. When nothing
/// matches, the viewer lands on the first record.
pub fn find_record_index(records: &[ImageRecord], url: &str, name: Option<&str>) -> usize {
    records
        .iter()
        .position(|record| record.url == url && record.name.as_deref() == name)
        .unwrap_or(0)
}
