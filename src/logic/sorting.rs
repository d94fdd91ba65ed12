//! Record ordering logic
//!
//! Pure comparison function for the name sort.

use crate::api::ImageRecord;
use std::cmp::Ordering;

/// Compare two records by name
///
/// Case-insensitive primary ordering with a byte-order tiebreak so equal
/// folded names still sort deterministically. Records without a name
/// compare as the empty string, which groups them at the front.
///
/// # Examples
/// ```
/// use galtui::api::ImageRecord;
/// use galtui::logic::sorting::compare_by_name;
/// use std::cmp::Ordering;
///
/// let apple = ImageRecord { name: Some("apple".into()), url: "u1".into() };
/// let banana = ImageRecord { name: Some("Banana".into()), url: "u2".into() };
///
/// assert_eq!(compare_by_name(&apple, &banana), Ordering::Less);
/// ```
pub fn compare_by_name(a: &ImageRecord, b: &ImageRecord) -> Ordering {
    let a_name = a.name.as_deref().unwrap_or("");
    let b_name = b.name.as_deref().unwrap_or("");

    a_name
        .to_lowercase()
        .cmp(&b_name.to_lowercase())
        .then_with(|| a_name.cmp(b_name))
}
