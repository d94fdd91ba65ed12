//! Gallery Store Model
//!
//! The ordered image store plus the grid cursor and scroll position.
//! The store is only ever replaced wholesale or reordered in place;
//! there is no single-record mutation.

use rand::Rng;

use crate::api::ImageRecord;
use crate::logic;
use crate::SortOrder;

#[derive(Clone, Debug)]
pub struct GalleryModel {
    /// Ordered records, replaced wholesale on every successful load
    pub images: Vec<ImageRecord>,

    /// Whether the first load has completed
    pub loaded: bool,

    /// Grid cursor (None while the store is empty)
    pub selected: Option<usize>,

    /// First visible grid row
    pub scroll_row: usize,

    /// How the store is currently ordered
    pub sort_order: SortOrder,
}

impl GalleryModel {
    pub fn new() -> Self {
        Self {
            images: Vec::new(),
            loaded: false,
            selected: None,
            scroll_row: 0,
            sort_order: SortOrder::Loaded,
        }
    }

    /// Replace the whole store with a fresh listing
    ///
    /// Resets the ordering, scroll, and cursor; the cursor lands on the
    /// first record when there is one.
    pub fn replace(&mut self, records: Vec<ImageRecord>) {
        self.images = records;
        self.loaded = true;
        self.sort_order = SortOrder::Loaded;
        self.scroll_row = 0;
        self.selected = if self.images.is_empty() { None } else { Some(0) };
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Record under the grid cursor
    pub fn selected_record(&self) -> Option<&ImageRecord> {
        self.selected.and_then(|idx| self.images.get(idx))
    }

    /// Sort records by name; no-op on an empty store
    ///
    /// The cursor follows the record it was on.
    pub fn sort_by_name(&mut self) {
        if self.images.is_empty() {
            return;
        }

        let followed = self.selected_record().cloned();
        self.images.sort_by(logic::sorting::compare_by_name);
        self.sort_order = SortOrder::ByName;
        self.reselect(followed);
    }

    /// Shuffle records in place; no-op on an empty store
    ///
    /// The cursor follows the record it was on.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        if self.images.is_empty() {
            return;
        }

        let followed = self.selected_record().cloned();
        logic::shuffle::fisher_yates(&mut self.images, rng);
        self.sort_order = SortOrder::Shuffled;
        self.reselect(followed);
    }

    /// Point the cursor back at a record after an in-place reorder
    fn reselect(&mut self, followed: Option<ImageRecord>) {
        self.selected = followed.map(|record| {
            logic::navigation::find_record_index(&self.images, &record.url, record.name.as_deref())
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_record(name: Option<&str>, url: &str) -> ImageRecord {
        ImageRecord {
            name: name.map(|n| n.to_string()),
            url: url.to_string(),
        }
    }

    fn store(records: Vec<ImageRecord>) -> GalleryModel {
        let mut gallery = GalleryModel::new();
        gallery.replace(records);
        gallery
    }

    #[test]
    fn test_replace_resets_cursor_and_order() {
        let mut gallery = store(vec![make_record(Some("A"), "u1")]);
        gallery.sort_by_name();
        gallery.scroll_row = 3;

        gallery.replace(vec![
            make_record(Some("X"), "u9"),
            make_record(Some("Y"), "u8"),
        ]);

        assert_eq!(gallery.len(), 2);
        assert!(gallery.loaded);
        assert_eq!(gallery.selected, Some(0));
        assert_eq!(gallery.scroll_row, 0);
        assert_eq!(gallery.sort_order, SortOrder::Loaded);
    }

    #[test]
    fn test_replace_with_empty_clears_cursor() {
        let mut gallery = store(vec![make_record(Some("A"), "u1")]);
        gallery.replace(Vec::new());

        assert!(gallery.is_empty());
        assert!(gallery.loaded);
        assert_eq!(gallery.selected, None);
    }

    #[test]
    fn test_sort_by_name_orders_records() {
        let mut gallery = store(vec![make_record(Some("B"), "u2"), make_record(Some("A"), "u1")]);

        gallery.sort_by_name();

        assert_eq!(gallery.images[0].name.as_deref(), Some("A"));
        assert_eq!(gallery.images[1].name.as_deref(), Some("B"));
        assert_eq!(gallery.sort_order, SortOrder::ByName);
    }

    #[test]
    fn test_sort_on_empty_store_is_noop() {
        let mut gallery = GalleryModel::new();
        gallery.sort_by_name();
        assert_eq!(gallery.sort_order, SortOrder::Loaded);
    }

    #[test]
    fn test_cursor_follows_record_through_sort() {
        let mut gallery = store(vec![
            make_record(Some("C"), "u3"),
            make_record(Some("A"), "u1"),
            make_record(Some("B"), "u2"),
        ]);
        gallery.selected = Some(0); // on "C"

        gallery.sort_by_name();

        assert_eq!(gallery.selected, Some(2));
        assert_eq!(gallery.selected_record().unwrap().name.as_deref(), Some("C"));
    }

    #[test]
    fn test_shuffle_preserves_records() {
        let mut gallery = store(vec![
            make_record(Some("A"), "u1"),
            make_record(Some("B"), "u2"),
            make_record(Some("C"), "u3"),
            make_record(Some("D"), "u4"),
        ]);
        let mut original: Vec<String> = gallery.images.iter().map(|r| r.url.clone()).collect();

        gallery.shuffle(&mut StdRng::seed_from_u64(3));

        let mut shuffled: Vec<String> = gallery.images.iter().map(|r| r.url.clone()).collect();
        original.sort();
        shuffled.sort();
        assert_eq!(original, shuffled);
        assert_eq!(gallery.sort_order, SortOrder::Shuffled);
    }

    #[test]
    fn test_shuffle_on_empty_store_is_noop() {
        let mut gallery = GalleryModel::new();
        gallery.shuffle(&mut StdRng::seed_from_u64(3));
        assert_eq!(gallery.sort_order, SortOrder::Loaded);
        assert_eq!(gallery.selected, None);
    }
}
