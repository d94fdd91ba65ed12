//! Viewer Model
//!
//! This sub-model is the lightbox state machine: whether it is open and
//! where it points, the record the caption and counter are drawn from,
//! and the fade-driven swap sequence between the two.
//!
//! The target index (`state`) moves immediately on every navigation
//! step. The on-screen record (`displayed`) only catches up once the
//! fade delay has run out, so rapid stepping keeps the old caption and
//! counter visible until the swap lands.

use std::time::Instant;

use crate::api::ImageRecord;
use crate::logic;

/// Whether the lightbox is showing, and which record it targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerState {
    Closed,
    Open { index: usize },
}

/// What the image slot is doing
///
/// Every navigation step walks FadeOut -> Loading -> Ready or Failed.
#[derive(Clone, Debug)]
pub enum ViewerPhase {
    /// Old image hidden; waiting out the fade delay
    FadeOut { since: Instant },
    /// Displayed record swapped; waiting for fetch and decode
    Loading,
    /// Image measured and scaled, shown at full opacity
    Ready,
    /// Fetch or decode failed; a placeholder stands in
    Failed,
}

/// Snapshot of what the caption and counter currently show
#[derive(Clone, Debug)]
pub struct DisplayedRecord {
    pub record: ImageRecord,
    /// 0-based store position at swap time
    pub position: usize,
    /// Store length at swap time
    pub total: usize,
}

#[derive(Clone, Debug)]
pub struct ViewerModel {
    pub state: ViewerState,

    /// What is on screen; lags `state` by the fade delay
    pub displayed: Option<DisplayedRecord>,

    pub phase: ViewerPhase,

    /// Horizontal drag origin in px while the left button is held
    pub drag_start_px: Option<i32>,
}

impl ViewerModel {
    pub fn new() -> Self {
        Self {
            state: ViewerState::Closed,
            displayed: None,
            phase: ViewerPhase::Ready,
            drag_start_px: None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open { .. })
    }

    /// Target index while open
    pub fn open_index(&self) -> Option<usize> {
        match self.state {
            ViewerState::Open { index } => Some(index),
            ViewerState::Closed => None,
        }
    }

    /// Open at a store position and start the display sequence
    pub fn open_at(&mut self, index: usize) {
        self.state = ViewerState::Open { index };
        self.displayed = None;
        self.drag_start_px = None;
        self.phase = ViewerPhase::FadeOut {
            since: Instant::now(),
        };
    }

    /// Close and drop all transient display state
    pub fn close(&mut self) {
        self.state = ViewerState::Closed;
        self.displayed = None;
        self.drag_start_px = None;
        self.phase = ViewerPhase::Ready;
    }

    /// Step to the following record; no-op unless open with 2+ records
    pub fn next(&mut self, store_len: usize) {
        if let ViewerState::Open { index } = self.state {
            if store_len <= 1 {
                return;
            }
            self.state = ViewerState::Open {
                index: logic::navigation::next_index(index, store_len),
            };
            self.phase = ViewerPhase::FadeOut {
                since: Instant::now(),
            };
        }
    }

    /// Step to the preceding record; no-op unless open with 2+ records
    pub fn prev(&mut self, store_len: usize) {
        if let ViewerState::Open { index } = self.state {
            if store_len <= 1 {
                return;
            }
            self.state = ViewerState::Open {
                index: logic::navigation::prev_index(index, store_len),
            };
            self.phase = ViewerPhase::FadeOut {
                since: Instant::now(),
            };
        }
    }

    /// Swap the displayed record once the fade delay has elapsed
    ///
    /// Returns the url that now needs pixels when the swap happened;
    /// None when the delay is still running or nothing is fading.
    pub fn complete_fade(&mut self, records: &[ImageRecord]) -> Option<String> {
        let ViewerState::Open { index } = self.state else {
            return None;
        };
        let ViewerPhase::FadeOut { since } = &self.phase else {
            return None;
        };
        if !logic::ui::fade_complete(since.elapsed().as_millis()) {
            return None;
        }

        let record = records.get(index)?.clone();
        let url = record.url.clone();

        self.displayed = Some(DisplayedRecord {
            record,
            position: index,
            total: records.len(),
        });
        self.phase = ViewerPhase::Loading;

        Some(url)
    }

    /// Record the outcome of the pixel fetch for the displayed record
    ///
    /// Results for other urls are dropped; a later navigation step owns
    /// the slot now (last writer wins).
    pub fn finish_load(&mut self, url: &str, ok: bool) {
        if !matches!(self.phase, ViewerPhase::Loading) {
            return;
        }
        let Some(displayed) = &self.displayed else {
            return;
        };
        if displayed.record.url != url {
            return;
        }

        self.phase = if ok {
            ViewerPhase::Ready
        } else {
            ViewerPhase::Failed
        };
    }

    /// Caption line for the displayed record, counter included
    ///
    /// Rendered as `Name (i/N)` with a 1-based position.
    pub fn caption_text(&self) -> Option<String> {
        self.displayed.as_ref().map(|d| {
            format!(
                "{} ({}/{})",
                d.record.display_name(),
                d.position + 1,
                d.total
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn make_record(name: Option<&str>, url: &str) -> ImageRecord {
        ImageRecord {
            name: name.map(|n| n.to_string()),
            url: url.to_string(),
        }
    }

    fn three_records() -> Vec<ImageRecord> {
        vec![
            make_record(Some("A"), "u1"),
            make_record(Some("B"), "u2"),
            make_record(Some("C"), "u3"),
        ]
    }

    /// Backdate the fade so complete_fade fires immediately
    fn force_fade_elapsed(viewer: &mut ViewerModel) {
        if let ViewerPhase::FadeOut { since } = &mut viewer.phase {
            *since = Instant::now() - Duration::from_millis(250);
        }
    }

    #[test]
    fn test_open_starts_fade_with_nothing_displayed() {
        let mut viewer = ViewerModel::new();
        viewer.open_at(1);

        assert!(viewer.is_open());
        assert_eq!(viewer.open_index(), Some(1));
        assert!(viewer.displayed.is_none());
        assert!(matches!(viewer.phase, ViewerPhase::FadeOut { .. }));
    }

    #[test]
    fn test_fade_does_not_complete_early() {
        let mut viewer = ViewerModel::new();
        viewer.open_at(0);

        // Immediately after opening the delay has not elapsed
        assert_eq!(viewer.complete_fade(&three_records()), None);
        assert!(viewer.displayed.is_none());
    }

    #[test]
    fn test_fade_swaps_displayed_record() {
        let mut viewer = ViewerModel::new();
        viewer.open_at(1);
        force_fade_elapsed(&mut viewer);

        let url = viewer.complete_fade(&three_records());

        assert_eq!(url.as_deref(), Some("u2"));
        assert!(matches!(viewer.phase, ViewerPhase::Loading));
        let displayed = viewer.displayed.as_ref().unwrap();
        assert_eq!(displayed.position, 1);
        assert_eq!(displayed.total, 3);
    }

    #[test]
    fn test_navigation_resets_fade_but_keeps_displayed() {
        let mut viewer = ViewerModel::new();
        viewer.open_at(0);
        force_fade_elapsed(&mut viewer);
        viewer.complete_fade(&three_records());

        viewer.next(3);

        // Target moved, on-screen record still the old one
        assert_eq!(viewer.open_index(), Some(1));
        assert_eq!(viewer.displayed.as_ref().unwrap().position, 0);
        assert!(matches!(viewer.phase, ViewerPhase::FadeOut { .. }));
    }

    #[test]
    fn test_next_twice_from_one_lands_on_zero() {
        let mut viewer = ViewerModel::new();
        viewer.open_at(1);

        viewer.next(3);
        assert_eq!(viewer.open_index(), Some(2));
        viewer.next(3);
        assert_eq!(viewer.open_index(), Some(0));
    }

    #[test]
    fn test_navigation_noop_on_small_stores() {
        let mut viewer = ViewerModel::new();
        viewer.open_at(0);

        viewer.next(1);
        assert_eq!(viewer.open_index(), Some(0));
        viewer.prev(1);
        assert_eq!(viewer.open_index(), Some(0));
        viewer.next(0);
        assert_eq!(viewer.open_index(), Some(0));
    }

    #[test]
    fn test_navigation_ignored_while_closed() {
        let mut viewer = ViewerModel::new();
        viewer.next(3);
        viewer.prev(3);
        assert!(!viewer.is_open());
    }

    #[test]
    fn test_finish_load_matches_displayed_url() {
        let mut viewer = ViewerModel::new();
        viewer.open_at(0);
        force_fade_elapsed(&mut viewer);
        viewer.complete_fade(&three_records());

        // A stale result for another url is dropped
        viewer.finish_load("u9", true);
        assert!(matches!(viewer.phase, ViewerPhase::Loading));

        viewer.finish_load("u1", true);
        assert!(matches!(viewer.phase, ViewerPhase::Ready));
    }

    #[test]
    fn test_finish_load_failure_marks_failed() {
        let mut viewer = ViewerModel::new();
        viewer.open_at(0);
        force_fade_elapsed(&mut viewer);
        viewer.complete_fade(&three_records());

        viewer.finish_load("u1", false);
        assert!(matches!(viewer.phase, ViewerPhase::Failed));
    }

    #[test]
    fn test_caption_includes_counter() {
        let mut viewer = ViewerModel::new();
        viewer.open_at(2);
        force_fade_elapsed(&mut viewer);
        viewer.complete_fade(&three_records());

        assert_eq!(viewer.caption_text().as_deref(), Some("C (3/3)"));
    }

    #[test]
    fn test_caption_fallback_for_unnamed_records() {
        let records = vec![make_record(None, "u1")];
        let mut viewer = ViewerModel::new();
        viewer.open_at(0);
        force_fade_elapsed(&mut viewer);
        viewer.complete_fade(&records);

        assert_eq!(viewer.caption_text().as_deref(), Some("Untitled (1/1)"));
    }

    #[test]
    fn test_close_clears_transient_state() {
        let mut viewer = ViewerModel::new();
        viewer.open_at(0);
        viewer.drag_start_px = Some(120);
        force_fade_elapsed(&mut viewer);
        viewer.complete_fade(&three_records());

        viewer.close();

        assert!(!viewer.is_open());
        assert!(viewer.displayed.is_none());
        assert!(viewer.drag_start_px.is_none());
    }

    #[test]
    fn test_fade_with_out_of_range_index_swaps_nothing() {
        let mut viewer = ViewerModel::new();
        viewer.open_at(5);
        force_fade_elapsed(&mut viewer);

        assert_eq!(viewer.complete_fade(&three_records()), None);
        assert!(viewer.displayed.is_none());
    }
}
