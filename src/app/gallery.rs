//! Gallery orchestration methods
//!
//! Methods for the image store and the grid beneath it:
//! - Listing loads and reloads
//! - Add form submission
//! - Sort and shuffle reorders
//! - Grid cursor movement

use crate::api::ImageRecord;
use crate::log_debug;
use crate::logic;
use crate::logic::grid::GridDirection;
use crate::model::ViewerState;
use crate::services::api::ApiRequest;
use crate::App;

impl App {
    /// Fetch the listing again, e.g. after a successful add
    pub(crate) fn reload_images(&mut self) {
        self.model.ui.loading_images = true;
        let _ = self.api_tx.send(ApiRequest::FetchImages);
    }

    /// Replace the store with a fresh listing
    ///
    /// Decoded slots for urls that survived the reload are kept so the
    /// grid does not flicker back to loading placeholders.
    pub(crate) fn apply_images(&mut self, records: Vec<ImageRecord>) {
        let urls: Vec<String> = records.iter().map(|record| record.url.clone()).collect();

        self.thumbnails.retain(|url, _| urls.iter().any(|u| u == url));
        self.full_images.retain(|url, _| urls.iter().any(|u| u == url));

        self.model.gallery.replace(records);

        // A shrunken listing can strand the viewer past the end
        if let ViewerState::Open { index } = self.model.viewer.state {
            if index >= self.model.gallery.images.len() {
                log_debug("Listing shrank under the viewer, closing it");
                self.model.viewer.close();
            }
        }

        for url in urls {
            self.ensure_thumbnail(&url);
        }
    }

    /// Submit the add form, or alert when a field is empty
    pub(crate) fn submit_add_form(&mut self) {
        let Some(form) = self.model.ui.add_form.as_ref() else {
            return;
        };

        match form.submission() {
            Some((name, url)) => {
                let _ = self.api_tx.send(ApiRequest::AddImage { name, url });
            }
            None => {
                self.model.ui.alert = Some("Please fill in all fields".to_string());
            }
        }
    }

    pub(crate) fn sort_images(&mut self) {
        self.model.gallery.sort_by_name();
    }

    pub(crate) fn shuffle_images(&mut self) {
        self.model.gallery.shuffle(&mut rand::thread_rng());
    }

    /// Move the grid cursor; scroll catches up at render time
    pub(crate) fn move_grid_selection(&mut self, direction: GridDirection) {
        let count = self.model.gallery.images.len();
        if count == 0 {
            return;
        }

        let current = self.model.gallery.selected.unwrap_or(0);
        let next = logic::grid::move_selection(current, count, self.grid_columns, direction);
        self.model.gallery.selected = Some(next);
    }
}
