//! Viewer orchestration methods
//!
//! The model decides what the lightbox should show; these methods feed
//! it. `advance_viewer` runs every loop tick and walks the display
//! sequence forward: fade delay, byte fetch, decode, visible.

use crate::logic;
use crate::services::api::ApiRequest;
use crate::App;
use crate::app::images::ImageSlotState;

impl App {
    /// Open the lightbox on the record at a store index
    ///
    /// The landing index is looked up by the record's url and name, so
    /// two identical records always resolve to the first of them.
    pub(crate) fn open_viewer_for(&mut self, index: usize) {
        let Some(record) = self.model.gallery.images.get(index) else {
            return;
        };

        let landing = logic::navigation::find_record_index(
            &self.model.gallery.images,
            &record.url,
            record.name.as_deref(),
        );

        self.model.gallery.selected = Some(landing);
        self.model.viewer.open_at(landing);
    }

    /// Close the lightbox, leaving the grid cursor where browsing
    /// ended
    pub(crate) fn close_viewer(&mut self) {
        if let Some(index) = self.model.viewer.open_index() {
            if index < self.model.gallery.images.len() {
                self.model.gallery.selected = Some(index);
            }
        }
        self.model.viewer.close();
        // Sixel/kitty graphics are drawn outside the cell buffer and
        // survive the overlay going away; force a terminal clear
        self.model.ui.sixel_cleanup_frames = 1;
    }

    /// Step the viewer display sequence
    ///
    /// Once the fade delay has elapsed the model hands back the url it
    /// now wants on screen; resolve it from the decoded slots or kick
    /// off a fetch.
    pub fn advance_viewer(&mut self) {
        let Some(url) = self.model.viewer.complete_fade(&self.model.gallery.images) else {
            return;
        };

        if self.image_picker.is_none() {
            // No graphics protocol; show the caption over a blank frame
            self.model.viewer.finish_load(&url, false);
            return;
        }

        match self.full_images.get(&url) {
            Some(ImageSlotState::Ready { .. }) => self.model.viewer.finish_load(&url, true),
            Some(ImageSlotState::Failed { .. }) => self.model.viewer.finish_load(&url, false),
            Some(ImageSlotState::Loading) => {}
            None => self.ensure_full_image(&url),
        }
    }

    /// Save the displayed image into the download directory
    pub(crate) fn download_current(&mut self) {
        let Some(displayed) = self.model.viewer.displayed.as_ref() else {
            return;
        };

        let name = displayed.record.name.as_deref().unwrap_or("image");
        let dest = self
            .download_dir
            .join(logic::filename::download_filename(name));

        let _ = self.api_tx.send(ApiRequest::DownloadImage {
            url: displayed.record.url.clone(),
            dest,
        });
    }
}
