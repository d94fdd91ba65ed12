//! Image pipeline methods
//!
//! Record urls flow through here twice: once for grid thumbnails and
//! once for the full viewer image. Bytes come back from the API
//! service, decode on a blocking thread, and return to the event loop
//! as `ImageUpdate`s.

use image::{DynamicImage, Rgb, RgbImage};
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;

use crate::app::App;
use crate::log_debug;
use crate::logic::grid::{CELL_HEIGHT, CELL_WIDTH};
use crate::services::api::{ApiRequest, ImageKind, Priority};

/// Stand-in dimensions when a record's url cannot be loaded
pub const PLACEHOLDER_DIMS: (u32, u32) = (500, 300);

/// Decode state for one record url, per kind
pub enum ImageSlotState {
    /// Bytes requested, nothing decoded yet
    Loading,
    /// Decoded and ready to render
    Ready {
        protocol: StatefulProtocol,
        /// Pixel dimensions before any terminal downscale
        natural: (u32, u32),
    },
    /// Fetch or decode failed; protocol holds the flat placeholder
    Failed { protocol: Option<StatefulProtocol> },
}

/// Result of one background decode, routed back to the event loop
pub struct ImageUpdate {
    pub url: String,
    pub kind: ImageKind,
    pub state: ImageSlotState,
}

impl App {
    /// Request a grid thumbnail for `url` unless one is already
    /// loading or loaded
    pub(crate) fn ensure_thumbnail(&mut self, url: &str) {
        if self.image_picker.is_none() || self.thumbnails.contains_key(url) {
            return;
        }

        self.thumbnails
            .insert(url.to_string(), ImageSlotState::Loading);
        let _ = self.api_tx.send(ApiRequest::FetchImageBytes {
            url: url.to_string(),
            kind: ImageKind::Thumbnail,
            priority: Priority::Medium,
        });
    }

    /// Request the viewer-sized image for `url` unless one is already
    /// loading or loaded
    pub(crate) fn ensure_full_image(&mut self, url: &str) {
        if self.image_picker.is_none() || self.full_images.contains_key(url) {
            return;
        }

        self.full_images
            .insert(url.to_string(), ImageSlotState::Loading);
        let _ = self.api_tx.send(ApiRequest::FetchImageBytes {
            url: url.to_string(),
            kind: ImageKind::Full,
            priority: Priority::High,
        });
    }

    /// Decode fetched bytes on a blocking thread and send the result
    /// back through the image update channel
    pub(crate) fn decode_image_bytes(&self, url: String, kind: ImageKind, bytes: Vec<u8>) {
        let picker = match self.image_picker.as_ref() {
            Some(picker) => picker.clone(),
            None => return,
        };
        let tx = self.image_update_tx.clone();

        // Cap decoded size to what the slot can ever show, with 1.25x
        // headroom for the protocol's own resize
        let (max_width, max_height) = match kind {
            ImageKind::Thumbnail => (
                CELL_WIDTH as u32 * self.font_size.0 as u32 * 5 / 4,
                CELL_HEIGHT as u32 * self.font_size.1 as u32 * 5 / 4,
            ),
            // ~200x60 cells covers a large terminal
            ImageKind::Full => (
                200 * self.font_size.0 as u32 * 5 / 4,
                60 * self.font_size.1 as u32 * 5 / 4,
            ),
        };

        tokio::spawn(async move {
            let load_start = std::time::Instant::now();
            let decoded =
                tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await;

            let state = match decoded {
                Ok(Ok(img)) => {
                    let natural = (img.width(), img.height());
                    let scaled = downscale_for_terminal(img, max_width, max_height);
                    let protocol = picker.new_resize_protocol(scaled);
                    log_debug(&format!(
                        "Decoded {:?} {} ({}x{}) in {:.2}s",
                        kind,
                        url,
                        natural.0,
                        natural.1,
                        load_start.elapsed().as_secs_f32()
                    ));
                    ImageSlotState::Ready { protocol, natural }
                }
                Ok(Err(e)) => {
                    log_debug(&format!("Decode error for {}: {}", url, e));
                    failed_slot(&picker)
                }
                Err(e) => {
                    log_debug(&format!("Decode task error for {}: {}", url, e));
                    failed_slot(&picker)
                }
            };

            let _ = tx.send(ImageUpdate { url, kind, state });
        });
    }

    /// Store a decode result and, for viewer images, resolve the
    /// lightbox load it belongs to
    pub fn apply_image_update(&mut self, update: ImageUpdate) {
        let ImageUpdate { url, kind, state } = update;
        let ok = matches!(state, ImageSlotState::Ready { .. });

        match kind {
            ImageKind::Thumbnail => {
                self.thumbnails.insert(url, state);
            }
            ImageKind::Full => {
                self.full_images.insert(url.clone(), state);
                self.model.viewer.finish_load(&url, ok);
            }
        }
    }
}

/// Failed slot carrying the flat gray placeholder
fn failed_slot(picker: &Picker) -> ImageSlotState {
    ImageSlotState::Failed {
        protocol: Some(picker.new_resize_protocol(placeholder_image())),
    }
}

/// Flat gray stand-in shown when an image cannot be loaded
pub(crate) fn placeholder_image() -> DynamicImage {
    let (width, height) = PLACEHOLDER_DIMS;
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([72, 72, 80])))
}

/// Pre-downscale large images before protocol encoding
///
/// Filter quality adapts to how far the image has to shrink: heavy
/// reductions take the fast filter, light ones keep the sharp one.
fn downscale_for_terminal(img: DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    if img.width() <= max_width && img.height() <= max_height {
        return img;
    }

    let scale_factor = (img.width() as f32 / max_width as f32)
        .max(img.height() as f32 / max_height as f32);

    let filter = if scale_factor > 4.0 {
        image::imageops::FilterType::Triangle
    } else if scale_factor > 2.0 {
        image::imageops::FilterType::CatmullRom
    } else {
        image::imageops::FilterType::Lanczos3
    };

    log_debug(&format!(
        "Downscaling {}x{} by {:.2}x with {:?}",
        img.width(),
        img.height(),
        scale_factor,
        filter
    ));

    img.resize(max_width, max_height, filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_matches_stand_in_dimensions() {
        let img = placeholder_image();
        assert_eq!((img.width(), img.height()), PLACEHOLDER_DIMS);
    }

    #[test]
    fn downscale_caps_large_images() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4000, 3000, Rgb([0, 0, 0])));
        let scaled = downscale_for_terminal(img, 400, 300);
        assert!(scaled.width() <= 400);
        assert!(scaled.height() <= 300);
    }

    #[test]
    fn downscale_leaves_small_images_alone() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 80, Rgb([0, 0, 0])));
        let scaled = downscale_for_terminal(img, 400, 300);
        assert_eq!((scaled.width(), scaled.height()), (100, 80));
    }
}
