//! API Response Handler
//!
//! Applies background service responses to app state.
//!
//! Response types:
//! - ImagesResult: the gallery listing
//! - AddResult: outcome of posting a new record
//! - ImageBytesResult: raw bytes for a thumbnail or viewer decode
//! - DownloadResult: outcome of saving an image to disk

use crate::app::images::{placeholder_image, ImageSlotState, ImageUpdate};
use crate::log_debug;
use crate::services::api::ApiResponse;
use crate::utils::format_bytes;
use crate::App;

/// Handle one response from the background service
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::ImagesResult { records } => {
            app.model.ui.loading_images = false;

            match records {
                Ok(records) => app.apply_images(records),
                Err(e) => {
                    // Fail soft: an unreachable server reads as an
                    // empty gallery, same as an empty listing
                    log_debug(&format!("Listing fetch failed: {}", e));
                    app.apply_images(Vec::new());
                }
            }
        }

        ApiResponse::AddResult { name, accepted } => match accepted {
            Ok(true) => {
                app.model.ui.add_form = None;
                app.model.show_toast(format!("Added \"{}\"", name));
                app.reload_images();
            }
            Ok(false) => {
                app.model.ui.alert = Some("Error adding image".to_string());
            }
            Err(e) => {
                log_debug(&format!("Add request failed: {}", e));
                app.model.ui.alert = Some("Error adding image".to_string());
            }
        },

        ApiResponse::ImageBytesResult { url, kind, bytes } => match bytes {
            Ok(bytes) => app.decode_image_bytes(url, kind, bytes),
            Err(e) => {
                log_debug(&format!("Byte fetch failed for {}: {}", url, e));
                let protocol = app
                    .image_picker
                    .as_ref()
                    .map(|picker| picker.new_resize_protocol(placeholder_image()));
                app.apply_image_update(ImageUpdate {
                    url,
                    kind,
                    state: ImageSlotState::Failed { protocol },
                });
            }
        },

        ApiResponse::DownloadResult { url, dest, written } => match written {
            Ok(written) => {
                let file = dest
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| dest.display().to_string());
                app.model
                    .show_toast(format!("Saved {} ({})", file, format_bytes(written)));
            }
            Err(e) => {
                log_debug(&format!("Download failed for {}: {}", url, e));
                app.model.show_toast("Error: download failed".to_string());
            }
        },
    }
}
