//! App Orchestration
//!
//! `App` owns everything the pure model cannot: the HTTP client, the
//! background service channels, the terminal graphics picker, and the
//! decoded image slots. Submodules group its methods by domain:
//! - gallery: store loading, adding, reordering, grid cursor
//! - images: background byte fetch and decode pipeline
//! - viewer: lightbox sequencing and downloads

pub(crate) mod gallery;
pub(crate) mod images;
pub(crate) mod viewer;

use std::collections::HashMap;
use std::path::PathBuf;

use ratatui::layout::Rect;
use ratatui_image::picker::{Picker, ProtocolType};
use tokio::sync::mpsc;

use crate::api::GalleryClient;
use crate::config::{Config, Controls};
use crate::log_debug;
use crate::model::Model;
use crate::services::api::{spawn_api_service, ApiRequest, ApiResponse};
use crate::ui::viewer::ViewerHitAreas;
use crate::utils;
use images::{ImageSlotState, ImageUpdate};

pub struct App {
    /// Pure application state
    pub model: Model,

    /// HTTP client shared with the background worker
    pub client: GalleryClient,

    /// Requests into the API service
    pub api_tx: mpsc::UnboundedSender<ApiRequest>,

    /// Responses out of the API service
    pub api_rx: mpsc::UnboundedReceiver<ApiResponse>,

    /// Terminal graphics picker (None when previews are disabled)
    pub image_picker: Option<Picker>,

    /// Decoded image results from background tasks
    pub image_update_tx: mpsc::UnboundedSender<ImageUpdate>,
    pub image_update_rx: mpsc::UnboundedReceiver<ImageUpdate>,

    /// Decoded grid thumbnails by record url
    pub thumbnails: HashMap<String, ImageSlotState>,

    /// Decoded viewer images by record url
    pub full_images: HashMap<String, ImageSlotState>,

    /// Where downloads land
    pub download_dir: PathBuf,

    /// Which gallery controls the config enables
    pub controls: Controls,

    /// Cell size in px, for swipe distances and viewer fit math
    pub font_size: (u16, u16),

    /// Grid columns from the last render, for cursor movement
    pub grid_columns: usize,

    /// Card rects recorded at render time for mouse hit-testing
    pub card_hits: Vec<(Rect, usize)>,

    /// Viewer control rects recorded at render time
    pub viewer_hits: ViewerHitAreas,

    /// Add dialog rect recorded at render time, for scrim clicks
    pub add_form_rect: Rect,
}

impl App {
    pub fn new(config: Config) -> Self {
        let client = GalleryClient::new(config.api_url.clone());

        // Spawn API service worker
        let (api_tx, api_rx) = spawn_api_service(client.clone());

        // Channel for decoded image updates
        let (image_update_tx, image_update_rx) = mpsc::unbounded_channel();

        let image_picker = if config.image_preview_enabled {
            Some(build_picker(&config.image_protocol))
        } else {
            log_debug("Image preview disabled in config");
            None
        };

        let font_size = image_picker
            .as_ref()
            .map(|picker| picker.font_size())
            .unwrap_or((8, 16));

        let mut model = Model::new();
        model.ui.loading_images = true;

        let app = Self {
            model,
            client,
            api_tx,
            api_rx,
            image_picker,
            image_update_tx,
            image_update_rx,
            thumbnails: HashMap::new(),
            full_images: HashMap::new(),
            download_dir: utils::resolve_download_dir(config.download_dir.as_deref()),
            controls: config.controls,
            font_size,
            grid_columns: 1,
            card_hits: Vec::new(),
            viewer_hits: ViewerHitAreas::default(),
            add_form_rect: Rect::default(),
        };

        // Initial listing fetch goes through the worker like any other
        let _ = app.api_tx.send(ApiRequest::FetchImages);

        app
    }
}

/// Query the terminal for its graphics protocol and font size
///
/// Terminals that answer nothing get a halfblocks-capable fallback with
/// a typical monospace cell size.
fn build_picker(protocol: &str) -> Picker {
    let mut picker = match Picker::from_query_stdio() {
        Ok(picker) => picker,
        Err(e) => {
            log_debug(&format!(
                "Image preview: terminal query failed ({}), using fallback",
                e
            ));
            Picker::from_fontsize((8, 16))
        }
    };

    match protocol.to_lowercase().as_str() {
        "auto" => {}
        "iterm2" => picker.set_protocol_type(ProtocolType::Iterm2),
        "kitty" => picker.set_protocol_type(ProtocolType::Kitty),
        "sixel" => picker.set_protocol_type(ProtocolType::Sixel),
        "halfblocks" => picker.set_protocol_type(ProtocolType::Halfblocks),
        unknown => {
            log_debug(&format!(
                "Image preview: unknown protocol '{}', keeping auto-detected",
                unknown
            ));
        }
    }

    picker
}
