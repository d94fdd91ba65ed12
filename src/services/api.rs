use anyhow::{Context, Result};
use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{GalleryClient, ImageRecord};
use crate::log_debug;

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,   // User-initiated actions (listing reload, add, viewer image)
    Medium, // Visible thumbnails
    Low,    // Off-screen prefetching
}

/// What a byte fetch is for; routes the decoded result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Thumbnail,
    Full,
}

/// Unique identifier for tracking in-flight requests
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    Listing,
    Add { name: String, url: String },
    ImageBytes { url: String, kind: ImageKind },
    Download { url: String },
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Fetch the full image listing
    FetchImages,

    /// Submit a new record
    AddImage { name: String, url: String },

    /// Fetch raw bytes for a thumbnail or the viewer
    FetchImageBytes {
        url: String,
        kind: ImageKind,
        priority: Priority,
    },

    /// Fetch bytes and write them to disk
    DownloadImage { url: String, dest: PathBuf },
}

impl ApiRequest {
    /// Extract priority from request
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::FetchImageBytes { priority, .. } => *priority,
            // Listing, add, and download are all direct user actions
            _ => Priority::High,
        }
    }

    /// Generate a key for in-flight tracking
    fn key(&self) -> RequestKey {
        match self {
            ApiRequest::FetchImages => RequestKey::Listing,
            ApiRequest::AddImage { name, url } => RequestKey::Add {
                name: name.clone(),
                url: url.clone(),
            },
            ApiRequest::FetchImageBytes { url, kind, .. } => RequestKey::ImageBytes {
                url: url.clone(),
                kind: *kind,
            },
            ApiRequest::DownloadImage { url, .. } => RequestKey::Download { url: url.clone() },
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    ImagesResult {
        records: Result<Vec<ImageRecord>, anyhow::Error>,
    },

    AddResult {
        name: String,
        accepted: Result<bool, anyhow::Error>,
    },

    ImageBytesResult {
        url: String,
        kind: ImageKind,
        bytes: Result<Vec<u8>, anyhow::Error>,
    },

    DownloadResult {
        url: String,
        dest: PathBuf,
        written: Result<u64, anyhow::Error>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(RequestKey),
}

/// API service worker that processes requests in the background
pub struct ApiService {
    client: GalleryClient,
    request_queue: VecDeque<(ApiRequest, Priority)>,
    in_flight: HashSet<RequestKey>,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl ApiService {
    pub fn new(
        client: GalleryClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            in_flight: HashSet::new(),
            response_tx,
            completion_tx,
            max_concurrent: 10, // Limit concurrent HTTP calls
        }
    }

    /// Add a request to the queue
    ///
    /// No deduplication here; callers suppress repeat requests before
    /// sending (the loading flag for listings, the slot maps for image
    /// bytes). in_flight only enforces the concurrency cap.
    fn enqueue(&mut self, request: ApiRequest) {
        let priority = request.priority();

        // Insert based on priority (high priority at front)
        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p)| *p < priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority));
    }

    /// Process the next request from the queue
    async fn process_next(&mut self) {
        if self.in_flight.len() >= self.max_concurrent {
            return; // At capacity, wait for some to complete
        }

        let Some((request, _)) = self.request_queue.pop_front() else {
            return; // Queue is empty
        };

        let key = request.key();
        self.in_flight.insert(key.clone());

        // Clone what we need for the async task
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();
        let completion_key = key.clone();

        // Spawn task to handle this request
        // Note: no per-request retries anywhere in the gallery flows
        tokio::spawn(async move {
            let response = Self::execute_request(&client, request).await;

            let _ = response_tx.send(response);

            // Notify service that this request is complete
            let _ = completion_tx.send(InternalMessage::Completed(completion_key));
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(client: &GalleryClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::FetchImages => {
                let records = client.fetch_images().await;

                if let Err(e) = &records {
                    log_debug(&format!("DEBUG [API Service]: Listing fetch failed: {}", e));
                }

                ApiResponse::ImagesResult { records }
            }

            ApiRequest::AddImage { name, url } => {
                let accepted = client.add_image(&name, &url).await;

                ApiResponse::AddResult { name, accepted }
            }

            ApiRequest::FetchImageBytes { url, kind, .. } => {
                let bytes = client.fetch_image_bytes(&url).await;

                ApiResponse::ImageBytesResult { url, kind, bytes }
            }

            ApiRequest::DownloadImage { url, dest } => {
                let written = Self::download_to(client, &url, &dest).await;

                ApiResponse::DownloadResult { url, dest, written }
            }
        }
    }

    /// Fetch a record's bytes and write them next to the other downloads
    async fn download_to(client: &GalleryClient, url: &str, dest: &PathBuf) -> Result<u64> {
        let bytes = client.fetch_image_bytes(url).await?;
        let written = bytes.len() as u64;

        tokio::fs::write(dest, &bytes)
            .await
            .with_context(|| format!("Failed to write {}", dest.display()))?;

        Ok(written)
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: GalleryClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                // Receive new requests
                Some(request) = request_rx.recv() => {
                    service.enqueue(request);
                }

                // Handle completion notifications
                Some(InternalMessage::Completed(key)) = completion_rx.recv() => {
                    service.in_flight.remove(&key);
                }

                // Process queue at regular intervals
                _ = tick.tick() => {
                    // Process multiple requests per tick if queue has items
                    for _ in 0..5 {
                        if service.request_queue.is_empty() {
                            break;
                        }
                        service.process_next().await;
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
