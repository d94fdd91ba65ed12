use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// One gallery record as served by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRecord {
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
}

impl ImageRecord {
    /// Caption text; records uploaded without a name show a fixed fallback
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled")
    }
}

/// Body shapes the listing endpoint is known to produce
///
/// Older deployments return a bare array, newer ones wrap it in an
/// `images` key. Anything else is treated as zero records.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListingBody {
    Bare(Vec<ImageRecord>),
    Wrapped { images: Vec<ImageRecord> },
    Other(serde_json::Value),
}

/// Extract records from a listing response body, tolerating both
/// supported shapes and degrading everything else to an empty list
pub fn parse_listing(body: serde_json::Value) -> Vec<ImageRecord> {
    match serde_json::from_value(body) {
        Ok(ListingBody::Bare(records)) => records,
        Ok(ListingBody::Wrapped { images }) => images,
        _ => Vec::new(),
    }
}

#[derive(Debug, Serialize)]
struct NewImage<'a> {
    name: &'a str,
    url: &'a str,
}

/// HTTP client for the gallery API
#[derive(Clone)]
pub struct GalleryClient {
    api_url: String,
    client: Client,
}

impl GalleryClient {
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            client: Client::new(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch the full image listing
    pub async fn fetch_images(&self) -> Result<Vec<ImageRecord>> {
        let response = self
            .client
            .get(&self.api_url)
            .send()
            .await
            .context("Failed to fetch image listing")?;

        let body: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse image listing")?;

        Ok(parse_listing(body))
    }

    /// Submit a new record
    ///
    /// Success is judged by the response status alone; the body is not
    /// inspected. The server requires the charset-qualified content type,
    /// which reqwest's `json()` helper would not send.
    pub async fn add_image(&self, name: &str, url: &str) -> Result<bool> {
        let payload = serde_json::to_string(&NewImage { name, url })
            .context("Failed to encode new image")?;

        let response = self
            .client
            .post(&self.api_url)
            .header("Content-Type", "application/json; charset=UTF-8")
            .body(payload)
            .send()
            .await
            .context("Failed to submit new image")?;

        Ok(response.status().is_success())
    }

    /// Fetch raw image bytes (thumbnails, viewer, downloads)
    pub async fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch image {}", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Image fetch returned {}", status);
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read image bytes")?;

        Ok(bytes.to_vec())
    }
}
