use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_url: String,
    #[serde(default)]
    pub download_dir: Option<String>,
    #[serde(default = "default_true")]
    pub image_preview_enabled: bool,
    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,
    #[serde(default)]
    pub controls: Controls,
}

/// Feature toggles; a missing entry means the control is shown
#[derive(Debug, Clone, Deserialize)]
pub struct Controls {
    #[serde(default = "default_true")]
    pub add: bool,
    #[serde(default = "default_true")]
    pub sort: bool,
    #[serde(default = "default_true")]
    pub shuffle: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            add: true,
            sort: true,
            shuffle: true,
        }
    }
}

impl Config {
    /// Minimal config for running straight from --url
    pub fn with_url(api_url: String) -> Self {
        Self {
            api_url,
            download_dir: None,
            image_preview_enabled: true,
            image_protocol: default_image_protocol(),
            controls: Controls::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_image_protocol() -> String {
    "auto".to_string()
}
