use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use log::{debug, info, warn};
use serde::Deserialize;

use crate::{api::ClientConfig, application::batch_coordinator::DEFAULT_PACING};

/// Looked up in the working directory at startup
pub const CONFIG_FILE_NAME: &str = "vtt-downloader.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefills the base URL field
    pub base_url: String,
    /// Skip the folder dialog and always save here
    pub output_dir: Option<PathBuf>,
    pub pacing_delay_ms: u64,
    pub client: ClientConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            output_dir: None,
            pacing_delay_ms: DEFAULT_PACING.as_millis() as u64,
            client: ClientConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    /// Read `path`, falling back to defaults when it is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                warn!("Failed to read {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Invalid config in {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn pacing_delay(&self) -> Duration {
        Duration::from_millis(self.pacing_delay_ms)
    }
}
