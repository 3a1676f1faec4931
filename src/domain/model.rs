use crate::{domain::AppError, utils::last_segment};

/// Extension appended to every output file
pub const SUBTITLE_EXTENSION: &str = "vtt";

/// User input for one batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub base_url: String,
    pub raw_paths: String,
}

impl BatchRequest {
    /// A run only starts when both fields are non-empty.
    pub fn new(base_url: impl Into<String>, raw_paths: impl Into<String>) -> Result<Self, AppError> {
        let base_url = base_url.into();
        let raw_paths = raw_paths.into();

        if base_url.is_empty() || raw_paths.is_empty() {
            return Err(AppError::InvalidInput);
        }

        Ok(Self {
            base_url,
            raw_paths,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub index: usize,
    pub source_url: String,
    pub output_file_name: String,
}

impl DownloadTask {
    /// Derive the file name and fetch URL for the entry at `index`.
    ///
    /// The URL is `base_url` followed by the output file name, not the
    /// original path: only the last segment of `path` survives.
    pub fn build(index: usize, path: &str, base_url: &str) -> Self {
        let output_file_name = format!(
            "{}-{}.{}",
            index,
            last_segment(path),
            SUBTITLE_EXTENSION
        );
        let source_url = format!("{}{}", base_url, output_file_name);

        Self {
            index,
            source_url,
            output_file_name,
        }
    }
}

/// Aggregate counters for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchProgress {
    pub total: usize,
    pub completed: usize,
    pub percent: f32,
}

impl BatchProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: 0,
            percent: 0.0,
        }
    }

    /// Count the task at `index` as done. Percent tracks the position of the
    /// last completed task, so skipped tasks before it are included.
    pub fn record_completion(&mut self, index: usize) {
        self.completed += 1;
        if self.total > 0 {
            self.percent = (index + 1) as f32 * 100.0 / self.total as f32;
        }
    }
}
