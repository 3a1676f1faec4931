use std::{
    future::Future,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use bytes::Bytes;
use log::{debug, warn};
use tokio::io::AsyncWriteExt;

use crate::{domain::AppError, utils::sanitize_filename};

/// Destination for fetched files
pub trait FileSink: Send + Sync + 'static {
    /// Called once before the first task. An error here aborts the run.
    fn prepare(&self) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Store `contents` under the suggested `file_name`, returning where it landed.
    fn save(
        &self,
        file_name: &str,
        contents: Bytes,
    ) -> impl Future<Output = Result<PathBuf, AppError>> + Send;
}

/// Writes every file into one directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

impl FileSink for DirectorySink {
    async fn prepare(&self) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::Io(format!(
                "Failed to create output directory {}: {}",
                self.root.display(),
                e
            ))
        })
    }

    /// The file only appears under its final name once fully written.
    async fn save(&self, file_name: &str, contents: Bytes) -> Result<PathBuf, AppError> {
        let file_name = sanitize_filename(file_name);
        let path = self.root.join(&file_name);
        let part = self.root.join(format!("{}.{}", file_name, PART_EXTENSION));

        let written = match write_part(&part, &contents).await {
            Ok(()) => tokio::fs::rename(&part, &path)
                .await
                .map_err(|e| AppError::Io(format!("Failed to move file into place: {}", e))),
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            if let Err(cleanup) = tokio::fs::remove_file(&part).await {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!("Failed to remove {}: {}", part.display(), cleanup);
                }
            }
            return Err(e);
        }

        debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(path)
    }
}

/// Suffix of the temporary file a save writes before renaming
const PART_EXTENSION: &str = "part";

async fn write_part(part: &Path, contents: &[u8]) -> Result<(), AppError> {
    let mut file = tokio::fs::File::create(part)
        .await
        .map_err(|e| AppError::Io(format!("Failed to create file: {}", e)))?;

    file.write_all(contents)
        .await
        .map_err(|e| AppError::Io(format!("Write error: {}", e)))?;

    file.sync_all()
        .await
        .map_err(|e| AppError::Io(format!("Failed to sync file: {}", e)))
}

/// Ask the user where the batch should be saved
pub async fn choose_output_dir() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Choose a folder for the subtitle files")
        .pick_folder()
        .await
        .map(|handle| handle.path().to_path_buf())
}
