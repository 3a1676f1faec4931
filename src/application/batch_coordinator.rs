use std::{future::Future, path::PathBuf, time::Duration};

use bytes::Bytes;
use futures::{stream::BoxStream, StreamExt};
use log::{debug, error, info};

use super::file_sink::FileSink;
use crate::{
    domain::{AppError, BatchProgress, BatchRequest, DownloadTask},
    utils::parse_paths,
};

/// Fixed wait between two task attempts
pub const DEFAULT_PACING: Duration = Duration::from_millis(500);

/// Where subtitle bodies come from
pub trait SubtitleSource: Send + Sync + 'static {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Bytes, AppError>> + Send;
}

#[derive(Debug, Clone)]
pub enum BatchEvent {
    Started(BatchProgress),
    TaskCompleted {
        task: DownloadTask,
        saved_to: PathBuf,
        progress: BatchProgress,
    },
    TaskFailed {
        task: DownloadTask,
        error: AppError,
    },
    Finished(BatchProgress),
    /// The run stopped before finishing. Files already saved stay on disk.
    Aborted(AppError),
}

#[derive(Clone)]
pub struct BatchCoordinator<S> {
    source: S,
    pacing: Duration,
}

impl<S> BatchCoordinator<S>
where
    S: SubtitleSource + Clone,
{
    pub fn new(source: S, pacing: Duration) -> Self {
        Self { source, pacing }
    }

    /// Download every entry of `request` in input order, one at a time.
    ///
    /// The stream is finite and ends with `Finished` or `Aborted`. A failed
    /// task is reported and skipped; it never stops the batch.
    pub fn run<K>(&self, request: BatchRequest, sink: K) -> BoxStream<'static, BatchEvent>
    where
        K: FileSink,
    {
        futures::stream::unfold(
            BatchRuntimeState::Start {
                source: self.source.clone(),
                sink,
                request,
                pacing: self.pacing,
            },
            |state| async move {
                match state {
                    BatchRuntimeState::Start {
                        source,
                        sink,
                        request,
                        pacing,
                    } => {
                        if let Err(e) = sink.prepare().await {
                            error!("Batch aborted: {}", e);
                            return Some((BatchEvent::Aborted(e), BatchRuntimeState::Finished));
                        }

                        let paths = parse_paths(&request.raw_paths);
                        let progress = BatchProgress::new(paths.len());
                        info!(
                            "Starting batch of {} file(s) from {}",
                            paths.len(),
                            request.base_url
                        );

                        Some((
                            BatchEvent::Started(progress.clone()),
                            BatchRuntimeState::Running {
                                source,
                                sink,
                                base_url: request.base_url,
                                paths,
                                next: 0,
                                progress,
                                pacing,
                            },
                        ))
                    }
                    BatchRuntimeState::Running {
                        source,
                        sink,
                        base_url,
                        paths,
                        next,
                        mut progress,
                        pacing,
                    } => {
                        // Applies after every attempt, including the last one.
                        if next > 0 {
                            tokio::time::sleep(pacing).await;
                        }

                        let Some(path) = paths.get(next) else {
                            info!(
                                "Batch finished: {}/{} file(s) downloaded",
                                progress.completed, progress.total
                            );
                            return Some((
                                BatchEvent::Finished(progress),
                                BatchRuntimeState::Finished,
                            ));
                        };

                        let task = DownloadTask::build(next, path, &base_url);
                        let event = match fetch_and_save(&source, &sink, &task).await {
                            Ok(saved_to) => {
                                progress.record_completion(task.index);
                                info!(
                                    "Saved {} ({}/{})",
                                    task.output_file_name, progress.completed, progress.total
                                );
                                BatchEvent::TaskCompleted {
                                    task,
                                    saved_to,
                                    progress: progress.clone(),
                                }
                            }
                            Err(e) => {
                                error!("Error downloading {}: {}", task.source_url, e);
                                BatchEvent::TaskFailed { task, error: e }
                            }
                        };

                        Some((
                            event,
                            BatchRuntimeState::Running {
                                source,
                                sink,
                                base_url,
                                paths,
                                next: next + 1,
                                progress,
                                pacing,
                            },
                        ))
                    }
                    BatchRuntimeState::Finished => None,
                }
            },
        )
        .boxed()
    }
}

async fn fetch_and_save<S, K>(source: &S, sink: &K, task: &DownloadTask) -> Result<PathBuf, AppError>
where
    S: SubtitleSource,
    K: FileSink,
{
    debug!("Fetching task {}: {}", task.index, task.source_url);
    let body = source.fetch(&task.source_url).await?;
    sink.save(&task.output_file_name, body).await
}

enum BatchRuntimeState<S, K> {
    Start {
        source: S,
        sink: K,
        request: BatchRequest,
        pacing: Duration,
    },
    Running {
        source: S,
        sink: K,
        base_url: String,
        paths: Vec<String>,
        next: usize,
        progress: BatchProgress,
        pacing: Duration,
    },
    Finished,
}
