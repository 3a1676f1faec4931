use super::batch_coordinator::BatchEvent;
use crate::domain::BatchProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPhase {
    #[default]
    Idle,
    /// Waiting for the user to pick an output folder
    Preparing,
    Running,
}

/// Read-only view of the current run for the presentation layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSnapshot {
    pub total_files: usize,
    pub downloaded_files: usize,
    pub percent: f32,
    pub is_running: bool,
    pub last_error: Option<String>,
}

/// Run state, advanced only through the transitions below.
#[derive(Debug, Clone, Default)]
pub struct BatchStatus {
    phase: BatchPhase,
    progress: BatchProgress,
    last_error: Option<String>,
}

impl BatchStatus {
    pub fn is_running(&self) -> bool {
        self.phase != BatchPhase::Idle
    }

    /// Idle -> Preparing. Clears the previous run's counters and error.
    pub fn prepare(&mut self) {
        self.phase = BatchPhase::Preparing;
        self.progress = BatchProgress::default();
        self.last_error = None;
    }

    /// Preparing -> Idle without a run
    pub fn cancel(&mut self) {
        self.phase = BatchPhase::Idle;
    }

    pub fn apply(&mut self, event: &BatchEvent) {
        match event {
            BatchEvent::Started(progress) => {
                self.phase = BatchPhase::Running;
                self.progress = progress.clone();
                self.last_error = None;
            }
            BatchEvent::TaskCompleted { progress, .. } => {
                self.progress = progress.clone();
            }
            // Per-task failures only show up in the log
            BatchEvent::TaskFailed { .. } => {}
            BatchEvent::Finished(progress) => {
                self.progress = progress.clone();
                self.phase = BatchPhase::Idle;
            }
            BatchEvent::Aborted(error) => {
                self.last_error = Some(error.to_string());
                self.phase = BatchPhase::Idle;
            }
        }
    }

    pub fn snapshot(&self) -> BatchSnapshot {
        BatchSnapshot {
            total_files: self.progress.total,
            downloaded_files: self.progress.completed,
            percent: self.progress.percent,
            is_running: self.is_running(),
            last_error: self.last_error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::{AppError, DownloadTask};

    fn completed(index: usize, total: usize) -> BatchEvent {
        let mut progress = BatchProgress::new(total);
        progress.record_completion(index);
        BatchEvent::TaskCompleted {
            task: DownloadTask::build(index, "x", "https://x.test/"),
            saved_to: PathBuf::from("x.vtt"),
            progress,
        }
    }

    #[test]
    fn test_run_lifecycle() {
        let mut status = BatchStatus::default();
        assert!(!status.is_running());

        status.prepare();
        assert_eq!(status.phase, BatchPhase::Preparing);

        status.apply(&BatchEvent::Started(BatchProgress::new(2)));
        assert_eq!(status.phase, BatchPhase::Running);

        status.apply(&completed(0, 2));
        status.apply(&BatchEvent::TaskFailed {
            task: DownloadTask::build(1, "y", "https://x.test/"),
            error: AppError::Fetch("boom".to_string()),
        });

        let snapshot = status.snapshot();
        assert_eq!(snapshot.total_files, 2);
        assert_eq!(snapshot.downloaded_files, 1);
        assert_eq!(snapshot.percent, 50.0);
        assert!(snapshot.is_running);
        assert_eq!(snapshot.last_error, None);

        let mut progress = BatchProgress::new(2);
        progress.record_completion(0);
        status.apply(&BatchEvent::Finished(progress));
        assert_eq!(status.phase, BatchPhase::Idle);
        assert_eq!(status.snapshot().downloaded_files, 1);
    }

    #[test]
    fn test_abort_sets_error_and_stops() {
        let mut status = BatchStatus::default();
        status.prepare();
        status.apply(&BatchEvent::Aborted(AppError::Io("disk full".to_string())));

        let snapshot = status.snapshot();
        assert!(!snapshot.is_running);
        assert_eq!(snapshot.last_error.as_deref(), Some("I/O error: disk full"));
    }

    #[test]
    fn test_prepare_resets_previous_run() {
        let mut status = BatchStatus::default();
        status.apply(&BatchEvent::Started(BatchProgress::new(1)));
        status.apply(&completed(0, 1));
        status.apply(&BatchEvent::Aborted(AppError::Io("x".to_string())));

        status.prepare();

        let snapshot = status.snapshot();
        assert_eq!(snapshot.total_files, 0);
        assert_eq!(snapshot.downloaded_files, 0);
        assert_eq!(snapshot.last_error, None);
        assert!(snapshot.is_running);

        status.cancel();
        assert!(!status.is_running());
    }
}
