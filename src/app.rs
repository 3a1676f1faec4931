use std::path::PathBuf;

use futures::StreamExt;
use iced::Task;
use log::{info, warn};

use crate::api::SubtitleClient;
use crate::application::{
    choose_output_dir, BatchCoordinator, BatchEvent, BatchStatus, DirectorySink,
};
use crate::config::AppConfig;
use crate::domain::BatchRequest;
use crate::ui::{DownloadMessage, DownloadView};

pub struct DownloadApp {
    view: DownloadView,
    coordinator: BatchCoordinator<SubtitleClient>,
    status: BatchStatus,
    output_dir: Option<PathBuf>,
    // Held while the folder dialog is open
    pending_request: Option<BatchRequest>,
}

impl DownloadApp {
    pub fn new(config: AppConfig, client: SubtitleClient) -> Self {
        Self {
            view: DownloadView::with_base_url(config.base_url.clone()),
            coordinator: BatchCoordinator::new(client, config.pacing_delay()),
            status: BatchStatus::default(),
            output_dir: config.output_dir,
            pending_request: None,
        }
    }

    fn start_batch(&mut self, dir: PathBuf) -> Task<Message> {
        let Some(request) = self.pending_request.take() else {
            self.status.cancel();
            return Task::none();
        };

        let sink = DirectorySink::new(dir);
        self.view.status_message = format!("Downloading to: {}", sink.root().display());
        let events = self.coordinator.run(request, sink).map(Message::Batch);

        Task::stream(events)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(DownloadMessage),
    /// Folder chosen in the dialog, `None` when cancelled
    OutputDirSelected(Option<PathBuf>),
    Batch(BatchEvent),
}

pub fn update(app: &mut DownloadApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => {
            let pressed = matches!(ui_msg, DownloadMessage::DownloadPressed);
            app.view.update(ui_msg);

            if pressed && !app.status.is_running() {
                match BatchRequest::new(app.view.base_url.clone(), app.view.paths_text()) {
                    Ok(request) => {
                        app.status.prepare();
                        app.pending_request = Some(request);

                        if let Some(dir) = app.output_dir.clone() {
                            return app.start_batch(dir);
                        }

                        app.view.status_message = "Please select an output folder...".to_string();
                        return Task::perform(choose_output_dir(), Message::OutputDirSelected);
                    }
                    Err(e) => {
                        app.view.status_message = e.to_string();
                    }
                }
            }
        }
        Message::OutputDirSelected(Some(dir)) => {
            return app.start_batch(dir);
        }
        Message::OutputDirSelected(None) => {
            // User cancelled dialog
            app.pending_request = None;
            app.status.cancel();
            app.view.status_message = "Download cancelled".to_string();
        }
        Message::Batch(event) => {
            app.status.apply(&event);

            match &event {
                BatchEvent::Started(progress) => {
                    app.view.status_message = format!("Downloading {} file(s)...", progress.total);
                }
                BatchEvent::TaskCompleted { task, saved_to, .. } => {
                    app.view.status_message = format!(
                        "Saved {} to {}",
                        task.output_file_name,
                        saved_to.display()
                    );
                }
                BatchEvent::TaskFailed { task, error } => {
                    app.view.status_message =
                        format!("Skipped {}: {}", task.output_file_name, error);
                }
                BatchEvent::Finished(progress) => {
                    info!("Run complete");
                    app.view.status_message = format!(
                        "Done: {} / {} files downloaded",
                        progress.completed, progress.total
                    );
                }
                BatchEvent::Aborted(error) => {
                    warn!("Run aborted: {}", error);
                    app.view.status_message = "Download stopped".to_string();
                }
            }
        }
    }
    Task::none()
}

pub fn view(app: &DownloadApp) -> iced::Element<'_, Message> {
    app.view
        .view(&app.status.snapshot())
        .map(Message::UiMessage)
}
