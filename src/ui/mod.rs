use iced::{
    widget::{button, column, progress_bar, text, text_editor, text_input, Space},
    Color, Element, Length,
};

use crate::application::BatchSnapshot;

/// Main view state
pub struct DownloadView {
    pub base_url: String,
    pub paths: text_editor::Content,
    pub status_message: String,
}

impl Default for DownloadView {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            paths: text_editor::Content::new(),
            status_message: "Enter a base URL and the paths to download".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum DownloadMessage {
    BaseUrlChanged(String),
    PathsEdited(text_editor::Action),
    DownloadPressed,
}

impl DownloadView {
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn update(&mut self, message: DownloadMessage) {
        match message {
            DownloadMessage::BaseUrlChanged(url) => {
                self.base_url = url;
            }
            DownloadMessage::PathsEdited(action) => {
                self.paths.perform(action);
            }
            DownloadMessage::DownloadPressed => {
                // Will be handled by the app
            }
        }
    }

    /// Editor contents without the trailing newline the editor always reports
    pub fn paths_text(&self) -> String {
        let mut raw = self.paths.text();
        if raw.ends_with('\n') {
            raw.pop();
        }
        raw
    }

    pub fn view(&self, snapshot: &BatchSnapshot) -> Element<'_, DownloadMessage> {
        let can_start =
            !self.base_url.is_empty() && !self.paths_text().is_empty() && !snapshot.is_running;

        let mut content = column![
            text("VTT File Downloader").size(32),
            Space::new().height(Length::Fixed(20.0)),
            text("Base URL").size(16),
            text_input("https://example.com/assets/courses/", &self.base_url)
                .on_input(DownloadMessage::BaseUrlChanged)
                .padding(10),
            text("Paths (one per line)").size(16),
            text_editor(&self.paths)
                .placeholder("/courses/example/lesson-1/\n/courses/example/lesson-2/")
                .on_action(DownloadMessage::PathsEdited)
                .height(256.0),
        ]
        .padding(20)
        .spacing(10);

        if let Some(error) = &snapshot.last_error {
            content = content.push(text(error.clone()).color(Color::from_rgb(0.8, 0.15, 0.15)));
        }

        if snapshot.is_running {
            content = content
                .push(progress_bar(0.0..=100.0, snapshot.percent))
                .push(
                    text(format!(
                        "Downloaded: {} / {} files",
                        snapshot.downloaded_files, snapshot.total_files
                    ))
                    .size(14),
                );
        }

        let label = if snapshot.is_running {
            "Downloading..."
        } else {
            "Download VTT Files"
        };

        content
            .push(text(&self.status_message).size(14))
            .push(
                button(label)
                    .on_press_maybe(can_start.then_some(DownloadMessage::DownloadPressed))
                    .padding([10, 20]),
            )
            .into()
    }
}
