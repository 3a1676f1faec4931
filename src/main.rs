mod api;
mod app;
mod application;
mod config;
mod domain;
mod ui;
mod utils;

use log::error;

use crate::{api::SubtitleClient, config::AppConfig};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load();
    let client = match SubtitleClient::new(config.client.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    iced::application(
        move || app::DownloadApp::new(config.clone(), client.clone()),
        app::update,
        app::view,
    )
    .title("VTT File Downloader")
    .run()
}
