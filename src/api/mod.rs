pub mod client;
pub mod models;

pub use client::SubtitleClient;
pub use models::ClientConfig;
