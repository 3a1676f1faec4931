use std::time::Duration;

use bytes::Bytes;
use log::debug;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use super::models::ClientConfig;
use crate::{application::SubtitleSource, domain::AppError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to fetch {url}: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Clone)]
pub struct SubtitleClient {
    http: Client,
}

impl SubtitleClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
        })
    }

    /// GET `url` and return the whole body. Any non-2xx status is an error.
    pub async fn fetch_file(&self, url: &str) -> Result<Bytes> {
        let parsed = Url::parse(url).map_err(|e| ApiError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        debug!("GET {}", parsed);
        let response = self.http.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.bytes().await?)
    }
}

impl SubtitleSource for SubtitleClient {
    async fn fetch(&self, url: &str) -> std::result::Result<Bytes, AppError> {
        self.fetch_file(url)
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SubtitleClient {
        SubtitleClient::new(ClientConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_file_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/0-lesson-1.vtt")
            .with_status(200)
            .with_body("WEBVTT\n\n00:00.000 --> 00:01.000\nhello\n")
            .create_async()
            .await;

        let url = format!("{}/0-lesson-1.vtt", server.url());
        let body = client().fetch_file(&url).await.unwrap();

        assert!(body.starts_with(b"WEBVTT"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_file_rejects_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/1-missing.vtt")
            .with_status(404)
            .create_async()
            .await;

        let url = format!("{}/1-missing.vtt", server.url());
        let err = client().fetch_file(&url).await.unwrap_err();

        match err {
            ApiError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_file_rejects_invalid_url() {
        let err = client().fetch_file("not a url0-x.vtt").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_source_maps_to_fetch_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/2-x.vtt")
            .with_status(500)
            .create_async()
            .await;

        let url = format!("{}/2-x.vtt", server.url());
        let err = client().fetch(&url).await.unwrap_err();

        assert!(matches!(err, AppError::Fetch(msg) if msg.contains("500")));
    }
}
