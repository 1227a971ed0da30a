use std::path::Path;

use futures_util::StreamExt;
use p7m_logging::p7m_info;
use thiserror::Error;

use crate::persist::{PersistError, StagedFile};
use crate::DownloadSettings;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("could not store download: {0}")]
    Persist(#[from] PersistError),
}

/// Fetches `url` into `destination`, returning the number of bytes written.
#[async_trait::async_trait]
pub trait Downloader: Send + Sync {
    async fn download(&self, url: &str, destination: &Path) -> Result<u64, DownloadError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestDownloader {
    settings: DownloadSettings,
}

impl ReqwestDownloader {
    pub fn new(settings: DownloadSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, DownloadError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| DownloadError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Downloader for ReqwestDownloader {
    async fn download(&self, url: &str, destination: &Path) -> Result<u64, DownloadError> {
        let parsed =
            reqwest::Url::parse(url).map_err(|err| DownloadError::InvalidUrl(err.to_string()))?;
        let client = self.build_client()?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::HttpStatus(status.as_u16()));
        }

        let dir = destination.parent().unwrap_or_else(|| Path::new("."));
        let mut staged = StagedFile::new_in(dir)?;
        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            staged.write_chunk(&chunk)?;
            written += chunk.len() as u64;
        }
        staged.commit(destination)?;

        p7m_info!("Downloaded {} bytes from {} to {:?}", written, url, destination);
        Ok(written)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> DownloadError {
    if err.is_timeout() {
        return DownloadError::Timeout(err.to_string());
    }
    DownloadError::Network(err.to_string())
}
