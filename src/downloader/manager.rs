use super::constant::CHUNK_SIZE;
use super::dto::{DownloadRequest, DownloadResult};
use super::progress::ProgressBar;
use crate::config::Config;
use crate::error::Result;
use crate::request::client::Client;
use crate::request::encoding::ContentDecoder;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_util::io::StreamReader;

/// Streams one file from its direct URL to local storage.
pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: Client::new(config.use_tor, &config.user_agent)?,
        })
    }

    /// One GET, chunked sequential writes, no retries. The output file is
    /// only created once the server has answered with a success status, and
    /// the handle closes with this scope on every exit path.
    pub async fn download(&self, request: &DownloadRequest) -> Result<DownloadResult> {
        let response = self
            .client
            .get(&request.url, request.headers.as_ref())
            .await?
            .error_for_status()?;

        if let Some(content_type) = response.content_type() {
            let lowered = content_type.to_lowercase();
            if !lowered.contains("pdf") && !lowered.contains("application/octet-stream") {
                tracing::warn!("response content-type may not be a PDF: {content_type}");
            }
        }

        let total_size = response.content_length();
        if let Some(total) = total_size {
            println!("File size: {:.2} MB", total as f64 / 1024.0 / 1024.0);
        }

        let decoder = response
            .content_encoding()
            .unwrap_or_default()
            .parse::<ContentDecoder>()
            .unwrap_or(ContentDecoder::Identity);

        let progress = ProgressBar::new(request.output.clone(), total_size);
        let mut reader = decoder.wrap(StreamReader::new(response.bytes_stream()));
        let mut file = File::create(&request.output).await?;
        let mut buffer = [0u8; CHUNK_SIZE];
        let mut bytes_downloaded: u64 = 0;

        loop {
            let read = reader.read(&mut buffer).await?;
            if read == 0 {
                break;
            }
            file.write_all(&buffer[..read]).await?;
            bytes_downloaded += read as u64;
            progress.increase(read as u64);
        }

        file.flush().await?;
        progress.finish();

        Ok(DownloadResult {
            bytes_downloaded,
            filename: request.output.clone(),
        })
    }
}
