use thiserror::Error;

/// Error definition for every fault the downloader can surface
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Returned when the viewer URL query string has no usable `file` value
    #[error("no file URL in the viewer URL query string")]
    MissingFileUrl,
    /// Returned when the viewer URL itself is not a parseable URL
    #[error("invalid viewer URL: {0}")]
    InvalidViewerUrl(#[from] url::ParseError),
    /// Returned when the `headers` value is not a JSON object of strings.
    /// Recovered at the extraction site; the download runs without them.
    #[error("failed to parse auth headers: {0}")]
    HeaderParse(#[from] serde_json::Error),
    /// Represents connection failures and non-success HTTP statuses
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Represents filesystem and body-stream faults
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for Result<T, DownloadError>
pub type Result<T> = std::result::Result<T, DownloadError>;
