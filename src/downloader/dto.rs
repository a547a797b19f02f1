use std::collections::HashMap;

/// A fully resolved download: where to fetch from, what to send, where to write.
#[derive(Clone, Debug)]
pub struct DownloadRequest {
    pub url: String,
    pub headers: Option<HashMap<String, String>>,
    pub output: String,
}

/// Outcome of a finished download.
#[derive(Clone, Debug)]
pub struct DownloadResult {
    pub bytes_downloaded: u64,
    pub filename: String,
}
