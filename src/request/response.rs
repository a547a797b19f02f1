use crate::error::Result;
use bytes::Bytes;
use futures::TryStreamExt;
use futures_core::Stream;
use reqwest::header::{HeaderName, CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::Response as ReqwestResponse;
use std::io;

#[derive(Debug)]
pub struct Response {
    inner: ReqwestResponse,
}

impl Response {
    pub fn new(response: ReqwestResponse) -> Self {
        Self { inner: response }
    }

    fn get_from_header(&self, header_name: HeaderName) -> Option<String> {
        if let Some(value) = self.inner.headers().get(header_name) {
            if let Ok(content) = value.to_str() {
                return Some(content.to_string());
            }
        }
        None
    }

    /// Turns a non-2xx status into an error.
    pub fn error_for_status(self) -> Result<Self> {
        Ok(Self {
            inner: self.inner.error_for_status()?,
        })
    }

    pub fn content_type(&self) -> Option<String> {
        self.get_from_header(CONTENT_TYPE)
    }

    pub fn content_encoding(&self) -> Option<String> {
        self.get_from_header(CONTENT_ENCODING)
    }

    pub fn content_length(&self) -> Option<u64> {
        if let Some(size) = self.get_from_header(CONTENT_LENGTH) {
            if let Ok(size) = size.parse::<u64>() {
                return Some(size);
            }
        }
        None
    }

    /// Body as a byte stream with errors lowered to `io::Error`, so it can
    /// feed a `StreamReader`.
    pub fn bytes_stream(self) -> impl Stream<Item = io::Result<Bytes>> + Unpin {
        self.inner
            .bytes_stream()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}
