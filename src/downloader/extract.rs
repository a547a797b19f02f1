use super::constant::{FALLBACK_FILENAME, FILE_PARAM, HEADERS_PARAM, PDF_EXTENSION};
use super::dto::DownloadRequest;
use crate::error::{DownloadError, Result};
use std::collections::HashMap;
use url::Url;

/// Pull the target file URL and auth headers out of a viewer page URL.
///
/// The `file` query value is required and, once form-decoded, is the target
/// URL verbatim. The `headers` value is optional JSON; when it is malformed
/// the condition is logged and the download runs without injected headers.
pub fn extract(viewer_url: &str, output: Option<String>) -> Result<DownloadRequest> {
    let parsed = Url::parse(viewer_url)?;

    let url = query_value(&parsed, FILE_PARAM)
        .filter(|value| !value.is_empty())
        .ok_or(DownloadError::MissingFileUrl)?;

    let headers = query_value(&parsed, HEADERS_PARAM).and_then(|raw| {
        match parse_header_map(&raw) {
            Ok(map) => Some(map),
            Err(e) => {
                tracing::warn!("ignoring malformed auth headers: {e}");
                None
            }
        }
    });

    let output = output.unwrap_or_else(|| derive_filename(&url));

    Ok(DownloadRequest {
        url,
        headers,
        output,
    })
}

fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

fn parse_header_map(raw: &str) -> Result<HashMap<String, String>> {
    Ok(serde_json::from_str(raw)?)
}

/// Basename of the target URL path, percent-decoded so encoded non-ASCII
/// titles come out readable. Falls back to a fixed name when the basename
/// is empty or is not a `.pdf`.
fn derive_filename(file_url: &str) -> String {
    let basename = match Url::parse(file_url) {
        Ok(parsed) => percent_decode(parsed.path().rsplit('/').next().unwrap_or("")),
        Err(_) => return FALLBACK_FILENAME.to_string(),
    };
    if basename.is_empty() || !basename.ends_with(PDF_EXTENSION) {
        return FALLBACK_FILENAME.to_string();
    }
    basename
}

/// UTF-8 percent-decoding; path separators in the decoded name are replaced
/// so the result stays a plain filename.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'%' && index + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[index + 1]), hex_value(bytes[index + 2]))
            {
                out.push((hi << 4) | lo);
                index += 3;
                continue;
            }
        }
        out.push(bytes[index]);
        index += 1;
    }
    String::from_utf8_lossy(&out).replace(['/', '\\'], "_")
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
