//! End-to-end download tests against a local fixture server.

use super::extract::extract;
use super::manager::Downloader;
use crate::config::Config;
use crate::error::DownloadError;
use std::net::SocketAddr;
use warp::http::Response as HttpResponse;
use warp::Filter;

const PDF_BODY: &[u8] = b"%PDF-1.4\nfake body for download tests\n";
// `%PDF-1.4 gzip fixture body`, gzip -9
const GZIP_BODY: &[u8] = &[
    31, 139, 8, 0, 0, 0, 0, 0, 2, 3, 83, 13, 112, 113, 211, 53, 212, 51, 81, 72, 175, 202, 44, 80,
    72, 203, 172, 40, 41, 45, 74, 85, 72, 202, 79, 169, 4, 0, 237, 28, 148, 95, 26, 0, 0, 0,
];
const GZIP_DECODED: &[u8] = b"%PDF-1.4 gzip fixture body";

fn spawn_server() -> SocketAddr {
    let auth_doc = warp::path!("a" / "doc.pdf")
        .and(warp::header::optional::<String>("x-test"))
        .map(|token: Option<String>| {
            if token.as_deref() == Some("1") {
                HttpResponse::builder()
                    .header("content-type", "application/pdf")
                    .body(PDF_BODY.to_vec())
                    .unwrap()
            } else {
                HttpResponse::builder()
                    .status(403)
                    .body(Vec::<u8>::new())
                    .unwrap()
            }
        });

    let plain = warp::path!("plain.pdf").map(|| {
        HttpResponse::builder()
            .header("content-type", "application/pdf")
            .body(PDF_BODY.to_vec())
            .unwrap()
    });

    let html = warp::path!("page.pdf").map(|| {
        HttpResponse::builder()
            .header("content-type", "text/html; charset=utf-8")
            .body(b"<html>not a pdf</html>".to_vec())
            .unwrap()
    });

    let gzipped = warp::path!("gzipped.pdf").map(|| {
        HttpResponse::builder()
            .header("content-type", "application/pdf")
            .header("content-encoding", "gzip")
            .body(GZIP_BODY.to_vec())
            .unwrap()
    });

    let gone = warp::path!("gone.pdf").map(|| {
        HttpResponse::builder()
            .status(404)
            .body(Vec::<u8>::new())
            .unwrap()
    });

    let routes = auth_doc.or(plain).or(html).or(gzipped).or(gone);
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

fn viewer_url(addr: &SocketAddr, encoded_path: &str, headers_param: &str) -> String {
    format!(
        "https://viewer.example/web/viewer.html?file=http%3A%2F%2F{addr}{encoded_path}{headers_param}"
    )
}

fn downloader() -> Downloader {
    Downloader::new(&Config::default()).unwrap()
}

#[tokio::test]
async fn downloads_file_with_injected_headers() {
    let addr = spawn_server();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("doc.pdf");

    let url = viewer_url(
        &addr,
        "%2Fa%2Fdoc.pdf",
        "&headers=%7B%22X-Test%22%3A%221%22%7D",
    );
    let request = extract(&url, Some(output.to_string_lossy().into_owned())).unwrap();
    let result = downloader().download(&request).await.unwrap();

    assert_eq!(result.bytes_downloaded, PDF_BODY.len() as u64);
    assert_eq!(std::fs::read(&output).unwrap(), PDF_BODY);
}

#[tokio::test]
async fn forbidden_without_auth_headers() {
    let addr = spawn_server();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("doc.pdf");

    let url = viewer_url(&addr, "%2Fa%2Fdoc.pdf", "");
    let request = extract(&url, Some(output.to_string_lossy().into_owned())).unwrap();
    let err = downloader().download(&request).await.unwrap_err();

    assert!(matches!(err, DownloadError::Network(_)));
    assert!(!output.exists());
}

#[tokio::test]
async fn not_found_is_fatal() {
    let addr = spawn_server();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("gone.pdf");

    let url = viewer_url(&addr, "%2Fgone.pdf", "");
    let request = extract(&url, Some(output.to_string_lossy().into_owned())).unwrap();
    let err = downloader().download(&request).await.unwrap_err();

    assert!(matches!(err, DownloadError::Network(_)));
    assert!(!output.exists());
}

#[tokio::test]
async fn content_type_mismatch_still_downloads() {
    let addr = spawn_server();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("page.pdf");

    let url = viewer_url(&addr, "%2Fpage.pdf", "");
    let request = extract(&url, Some(output.to_string_lossy().into_owned())).unwrap();
    let result = downloader().download(&request).await.unwrap();

    assert_eq!(result.bytes_downloaded, b"<html>not a pdf</html>".len() as u64);
    assert_eq!(std::fs::read(&output).unwrap(), b"<html>not a pdf</html>");
}

#[tokio::test]
async fn gzip_encoded_body_is_decoded_to_disk() {
    let addr = spawn_server();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("gzipped.pdf");

    let url = viewer_url(&addr, "%2Fgzipped.pdf", "");
    let request = extract(&url, Some(output.to_string_lossy().into_owned())).unwrap();
    let result = downloader().download(&request).await.unwrap();

    assert_eq!(result.bytes_downloaded, GZIP_DECODED.len() as u64);
    assert_eq!(std::fs::read(&output).unwrap(), GZIP_DECODED);
}

#[tokio::test]
async fn connection_refused_fails_without_output() {
    // Bind then drop so the port is guaranteed unoccupied.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("doc.pdf");

    let url = format!(
        "https://viewer.example/web/viewer.html?file=http%3A%2F%2F127.0.0.1%3A{port}%2Fa%2Fdoc.pdf"
    );
    let request = extract(&url, Some(output.to_string_lossy().into_owned())).unwrap();
    let err = downloader().download(&request).await.unwrap_err();

    assert!(matches!(err, DownloadError::Network(_)));
    assert!(!output.exists());
}

#[tokio::test]
async fn repeated_download_reproduces_identical_file() {
    let addr = spawn_server();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("plain.pdf");

    let url = viewer_url(&addr, "%2Fplain.pdf", "");
    let request = extract(&url, Some(output.to_string_lossy().into_owned())).unwrap();

    let first = downloader().download(&request).await.unwrap();
    let after_first = std::fs::read(&output).unwrap();
    let second = downloader().download(&request).await.unwrap();
    let after_second = std::fs::read(&output).unwrap();

    assert_eq!(first.bytes_downloaded, second.bytes_downloaded);
    assert_eq!(after_first, after_second);
}
