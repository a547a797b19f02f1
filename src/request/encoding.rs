use anyhow::Error;
use async_compression::tokio::bufread::{BrotliDecoder, GzipDecoder, ZlibDecoder, ZstdDecoder};
use std::str::FromStr;
use tokio::io::{AsyncRead, BufReader};

type Decoder = Box<dyn AsyncRead + Unpin + Send>;

/// Decoder for the `Content-Encoding` a server applied to the response body.
/// The client advertises `Accept-Encoding` itself, so the body arrives raw
/// and has to be undone here; `Identity` passes bytes through untouched.
pub enum ContentDecoder {
    Brotli,
    Deflate,
    Gzip,
    Zstd,
    Identity,
}

impl ContentDecoder {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentDecoder::Brotli => "br",
            ContentDecoder::Deflate => "deflate",
            ContentDecoder::Gzip => "gzip",
            ContentDecoder::Zstd => "zstd",
            ContentDecoder::Identity => "identity",
        }
    }

    pub fn wrap<R: AsyncRead + Unpin + Send + 'static>(self, reader: R) -> Decoder {
        let buf_reader = BufReader::new(reader);
        match self {
            ContentDecoder::Brotli => Box::new(BrotliDecoder::new(buf_reader)),
            ContentDecoder::Deflate => Box::new(ZlibDecoder::new(buf_reader)),
            ContentDecoder::Gzip => Box::new(GzipDecoder::new(buf_reader)),
            ContentDecoder::Zstd => Box::new(ZstdDecoder::new(buf_reader)),
            ContentDecoder::Identity => Box::new(buf_reader),
        }
    }
}

impl FromStr for ContentDecoder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoder_type = match s.trim() {
            "br" | "brotli" => ContentDecoder::Brotli,
            "deflate" => ContentDecoder::Deflate,
            "gzip" | "x-gzip" => ContentDecoder::Gzip,
            "zstd" => ContentDecoder::Zstd,
            _ => ContentDecoder::Identity,
        };
        Ok(decoder_type)
    }
}
