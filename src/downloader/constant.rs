pub const FILE_PARAM: &str = "file";
pub const HEADERS_PARAM: &str = "headers";

/// Output name used when the target URL yields no usable basename.
pub const FALLBACK_FILENAME: &str = "downloaded_file.pdf";
pub const PDF_EXTENSION: &str = ".pdf";

/// One network read per loop iteration lands in a buffer this size.
pub const CHUNK_SIZE: usize = 8192;
