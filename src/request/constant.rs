pub const TOR_PROXY_SCHEME: &str = "socks5h://127.0.0.1:9050";
pub const FIREFOX: &str = "FireFox";
pub const CHROME: &str = "Chrome";
pub const FIREFOX_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/113.0";
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const USER_AGENT_PARSE_ERROR: &str = "Failed to parsing UserAgent";

/// Baseline browser headers sent with every request. The user agent is set
/// on the client builder, not here.
pub const BASELINE_HEADERS: [(&str, &str); 8] = [
    ("Accept", "application/pdf,application/octet-stream,*/*"),
    ("Accept-Language", "zh-CN,zh;q=0.9,en;q=0.8"),
    ("Accept-Encoding", "gzip, deflate, br"),
    ("Connection", "keep-alive"),
    ("Sec-Fetch-Dest", "document"),
    ("Sec-Fetch-Mode", "navigate"),
    ("Sec-Fetch-Site", "cross-site"),
    ("Upgrade-Insecure-Requests", "1"),
];
