use crate::config::Config;
use crate::downloader::extract::extract;
use crate::downloader::manager::Downloader;
use crate::request::user_agent::UserAgent;
use anyhow::Result;
use clap::Parser;

/// Built-in example used when the tool is run without arguments.
const EXAMPLE_VIEWER_URL: &str = "https://basic.smartedu.cn/pdfjs/2.15/web/viewer.html?hasCatalog=true&file=https://r2-ndr-private.ykt.cbern.com.cn/edu_product/esp/assets/6e764703-6e5e-4ea3-9462-34652c2678ef.pkg/%E6%99%AE%E9%80%9A%E9%AB%98%E4%B8%AD%E6%95%99%E7%A7%91%E4%B9%A6%20%E6%95%B0%E5%AD%A6%20%E5%BF%85%E4%BF%AE%20%E7%AC%AC%E4%B8%80%E5%86%8C%EF%BC%88A%E7%89%88%EF%BC%89_1756191767678.pdf&headers=%7B%22X-ND-AUTH%22:%22MAC%20id=%5C%227F938B205F876FC3A30551F3A4931383AB46A5ED796633E20D6DC75C2AC2026271FC1F534015D41532711DFCD23A05B458D55BA71C5C46ED%5C%22,nonce=%5C%221757236081267:UAB14BP1%5C%22,mac=%5C%22p64LFHYxuftVDEr41AqIyM/GNmTAKXDdDbsYcmPWwLw=%5C%22%22%7D#disablestream=true";
const EXAMPLE_OUTPUT_FILENAME: &str = "普通高中教科书_数学_必修_第一册_A版.pdf";

/// Download textbook PDFs referenced by viewer page URLs.
#[derive(Debug, Parser)]
#[command(name = "smartedu-dl")]
#[command(about = "Download PDFs referenced by SmartEdu viewer page URLs", long_about = None)]
pub struct Cli {
    /// Viewer page URL whose query string carries `file` and `headers`.
    pub viewer_url: Option<String>,

    /// Output filename; derived from the file URL when omitted.
    pub output: Option<String>,

    /// Impersonated browser (Chrome or FireFox); overrides the config file.
    #[arg(long)]
    pub user_agent: Option<UserAgent>,

    /// Route the download through the local Tor SOCKS proxy.
    #[arg(long)]
    pub tor: bool,
}

pub async fn run() -> Result<()> {
    run_with(Cli::parse()).await
}

async fn run_with(cli: Cli) -> Result<()> {
    let mut config = Config::load().await;
    if let Some(user_agent) = cli.user_agent {
        config.user_agent = user_agent;
    }
    if cli.tor {
        config.use_tor = true;
    }

    let (viewer_url, output) = match cli.viewer_url {
        Some(url) => (url, cli.output),
        None => (
            EXAMPLE_VIEWER_URL.to_string(),
            Some(EXAMPLE_OUTPUT_FILENAME.to_string()),
        ),
    };

    println!("SmartEdu PDF downloader");
    println!("{}", "=".repeat(50));
    println!("Target URL: {viewer_url:.100}...");

    let request = extract(&viewer_url, output)?;
    println!("File URL: {}", request.url);
    if let Some(headers) = &request.headers {
        println!("Auth headers: {headers:?}");
    }
    println!("Starting download: {}", request.output);

    let downloader = Downloader::new(&config)?;
    let result = downloader.download(&request).await?;

    println!("Download complete: {}", result.filename);
    println!(
        "File size: {:.2} MB",
        result.bytes_downloaded as f64 / 1024.0 / 1024.0
    );
    Ok(())
}
