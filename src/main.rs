mod cli;
mod config;
mod downloader;
mod error;
mod logging;
mod request;

#[tokio::main]
async fn main() {
    logging::init_logging();

    if let Err(e) = cli::run().await {
        eprintln!("Download failed: {e:#}");
        std::process::exit(1);
    }
}
