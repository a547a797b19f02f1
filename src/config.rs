use crate::request::user_agent::UserAgent;
use serde::{Deserialize, Serialize};
use tokio::fs;

pub const CONFIG_PATH: &str = "config.json";

/// Client options loaded from `config.json` in the working directory.
/// These never affect extraction semantics.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub use_tor: bool,
    pub user_agent: UserAgent,
}

impl Config {
    pub async fn load() -> Self {
        let data = match fs::read_to_string(CONFIG_PATH).await {
            Ok(data) => data,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&data) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to parse {CONFIG_PATH}: {e}");
                Self::default()
            }
        }
    }
}
