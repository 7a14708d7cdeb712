use crate::config::cli::Args;
use crate::error::{IdleError, Result};
use clap::Parser;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub(crate) mod cli;

/// Id of the node on the profile games page that embeds the games list.
pub const GAMESLIST_ELEMENT_ID: &str = "gameslist_config";

/// Steam refuses to report more games than this as played at once.
pub const MAX_GAMES_PLAYED_CONCURRENTLY: usize = 32;

pub const STEAM_COMMUNITY_URL: &str = "https://steamcommunity.com/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    pub element_id: String,
    pub max_games: usize,
    pub community_url: String,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            element_id: GAMESLIST_ELEMENT_ID.to_string(),
            max_games: MAX_GAMES_PLAYED_CONCURRENTLY,
            community_url: STEAM_COMMUNITY_URL.to_string(),
        }
    }
}

impl PipelineSettings {
    /// Reads the settings file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let settings: Self = if path.exists() {
            serde_json::from_str(&std::fs::read_to_string(path)?)?
        } else {
            Self::default()
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.element_id.trim().is_empty() {
            return Err(IdleError::Config("element_id must not be empty".to_string()));
        }
        if !(1..=MAX_GAMES_PLAYED_CONCURRENTLY).contains(&self.max_games) {
            return Err(IdleError::Config(format!(
                "max_games must be between 1 and {}, got {}",
                MAX_GAMES_PLAYED_CONCURRENTLY, self.max_games
            )));
        }
        Ok(())
    }
}

pub struct Config {
    pub args: Args,
    pub settings: PipelineSettings,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let settings = PipelineSettings::load(&args.config_file)?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self {
            args,
            settings,
            http_client,
        })
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.args.data_dir.exists() {
            std::fs::create_dir_all(&self.args.data_dir)?;
        }

        info!("Data dir {:?} exists", self.args.data_dir);
        Ok(())
    }
}
