use crate::config::Config;
use crate::domain::RunOutcome;
use crate::error::{IdleError, Result};
use crate::infrastructure::{FileSystemStore, LocalDocument, SteamCommunityClient};
use crate::services::idle_service::IdleService;
use crate::services::pipeline::IdlePipeline;
use std::sync::Arc;
use tracing::{info, Level};

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;

    let level = config.args.log_level.parse::<Level>().unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    config.ensure_directories()?;

    let pipeline = IdlePipeline::new(&config.settings)?;
    let store = Arc::new(FileSystemStore::new(&config.args.data_dir));
    let service = IdleService::new(
        pipeline,
        store,
        config.args.account_name(),
        config.args.dry_run,
    );

    let outcome = match (&config.args.input, config.args.steam_id) {
        (Some(path), _) => service.run(&LocalDocument::new(path)).await,
        (None, Some(steam_id)) => {
            let client = SteamCommunityClient::new(
                config.http_client.clone(),
                config.settings.community_url.clone(),
                steam_id,
                config.args.session_cookie.clone(),
            );
            service.run(&client).await
        }
        (None, None) => {
            return Err(IdleError::Config(
                "either --steam-id or --input is required".to_string(),
            ))
        }
    };

    if let RunOutcome::DryRun(selection) = &outcome {
        println!("{}", serde_json::to_string_pretty(selection)?);
    }

    info!("Run finished: {}", outcome);
    Ok(())
}
