use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdleError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Selector error: {0}")]
    Selector(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Could not convert record (appid={app_id:?}, playtime={playtime:?}): {source}")]
    RecordConversion {
        app_id: String,
        playtime: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, IdleError>;
