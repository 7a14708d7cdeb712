use crate::domain::storage::{IdleConfigWriter, StorageKeys};
use crate::error::{IdleError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Bot configurations as one JSON object per account under `<data_dir>/bots`.
#[derive(Clone)]
pub struct FileSystemStore {
    data_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn get_path_for_account(&self, account: &str) -> PathBuf {
        self.data_dir
            .join(StorageKeys::BOTS_DIR)
            .join(format!("{}.json", sanitize_filename(account)))
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn read_bot_config(&self, path: &Path) -> Result<Option<Map<String, Value>>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;
        match value {
            Value::Object(map) => Ok(Some(map)),
            _ => Err(IdleError::Parse(format!(
                "bot configuration {:?} is not a JSON object",
                path
            ))),
        }
    }

    /// Replaces the file in one rename, so a crash mid-write leaves the old
    /// configuration intact.
    fn write_bot_config(&self, path: &Path, config: &Map<String, Value>) -> Result<()> {
        let dir = path.parent().unwrap_or(self.data_dir.as_path());
        self.ensure_dir(dir)?;

        let content = serde_json::to_string_pretty(config)?;
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(content.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl IdleConfigWriter for FileSystemStore {
    fn set_idle_games(&self, account: &str, app_ids: &[u32]) -> Result<()> {
        let path = self.get_path_for_account(account);

        // Other properties of the bot configuration are left untouched
        let mut config = self.read_bot_config(&path)?.unwrap_or_default();
        config.insert(
            StorageKeys::IDLE_GAMES_PROPERTY.to_string(),
            serde_json::to_value(app_ids)?,
        );

        self.write_bot_config(&path, &config)?;
        debug!("Wrote {} idle games to {:?}", app_ids.len(), path);
        Ok(())
    }

    fn load_idle_games(&self, account: &str) -> Result<Option<Vec<u32>>> {
        let path = self.get_path_for_account(account);

        let Some(mut config) = self.read_bot_config(&path)? else {
            return Ok(None);
        };

        config
            .remove(StorageKeys::IDLE_GAMES_PROPERTY)
            .map(serde_json::from_value)
            .transpose()
            .map_err(IdleError::from)
    }
}

fn sanitize_filename(account: &str) -> String {
    account
        .chars()
        .map(|c| match c {
            c if c.is_alphanumeric() || c == '-' || c == '_' => c,
            _ => '_',
        })
        .collect()
}
