use crate::error::Result;

/// Typed access to the per-account bot configuration.
pub trait IdleConfigWriter: Send + Sync {
    fn set_idle_games(&self, account: &str, app_ids: &[u32]) -> Result<()>;
    fn load_idle_games(&self, account: &str) -> Result<Option<Vec<u32>>>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const BOTS_DIR: &'static str = "bots";

    /// Bot configuration property listing the games played while idle.
    pub const IDLE_GAMES_PROPERTY: &'static str = "GamesPlayedWhileIdle";
}
