use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Steam ID (64 bit) of the profile whose games page is fetched
    #[arg(long, env = "STEAM_ID", required_unless_present = "input")]
    pub steam_id: Option<u64>,

    /// Read a saved games page from disk instead of fetching it
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Bot configuration account to update (defaults to the Steam ID)
    #[arg(long)]
    pub account: Option<String>,

    /// Value of the steamLoginSecure cookie, needed for private profiles
    #[arg(long, env = "STEAM_LOGIN_SECURE", hide_env_values = true)]
    pub session_cookie: Option<String>,

    /// Path to pipeline settings file
    #[arg(long, default_value = "idle_config.json")]
    pub config_file: PathBuf,

    /// Directory holding the per-account bot configurations
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Print the selection instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn account_name(&self) -> String {
        match (&self.account, self.steam_id) {
            (Some(account), _) => account.clone(),
            (None, Some(steam_id)) => steam_id.to_string(),
            (None, None) => "default".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_makes_steam_id_optional() {
        let args = Args::try_parse_from(["leastplayed", "--input", "games.html"]).unwrap();
        assert!(args.steam_id.is_none());
        assert_eq!(args.account_name(), "default");
        assert_eq!(args.config_file, PathBuf::from("idle_config.json"));
    }

    #[test]
    fn account_defaults_to_steam_id() {
        let args =
            Args::try_parse_from(["leastplayed", "--steam-id", "76561197960287930"]).unwrap();
        assert_eq!(args.account_name(), "76561197960287930");

        let args = Args::try_parse_from([
            "leastplayed",
            "--steam-id",
            "76561197960287930",
            "--account",
            "main",
        ])
        .unwrap();
        assert_eq!(args.account_name(), "main");
    }
}
