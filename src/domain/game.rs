use serde::Serialize;

/// Serialized markup of the node holding the embedded games list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFragment(String);

impl HtmlFragment {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Unconverted `appid` / `playtime_forever` tokens of one games list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPair {
    pub app_id: String,
    pub playtime: String,
}

impl RawPair {
    pub fn new(app_id: impl Into<String>, playtime: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            playtime: playtime.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    #[serde(rename = "appid")]
    pub app_id: u32,
    /// Steam reports `playtime_forever` in total minutes.
    #[serde(rename = "playtime_forever")]
    pub playtime_minutes: u32,
}

impl GameRecord {
    pub fn new(app_id: u32, playtime_minutes: u32) -> Self {
        Self {
            app_id,
            playtime_minutes,
        }
    }
}

/// Least played games, ascending by playtime, capped at the configured limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdleSelection {
    games: Vec<GameRecord>,
}

impl IdleSelection {
    pub(crate) fn from_sorted(games: Vec<GameRecord>) -> Self {
        Self { games }
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    /// What the bot configuration receives; playtime is dropped here.
    pub fn app_ids(&self) -> Vec<u32> {
        self.games.iter().map(|game| game.app_id).collect()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
