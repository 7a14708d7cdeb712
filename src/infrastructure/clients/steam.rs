use crate::domain::provider::DocumentProvider;
use crate::error::Result;
use reqwest::header::COOKIE;
use reqwest::Client;
use tracing::info;

/// Fetches `profiles/<steam id>/games` from the Steam community site.
#[derive(Debug, Clone)]
pub struct SteamCommunityClient {
    client: Client,
    community_url: String,
    steam_id: u64,
    session_cookie: Option<String>,
}

impl SteamCommunityClient {
    pub fn new(
        client: Client,
        community_url: impl Into<String>,
        steam_id: u64,
        session_cookie: Option<String>,
    ) -> Self {
        Self {
            client,
            community_url: community_url.into(),
            steam_id,
            session_cookie,
        }
    }

    pub fn games_url(&self) -> String {
        format!(
            "{}/profiles/{}/games",
            self.community_url.trim_end_matches('/'),
            self.steam_id
        )
    }
}

impl DocumentProvider for SteamCommunityClient {
    async fn fetch_document(&self) -> Result<String> {
        let url = self.games_url();
        info!("Fetching games page {}", url);

        let mut request = self.client.get(&url);
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, format!("steamLoginSecure={}", cookie));
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
