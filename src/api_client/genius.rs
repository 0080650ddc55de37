/// This module provides access to the Genius API.
///
/// The API only exposes song metadata, not the lyrics themselves, so it is
/// used to resolve the song list and page URLs for an artist; the lyric
/// text is scraped from the pages afterwards.
use crate::api_client::FetchError;
use crate::configuration::ApiSettings;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use serde_json::Value;

/// Songs returned per page by the artist-songs endpoint.
const SONGS_PER_PAGE: u32 = 50;

/// The search endpoint returns 10 hits per page; five pages gives a
/// reasonable corpus without hammering the API.
const SEARCH_PAGES: u32 = 5;

const USER_AGENT: &str =
    "curl/7.9.8 (i686-pc-linux-gnu) libcurl 7.9.8 (OpenSSL 0.9.6b) (ipv6 enabled)";

/// A song resolved through the API, before its page has been scraped.
#[derive(Debug, Clone, PartialEq)]
pub struct SongResult {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub primary_artist_id: u64,
    pub primary_artist_name: String,
}

/// Access to the Genius API and song pages.
///
/// Kept behind a trait so the fetch pipeline can be tested without any
/// network access.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeniusApi {
    /// Lists songs credited to the given Genius artist id.
    async fn artist_songs(&self, artist_id: u64) -> Result<Vec<SongResult>, FetchError>;

    /// Searches Genius for the given term and returns all song hits.
    async fn search(&self, term: &str) -> Result<Vec<SongResult>, FetchError>;

    /// Fetches the raw HTML of a song page.
    async fn song_page(&self, url: &str) -> Result<String, FetchError>;
}

/// Production `GeniusApi` implementation backed by reqwest.
pub struct GeniusClient {
    client: Client,
    settings: ApiSettings,
}

impl GeniusClient {
    pub fn new(settings: ApiSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    async fn api_get(&self, url: &str, query: &[(&str, String)]) -> Result<Value, FetchError> {
        let response: Value = self
            .client
            .get(url)
            .query(query)
            .header("User-Agent", USER_AGENT)
            .bearer_auth(&self.settings.client_access_token)
            .send()
            .await?
            .json()
            .await?;

        let status = response["meta"]["status"].as_i64().unwrap_or(200);
        if status != 200 {
            return Err(FetchError::ApiError {
                code: status as i32,
                message: response["meta"]["message"]
                    .as_str()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl GeniusApi for GeniusClient {
    async fn artist_songs(&self, artist_id: u64) -> Result<Vec<SongResult>, FetchError> {
        let url = format!("{}/artists/{}/songs", self.settings.api_base_url, artist_id);
        let query = [
            ("per_page", SONGS_PER_PAGE.to_string()),
            ("page", "1".to_string()),
        ];

        let response = self.api_get(&url, &query).await?;

        let songs = response["response"]["songs"]
            .as_array()
            .map(|songs| songs.iter().filter_map(song_from_value).collect())
            .unwrap_or_default();

        Ok(songs)
    }

    async fn search(&self, term: &str) -> Result<Vec<SongResult>, FetchError> {
        let mut results = Vec::new();

        let url = format!("{}/search", self.settings.api_base_url);

        for page in 1..=SEARCH_PAGES {
            let query = [("q", term.to_string()), ("page", page.to_string())];

            let response = self.api_get(&url, &query).await?;

            if let Some(hits) = response["response"]["hits"].as_array() {
                results.extend(hits.iter().filter_map(|hit| song_from_value(&hit["result"])));
            }
        }

        Ok(results)
    }

    async fn song_page(&self, url: &str) -> Result<String, FetchError> {
        let html = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?
            .text()
            .await?;

        Ok(html)
    }
}

/// Extracts the fields we need from one song object in an API response.
///
/// Songs missing any of the fields are dropped rather than treated as
/// errors, matching how loosely the search endpoint is typed.
fn song_from_value(song: &Value) -> Option<SongResult> {
    Some(SongResult {
        id: song["id"].as_u64()?,
        title: song["title"].as_str()?.to_string(),
        url: song["url"].as_str()?.to_string(),
        primary_artist_id: song["primary_artist"]["id"].as_u64()?,
        primary_artist_name: song["primary_artist"]["name"].as_str()?.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_from_value() {
        let value: Value = serde_json::from_str(
            r#"{
                "id": 42,
                "title": "A Fine Day to Die",
                "url": "https://genius.com/bathory-a-fine-day-to-die-lyrics",
                "primary_artist": {"id": 7, "name": "Bathory"}
            }"#,
        )
        .unwrap();

        let song = song_from_value(&value).unwrap();
        assert_eq!(song.id, 42);
        assert_eq!(song.title, "A Fine Day to Die");
        assert_eq!(song.primary_artist_id, 7);
        assert_eq!(song.primary_artist_name, "Bathory");
    }

    #[test]
    fn test_song_from_value_missing_fields() {
        let value: Value = serde_json::from_str(r#"{"id": 42, "title": "Untitled"}"#).unwrap();

        assert!(song_from_value(&value).is_none());
    }
}
