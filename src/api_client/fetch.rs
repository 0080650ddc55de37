//! Cache-aware fetching of an artist's lyrics.
//!
//! The cache check comes first: an artist with a cache entry is served
//! entirely from disk and never touches the network. On a miss the song
//! list is resolved through the API, each song page is scraped with a
//! polite delay in between, and whatever was gathered is persisted.

use crate::api_client::{extract_lyrics, FetchError, GeniusApi, SongResult};
use crate::configuration::ArtistEntry;
use crate::foundation::cache::{CacheStore, CachedArtist, CachedSong};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Delay between song-page requests so the Genius website doesn't get
/// hammered.
pub const SCRAPE_DELAY: Duration = Duration::from_secs(2);

/// How an artist's data was obtained. The driver uses this to decide
/// whether a polite pause is owed before the next artist.
pub enum FetchOutcome {
    /// Served from the local cache; no network access happened.
    Cached(CachedArtist),
    /// Fetched over the network and persisted to the cache.
    Fetched(CachedArtist),
}

impl FetchOutcome {
    pub fn into_inner(self) -> CachedArtist {
        match self {
            FetchOutcome::Cached(entry) | FetchOutcome::Fetched(entry) => entry,
        }
    }
}

/// Fetches the lyrics for one artist, consulting the cache first.
///
/// Failures on individual songs are logged and skipped; the songs that did
/// succeed are persisted (partial success is not discarded). The fetch as a
/// whole fails only when no songs could be resolved or none of the pages
/// yielded lyrics, in which case nothing is written to the cache.
///
/// `scrape_delay` is the pause before each page request; tests pass
/// `Duration::ZERO`.
pub async fn fetch_artist_lyrics(
    api: &dyn GeniusApi,
    cache: &CacheStore,
    artist: &ArtistEntry,
    scrape_delay: Duration,
) -> Result<FetchOutcome, FetchError> {
    if cache.has(&artist.artist) {
        return Ok(FetchOutcome::Cached(cache.load(&artist.artist)?));
    }

    let songs = resolve_songs(api, artist).await?;
    if songs.is_empty() {
        return Err(FetchError::NoResults(artist.artist.clone()));
    }

    let progress = create_progress_bar(songs.len() as u64);
    let mut collected = Vec::new();

    for song in songs {
        progress.set_message(song.title.clone());
        tokio::time::sleep(scrape_delay).await;

        match scrape_song(api, &song).await {
            Ok(lyrics) => collected.push(CachedSong {
                title: song.title,
                url: song.url,
                lyrics,
            }),
            Err(e) => eprintln!("\x1b[33mSkipping '{}': {}\x1b[0m", song.title, e),
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    if collected.is_empty() {
        return Err(FetchError::NoResults(artist.artist.clone()));
    }

    let entry = CachedArtist {
        artist: artist.artist.clone(),
        songs: collected,
    };
    cache.save(&entry)?;

    Ok(FetchOutcome::Fetched(entry))
}

/// Resolves the song list for an artist through the API.
///
/// With a configured Genius id the artist-songs endpoint is used, filtered
/// to songs actually credited to that id (features and covers come back
/// too). Without an id we fall back to search, filtered by primary-artist
/// name.
async fn resolve_songs(
    api: &dyn GeniusApi,
    artist: &ArtistEntry,
) -> Result<Vec<SongResult>, FetchError> {
    match artist.id {
        Some(id) => {
            let songs = api.artist_songs(id).await?;
            Ok(songs
                .into_iter()
                .filter(|song| song.primary_artist_id == id)
                .collect())
        }
        None => {
            let wanted = artist.artist.to_lowercase();
            let songs = api.search(&artist.artist).await?;
            Ok(songs
                .into_iter()
                .filter(|song| song.primary_artist_name.to_lowercase() == wanted)
                .collect())
        }
    }
}

async fn scrape_song(api: &dyn GeniusApi, song: &SongResult) -> Result<String, FetchError> {
    let html = api.song_page(&song.url).await?;
    extract_lyrics(&html).ok_or_else(|| FetchError::LyricsNotFound(song.url.clone()))
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let progress = ProgressBar::new(total);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{elapsed_precise} [{bar:40.cyan/blue}] {pos}/{len} songs {msg}")
            .unwrap()
            .progress_chars("##-"),
    );
    progress
}
