//! The per-artist pipeline: fetch lyrics, count words, write reports.
//!
//! Artists are processed strictly in sequence. A failure on one artist is
//! reported and the run moves on to the next; only configuration problems
//! abort the whole run.

use crate::analysis::{count_words, merge_counts, write_artist_report, write_genre_report};
use crate::api_client::{fetch_artist_lyrics, FetchOutcome, GeniusApi, SCRAPE_DELAY};
use crate::configuration::ArtistList;
use crate::foundation::cache::CacheStore;
use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::Path;
use std::time::Duration;

/// Pauses inserted between network operations so neither the Genius API nor
/// the website gets hammered with requests. Cache hits pay no delay.
pub struct FetchDelays {
    pub between_artists: Duration,
    pub between_songs: Duration,
}

impl Default for FetchDelays {
    fn default() -> Self {
        Self {
            between_artists: Duration::from_secs(3),
            between_songs: SCRAPE_DELAY,
        }
    }
}

impl FetchDelays {
    /// No delays at all. Meant for tests.
    pub fn none() -> Self {
        Self {
            between_artists: Duration::ZERO,
            between_songs: Duration::ZERO,
        }
    }
}

/// Runs the full pipeline over the artist list.
///
/// For each artist in order: fetch (or load from cache), count words, write
/// the per-artist results file, and fold the counts into that artist's
/// genre total. The aggregated genre results are written once at the end.
///
/// Results are regenerated from the cache contents on every run, so a
/// re-run over an unchanged cache rewrites identical files without any
/// network traffic.
pub async fn process_artists(
    list: &ArtistList,
    api: &dyn GeniusApi,
    cache: &CacheStore,
    results_dir: &Path,
    delays: &FetchDelays,
) -> io::Result<()> {
    let mut genre_totals: BTreeMap<String, HashMap<String, u64>> = BTreeMap::new();
    for artist in &list.artists {
        genre_totals.entry(artist.genre.clone()).or_default();
    }

    for artist in &list.artists {
        println!("\x1b[1m\x1b[34mArtist: {}\x1b[0m", artist.artist);

        let outcome = match fetch_artist_lyrics(api, cache, artist, delays.between_songs).await {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("\x1b[31mSkipping artist '{}': {}\x1b[0m", artist.artist, e);
                continue;
            }
        };

        let fetched_over_network = matches!(outcome, FetchOutcome::Fetched(_));
        let entry = outcome.into_inner();
        let counts = count_words(&entry.combined_lyrics());

        match write_artist_report(results_dir, &artist.artist, &counts) {
            Ok(path) => println!(
                "Artist: {}, songs: {}, distinct words: {} -> {}",
                artist.artist,
                entry.songs.len(),
                counts.len(),
                path.display()
            ),
            Err(e) => eprintln!(
                "\x1b[31mFailed to write results for '{}': {}\x1b[0m",
                artist.artist, e
            ),
        }

        if let Some(totals) = genre_totals.get_mut(&artist.genre) {
            merge_counts(totals, &counts);
        }

        if fetched_over_network {
            tokio::time::sleep(delays.between_artists).await;
        }
    }

    write_genre_report(results_dir, &genre_totals)?;
    Ok(())
}
