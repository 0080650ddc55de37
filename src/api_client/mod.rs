mod fetch;
mod fetch_error;
mod genius;
mod scrape;

pub use fetch::{fetch_artist_lyrics, FetchOutcome, SCRAPE_DELAY};
pub use fetch_error::FetchError;
pub use genius::{GeniusApi, GeniusClient, SongResult};
pub use scrape::extract_lyrics;

#[cfg(test)]
pub use genius::MockGeniusApi;
