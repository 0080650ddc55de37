use serde::{Deserialize, Serialize};

/// A single scraped song: the metadata returned by the Genius API plus the
/// lyric text extracted from the song page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CachedSong {
    pub title: String,
    pub url: String,
    pub lyrics: String,
}

/// Everything fetched for one artist, persisted as a single JSON file.
///
/// Presence of this file in the cache directory is the only freshness
/// signal: once written, the artist is never fetched again.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CachedArtist {
    pub artist: String,
    pub songs: Vec<CachedSong>,
}

impl CachedArtist {
    /// Concatenates the lyric text of all songs into one corpus for analysis.
    pub fn combined_lyrics(&self) -> String {
        self.songs
            .iter()
            .map(|song| song.lyrics.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_lyrics() {
        let artist = CachedArtist {
            artist: "Test".to_string(),
            songs: vec![
                CachedSong {
                    title: "One".to_string(),
                    url: "https://example.com/one".to_string(),
                    lyrics: "first song".to_string(),
                },
                CachedSong {
                    title: "Two".to_string(),
                    url: "https://example.com/two".to_string(),
                    lyrics: "second song".to_string(),
                },
            ],
        };

        assert_eq!(artist.combined_lyrics(), "first song\nsecond song");
    }

    #[test]
    fn test_combined_lyrics_empty() {
        let artist = CachedArtist {
            artist: "Test".to_string(),
            songs: Vec::new(),
        };

        assert_eq!(artist.combined_lyrics(), "");
    }
}
