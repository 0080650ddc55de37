use crate::foundation::cache::CachedArtist;
use crate::foundation::utils::{normalize_unicode, sanitize_file_name};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// On-disk store of raw fetch results, one JSON file per artist.
///
/// The store normalizes artist names before deriving file names, so lookups
/// are insensitive to case and Unicode representation. It deliberately has
/// no notion of staleness: `has` returning true means the artist will not
/// be fetched again.
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Opens the store at the given directory, creating it if needed.
    pub fn new(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Returns true if a cache entry exists for the artist.
    pub fn has(&self, artist_name: &str) -> bool {
        self.file_path(artist_name).exists()
    }

    /// Loads the cached entry for the artist.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lyricstats::CacheStore;
    /// use std::path::Path;
    ///
    /// let cache = CacheStore::new(Path::new("/path/to/cache")).unwrap();
    /// if cache.has("Bathory") {
    ///     let entry = cache.load("Bathory").unwrap();
    ///     println!("{} songs cached", entry.songs.len());
    /// }
    /// ```
    pub fn load(&self, artist_name: &str) -> io::Result<CachedArtist> {
        let contents = fs::read_to_string(self.file_path(artist_name))?;
        serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Persists a fetch result, overwriting any existing entry.
    pub fn save(&self, entry: &CachedArtist) -> io::Result<()> {
        let serialized = serde_json::to_string(entry)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
        fs::write(self.file_path(&entry.artist), serialized)
    }

    fn file_path(&self, artist_name: &str) -> PathBuf {
        let key = sanitize_file_name(&normalize_unicode(artist_name));
        self.dir.join(format!("{}.json", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::cache::CachedSong;
    use tempfile::tempdir;

    fn sample_entry(artist: &str) -> CachedArtist {
        CachedArtist {
            artist: artist.to_string(),
            songs: vec![CachedSong {
                title: "Song".to_string(),
                url: "https://example.com/song".to_string(),
                lyrics: "some lyrics".to_string(),
            }],
        }
    }

    #[test]
    fn test_has_returns_false_for_missing_artist() {
        let temp_dir = tempdir().unwrap();
        let cache = CacheStore::new(temp_dir.path()).unwrap();

        assert!(!cache.has("Nonexistent Artist"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let cache = CacheStore::new(temp_dir.path()).unwrap();

        let entry = sample_entry("Test Artist");
        cache.save(&entry).unwrap();

        assert!(cache.has("Test Artist"));
        let loaded = cache.load("Test Artist").unwrap();
        assert_eq!(loaded, entry);
    }

    #[test]
    fn test_lookup_is_case_and_unicode_insensitive() {
        let temp_dir = tempdir().unwrap();
        let cache = CacheStore::new(temp_dir.path()).unwrap();

        cache.save(&sample_entry("Motörhead")).unwrap();

        assert!(cache.has("MOTÖRHEAD"));
        assert!(cache.has("motörhead"));
        let loaded = cache.load("MOTÖRHEAD").unwrap();
        assert_eq!(loaded.artist, "Motörhead");
    }

    #[test]
    fn test_hostile_artist_name_stays_in_cache_dir() {
        let temp_dir = tempdir().unwrap();
        let cache = CacheStore::new(temp_dir.path()).unwrap();

        cache.save(&sample_entry("../escape/attempt")).unwrap();

        assert!(cache.has("../escape/attempt"));
        // The only file created must live directly inside the cache dir.
        let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_load_missing_artist_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let cache = CacheStore::new(temp_dir.path()).unwrap();

        assert!(cache.load("Nobody").is_err());
    }
}
