use config::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

#[derive(Deserialize)]
pub struct Settings {
    pub artists_file: String,
    pub api_settings: ApiSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApiSettings {
    pub api_base_url: String,
    pub client_access_token: String,
}

impl ApiSettings {
    pub fn new(url: &str, access_token: &str) -> Self {
        Self {
            api_base_url: url.to_string(),
            client_access_token: access_token.to_string(),
        }
    }
}

/// The artist list read from the artists JSON file.
///
/// Matches the `{"artists": [...]}` layout, where each entry carries the
/// display name, a genre for aggregated results, and optionally the Genius
/// artist id. Entries without an id are resolved through search instead.
#[derive(Deserialize, Debug, Clone)]
pub struct ArtistList {
    pub artists: Vec<ArtistEntry>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ArtistEntry {
    pub artist: String,
    pub genre: String,
    #[serde(default)]
    pub id: Option<u64>,
}

pub fn get_configuration(cfg_file: &str) -> Result<Settings, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::new(cfg_file, config::FileFormat::Yaml))
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// Reads the artist list from a JSON file.
pub fn read_artist_list(path: &str) -> Result<ArtistList, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let list: ArtistList = serde_json::from_str(&contents)?;
    Ok(list)
}

pub struct ConfigFolder {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
    pub cache_dir: PathBuf,
    pub results_dir: PathBuf,
}

impl ConfigFolder {
    pub fn new() -> Self {
        let home_dir = env::var("HOME").expect("Failed to get HOME environment variable");
        let config_dir = Path::new(&home_dir).join(".lyricstats");

        Self {
            config_file: config_dir.join("config.yaml"),
            cache_dir: config_dir.join("cache"),
            results_dir: config_dir.join("results"),
            config_dir,
        }
    }
}

impl Default for ConfigFolder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_config(cfg_folder: ConfigFolder) -> Result<(), Box<dyn std::error::Error>> {
    println!("\x1b[1m\x1b[32mCreating configuration...\x1b[0m");
    let config_dir = cfg_folder.config_dir;

    if config_dir.exists() && !confirm_overwrite()? {
        println!("\x1b[33mOperation cancelled.\x1b[0m");
        return Ok(());
    }

    fs::create_dir_all(&config_dir)?;
    fs::create_dir_all(&cfg_folder.cache_dir)?;
    fs::create_dir_all(&cfg_folder.results_dir)?;

    let config_content = include_str!("config_template.yaml");
    fs::write(&cfg_folder.config_file, config_content)?;

    println!("\x1b[32mConfiguration folder created at:");
    println!("  -> ~/.lyricstats");
    println!("Configuration file created at:");
    println!("  -> ~/.lyricstats/config.yaml");
    println!("Cache and results folders created at:");
    println!("  -> ~/.lyricstats/cache");
    println!("  -> ~/.lyricstats/results");
    println!("\x1b[0mPlease edit the configuration file with your Genius access token");
    println!("and the path to your artist list JSON file.");

    Ok(())
}

fn confirm_overwrite() -> Result<bool, io::Error> {
    println!("\x1b[31mThe configuration folder already exists.");
    println!("Do you want to overwrite it? Everything will be lost. (y/N)\x1b[0m");

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    if input.trim().to_lowercase() == "y" {
        Ok(true)
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_artist_list() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"artists": [
                {{"artist": "Bathory", "genre": "Black Metal", "id": 7}},
                {{"artist": "Sleep", "genre": "Stoner Metal"}}
            ]}}"#
        )
        .unwrap();

        let list = read_artist_list(file.path().to_str().unwrap()).unwrap();

        assert_eq!(list.artists.len(), 2);
        assert_eq!(list.artists[0].artist, "Bathory");
        assert_eq!(list.artists[0].id, Some(7));
        assert_eq!(list.artists[1].id, None);
    }

    #[test]
    fn test_read_artist_list_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        assert!(read_artist_list(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_get_configuration_parses_template() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "artists_file: \"/tmp/artist_list.json\"\n\
             api_settings:\n\
             \x20 api_base_url: \"https://api.genius.com\"\n\
             \x20 client_access_token: \"token\"\n"
        )
        .unwrap();

        let settings = get_configuration(file.path().to_str().unwrap()).unwrap();

        assert_eq!(settings.artists_file, "/tmp/artist_list.json");
        assert_eq!(settings.api_settings.api_base_url, "https://api.genius.com");
        assert_eq!(settings.api_settings.client_access_token, "token");
    }
}
