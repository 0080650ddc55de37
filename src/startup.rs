/// # The Main Entry Point of the Pipeline
///
/// This function serves as the primary driver of our application. It takes
/// the run from configuration loading through lyric collection to the
/// word-frequency results on disk.
///
/// # Steps:
/// 1. Loads the configuration
/// 2. Reads the artist list
/// 3. Opens the local cache
/// 4. Fetches and scrapes lyrics for uncached artists
/// 5. Writes per-artist and per-genre word counts
///
use crate::{api_client, configuration, foundation::cache::CacheStore, process};
use configuration::ConfigFolder;

pub async fn run(cfg_folder: ConfigFolder) -> Result<(), Box<dyn std::error::Error>> {
    if !cfg_folder.config_dir.exists() || !cfg_folder.config_file.exists() {
        eprintln!(
            "\x1b[1m\x1b[31mConfiguration folder or config.yaml not found. Please run 'lyricstats config' first.\x1b[0m"
        );
        return Ok(());
    }

    println!("\x1b[1m\x1b[34mStarting lyric collection...\x1b[0m");
    start_pipeline(cfg_folder).await
}

async fn start_pipeline(config_folder: ConfigFolder) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = config_folder
        .config_file
        .to_str()
        .ok_or_else(|| "Failed to convert the configuration path to a string".to_string())?;
    let config = configuration::get_configuration(config_file)
        .map_err(|_| "Unable to parse configuration file")?;

    let artist_list = configuration::read_artist_list(&config.artists_file)
        .map_err(|e| format!("Unable to read the artist list: {}", e))?;

    let cache = CacheStore::new(&config_folder.cache_dir)?;
    let api = api_client::GeniusClient::new(config.api_settings.clone());

    process::process_artists(
        &artist_list,
        &api,
        &cache,
        &config_folder.results_dir,
        &process::FetchDelays::default(),
    )
    .await?;

    println!(
        "\x1b[32mAnalysis complete. Results written to {}\x1b[0m",
        config_folder.results_dir.display()
    );

    Ok(())
}
