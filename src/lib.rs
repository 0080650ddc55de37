pub mod analysis;
pub mod api_client;
pub mod configuration;
pub mod foundation;
pub mod process;
pub mod startup;

pub use analysis::{count_words, sorted_counts};
pub use api_client::{fetch_artist_lyrics, GeniusApi, GeniusClient};
pub use configuration::*;
pub use foundation::cache::*;
pub use process::process_artists;
