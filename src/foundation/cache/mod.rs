mod models;
mod store;

pub use models::{CachedArtist, CachedSong};
pub use store::CacheStore;
