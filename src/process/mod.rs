mod process;

pub use process::{process_artists, FetchDelays};
