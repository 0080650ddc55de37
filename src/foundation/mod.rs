pub mod cache;
pub mod utils;
