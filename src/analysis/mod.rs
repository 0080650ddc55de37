mod frequency;
mod report;

pub use frequency::{count_words, merge_counts, sorted_counts};
pub use report::{write_artist_report, write_genre_report, GENRE_RESULTS_FILE};
