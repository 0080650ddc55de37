use reqwest::Error as ReqwestError;
use std::{fmt, io};

#[derive(Debug)]
pub enum FetchError {
    IoError(io::Error),
    JsonParseError(serde_json::Error),
    ApiError { code: i32, message: String },
    ReqwestError(ReqwestError),
    NoResults(String),
    LyricsNotFound(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::IoError(e) => write!(f, "IO error: {}", e),
            FetchError::JsonParseError(e) => write!(f, "JSON parse error: {}", e),
            FetchError::ApiError { code, message } => {
                write!(f, "API error ({}): {}", code, message)
            }
            FetchError::ReqwestError(e) => write!(f, "Request error: {}", e),
            FetchError::NoResults(artist) => {
                write!(f, "No songs found for artist '{}'", artist)
            }
            FetchError::LyricsNotFound(url) => {
                write!(f, "No lyrics markup found at {}", url)
            }
        }
    }
}

impl std::error::Error for FetchError {}

impl From<io::Error> for FetchError {
    fn from(error: io::Error) -> Self {
        FetchError::IoError(error)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::JsonParseError(error)
    }
}

impl From<ReqwestError> for FetchError {
    fn from(error: ReqwestError) -> Self {
        FetchError::ReqwestError(error)
    }
}
