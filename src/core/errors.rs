use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnkiwordError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Audio synthesis failed: {0}")]
    Audio(String),

    #[error("AnkiwordError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for AnkiwordError {
    fn from(error: std::io::Error) -> Self {
        AnkiwordError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for AnkiwordError {
    fn from(error: reqwest::Error) -> Self {
        AnkiwordError::Reqwest(Box::new(error))
    }
}
