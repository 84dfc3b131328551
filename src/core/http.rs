use std::time::Duration;

use reqwest::blocking::Client;

use crate::core::AnkiwordError;

pub fn http_client() -> Result<Client, AnkiwordError> {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .build()
        .map_err(|e| AnkiwordError::Custom(format!("HTTP client build failed: {e}")))
}

/// Short timeout so "is Anki running" probes fail fast.
pub fn probe_client() -> Result<Client, AnkiwordError> {
    Client::builder()
        .timeout(Duration::from_secs(3))
        .build()
        .map_err(|e| AnkiwordError::Custom(format!("HTTP client build failed: {e}")))
}
