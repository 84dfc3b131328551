use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use reqwest::{
    blocking::Client,
    header::{
        AUTHORIZATION,
        USER_AGENT,
    },
};
use serde::Deserialize;

const PEXELS_SEARCH_URL: &str = "https://api.pexels.com/v1/search";

/// Generic query retried when the word itself has no photos.
const FALLBACK_QUERY: &str = "alphabet";

/// Pexels rejects requests without a browser-looking agent.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.114 Safari/537.36";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    src: PhotoSrc,
}

#[derive(Debug, Deserialize)]
struct PhotoSrc {
    medium: String,
}

fn search(client: &Client, api_key: &str, query: &str) -> Option<SearchResponse> {
    client
        .get(PEXELS_SEARCH_URL)
        .query(&[("query", query), ("per_page", "1")])
        .header(AUTHORIZATION, api_key)
        .header(USER_AGENT, BROWSER_USER_AGENT)
        .send()
        .ok()?
        .error_for_status()
        .ok()?
        .json()
        .ok()
}

/// A hosted URL for the note's picture attachment. Any failure is "no image".
pub fn search_image_url(client: &Client, api_key: &str, word: &str) -> Option<String> {
    let mut response = search(client, api_key, word)?;

    if response.photos.is_empty() {
        println!("No direct results for '{}', trying '{}'...", word, FALLBACK_QUERY);
        response = search(client, api_key, FALLBACK_QUERY)?;
    }

    response.photos.into_iter().next().map(|photo| photo.src.medium)
}

/// Downloads the photo bytes into `<media_dir>/<word>.jpg`.
pub fn download_image(
    client: &Client,
    api_key: &str,
    word: &str,
    media_dir: &Path,
) -> Option<PathBuf> {
    let url = search_image_url(client, api_key, word)?;
    let path = media_dir.join(format!("{}.jpg", word));

    println!("Downloading image from: {}", url);
    let bytes = client
        .get(&url)
        .header(USER_AGENT, BROWSER_USER_AGENT)
        .send()
        .ok()?
        .error_for_status()
        .ok()?
        .bytes()
        .ok()?;

    if let Err(e) = fs::write(&path, &bytes) {
        eprintln!("Failed to write image {:?}: {}", path, e);
        return None;
    }

    Some(path)
}
