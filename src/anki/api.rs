use std::collections::HashMap;

use reqwest::blocking::Client;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

use super::NotePayload;

pub const ANKI_CONNECT_URL: &str = "http://localhost:8765";

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn unwrap_result(self) -> Option<T> {
        if let Some(error) = &self.error {
            eprintln!("AnkiConnect error: {}", error);
        }
        self.result
    }
}

fn make_request<T: for<'de> Deserialize<'de>>(
    client: &Client,
    action: &str,
    params: Option<Value>,
) -> Result<ApiResponse<T>, reqwest::Error> {
    let mut body = serde_json::Map::new();
    body.insert("action".to_string(), Value::String(action.to_string()));
    body.insert("version".to_string(), Value::Number((6).into()));

    if let Some(params) = params {
        body.insert("params".to_string(), params);
    }

    client.post(ANKI_CONNECT_URL).json(&body).send()?.json()
}

/// Used to check whether AnkiConnect is reachable at all.
pub fn get_version(client: &Client) -> Result<u32, reqwest::Error> {
    let response: ApiResponse<u32> = make_request(client, "version", None)?;

    Ok(response.unwrap_result().unwrap_or_default())
}

pub fn find_notes(client: &Client, query: &str) -> Result<Vec<u64>, reqwest::Error> {
    let params = serde_json::json!({ "query": query });
    let response: ApiResponse<Vec<u64>> = make_request(client, "findNotes", Some(params))?;
    Ok(response.unwrap_result().unwrap_or_default())
}

pub fn find_cards(client: &Client, query: &str) -> Result<Vec<u64>, reqwest::Error> {
    let params = serde_json::json!({ "query": query });
    let response: ApiResponse<Vec<u64>> = make_request(client, "findCards", Some(params))?;
    Ok(response.unwrap_result().unwrap_or_default())
}

pub fn store_media_file(
    client: &Client,
    filename: &str,
    data_b64: &str,
) -> Result<Option<String>, reqwest::Error> {
    let params = serde_json::json!({ "filename": filename, "data": data_b64 });
    let response: ApiResponse<String> = make_request(client, "storeMediaFile", Some(params))?;
    Ok(response.unwrap_result())
}

pub fn create_deck(client: &Client, deck: &str) -> Result<Option<u64>, reqwest::Error> {
    let params = serde_json::json!({ "deck": deck });
    let response: ApiResponse<u64> = make_request(client, "createDeck", Some(params))?;
    Ok(response.unwrap_result())
}

pub fn add_note(client: &Client, note: &NotePayload) -> Result<Option<u64>, reqwest::Error> {
    let params = serde_json::json!({ "note": note });
    let response: ApiResponse<u64> = make_request(client, "addNote", Some(params))?;
    Ok(response.unwrap_result())
}

/// The reply is returned whole so the caller can report the exact error.
pub fn update_note_fields(
    client: &Client,
    note_id: u64,
    fields: &HashMap<String, String>,
) -> Result<ApiResponse<Value>, reqwest::Error> {
    let params = serde_json::json!({ "note": { "id": note_id, "fields": fields } });
    make_request(client, "updateNoteFields", Some(params))
}

/// The reply is returned whole; the source deck is only deleted when the
/// move reported no error.
pub fn change_deck(
    client: &Client,
    card_ids: &[u64],
    deck: &str,
) -> Result<ApiResponse<Value>, reqwest::Error> {
    let params = serde_json::json!({ "cards": card_ids, "deck": deck });
    make_request(client, "changeDeck", Some(params))
}

pub fn delete_decks(
    client: &Client,
    decks: &[&str],
    cards_too: bool,
) -> Result<ApiResponse<Value>, reqwest::Error> {
    let params = serde_json::json!({ "decks": decks, "cardsToo": cards_too });
    make_request(client, "deleteDecks", Some(params))
}
