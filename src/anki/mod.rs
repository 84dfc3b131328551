use std::collections::HashMap;

use reqwest::blocking::Client;
use serde::Serialize;

pub mod api;

/// Note ready for `addNote`: named fields, deck, note type, tags and an
/// optional remote picture that AnkiConnect fetches itself.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePayload {
    pub deck_name: String,
    pub model_name: String,
    pub fields: HashMap<String, String>,
    pub options: NoteOptions,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<Vec<PictureAttachment>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteOptions {
    pub allow_duplicate: bool,
}

#[derive(Debug, Serialize)]
pub struct PictureAttachment {
    pub url: String,
    pub filename: String,
    pub fields: Vec<String>,
}

/// Media filenames that were actually stored; a `None` slot leaves the
/// matching sound field blank.
#[derive(Debug, Default)]
pub struct AudioFilenames {
    pub word: Option<String>,
    pub meaning: Option<String>,
    pub example: Option<String>,
}

/// The exact AnkiConnect search for a note by its Word field, quotes included.
pub fn note_query(word: &str) -> String {
    format!("\"Word:{}\"", word)
}

pub fn find_note_id(client: &Client, word: &str) -> Result<Option<u64>, reqwest::Error> {
    let note_ids = api::find_notes(client, &note_query(word))?;
    Ok(note_ids.first().copied())
}

fn sound_tag(filename: &Option<String>) -> String {
    match filename {
        Some(name) => format!("[sound:{}]", name),
        None => String::new(),
    }
}

/// Composes the full field map. Absent data is an empty string, never null.
pub fn compose_fields(
    word: &str,
    meaning: &str,
    example: &str,
    ipa: &str,
    media: &AudioFilenames,
) -> HashMap<String, String> {
    HashMap::from([
        ("Word".to_string(), word.to_string()),
        ("Meaning".to_string(), meaning.to_string()),
        ("Example".to_string(), example.to_string()),
        ("IPA".to_string(), ipa.to_string()),
        ("Sound".to_string(), sound_tag(&media.word)),
        ("Sound_Meaning".to_string(), sound_tag(&media.meaning)),
        ("Sound_Example".to_string(), sound_tag(&media.example)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_query_keeps_literal_quotes() {
        assert_eq!(note_query("apple"), "\"Word:apple\"");
    }

    #[test]
    fn compose_fields_wraps_stored_audio_in_sound_tags() {
        let media = AudioFilenames {
            word: Some("user_apple.mp3".to_string()),
            meaning: None,
            example: Some("user_apple_example.mp3".to_string()),
        };
        let fields = compose_fields("apple", "a fruit", "I ate an <b>apple</b>.", "/ˈæp.əl/", &media);

        assert_eq!(fields["Word"], "apple");
        assert_eq!(fields["Sound"], "[sound:user_apple.mp3]");
        assert_eq!(fields["Sound_Meaning"], "");
        assert_eq!(fields["Sound_Example"], "[sound:user_apple_example.mp3]");
    }

    #[test]
    fn note_payload_serializes_to_ankiconnect_shape() {
        let note = NotePayload {
            deck_name: "My English Words".to_string(),
            model_name: "4000 EEW".to_string(),
            fields: HashMap::from([("Word".to_string(), "apple".to_string())]),
            options: NoteOptions { allow_duplicate: false },
            tags: vec!["added_by_script".to_string()],
            picture: None,
        };

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["deckName"], "My English Words");
        assert_eq!(value["modelName"], "4000 EEW");
        assert_eq!(value["options"]["allowDuplicate"], false);
        assert!(value.get("picture").is_none());
    }

    #[test]
    fn picture_attachment_maps_onto_image_field() {
        let note = NotePayload {
            deck_name: "My English Words".to_string(),
            model_name: "4000 EEW".to_string(),
            fields: HashMap::new(),
            options: NoteOptions { allow_duplicate: false },
            tags: Vec::new(),
            picture: Some(vec![PictureAttachment {
                url: "https://images.pexels.com/photo.jpg".to_string(),
                filename: "user_apple.jpg".to_string(),
                fields: vec!["Image".to_string()],
            }]),
        };

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["picture"][0]["filename"], "user_apple.jpg");
        assert_eq!(value["picture"][0]["fields"][0], "Image");
    }
}
