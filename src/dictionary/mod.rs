use reqwest::blocking::Client;

use crate::core::text::bold_occurrences;

pub mod types;

use self::types::DictEntry;

const DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Everything we pull out of the dictionary for one word. Absent data is an
/// empty string.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WordEntry {
    pub ipa: String,
    pub meaning: String,
    pub example: String,
}

fn fetch_entry(client: &Client, word: &str) -> Option<DictEntry> {
    let url = format!("{}/{}", DICTIONARY_URL, word);
    let entries: Vec<DictEntry> =
        client.get(&url).send().ok()?.error_for_status().ok()?.json().ok()?;
    entries.into_iter().next()
}

/// Looks a word up, falling back to its heuristic root for the phonetic only.
/// Every failure mode yields an all-empty entry rather than an error.
pub fn lookup(client: &Client, word: &str) -> WordEntry {
    let entry = fetch_entry(client, word);

    let mut ipa = entry.as_ref().map(extract_phonetic).unwrap_or_default();
    if ipa.is_empty() {
        if let Some(root) = root_form(word) {
            if let Some(root_entry) = fetch_entry(client, &root) {
                ipa = extract_phonetic(&root_entry);
            }
        }
    }

    let (meaning, mut example) =
        entry.as_ref().map(extract_meaning_example).unwrap_or_default();
    if !example.is_empty() && example.to_lowercase().contains(word) {
        example = bold_occurrences(&example, word);
    }

    WordEntry { ipa, meaning, example }
}

/// Top-level phonetic first, then the first variant with non-empty text.
pub fn extract_phonetic(entry: &DictEntry) -> String {
    if !entry.phonetic.is_empty() {
        return entry.phonetic.clone();
    }

    entry
        .phonetics
        .iter()
        .find(|p| !p.text.is_empty())
        .map(|p| p.text.clone())
        .unwrap_or_default()
}

/// Strips a trailing "ed", "ing" or "s", first match wins. `None` when the
/// word has none of the suffixes.
pub fn root_form(word: &str) -> Option<String> {
    let root = if let Some(stem) = word.strip_suffix("ed") {
        stem
    } else if let Some(stem) = word.strip_suffix("ing") {
        stem
    } else if let Some(stem) = word.strip_suffix('s') {
        stem
    } else {
        return None;
    };

    Some(root.to_string())
}

/// First non-empty definition becomes the meaning; the first definition that
/// carries an example ends the scan entirely.
pub fn extract_meaning_example(entry: &DictEntry) -> (String, String) {
    let mut meaning = String::new();
    let mut example = String::new();

    'meanings: for m in &entry.meanings {
        for d in &m.definitions {
            if meaning.is_empty() {
                meaning = d.definition.clone();
            }
            if !d.example.is_empty() {
                example = d.example.clone();
                break 'meanings;
            }
        }
    }

    (meaning, example)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_entry(value: serde_json::Value) -> DictEntry {
        let mut entries: Vec<DictEntry> = serde_json::from_value(value).unwrap();
        entries.remove(0)
    }

    #[test]
    fn mocked_test_reply_extracts_all_three_fields() {
        let entry = parse_entry(serde_json::json!([{
            "word": "test",
            "phonetic": "/test/",
            "meanings": [{
                "definitions": [{
                    "definition": "a trial or experiment",
                    "example": "This is a test case."
                }]
            }]
        }]));

        assert_eq!(extract_phonetic(&entry), "/test/");

        let (meaning, example) = extract_meaning_example(&entry);
        assert_eq!(meaning, "a trial or experiment");
        assert_eq!(bold_occurrences(&example, "test"), "This is a <b>test</b> case.");
    }

    #[test]
    fn phonetic_falls_back_to_first_non_empty_variant() {
        let entry = parse_entry(serde_json::json!([{
            "word": "walk",
            "phonetics": [{}, { "text": "" }, { "text": "/wɔːk/" }, { "text": "/wɑk/" }]
        }]));

        assert_eq!(extract_phonetic(&entry), "/wɔːk/");
    }

    #[test]
    fn meaning_is_kept_from_first_definition_even_when_example_comes_later() {
        let entry = parse_entry(serde_json::json!([{
            "word": "run",
            "meanings": [
                { "definitions": [{ "definition": "to move fast" }] },
                { "definitions": [
                    { "definition": "a scoring unit", "example": "He scored a run." },
                    { "definition": "ignored", "example": "never reached" }
                ]}
            ]
        }]));

        let (meaning, example) = extract_meaning_example(&entry);
        assert_eq!(meaning, "to move fast");
        assert_eq!(example, "He scored a run.");
    }

    #[test]
    fn root_form_strips_one_suffix_first_match_wins() {
        assert_eq!(root_form("played").as_deref(), Some("play"));
        assert_eq!(root_form("walking").as_deref(), Some("walk"));
        assert_eq!(root_form("cats").as_deref(), Some("cat"));
        // "ed" is tried before "s", so "passed" loses "ed" not "s".
        assert_eq!(root_form("passed").as_deref(), Some("pass"));
        assert_eq!(root_form("go"), None);
    }

    #[test]
    fn malformed_entry_parses_to_empty() {
        let entry = parse_entry(serde_json::json!([{ "word": "x" }]));
        assert_eq!(extract_phonetic(&entry), "");
        assert_eq!(extract_meaning_example(&entry), (String::new(), String::new()));
    }
}
