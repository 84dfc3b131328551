use std::path::PathBuf;

use clap::Parser;

use ankiword::{
    anki::{
        self,
        api,
    },
    core::http::probe_client,
    vocab,
};

#[derive(Parser)]
#[command(author, version, about = "Check whether a word is already in the deck")]
struct Cli {
    /// Word (or phrase) to look for
    #[arg(required = true)]
    word: Vec<String>,

    /// Tab-delimited deck export to scan
    #[arg(long, default_value = "4000 Essential English Words.txt")]
    deck_file: PathBuf,
}

/// Words joined by spaces, trimmed and lowercased, matching how the
/// composer stores the Word field.
fn normalize_phrase(words: &[String]) -> String {
    words.join(" ").trim().to_lowercase()
}

/// `Some(true/false)` when the live collection was actually checked, `None`
/// when AnkiConnect was unreachable.
fn check_live_collection(word: &str) -> Option<bool> {
    let client = probe_client().ok()?;

    // A version probe first, so transport failure is clearly "not running"
    // rather than a bad query.
    api::get_version(&client).ok()?;

    match anki::find_note_id(&client, word) {
        Ok(id) => Some(id.is_some()),
        Err(_) => None,
    }
}

fn main() {
    let cli = Cli::parse();
    let search = normalize_phrase(&cli.word);

    let vocabulary = vocab::load_vocabulary(&cli.deck_file, vocab::WORD_COLUMNS);
    let in_export = vocabulary.contains(&search);
    let live = check_live_collection(&search);

    match (in_export, live) {
        (true, Some(true)) => {
            println!("'{}' is ALREADY present (deck export and live collection).", search)
        }
        (true, _) => {
            println!("'{}' is ALREADY in the deck export.", search);
            if live.is_none() {
                println!("(could not check the live collection; is Anki running?)");
            }
        }
        (false, Some(true)) => println!("'{}' is ALREADY in the live collection.", search),
        (false, Some(false)) => println!("'{}' is NOT present. Safe to add.", search),
        (false, None) => {
            println!("'{}' is NOT in the deck export. Safe to add.", search);
            println!("(could not check the live collection; is Anki running?)");
        }
    }
}
