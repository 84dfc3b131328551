use std::io::{
    self,
    Write,
};

use clap::Parser;

use ankiword::{
    anki::{
        self,
        api,
        AudioFilenames,
        NoteOptions,
        NotePayload,
        PictureAttachment,
    },
    audio::Synthesizer,
    config::{
        self,
        NoteConfig,
    },
    core::{
        http::http_client,
        text::{
            bold_occurrences,
            strip_bold,
        },
    },
    dictionary,
    image,
};

#[derive(Parser)]
#[command(author, version, about = "Add or update an English word card in Anki")]
struct Cli {
    /// The word to process
    word: String,

    /// Target deck name
    #[arg(long, default_value = "My English Words")]
    deck: String,

    /// Anki note type name
    #[arg(long, default_value = "4000 EEW")]
    model: String,

    /// Prefix for media files
    #[arg(long, default_value = "user_")]
    prefix: String,
}

fn prompt(message: &str) -> String {
    print!("{}", message);
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().read_line(&mut line).ok();
    line.trim().to_string()
}

fn store_audio(
    client: &reqwest::blocking::Client,
    config: &NoteConfig,
    word: &str,
    suffix: &str,
    payload: Option<String>,
) -> Option<String> {
    let data = payload?;
    let filename = config.audio_filename(word, suffix);

    if let Err(e) = api::store_media_file(client, &filename, &data) {
        eprintln!("Failed to store {}: {}", filename, e);
        return None;
    }

    Some(filename)
}

fn main() {
    let cli = Cli::parse();
    let config = NoteConfig { deck: cli.deck, model: cli.model, media_prefix: cli.prefix };
    let word = cli.word.trim().to_lowercase();

    println!("Processing: {}", word);

    let client = match http_client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    let note_id = anki::find_note_id(&client, &word).unwrap_or_else(|e| {
        eprintln!("Could not reach AnkiConnect: {}", e);
        None
    });

    let mut is_update = false;
    if let Some(id) = note_id {
        println!("'{}' already exists in Anki. (ID: {})", word, id);
        if prompt("Update the existing card? (y/n): ").to_lowercase() != "y" {
            return;
        }
        is_update = true;
    }

    let entry = dictionary::lookup(&client, &word);
    let image_url = config::pexels_api_key()
        .and_then(|key| image::search_image_url(&client, &key, &word));

    let mut meaning = entry.meaning;
    let mut example = entry.example;
    let mut ipa = entry.ipa;

    if example.is_empty() && !is_update {
        println!("No example found for '{}' in the dictionary.", word);
        example = prompt(&format!("Enter an example sentence for '{}': ", word));
    }

    if is_update {
        println!("\n--- Fetched data ---");
        println!("1. Meaning: {}", meaning);
        println!("2. Example: {}", example);
        println!("3. IPA: {}", ipa);
        println!("--------------------");

        let user_meaning = prompt("New meaning (enter to keep): ");
        if !user_meaning.is_empty() {
            meaning = user_meaning;
        }
        let user_example = prompt("New example (enter to keep): ");
        if !user_example.is_empty() {
            example = user_example;
        }
        let user_ipa = prompt("New IPA (enter to keep): ");
        if !user_ipa.is_empty() {
            ipa = user_ipa;
        }
    }

    // User-supplied examples arrive unbolded.
    if !example.is_empty() && example.to_lowercase().contains(&word) && !example.contains("<b>") {
        example = bold_occurrences(&example, &word);
    }

    println!("\nWord: {}", word);
    println!("Meaning: {}", meaning);
    println!("Example: {}", example);
    println!("IPA: {}", ipa);

    println!("Generating audio...");
    let synth = Synthesizer::default();
    let media = AudioFilenames {
        word: store_audio(
            &client,
            &config,
            &word,
            "",
            synth.synthesize_base64(&word, "tmp_word"),
        ),
        meaning: store_audio(
            &client,
            &config,
            &word,
            "meaning",
            synth.synthesize_base64(&meaning, "tmp_meaning"),
        ),
        example: store_audio(
            &client,
            &config,
            &word,
            "example",
            synth.synthesize_base64(&strip_bold(&example), "tmp_example"),
        ),
    };

    let fields = anki::compose_fields(&word, &meaning, &example, &ipa, &media);

    if is_update {
        let id = note_id.unwrap_or_default();
        match api::update_note_fields(&client, id, &fields) {
            Ok(reply) if reply.error.is_none() => println!("Card updated! (ID: {})", id),
            Ok(reply) => eprintln!("Failed to update card: {}", reply.error.unwrap_or_default()),
            Err(e) => eprintln!("Failed to update card: {}", e),
        }
        return;
    }

    if let Err(e) = api::create_deck(&client, &config.deck) {
        eprintln!("Could not ensure deck '{}': {}", config.deck, e);
    }

    let note = NotePayload {
        deck_name: config.deck.clone(),
        model_name: config.model.clone(),
        fields,
        options: NoteOptions { allow_duplicate: false },
        tags: vec!["added_by_script".to_string()],
        picture: image_url.map(|url| {
            vec![PictureAttachment {
                url,
                filename: config.image_filename(&word),
                fields: vec!["Image".to_string()],
            }]
        }),
    };

    match api::add_note(&client, &note) {
        Ok(Some(id)) => println!("Card added to {}! (ID: {})", config.deck, id),
        Ok(None) => eprintln!("Failed to add card."),
        Err(e) => eprintln!("Failed to add card: {}", e),
    }
}
