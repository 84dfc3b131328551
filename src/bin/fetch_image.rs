use std::fs;

use clap::Parser;

use ankiword::{
    config,
    core::http::http_client,
    image,
};

#[derive(Parser)]
#[command(author, version, about = "Download a Pexels image into Anki's media folder")]
struct Cli {
    /// The word to find a picture for
    word: String,
}

fn main() {
    let cli = Cli::parse();

    let Some(api_key) = config::pexels_api_key() else {
        eprintln!("Error: {} not found in {}", config::PEXELS_KEY_NAME, config::ENV_FILE);
        return;
    };

    let Some(media_dir) = config::anki_media_dir() else {
        eprintln!("Could not resolve the home directory.");
        return;
    };

    if !media_dir.exists() {
        println!("Creating media directory: {:?}", media_dir);
        if let Err(e) = fs::create_dir_all(&media_dir) {
            eprintln!("Could not create {:?}: {}", media_dir, e);
            return;
        }
    }

    let client = match http_client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    match image::download_image(&client, &api_key, &cli.word, &media_dir) {
        Some(path) => println!("Saved image to: {:?}", path),
        None => println!("No images found."),
    }
}
