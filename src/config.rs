use std::{
    collections::HashMap,
    fs,
    path::{
        Path,
        PathBuf,
    },
};

pub const ENV_FILE: &str = ".env";
pub const PEXELS_KEY_NAME: &str = "PEXELS_API_KEY";

/// Reads `key=value` pairs from a local file. A missing file is an empty map,
/// lines without `=` are skipped, values keep everything after the first `=`.
pub fn load_env(path: impl AsRef<Path>) -> HashMap<String, String> {
    let mut env = HashMap::new();

    if let Ok(contents) = fs::read_to_string(path) {
        for line in contents.lines() {
            if let Some((key, value)) = line.trim().split_once('=') {
                env.insert(key.to_string(), value.to_string());
            }
        }
    }

    env
}

pub fn pexels_api_key() -> Option<String> {
    load_env(ENV_FILE).remove(PEXELS_KEY_NAME)
}

/// Anki's media folder for the default profile.
pub fn anki_media_dir() -> Option<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join("Library/Application Support/Anki2/User 1/collection.media"))
}

/// Deck, note type and media prefix, threaded through calls explicitly
/// instead of living in module-level constants.
#[derive(Debug, Clone)]
pub struct NoteConfig {
    pub deck: String,
    pub model: String,
    pub media_prefix: String,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            deck: "My English Words".to_string(),
            model: "4000 EEW".to_string(),
            media_prefix: "user_".to_string(),
        }
    }
}

impl NoteConfig {
    /// `{prefix}{word}.mp3` for the word itself, `{prefix}{word}_{suffix}.mp3`
    /// for the meaning and example readings.
    pub fn audio_filename(&self, word: &str, suffix: &str) -> String {
        if suffix.is_empty() {
            format!("{}{}.mp3", self.media_prefix, word)
        } else {
            format!("{}{}_{}.mp3", self.media_prefix, word, suffix)
        }
    }

    pub fn image_filename(&self, word: &str) -> String {
        format!("{}{}.jpg", self.media_prefix, word)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_env_parses_pairs_and_skips_junk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "PEXELS_API_KEY=abc123").unwrap();
        writeln!(file, "no equals sign here").unwrap();
        writeln!(file, "URL=http://localhost:8765/path?a=b").unwrap();
        file.flush().unwrap();

        let env = load_env(file.path());
        assert_eq!(env.get("PEXELS_API_KEY").map(String::as_str), Some("abc123"));
        assert_eq!(env.get("URL").map(String::as_str), Some("http://localhost:8765/path?a=b"));
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn load_env_missing_file_is_empty() {
        assert!(load_env("definitely/not/a/real/.env").is_empty());
    }

    #[test]
    fn media_filenames_follow_prefix_convention() {
        let config = NoteConfig::default();
        assert_eq!(config.audio_filename("apple", ""), "user_apple.mp3");
        assert_eq!(config.audio_filename("apple", "meaning"), "user_apple_meaning.mp3");
        assert_eq!(config.audio_filename("apple", "example"), "user_apple_example.mp3");
        assert_eq!(config.image_filename("apple"), "user_apple.jpg");
    }
}
