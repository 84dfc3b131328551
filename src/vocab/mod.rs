use std::{
    collections::HashSet,
    fs,
    path::Path,
};

use crate::core::text::looks_like_markup;

/// Columns of the tab-delimited export that can hold the word. One export
/// variant keeps it in column 2 only, another also fills column 5.
pub const WORD_COLUMNS: &[usize] = &[2, 5];

/// Loads the export into a set of lowercase words. Blank lines and `#`
/// comment lines are skipped, quotes stripped, markup-looking values ignored.
/// Rebuilt on every run, never cached.
pub fn load_vocabulary(path: &Path, columns: &[usize]) -> HashSet<String> {
    let mut vocab = HashSet::new();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Error reading {:?}: {}", path, e);
            return vocab;
        }
    };

    for line in contents.lines() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();
        for &column in columns {
            if let Some(value) = parts.get(column) {
                if looks_like_markup(value) {
                    continue;
                }
                let word = value.trim().replace('"', "").to_lowercase();
                if !word.is_empty() {
                    vocab.insert(word);
                }
            }
        }
    }

    vocab
}
