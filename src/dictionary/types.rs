use serde::Deserialize;

/// One entry from the Free Dictionary API. Every field is optional in
/// practice, so everything defaults to empty.
#[derive(Debug, Deserialize, Default)]
pub struct DictEntry {
    #[serde(default)]
    pub phonetic: String,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Phonetic {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct Meaning {
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Definition {
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: String,
}
