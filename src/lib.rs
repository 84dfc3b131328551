pub mod anki;
pub mod audio;
pub mod config;
pub mod core;
pub mod dictionary;
pub mod image;
pub mod vocab;
