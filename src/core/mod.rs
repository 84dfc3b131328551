pub mod errors;
pub mod http;
pub mod text;

pub use errors::AnkiwordError;
