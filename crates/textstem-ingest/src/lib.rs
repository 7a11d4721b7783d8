//! textstem ingest — cleaning, stemming and collecting words from text and files.

pub mod file;
pub mod parser;
pub mod stemmer;
pub mod stems;

pub use stemmer::{default_stemmer, SnowballStemmer, Stemmer};
pub use stems::{
    list_file_stems, list_file_stems_with, list_stems, list_stems_with, unique_file_stems,
    unique_file_stems_with, unique_stems, unique_stems_with, StemCollector,
};
