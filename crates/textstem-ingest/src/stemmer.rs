//! Stemmer capability and the Snowball implementation.

use std::fmt;

use rust_stemmers::{Algorithm, Stemmer as Snowball};
use textstem_core::Language;

/// Reduces a cleaned word to its stem.
///
/// Takes `&mut self` because implementations may keep internal state; a
/// single instance must not be shared by concurrent callers. Any
/// `FnMut(&str) -> String` closure is also a `Stemmer`.
pub trait Stemmer {
    fn stem(&mut self, word: &str) -> String;
}

impl<F> Stemmer for F
where
    F: FnMut(&str) -> String,
{
    fn stem(&mut self, word: &str) -> String {
        self(word)
    }
}

/// Snowball (Porter2 for English) stemmer for one language.
pub struct SnowballStemmer {
    language: Language,
    inner: Snowball,
}

impl SnowballStemmer {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            inner: Snowball::create(algorithm(language)),
        }
    }

    pub fn english() -> Self {
        Self::new(Language::English)
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&mut self, word: &str) -> String {
        let stemmed = self.inner.stem(word);
        if self.language == Language::English && drops_trailing_is(word, &stemmed) {
            return word.to_string();
        }
        stemmed.into_owned()
    }
}

/// True when the only change made was stripping the `s` of a final `-is`.
///
/// Porter2 step 1a turns `practis` into `practi`, while the OpenNLP English
/// stemmer keeps it, so `practis` and `practise` share a stem. English
/// stems are adjusted to the OpenNLP form.
fn drops_trailing_is(word: &str, stemmed: &str) -> bool {
    word.ends_with("is") && word.len() == stemmed.len() + 1 && word.starts_with(stemmed)
}

/// A fresh English stemmer, used wherever the caller does not supply one.
pub fn default_stemmer() -> SnowballStemmer {
    SnowballStemmer::english()
}

fn algorithm(language: Language) -> Algorithm {
    match language {
        Language::Arabic => Algorithm::Arabic,
        Language::Danish => Algorithm::Danish,
        Language::Dutch => Algorithm::Dutch,
        Language::English => Algorithm::English,
        Language::Finnish => Algorithm::Finnish,
        Language::French => Algorithm::French,
        Language::German => Algorithm::German,
        Language::Greek => Algorithm::Greek,
        Language::Hungarian => Algorithm::Hungarian,
        Language::Italian => Algorithm::Italian,
        Language::Norwegian => Algorithm::Norwegian,
        Language::Portuguese => Algorithm::Portuguese,
        Language::Romanian => Algorithm::Romanian,
        Language::Russian => Algorithm::Russian,
        Language::Spanish => Algorithm::Spanish,
        Language::Swedish => Algorithm::Swedish,
        Language::Tamil => Algorithm::Tamil,
        Language::Turkish => Algorithm::Turkish,
    }
}
