//! Turning lines and files into word stems.
//!
//! Two output shapes are offered: `list_*` keeps every stem in the order its
//! word appeared, `unique_*` returns a sorted set without duplicates. The
//! plain functions use a fresh [`default_stemmer`] per call; the `_with`
//! variants take any [`Stemmer`].

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::file;
use crate::parser;
use crate::stemmer::{default_stemmer, SnowballStemmer, Stemmer};
use textstem_core::{Language, Result, StemConfig};

/// Stem every word parsed from `line` into `stems`.
fn collect_stems<S, C>(line: &str, stemmer: &mut S, stems: &mut C)
where
    S: Stemmer + ?Sized,
    C: Extend<String>,
{
    stems.extend(parser::parse(line).iter().map(|word| stemmer.stem(word)));
}

fn collect_file_stems<S, C>(path: &Path, stemmer: &mut S, stems: &mut C) -> Result<usize>
where
    S: Stemmer + ?Sized,
    C: Extend<String>,
{
    match file::for_each_chunk(path, |chunk| collect_stems(chunk, stemmer, stems)) {
        Ok(chunks) => {
            debug!("Stemmed {} chunks from {}", chunks, path.display());
            Ok(chunks)
        }
        Err(e) => {
            warn!("Unable to stem {}: {}", path.display(), e);
            Err(e)
        }
    }
}

/// Stems of every word in `line`, in order, duplicates kept.
pub fn list_stems_with<S: Stemmer + ?Sized>(line: &str, stemmer: &mut S) -> Vec<String> {
    let mut stems = Vec::new();
    collect_stems(line, stemmer, &mut stems);
    stems
}

/// [`list_stems_with`] using a fresh English stemmer.
pub fn list_stems(line: &str) -> Vec<String> {
    list_stems_with(line, &mut default_stemmer())
}

/// Distinct stems of the words in `line`, sorted.
pub fn unique_stems_with<S: Stemmer + ?Sized>(line: &str, stemmer: &mut S) -> BTreeSet<String> {
    let mut stems = BTreeSet::new();
    collect_stems(line, stemmer, &mut stems);
    stems
}

/// [`unique_stems_with`] using a fresh English stemmer.
pub fn unique_stems(line: &str) -> BTreeSet<String> {
    unique_stems_with(line, &mut default_stemmer())
}

/// Stems of every word in a file, in read order, duplicates kept.
///
/// The file is consumed as whitespace-delimited chunks; each chunk is
/// cleaned and stemmed like a line. An empty file gives an empty list, an
/// unreadable one an [`Error::Io`](textstem_core::Error::Io).
pub fn list_file_stems_with<S: Stemmer + ?Sized>(
    path: &Path,
    stemmer: &mut S,
) -> Result<Vec<String>> {
    let mut stems = Vec::new();
    collect_file_stems(path, stemmer, &mut stems)?;
    Ok(stems)
}

/// [`list_file_stems_with`] using a fresh English stemmer.
pub fn list_file_stems(path: &Path) -> Result<Vec<String>> {
    list_file_stems_with(path, &mut default_stemmer())
}

/// Distinct stems of the words in a file, sorted.
pub fn unique_file_stems_with<S: Stemmer + ?Sized>(
    path: &Path,
    stemmer: &mut S,
) -> Result<BTreeSet<String>> {
    let mut stems = BTreeSet::new();
    collect_file_stems(path, stemmer, &mut stems)?;
    Ok(stems)
}

/// [`unique_file_stems_with`] using a fresh English stemmer.
pub fn unique_file_stems(path: &Path) -> Result<BTreeSet<String>> {
    unique_file_stems_with(path, &mut default_stemmer())
}

/// Stems text with a Snowball stemmer for a fixed language.
///
/// Each call builds its own stemmer, so one collector can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StemCollector {
    language: Language,
}

impl StemCollector {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn from_config(config: &StemConfig) -> Self {
        Self::new(config.language)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// A fresh stemmer for this collector's language.
    pub fn stemmer(&self) -> SnowballStemmer {
        SnowballStemmer::new(self.language)
    }

    pub fn list_stems(&self, line: &str) -> Vec<String> {
        list_stems_with(line, &mut self.stemmer())
    }

    pub fn unique_stems(&self, line: &str) -> BTreeSet<String> {
        unique_stems_with(line, &mut self.stemmer())
    }

    pub fn list_file_stems(&self, path: &Path) -> Result<Vec<String>> {
        list_file_stems_with(path, &mut self.stemmer())
    }

    pub fn unique_file_stems(&self, path: &Path) -> Result<BTreeSet<String>> {
        unique_file_stems_with(path, &mut self.stemmer())
    }
}
