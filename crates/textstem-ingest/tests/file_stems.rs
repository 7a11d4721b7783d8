//! File stemming tests — reads real files from a temp directory and checks
//! the results against the line-based functions.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use textstem_core::{Error, Language, StemConfig};
use textstem_ingest::{
    default_stemmer, list_file_stems, list_file_stems_with, list_stems, unique_file_stems,
    unique_file_stems_with, unique_stems, StemCollector,
};

const ANIMALS: &str = "The Elephant, the ELEPHANTS!\n\
    Giraffes: tall; giraffe -- taller.\n\
    \n\
    Cats  cat's catting\tcatlike\n";

fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_file_list_matches_chunked_lines() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "animals.txt", ANIMALS.as_bytes());

    let expected: Vec<String> = ANIMALS.split_whitespace().flat_map(list_stems).collect();
    assert_eq!(list_file_stems(&path).unwrap(), expected);
}

#[test]
fn test_file_set_matches_line_set() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "animals.txt", ANIMALS.as_bytes());

    let stems = unique_file_stems(&path).unwrap();
    assert_eq!(stems, unique_stems(ANIMALS));
    assert!(stems.contains("eleph"));
    assert!(stems.contains("giraff"));
    assert!(stems.contains("cat"));
}

#[test]
fn test_file_list_keeps_duplicates_across_lines() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "repeat.txt", b"running\nruns\n\nrunning\n");

    assert_eq!(list_file_stems(&path).unwrap(), vec!["run", "run", "run"]);
    let unique: Vec<String> = unique_file_stems(&path).unwrap().into_iter().collect();
    assert_eq!(unique, vec!["run"]);
}

#[test]
fn test_practice_file_collapses() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "practice.txt",
        b"practic practical practice practiced\npracticer practices practicing\n\
          practis practisants practise practised practiser practisers\n\
          practises practising practitioner practitioners\n",
    );

    let expected: BTreeSet<String> = ["practic", "practis", "practition"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(unique_file_stems(&path).unwrap(), expected);
    assert_eq!(list_file_stems(&path).unwrap().len(), 17);
}

#[test]
fn test_empty_and_punctuation_files_succeed() {
    let dir = TempDir::new().unwrap();
    let empty = write_file(&dir, "empty.txt", b"");
    let noise = write_file(&dir, "noise.txt", b"  \n\t... !!! --- 1234 \r\n  ?? \n");

    for path in [&empty, &noise] {
        assert!(list_file_stems(path).unwrap().is_empty());
        assert!(unique_file_stems(path).unwrap().is_empty());
    }
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.txt");

    assert!(matches!(list_file_stems(&path), Err(Error::Io(_))));
    assert!(matches!(unique_file_stems(&path), Err(Error::Io(_))));
}

#[test]
fn test_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(list_file_stems(dir.path()), Err(Error::Io(_))));
}

#[test]
fn test_invalid_utf8_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "binary.txt", &[b'h', b'i', b'\n', 0xc3, 0x28, b'\n']);

    assert!(matches!(unique_file_stems(&path), Err(Error::Io(_))));
}

#[test]
fn test_custom_stemmer_for_files() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "words.txt", b"Hello, hello WORLD\nworld!");

    let mut identity = |word: &str| word.to_string();
    assert_eq!(
        list_file_stems_with(&path, &mut identity).unwrap(),
        vec!["hello", "hello", "world", "world"]
    );

    let mut snowball = default_stemmer();
    let stems = unique_file_stems_with(&path, &mut snowball).unwrap();
    assert_eq!(stems.into_iter().collect::<Vec<_>>(), vec!["hello", "world"]);
}

#[test]
fn test_collector_reads_files() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "animals.txt", ANIMALS.as_bytes());

    let collector = StemCollector::from_config(&StemConfig::new(Language::English));
    assert_eq!(collector.list_file_stems(&path).unwrap(), list_file_stems(&path).unwrap());
    assert_eq!(
        collector.unique_file_stems(&path).unwrap(),
        unique_file_stems(&path).unwrap()
    );
    assert!(matches!(
        collector.unique_file_stems(&dir.path().join("nope.txt")),
        Err(Error::Io(_))
    ));
}
