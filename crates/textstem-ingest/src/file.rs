//! Whitespace-delimited chunk reading from text files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use textstem_core::Result;

/// Read a UTF-8 text file and hand every whitespace-delimited chunk to
/// `visit`, in file order. Line breaks are just whitespace here.
///
/// Returns the number of chunks visited. Fails if the file cannot be
/// opened, cannot be read, or is not valid UTF-8; chunks visited before
/// the failure are not rolled back.
pub fn for_each_chunk<F>(path: &Path, mut visit: F) -> Result<usize>
where
    F: FnMut(&str),
{
    let mut reader = BufReader::new(File::open(path)?);
    let mut line = String::new();
    let mut chunks = 0;

    while reader.read_line(&mut line)? > 0 {
        for chunk in line.split_whitespace() {
            visit(chunk);
            chunks += 1;
        }
        line.clear();
    }

    Ok(chunks)
}
