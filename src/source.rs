//! Word and line sources for documents and synonym files.
//!
//! Documents are tokenized on whitespace only; blank lines contribute no
//! words. The parsing half works on any `BufRead` so it can be exercised
//! with in-memory readers, while the `read_*` wrappers open files and tag
//! failures with the offending path.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::Error;

/// Every whitespace-delimited word in `reader`, in document order.
pub fn words_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        words.extend(line.split_whitespace().map(str::to_string));
    }

    Ok(words)
}

/// Every line in `reader`, unsplit, for synonym-group parsing.
pub fn lines_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Read a document's words from a file.
pub fn read_words(path: &Path) -> Result<Vec<String>, Error> {
    words_from_reader(open(path)?).map_err(|source| source_error(path, source))
}

/// Read a synonym file's lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    lines_from_reader(open(path)?).map_err(|source| source_error(path, source))
}

fn open(path: &Path) -> Result<BufReader<File>, Error> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(source) => Err(source_error(path, source)),
    }
}

fn source_error(path: &Path, source: io::Error) -> Error {
    Error::Source {
        path: path.to_path_buf(),
        source,
    }
}
