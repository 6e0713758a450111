//! Error taxonomy for detector construction and source reading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Raised at detector construction; no scoring is attempted.
    #[error("Tuple size must exceed 0")]
    TupleSize,

    /// A word or synonym source could not be read.
    #[error("Cannot read {}: {source}", path.display())]
    Source { path: PathBuf, source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_names_the_path() {
        let err = Error::Source {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };

        assert!(err.to_string().contains("missing.txt"));
    }
}
