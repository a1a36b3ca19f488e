use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a run. Malformed input lines are not errors, they are skipped.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to open file - open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("Failed to scan numbers - {0}")]
    Read(#[source] io::Error),

    #[error("Failed to scan numbers - line {line} exceeds {limit} bytes")]
    LineTooLong { line: usize, limit: usize },

    #[error("Failed to write output - {0}")]
    Write(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::Open { path: PathBuf::from("./data"), source: io::Error::new(io::ErrorKind::NotFound, "no such file") };
        assert_eq!(err.to_string(), "Failed to open file - open ./data: no such file");
        let err = Error::LineTooLong { line: 3, limit: 16 };
        assert_eq!(err.to_string(), "Failed to scan numbers - line 3 exceeds 16 bytes");
        let err = Error::Read(io::Error::new(io::ErrorKind::Other, "disk gone"));
        assert_eq!(err.to_string(), "Failed to scan numbers - disk gone");
    }
}
