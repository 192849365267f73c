use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChunkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Cannot open file {path}")]
    FileNotFound { path: String },
    #[error("Cannot open file {path}: permission denied")]
    PermissionDenied { path: String },
    #[error("Cannot open file {path}: {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not valid UTF-8 text")]
    NotText { path: String },
    #[error("invalid number: {input}")]
    InvalidNumber { input: String },
}

impl ChunkError {
    /// Classify an error raised while opening `path`
    pub fn open(path: impl Into<String>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => ChunkError::FileNotFound { path },
            io::ErrorKind::PermissionDenied => ChunkError::PermissionDenied { path },
            _ => ChunkError::OpenFailed { path, source: err },
        }
    }
}

pub type Result<T> = std::result::Result<T, ChunkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_classification() {
        let err = ChunkError::open("a.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, ChunkError::FileNotFound { ref path } if path == "a.txt"));

        let err = ChunkError::open("b.txt", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, ChunkError::PermissionDenied { .. }));

        let err = ChunkError::open("c.txt", io::Error::other("boom"));
        assert!(matches!(err, ChunkError::OpenFailed { .. }));
    }

    #[test]
    fn test_messages_name_the_path() {
        let err = ChunkError::FileNotFound { path: "missing.txt".to_string() };
        assert_eq!(err.to_string(), "Cannot open file missing.txt");

        let err = ChunkError::PermissionDenied { path: "/root/x".to_string() };
        assert!(err.to_string().contains("/root/x"));

        let err = ChunkError::NotText { path: "book.bin".to_string() };
        assert_eq!(err.to_string(), "book.bin is not valid UTF-8 text");

        let err = ChunkError::InvalidNumber { input: "abc".to_string() };
        assert_eq!(err.to_string(), "invalid number: abc");
    }
}
