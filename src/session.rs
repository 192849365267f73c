use tracing::debug;

use crate::byte_source::ByteSource;
use crate::error::Result;

pub const DEFAULT_CHUNK_SIZE: usize = 4096;
pub const PREVIEW_SIZE: usize = 20;

/// A forward-only cursor over a byte source.
///
/// The cursor moves by the requested length on every read, even when the source
/// had fewer bytes left, so later reads past the end simply come back empty.
pub struct ReadSession<S> {
    source: S,
    cursor: u64,
    default_chunk_size: usize,
    preview_size: usize,
}

impl<S: ByteSource> ReadSession<S> {
    pub fn new(source: S, default_chunk_size: usize) -> Self {
        Self {
            source,
            cursor: 0,
            default_chunk_size,
            preview_size: PREVIEW_SIZE,
        }
    }

    pub fn with_preview_size(mut self, preview_size: usize) -> Self {
        self.preview_size = preview_size;
        self
    }

    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    pub fn default_chunk_size(&self) -> usize {
        self.default_chunk_size
    }

    pub fn preview_size(&self) -> usize {
        self.preview_size
    }

    /// Read up to `n` bytes at the cursor and advance the cursor by `n`
    pub fn read_chunk(&mut self, n: usize) -> Result<Vec<u8>> {
        let start = self.cursor;
        let chunk = self.source.read_at(start, n)?;
        self.cursor = start.saturating_add(n as u64);

        debug!(
            from = start,
            to = self.cursor,
            requested = n,
            returned = chunk.len(),
            "read chunk"
        );
        Ok(chunk)
    }

    /// Look at the bytes following the cursor without consuming them
    pub fn peek_preview(&self) -> Result<Vec<u8>> {
        self.source.read_at(self.cursor, self.preview_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte_source::{open, Strategy};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_then_preview() {
        let file = temp_file(b"ABCDEFGHIJ");
        for strategy in [Strategy::Stream, Strategy::Mapped] {
            let mut session = ReadSession::new(open(file.path(), strategy).unwrap(), DEFAULT_CHUNK_SIZE);
            assert_eq!(session.read_chunk(5).unwrap(), b"ABCDE");
            assert_eq!(session.peek_preview().unwrap(), b"FGHIJ");
            assert_eq!(session.cursor(), 5);
        }
    }

    #[test]
    fn test_cursor_advances_by_request_not_by_bytes_read() {
        let file = temp_file(b"ABCDEFGHIJ");
        let mut session = ReadSession::new(open(file.path(), Strategy::Stream).unwrap(), 4096);

        assert_eq!(session.read_chunk(8).unwrap(), b"ABCDEFGH");
        assert_eq!(session.read_chunk(8).unwrap(), b"IJ");
        assert_eq!(session.cursor(), 16);
        assert!(session.read_chunk(3).unwrap().is_empty());
        assert_eq!(session.cursor(), 19);
        assert!(session.peek_preview().unwrap().is_empty());
    }

    #[test]
    fn test_zero_length_read() {
        let file = temp_file(b"ABCDEFGHIJ");
        let mut session = ReadSession::new(open(file.path(), Strategy::Mapped).unwrap(), 4096);

        assert!(session.read_chunk(0).unwrap().is_empty());
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.peek_preview().unwrap(), b"ABCDEFGHIJ");
    }

    #[test]
    fn test_preview_does_not_move_cursor() {
        let contents: Vec<u8> = b"0123456789".repeat(10);
        let file = temp_file(&contents);
        let mut session = ReadSession::new(open(file.path(), Strategy::Stream).unwrap(), 4096);

        session.read_chunk(30).unwrap();
        let first = session.peek_preview().unwrap();
        let second = session.peek_preview().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), PREVIEW_SIZE);
        assert_eq!(session.cursor(), 30);
        assert_eq!(session.read_chunk(20).unwrap(), first);
    }

    #[test]
    fn test_custom_preview_size() {
        let file = temp_file(b"ABCDEFGHIJ");
        let session = ReadSession::new(open(file.path(), Strategy::Stream).unwrap(), 4096)
            .with_preview_size(3);
        assert_eq!(session.preview_size(), 3);
        assert_eq!(session.peek_preview().unwrap(), b"ABC");
    }

    #[test]
    fn test_cursor_saturates() {
        let file = temp_file(b"AB");
        for strategy in [Strategy::Stream, Strategy::Mapped] {
            let mut session = ReadSession::new(open(file.path(), strategy).unwrap(), 4096);
            assert_eq!(session.read_chunk(usize::MAX).unwrap(), b"AB");
            session.read_chunk(usize::MAX).unwrap();
            session.read_chunk(usize::MAX).unwrap();
            assert_eq!(session.cursor(), u64::MAX);
            assert!(session.read_chunk(1).unwrap().is_empty());
            assert!(session.peek_preview().unwrap().is_empty());
        }
    }

    #[test]
    fn test_huge_cursor_reads_empty() {
        let file = temp_file(b"ABCDEFGHIJ");
        for strategy in [Strategy::Stream, Strategy::Mapped] {
            let mut session = ReadSession::new(open(file.path(), strategy).unwrap(), 4096);
            assert_eq!(session.read_chunk(i64::MAX as usize).unwrap(), b"ABCDEFGHIJ");
            assert!(session.read_chunk(5).unwrap().is_empty());
            assert_eq!(session.cursor(), i64::MAX as u64 + 5);
            assert!(session.peek_preview().unwrap().is_empty());
        }
    }
}
