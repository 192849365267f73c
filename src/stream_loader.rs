use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::byte_source::ByteSource;
use crate::error::{ChunkError, Result};

/// Reads straight from the open handle, so the file never has to fit in memory.
pub struct StreamingFile {
    file: File,
    display_name: String,
}

impl StreamingFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let display_name = path.display().to_string();
        let file = File::open(path).map_err(|e| ChunkError::open(display_name.clone(), e))?;
        Ok(Self { file, display_name })
    }
}

impl ByteSource for StreamingFile {
    fn read_at(&self, offset: u64, len: usize) -> Result<Vec<u8>> {
        // Cursors can run far past EOF, beyond what `seek` accepts.
        if offset >= self.file_size() {
            return Ok(Vec::new());
        }

        let mut handle = &self.file;
        handle.seek(SeekFrom::Start(offset))?;

        // `take` stops at `len`, `read_to_end` stops at EOF; a short file gives a short chunk.
        let mut buf = Vec::new();
        handle.take(len as u64).read_to_end(&mut buf)?;
        Ok(buf)
    }

    fn file_size(&self) -> u64 {
        self.file.metadata().map(|m| m.len()).unwrap_or(0)
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }
}
