use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

use crate::byte_source::ByteSource;
use crate::error::{ChunkError, Result};

pub struct MappedFile {
    mmap: Option<Mmap>,
    display_name: String,
}

impl MappedFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let display_name = path.display().to_string();
        let file = File::open(path).map_err(|e| ChunkError::open(display_name.clone(), e))?;

        // Zero-length files cannot be mapped on every platform.
        let mmap = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { Mmap::map(&file)? })
        };

        Ok(Self { mmap, display_name })
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}

impl ByteSource for MappedFile {
    fn read_at(&self, offset: u64, len: usize) -> Result<Vec<u8>> {
        let data = self.as_bytes();
        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(data.len());
        let end = start.saturating_add(len).min(data.len());
        Ok(data[start..end].to_vec())
    }

    fn file_size(&self) -> u64 {
        self.as_bytes().len() as u64
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }
}
