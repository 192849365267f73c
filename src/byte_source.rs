use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::error::Result;
use crate::file_loader::MappedFile;
use crate::stream_loader::StreamingFile;

pub trait ByteSource: Send + Sync {
    /// Read up to `len` bytes starting at `offset`. Past the end yields fewer bytes, possibly none.
    fn read_at(&self, offset: u64, len: usize) -> Result<Vec<u8>>;

    /// Total size of the underlying file in bytes
    fn file_size(&self) -> u64;

    /// Display name for messages and logs
    fn display_name(&self) -> &str;
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn read_at(&self, offset: u64, len: usize) -> Result<Vec<u8>> {
        (**self).read_at(offset, len)
    }

    fn file_size(&self) -> u64 {
        (**self).file_size()
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Seek and read from the open file handle on every request
    Stream,
    /// Map the whole file into memory up front
    Mapped,
}

pub fn open<P: AsRef<Path>>(path: P, strategy: Strategy) -> Result<Box<dyn ByteSource>> {
    let path = path.as_ref();
    let source: Box<dyn ByteSource> = match strategy {
        Strategy::Stream => Box::new(StreamingFile::open(path)?),
        Strategy::Mapped => Box::new(MappedFile::open(path)?),
    };

    info!(
        path = source.display_name(),
        ?strategy,
        size = source.file_size(),
        "opened file"
    );
    Ok(source)
}
