use crate::error::{ChunkError, Result};

pub const QUIT_SENTINEL: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Read(usize),
    Quit,
}

/// Parse one line typed at the prompt. Blank input falls back to `default_n`.
pub fn parse_request(input: &str, default_n: usize) -> Result<Request> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Request::Read(default_n));
    }

    let invalid = || ChunkError::InvalidNumber {
        input: input.to_string(),
    };

    let n: i64 = input.parse().map_err(|_| invalid())?;
    if n == QUIT_SENTINEL {
        return Ok(Request::Quit);
    }
    // Anything else below zero would walk the cursor backwards.
    let n = usize::try_from(n).map_err(|_| invalid())?;
    Ok(Request::Read(n))
}
