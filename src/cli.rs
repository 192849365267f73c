use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::byte_source::Strategy;
use crate::session::{DEFAULT_CHUNK_SIZE, PREVIEW_SIZE};

pub const DEFAULT_FILE: &str = "random_file.txt";

#[derive(Parser, Debug)]
#[command(name = "chunkview")]
#[command(version, about = "Page through a file a chunk at a time")]
pub struct Args {
    /// File to read
    #[arg(short = 'f', long = "file", env = "CHUNKVIEW_FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Characters shown when the prompt is left blank
    #[arg(short = 'n', long = "chunk-size", env = "CHUNKVIEW_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Length of the look-ahead printed after each chunk
    #[arg(short = 'p', long = "preview", default_value_t = PREVIEW_SIZE)]
    pub preview: usize,

    /// How the file is read
    #[arg(short = 's', long = "strategy", value_enum, default_value_t = Strategy::Stream)]
    pub strategy: Strategy,
}

/// Parse the process arguments, skipping anything the command does not define
pub fn parse_args() -> Args {
    Args::parse_from(retain_known_flags(std::env::args_os()))
}

/// Drop unrecognized flags and stray tokens so they are ignored rather than rejected.
///
/// Known flags are looked up in the command's own argument table, so this keeps
/// working as arguments are added. A flag that takes a value keeps the token after it.
pub fn retain_known_flags<I, T>(raw: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut cmd = Args::command();
    cmd.build();

    let mut short_flags = Vec::new();
    let mut long_flags = Vec::new();
    for arg in cmd.get_arguments() {
        let takes_value = arg.get_action().takes_values();
        if let Some(short) = arg.get_short() {
            short_flags.push((short, takes_value));
        }
        if let Some(long) = arg.get_long() {
            long_flags.push((long.to_string(), takes_value));
        }
    }

    let mut raw = raw.into_iter().map(Into::<OsString>::into);
    let mut kept: Vec<OsString> = raw.next().into_iter().collect();

    while let Some(token) = raw.next() {
        let text = token.to_string_lossy().into_owned();

        let matched = if let Some(long) = text.strip_prefix("--") {
            match long.split_once('=') {
                Some((name, _)) => long_flags.iter().find(|(l, _)| l == name).map(|_| false),
                None => long_flags.iter().find(|(l, _)| l == long).map(|(_, v)| *v),
            }
        } else if let Some(short) = text.strip_prefix('-') {
            let mut chars = short.chars();
            match (chars.next(), chars.as_str()) {
                (Some(c), rest) => short_flags
                    .iter()
                    .find(|(s, _)| *s == c)
                    .map(|(_, v)| *v && rest.is_empty()),
                (None, _) => None,
            }
        } else {
            None
        };

        match matched {
            Some(needs_value) => {
                kept.push(token);
                if needs_value {
                    if let Some(value) = raw.next() {
                        kept.push(value);
                    }
                }
            }
            None => tracing::debug!(token = %text, "ignoring unrecognized argument"),
        }
    }

    kept
}
