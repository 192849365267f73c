use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use chunkview::annotate::{annotate, MarkerLayout, DEFAULT_LINE_INTERVAL, DEFAULT_MARKER_INTERVAL};
use chunkview::error::{ChunkError, Result};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "annotate")]
#[command(about = "Write a copy of a text file with __offset__ markers for checking chunkview")]
struct Args {
    /// Text to annotate
    #[arg(short, long, default_value = "great_gatsby.txt")]
    input: PathBuf,

    /// Where the annotated copy is written
    #[arg(short, long, default_value = "great_gatsby_file.txt")]
    output: PathBuf,

    /// Characters between markers
    #[arg(long, default_value_t = NonZeroUsize::new(DEFAULT_MARKER_INTERVAL).unwrap_or(NonZeroUsize::MIN))]
    marker_interval: NonZeroUsize,

    /// Characters between inserted line breaks
    #[arg(long, default_value_t = NonZeroUsize::new(DEFAULT_LINE_INTERVAL).unwrap_or(NonZeroUsize::MIN))]
    line_interval: NonZeroUsize,
}

fn run(args: &Args) -> Result<()> {
    let path = args.input.display().to_string();
    let bytes = fs::read(&args.input).map_err(|e| ChunkError::open(path.clone(), e))?;
    let text = String::from_utf8(bytes).map_err(|_| ChunkError::NotText { path })?;

    let layout = MarkerLayout {
        marker_interval: args.marker_interval,
        line_interval: args.line_interval,
    };
    let annotated = annotate(&text, layout);
    fs::write(&args.output, &annotated)?;

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        bytes = annotated.len(),
        "wrote annotated copy"
    );
    Ok(())
}

fn main() -> ExitCode {
    chunkview::init_logging();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
