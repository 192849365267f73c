use std::io;
use std::process::ExitCode;

use chunkview::byte_source;
use chunkview::cli;
use chunkview::pager::run_interactive_loop;
use chunkview::session::ReadSession;
use tracing::error;

fn main() -> ExitCode {
    chunkview::init_logging();
    let args = cli::parse_args();

    let source = match byte_source::open(&args.file, args.strategy) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut session = ReadSession::new(source, args.chunk_size).with_preview_size(args.preview);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_interactive_loop(&mut session, &mut stdin.lock(), &mut stdout.lock()) {
        error!(cursor = session.cursor(), "pager stopped: {}", e);
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
