use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::byte_source::ByteSource;
use crate::error::Result;
use crate::request::{parse_request, Request};
use crate::session::ReadSession;

/// Render a size the way the prompt shows it: whole KiB as `4k`, anything else as-is
pub fn format_size(n: usize) -> String {
    if n >= 1024 && n % 1024 == 0 {
        format!("{}k", n / 1024)
    } else {
        n.to_string()
    }
}

pub fn prompt_text(default_n: usize) -> String {
    format!(
        "Enter the number of characters to display (default is {}, -1 to exit): ",
        format_size(default_n)
    )
}

pub fn write_page<W: Write>(output: &mut W, chunk: &[u8], preview: &[u8], preview_size: usize) -> Result<()> {
    output.write_all(chunk)?;
    writeln!(output)?;
    writeln!(output)?;
    write!(output, "Preview to the next {} characters: ", preview_size)?;
    output.write_all(preview)?;
    writeln!(output)?;
    writeln!(output)?;
    Ok(())
}

/// Prompt, read, print until the user enters -1 or input runs out.
///
/// Bad numbers are reported on `output` and the prompt is shown again.
pub fn run_interactive_loop<S, R, W>(
    session: &mut ReadSession<S>,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    S: ByteSource,
    R: BufRead,
    W: Write,
{
    let prompt = prompt_text(session.default_chunk_size());
    let mut line = String::new();

    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!(cursor = session.cursor(), "input closed");
            writeln!(output)?;
            break;
        }

        let n = match parse_request(&line, session.default_chunk_size()) {
            Ok(Request::Quit) => break,
            Ok(Request::Read(n)) => n,
            Err(e) => {
                warn!("{}", e);
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        let chunk = session.read_chunk(n)?;
        let preview = session.peek_preview()?;
        write_page(output, &chunk, &preview, session.preview_size())?;
    }

    output.flush()?;
    Ok(())
}
