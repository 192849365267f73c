use std::num::NonZeroUsize;

pub const DEFAULT_MARKER_INTERVAL: usize = 100;
pub const DEFAULT_LINE_INTERVAL: usize = 4000;

#[derive(Debug, Clone, Copy)]
pub struct MarkerLayout {
    pub marker_interval: NonZeroUsize,
    pub line_interval: NonZeroUsize,
}

impl Default for MarkerLayout {
    fn default() -> Self {
        Self {
            marker_interval: NonZeroUsize::new(DEFAULT_MARKER_INTERVAL).unwrap_or(NonZeroUsize::MIN),
            line_interval: NonZeroUsize::new(DEFAULT_LINE_INTERVAL).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// Copy `text`, inserting `__<offset>__` markers and line breaks.
///
/// Offsets count output characters, markers and inserted newlines included, so each
/// marker names the position where it starts. Paging to that offset in the annotated
/// file lands exactly on the marker.
pub fn annotate(text: &str, layout: MarkerLayout) -> String {
    let marker_interval = layout.marker_interval.get();
    let line_interval = layout.line_interval.get();

    let mut out = String::with_capacity(text.len() + text.len() / marker_interval * 8);
    let mut count = 0usize;

    for ch in text.chars() {
        out.push(ch);
        count += 1;

        let mut marker_len = 0;
        if count % marker_interval == 0 {
            let marker = format!("__{}__", count);
            marker_len = marker.chars().count();
            out.push_str(&marker);
            count += marker_len;
        }
        if (count - marker_len) % line_interval == 0 {
            out.push('\n');
            count += 1;
        }
    }

    out
}
