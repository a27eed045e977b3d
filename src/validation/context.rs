use serde::Serialize;

/// Lines shown before the failing line.
pub const LINES_BEFORE: usize = 2;

/// Lines shown after the failing line.
pub const LINES_AFTER: usize = 2;

/// A single source line shown around a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextLine {
    /// 1-based line number
    pub number: usize,
    pub text: String,
}

/// Collect the source lines surrounding `line` (1-based).
///
/// The window is clamped to the lines that exist, so a failure reported past
/// the last line (EOF after a trailing newline) still shows the tail of the
/// document, and an empty document yields no lines at all.
pub fn context_window(source: &str, line: usize) -> Vec<ContextLine> {
    let first = line.saturating_sub(LINES_BEFORE + 1);
    let end = line + LINES_AFTER;

    source
        .lines()
        .enumerate()
        .skip(first)
        .take(end.saturating_sub(first))
        .map(|(idx, text)| ContextLine {
            number: idx + 1,
            text: text.to_string(),
        })
        .collect()
}
