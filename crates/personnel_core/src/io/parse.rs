//! Lenient field parsing for line-oriented input.
//!
//! # Invariants
//! - Parsing never fails; fallbacks are `""` and `0`.
//! - Text is kept as entered apart from the line terminator.

/// Strips one trailing `\n` or `\r\n` from a raw line.
pub fn strip_line_terminator(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Text field value; `""` when input is exhausted.
pub fn text_or_empty(line: Option<&str>) -> String {
    line.unwrap_or_default().to_string()
}

/// Integer field value; `0` when input is exhausted or not a valid `i32`.
///
/// The line is parsed as-is, so surrounding spaces make it invalid.
pub fn int_or_zero(line: Option<&str>) -> i32 {
    line.and_then(|value| value.parse::<i32>().ok()).unwrap_or(0)
}
