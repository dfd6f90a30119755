//! Terminal display width helpers.
//!
//! Provides ANSI-aware width calculation so the harness status panel stays
//! aligned when lines carry colour codes.

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

/// Right-pad `text` with spaces to `width` display columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = display_width(text);
    let mut padded = text.to_string();
    if current < width {
        padded.push_str(&" ".repeat(width - current));
    }
    padded
}
