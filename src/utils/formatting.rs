//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Pads `s` with spaces up to `width` terminal columns.
/// Strings already wider than `width` are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(used));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

/// e.g. `Total time: 67.00 s (1.12 min)`
pub fn format_total(seconds: f64) -> String {
    format!("Total time: {:.2} s ({:.2} min)", seconds, seconds / 60.0)
}
