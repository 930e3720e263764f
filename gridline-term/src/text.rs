//! Cell text measurement and formatting.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Displayed width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Fit a string into exactly `width` cells: truncate with a trailing
/// ellipsis when too long, pad with spaces when too short.
pub fn fit_cell(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let current = display_width(s);
    if current <= width {
        let mut out = String::with_capacity(s.len() + (width - current));
        out.push_str(s);
        out.push_str(&" ".repeat(width - current));
        return out;
    }

    let target = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > target {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');

    // A wide character at the boundary can leave the cell short.
    let padded = display_width(&out);
    out.push_str(&" ".repeat(width.saturating_sub(padded)));
    out
}
