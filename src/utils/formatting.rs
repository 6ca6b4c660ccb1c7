//! Formatting utilities used for CLI outputs.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad with trailing spaces up to `width` display columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    if used >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - used))
    }
}

/// Truncate to at most `width` display columns, appending `…` when text was
/// cut. Width-aware so wide glyphs never overflow a grid cell.
pub fn truncate_width(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_right_counts_display_columns() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("abcd", 2), "abcd");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_width("Standup", 10), "Standup");
        assert_eq!(truncate_width("Quarterly review", 8), "Quarter…");
    }

    #[test]
    fn truncate_handles_wide_glyphs() {
        // each CJK glyph is two columns wide
        let s = "会議です";
        let out = truncate_width(s, 5);
        assert!(UnicodeWidthStr::width(out.as_str()) <= 5);
        assert!(out.ends_with('…'));
    }
}
