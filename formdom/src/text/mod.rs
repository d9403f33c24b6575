use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncate `s` to `max_width` columns, ending with an ellipsis when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

/// Truncate or right-pad `s` with spaces to exactly `width` columns.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let pad = width.saturating_sub(display_width(&out));
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("Banana", 10), "Banana");
        assert_eq!(truncate_to_width("Banana", 4), "Ban…");
        assert_eq!(truncate_to_width("Banana", 0), "");
    }

    #[test]
    fn test_fit_pads_wide_chars() {
        assert_eq!(fit_to_width("日本", 6), "日本  ");
        assert_eq!(display_width(&fit_to_width("Cherry", 8)), 8);
    }
}
