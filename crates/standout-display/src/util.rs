//! Text measuring and padding helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns the number of terminal columns `s` occupies.
///
/// CJK and other wide characters count as 2, combining marks as 0.
///
/// # Example
///
/// ```rust
/// use standout_display::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本"), 4);
/// assert_eq!(display_width("…"), 1);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Left-justifies `s` in a field of `width` columns, padding with `fill`.
///
/// Content wider than the field is never cut; it is returned unchanged.
/// A wide `fill` is repeated only while it fits, and any leftover column is
/// padded with a space. Zero-width fills fall back to spaces.
///
/// # Example
///
/// ```rust
/// use standout_display::pad_right_with;
///
/// assert_eq!(pad_right_with("ab", 5, '.'), "ab...");
/// assert_eq!(pad_right_with("abcdef", 3, ' '), "abcdef");
/// ```
pub fn pad_right_with(s: &str, width: usize, fill: char) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let missing = width - current;
    let fill_width = fill.width().unwrap_or(0);
    let (fill, fill_width) = if fill_width == 0 { (' ', 1) } else { (fill, fill_width) };
    let repeats = missing / fill_width;
    let leftover = missing % fill_width;

    let mut out = String::with_capacity(s.len() + repeats * fill.len_utf8() + leftover);
    out.push_str(s);
    out.extend(std::iter::repeat(fill).take(repeats));
    out.extend(std::iter::repeat(' ').take(leftover));
    out
}
