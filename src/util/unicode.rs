use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad with trailing spaces to `width` cells. Strings already at or
/// past the width are returned unchanged.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        let mut out = String::with_capacity(s.len() + width - w);
        out.push_str(s);
        for _ in 0..width - w {
            out.push(' ');
        }
        out
    }
}
