//! Query and alias normalization.

/// Normalizes text for alias comparison.
///
/// Lower-cases, drops all whitespace, and maps Arabic-Indic (U+0660-0669)
/// and extended Persian (U+06F0-06F9) digits to ASCII.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| fold_digit(c).to_lowercase())
        .collect()
}

fn fold_digit(c: char) -> char {
    let offset = match c {
        '\u{0660}'..='\u{0669}' => c as u32 - 0x0660,
        '\u{06F0}'..='\u{06F9}' => c as u32 - 0x06F0,
        _ => return c,
    };
    char::from_digit(offset, 10).unwrap_or(c)
}
