/*!
 * Text normalization and tokenization for subtitle dialogue.
 *
 * Normalization is a fixed three-step pass:
 * 1. bidirectional/formatting control marks are deleted
 * 2. the text is lowercased
 * 3. every character that is neither alphanumeric nor whitespace becomes a space
 *
 * Apostrophes and hyphens are separators too, so `don't` yields `don` and `t`.
 */

// @const: Control marks removed before lowercasing
pub const BIDI_MARKS: [char; 8] = [
    '\u{200E}', // left-to-right mark
    '\u{200F}', // right-to-left mark
    '\u{202A}', // left-to-right embedding
    '\u{202B}', // right-to-left embedding
    '\u{202C}', // pop directional formatting
    '\u{202D}', // left-to-right override
    '\u{202E}', // right-to-left override
    '\u{FEFF}', // byte-order mark
];

// @checks: Character is one of the stripped control marks
pub fn is_bidi_mark(c: char) -> bool {
    BIDI_MARKS.contains(&c)
}

/// Normalize one dialogue line into a lowercase, punctuation-free string.
///
/// Leading and trailing whitespace is kept; [`tokenize`] ignores it.
pub fn normalize_line(line: &str) -> String {
    let stripped: String = line.chars().filter(|c| !is_bidi_mark(*c)).collect();

    // str::to_lowercase handles multi-char mappings and final sigma
    stripped
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Split a normalized line into words on runs of whitespace
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}
