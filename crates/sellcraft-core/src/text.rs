//! Word extraction from free-form Japanese/English seller input.
//!
//! Used to surface candidate keywords from the raw self-description
//! before idea generation.

/// True for characters that terminate a token: whitespace plus ASCII and
/// full-width sentence punctuation.
fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            ',' | '，' | '.' | '．' | '、' | '。' | '!' | '！' | '?' | '？'
        )
}

/// Split `text` on separator runs and keep tokens of 2 to 14 characters.
///
/// Length is counted in characters, not bytes, so CJK input filters the
/// same way as ASCII. Duplicates are preserved in input order.
pub fn extract_words(text: &str) -> Vec<&str> {
    text.split(is_separator)
        .filter(|token| {
            let len = token.chars().count();
            (2..15).contains(&len)
        })
        .collect()
}
