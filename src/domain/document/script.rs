//! Script predicate for fields restricted to Arabic text.
//!
//! Several form fields (names, authorities, nationalities) must be written
//! in Arabic script. The rule is deliberately narrow: every character must
//! fall inside the Arabic Unicode block or be whitespace. Latin letters,
//! ASCII digits, and punctuation all fail.

/// Returns true if `c` falls inside the Arabic Unicode block (U+0600..=U+06FF).
pub fn is_arabic_char(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}')
}

/// Returns true if `value` is non-empty and every character is either an
/// Arabic-block codepoint or whitespace.
pub fn is_arabic_text(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| is_arabic_char(c) || c.is_whitespace())
}
