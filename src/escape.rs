//! Escaping of regex metacharacters in literal text.

use phf::{Set, phf_set};

/// Characters that have a meaning of their own in pattern syntax.
///
/// `#` starts a comment when whitespace is ignored.
static RESERVED: Set<char> = phf_set! {
    '\\', '^', '$', '.', '|', '?', '*', '+', '(', ')', '[', ']', '{', '}', '#',
};

pub fn is_reserved(ch: char) -> bool {
    RESERVED.contains(&ch)
}

/// Make `text` match literally, whatever flags the pattern is compiled with.
///
/// Reserved characters get a backslash. Whitespace is written as a `\x{..}`
/// escape so it survives the ignore-whitespace flag.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if is_reserved(ch) {
            escaped.push('\\');
            escaped.push(ch);
        } else if ch.is_whitespace() {
            escaped.push_str(&format!("\\x{{{:X}}}", ch as u32));
        } else {
            escaped.push(ch);
        }
    }
    escaped
}
