//! Literal escape handling
//!
//! Text copied out of logs, JSON strings or chat messages often arrives
//! with its control characters stringified (`A\tB\nC`). This module turns
//! those two-character sequences back into real tabs and line breaks.

/// Replace literal `\t`, `\n` and `\r` sequences with the control
/// characters they name.
///
/// All other characters, including real control characters and other
/// backslash sequences, are left untouched.
pub fn unescape_literals(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            let replacement = match chars.peek() {
                Some('t') => Some('\t'),
                Some('n') => Some('\n'),
                Some('r') => Some('\r'),
                _ => None,
            };
            if let Some(r) = replacement {
                chars.next();
                result.push(r);
                continue;
            }
        }
        result.push(c);
    }

    result
}

/// Check whether the text contains any literal escape sequence
pub fn has_literal_escapes(text: &str) -> bool {
    text.contains("\\t") || text.contains("\\n") || text.contains("\\r")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_tab() {
        assert_eq!(unescape_literals("A\\tB\\tC"), "A\tB\tC");
    }

    #[test]
    fn test_unescape_newline() {
        assert_eq!(unescape_literals("A\\nB"), "A\nB");
        assert_eq!(unescape_literals("A\\r\\nB"), "A\r\nB");
    }

    #[test]
    fn test_unescape_mixed() {
        assert_eq!(
            unescape_literals("名前\\t年齢\\n田中\\t30"),
            "名前\t年齢\n田中\t30"
        );
    }

    #[test]
    fn test_unescape_leaves_other_text() {
        assert_eq!(unescape_literals("hello"), "hello");
        assert_eq!(unescape_literals("C:\\path\\x"), "C:\\path\\x");
        assert_eq!(unescape_literals("trailing\\"), "trailing\\");
        assert_eq!(unescape_literals("real\ttab"), "real\ttab");
        assert_eq!(unescape_literals(""), "");
    }

    #[test]
    fn test_unescape_idempotent_once_clean() {
        let once = unescape_literals("a\\tb\\nc\\td");
        assert!(!has_literal_escapes(&once));
        assert_eq!(unescape_literals(&once), once);
    }
}
