//! String escaping for SQL literals.

/// Escape a string for use inside a literal delimited by `quote_char`.
///
/// SQL escapes a delimiter by doubling it; no other character is special.
pub fn escape_string_for_quote(s: &str, quote_char: char) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        if c == quote_char {
            result.push(c);
        }
        result.push(c);
    }
    result
}

/// Escape a string for use in a single-quoted SQL literal.
#[inline]
pub fn escape_string_single(s: &str) -> String {
    escape_string_for_quote(s, '\'')
}

/// Wrap a string in single quotes, escaping embedded quotes.
#[inline]
pub fn quote_single(s: &str) -> String {
    format!("'{}'", escape_string_single(s))
}
