//! String literal escaping.

/// Expression spliced in for a line feed.
const LINE_FEED: &str = "'||chr(13)||'";

/// Expression spliced in for a carriage return.
const CARRIAGE_RETURN: &str = "'||chr(10)||'";

/// Quotes `value` as a Kbase string literal.
///
/// Single quotes are doubled and line breaks become `chr()` concatenations.
/// Kbase expects `chr(13)` for `\n` and `chr(10)` for `\r`, the reverse of
/// ASCII. The transform is one-way: quoting an already quoted literal
/// escapes it again.
#[must_use]
pub fn quote_literal(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        match ch {
            '\'' => quoted.push_str("''"),
            '\n' => quoted.push_str(LINE_FEED),
            '\r' => quoted.push_str(CARRIAGE_RETURN),
            _ => quoted.push(ch),
        }
    }
    quoted.push('\'');
    quoted
}
