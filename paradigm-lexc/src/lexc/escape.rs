use smol_str::SmolStr;

use crate::constants::{ESCAPE_MARKER, RESERVED_SYMBOLS};

/// Escape lexc special characters (`! % < > 0 / # ;` and space) with `%`.
///
/// A `%` followed by a reserved character is an existing escape and is
/// copied as is, so escaping an already escaped string changes nothing.
/// Any other `%` is escaped itself.
pub fn escape(symbol: &str) -> SmolStr {
    let mut out = String::with_capacity(symbol.len() + 4);
    let mut chars = symbol.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESCAPE_MARKER {
            out.push(ESCAPE_MARKER);
            match chars.peek() {
                Some(&next) if RESERVED_SYMBOLS.contains(&next) => {
                    out.push(next);
                    chars.next();
                }
                _ => out.push(ESCAPE_MARKER),
            }
            continue;
        }

        if RESERVED_SYMBOLS.contains(&ch) {
            out.push(ESCAPE_MARKER);
        }
        out.push(ch);
    }

    out.into()
}
