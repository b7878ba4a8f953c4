//! Symbols with a fixed meaning in paradigm spreadsheets and lexc source.

/// Morpheme boundary between prefix and stem.
pub const PREFIX_BOUNDARY: &str = "<<";
/// Morpheme boundary between stem and suffix.
pub const SUFFIX_BOUNDARY: &str = ">>";

/// Escape character of the lexc formalism.
pub const ESCAPE_MARKER: char = '%';
/// Characters which must be escaped in lexc entries.
pub const RESERVED_SYMBOLS: [char; 9] = ['!', '%', '<', '>', '0', '/', '#', ';', ' '];

/// The empty string in lexc.
pub const EPSILON: &str = "0";
/// Continuation class of accepting paths.
pub const TERMINAL_LEXICON: &str = "#";

/// Prefix identity used for forms without a prefix.
pub const NO_PREFIX: &str = "NONE";

/// Default upper bound (exclusive) of `Form{i}Surface` column indices.
pub const MAX_FORMS: usize = 100;
