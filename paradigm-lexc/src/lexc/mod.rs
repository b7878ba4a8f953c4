//! Building blocks of lexc source: escaping, segmented forms, entries and
//! sublexicon names.
mod entry;
mod escape;
mod form;
mod name;

pub use self::entry::LexcEntry;
pub use self::escape::escape;
pub use self::form::{split_form, FormError, SplitForm};
pub use self::name::{EndingKey, LexiconName};
