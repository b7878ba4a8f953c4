use itertools::Itertools;
use smol_str::SmolStr;

use super::escape;
use crate::constants::{PREFIX_BOUNDARY, SUFFIX_BOUNDARY};

/// An inflected form segmented into prefix, stem and suffix. Every part is
/// escaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SplitForm {
    /// text before `<<`, possibly empty
    pub prefix: SmolStr,
    /// text between the boundaries
    pub stem: SmolStr,
    /// text after `>>`, possibly empty
    pub suffix: SmolStr,
}

/// A segmented form which cannot be split into prefix, stem and suffix.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// `found` lists the boundaries in the order they occur.
    #[error("Invalid form {form:?}: expected exactly two morpheme boundaries, found [{found}]")]
    Malformed { form: String, found: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Prefix,
    Suffix,
}

impl Boundary {
    fn as_str(&self) -> &'static str {
        match self {
            Boundary::Prefix => PREFIX_BOUNDARY,
            Boundary::Suffix => SUFFIX_BOUNDARY,
        }
    }
}

/// Split `prefix<<stem>>suffix` at its morpheme boundaries.
///
/// A missing `<<` is added at the start and a missing `>>` at the end, with
/// a warning. Forms which still do not split into exactly three segments
/// are rejected.
pub fn split_form(form: &str) -> Result<SplitForm, FormError> {
    let mut repaired = form.to_string();

    if !repaired.contains(PREFIX_BOUNDARY) {
        log::warn!(
            "Invalid form {:?}: adding morpheme boundary '{}' at the start",
            form,
            PREFIX_BOUNDARY
        );
        repaired.insert_str(0, PREFIX_BOUNDARY);
    }

    if !repaired.contains(SUFFIX_BOUNDARY) {
        log::warn!(
            "Invalid form {:?}: adding morpheme boundary '{}' at the end",
            form,
            SUFFIX_BOUNDARY
        );
        repaired.push_str(SUFFIX_BOUNDARY);
    }

    let (segments, boundaries) = segment(&repaired);

    match (segments.as_slice(), boundaries.as_slice()) {
        ([prefix, stem, suffix], _) => Ok(SplitForm {
            prefix: escape(prefix),
            stem: escape(stem),
            suffix: escape(suffix),
        }),
        _ => Err(FormError::Malformed {
            form: form.to_string(),
            found: boundaries.iter().map(Boundary::as_str).join(" "),
        }),
    }
}

// Leftmost, non-overlapping scan, `<<` tried before `>>`.
fn segment(form: &str) -> (Vec<&str>, Vec<Boundary>) {
    let mut segments = Vec::with_capacity(3);
    let mut boundaries = Vec::with_capacity(2);
    let mut start = 0;
    let mut i = 0;

    while i < form.len() {
        let rest = &form[i..];
        let boundary = if rest.starts_with(PREFIX_BOUNDARY) {
            Some(Boundary::Prefix)
        } else if rest.starts_with(SUFFIX_BOUNDARY) {
            Some(Boundary::Suffix)
        } else {
            None
        };

        match boundary {
            Some(b) => {
                segments.push(&form[start..i]);
                boundaries.push(b);
                i += b.as_str().len();
                start = i;
            }
            None => i += rest.chars().next().map(char::len_utf8).unwrap_or(1),
        }
    }
    segments.push(&form[start..]);

    (segments, boundaries)
}
