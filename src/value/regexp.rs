//! Regular-expression values
//!
//! A [`RegExp`] records a pattern source and its flag set. The pattern itself
//! is opaque to this crate: only the flags are ever inspected.

use std::fmt;

/// Flag alphabet accepted by [`RegExp::new`], in canonical order.
const FLAG_ALPHABET: &str = "dgimsuvy";

/// Error returned when a regular expression is created with invalid flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegExpError {
    /// A flag outside the `dgimsuvy` alphabet.
    UnknownFlag(char),
    /// The same flag given more than once.
    DuplicateFlag(char),
}

impl fmt::Display for RegExpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegExpError::UnknownFlag(c) => write!(f, "invalid regular expression flag '{}'", c),
            RegExpError::DuplicateFlag(c) => {
                write!(f, "duplicate regular expression flag '{}'", c)
            }
        }
    }
}

impl std::error::Error for RegExpError {}

/// A regular-expression value: pattern source plus a validated flag set.
///
/// # Example
///
/// ```rust
/// use valcheck::value::RegExp;
///
/// let re = RegExp::new("abc", "ig").unwrap();
/// assert_eq!(re.flags(), "gi");
/// assert!(RegExp::new("abc", "q").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegExp {
    source: String,
    flags: String,
}

impl RegExp {
    /// Create a regular expression, validating and canonicalising `flags`.
    pub fn new(source: impl Into<String>, flags: &str) -> Result<Self, RegExpError> {
        let flags = canonical_flags(flags).inspect_err(|_err| {
            #[cfg(feature = "tracing")]
            tracing::debug!(flags, error = %_err, "rejected regular expression flags");
        })?;
        Ok(Self {
            source: source.into(),
            flags,
        })
    }

    /// The pattern source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The active flags, in alphabetical order.
    pub fn flags(&self) -> &str {
        &self.flags
    }
}

impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

fn canonical_flags(flags: &str) -> Result<String, RegExpError> {
    let mut seen = [false; FLAG_ALPHABET.len()];
    for c in flags.chars() {
        let slot = FLAG_ALPHABET
            .find(c)
            .ok_or(RegExpError::UnknownFlag(c))?;
        if seen[slot] {
            return Err(RegExpError::DuplicateFlag(c));
        }
        seen[slot] = true;
    }
    Ok(FLAG_ALPHABET
        .chars()
        .zip(seen)
        .filter_map(|(c, on)| on.then_some(c))
        .collect())
}
