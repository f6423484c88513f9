use std::fmt;

use crate::NamingError;

/// A job's scheduling priority, drawn from `0-9A-Za-z`.
///
/// Ordering is the total order from §3: `0..9 < A..Z < a..z`, digits
/// highest priority. This happens to coincide with plain ASCII code-point
/// order, so [`Grade`] derives [`Ord`] directly from the wrapped `char`
/// rather than hand-rolling a rank table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grade(char);

impl Grade {
    /// Parses a single grade character, rejecting anything outside
    /// `0-9A-Za-z`.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::IllegalGrade`] for any other character.
    pub fn parse(c: char) -> Result<Self, NamingError> {
        if c.is_ascii_digit() || c.is_ascii_alphabetic() {
            Ok(Self(c))
        } else {
            Err(NamingError::IllegalGrade(c))
        }
    }

    /// Returns the underlying character.
    #[must_use]
    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
