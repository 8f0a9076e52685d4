use std::fmt;

use crate::domain::errors::{AuthError, InvalidInput};

pub const USERNAME_MIN_CHARS: usize = 3;
pub const USERNAME_MAX_CHARS: usize = 20;

/// A normalized username: surrounding whitespace trimmed, length within
/// bounds.
///
/// The normalized value is the canonical form for storage keys and uniqueness
/// comparisons, so two raw usernames differing only by surrounding whitespace
/// map to the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Parse a raw username into its normalized form.
    ///
    /// Trims surrounding whitespace, then requires the trimmed value to be
    /// between 3 and 20 characters inclusive.
    pub fn parse(raw: &str) -> Result<Self, AuthError> {
        let trimmed = raw.trim();
        let length = trimmed.chars().count();
        if !(USERNAME_MIN_CHARS..=USERNAME_MAX_CHARS).contains(&length) {
            return Err(InvalidInput::UsernameLength.into());
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
