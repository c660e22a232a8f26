use crate::error::{Result, StorageError};

/// Longest display name kept, in characters.
pub const MAX_NAME_CHARS: usize = 24;

/// A newtype that ensures player names are stored in a normalized form:
/// every whitespace run collapsed to a single space, no leading or trailing
/// whitespace, and at most [`MAX_NAME_CHARS`] characters.
///
/// The ASCII information separators (`U+001C..=U+001F`) count as whitespace
/// alongside Unicode `White_Space`.
///
/// The type enforces at compile-time that you must use the normalized form when
/// writing names to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerName(String);

impl PlayerName {
    /// Normalizes a raw display name.
    ///
    /// Fails with [`StorageError::InvalidInput`] when nothing is left after
    /// collapsing whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use storage::models::PlayerName;
    ///
    /// let name = PlayerName::new("  Ana   Lima ").unwrap();
    /// assert_eq!(name.as_str(), "Ana Lima");
    ///
    /// assert!(PlayerName::new(" \t\n ").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self> {
        let collapsed = raw
            .split(is_separator)
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let name: String = collapsed.chars().take(MAX_NAME_CHARS).collect();

        if name.is_empty() {
            return Err(StorageError::InvalidInput("invalid name".to_string()));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
