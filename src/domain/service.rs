// ECS service naming - reduces service ARNs to dashboard short names
use std::fmt;

/// Target group names share this ceiling, so the short name doubles as the lookup key.
pub const MAX_SHORT_NAME_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceShortName(String);

impl ServiceShortName {
    /// Derive the short name from an identifier shaped like `prefix/name/suffix`.
    ///
    /// The second `/`-separated segment is truncated to [`MAX_SHORT_NAME_LEN`]
    /// characters and then validated end-to-end against `[A-Za-z0-9-]+`.
    /// Returns `None` when the identifier has fewer than two segments or the
    /// truncated name is empty or contains any other character.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let segment = identifier.split('/').nth(1)?;
        let truncated: String = segment.chars().take(MAX_SHORT_NAME_LEN).collect();

        if Self::is_valid(&truncated) {
            Some(Self(truncated))
        } else {
            None
        }
    }

    fn is_valid(name: &str) -> bool {
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceShortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
