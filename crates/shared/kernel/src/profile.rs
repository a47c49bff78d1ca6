use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// A compliance profile identity: `(id, version)`, displayed as `"GAC 2.0"`.
///
/// Each pair is an independent constraint namespace; two versions of one profile may
/// reuse constraint ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Profile {
    id: Cow<'static, str>,
    version: Cow<'static, str>,
}

impl Profile {
    #[must_use]
    pub const fn new(id: &'static str, version: &'static str) -> Self {
        Self { id: Cow::Borrowed(id), version: Cow::Borrowed(version) }
    }

    /// Builds a profile from runtime strings (e.g. read from configuration).
    pub fn owned(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self { id: Cow::Owned(id.into()), version: Cow::Owned(version.into()) }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Same profile id under another version.
    #[must_use]
    pub fn is_sibling_of(&self, other: &Self) -> bool {
        self.id == other.id && self.version != other.version
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.version)
    }
}
