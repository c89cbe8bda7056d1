//! Profile identifier type
//!
//! A profile is referenced two ways in the wild: bare (`"foo"`) in ordering
//! results, and namespaced (`"profile-foo"`) in dependency declarations.
//! [`ProfileId`] always holds the bare form; [`ProfileId::from_reference`] is
//! the one place the namespace is stripped, so the sorter and everything
//! downstream stay free of the naming convention.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace prefix used by dependency references (`"profile-<id>"`).
pub const PROFILE_PREFIX: &str = "profile-";

/// Bare identifier of one upgrade profile.
///
/// # Examples
///
/// ```
/// use taxis::ProfileId;
///
/// let id = ProfileId::new("foo");
/// assert_eq!(id.as_str(), "foo");
///
/// // dependency declarations carry a namespace; strip it exactly once
/// let referenced = ProfileId::from_reference("profile-foo");
/// assert_eq!(referenced, id);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    /// Creates a profile id from its bare form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Resolves a namespaced dependency reference to the profile it names.
    ///
    /// A reference without the `"profile-"` prefix is taken as already bare.
    pub fn from_reference(reference: &str) -> Self {
        Self::new(reference.strip_prefix(PROFILE_PREFIX).unwrap_or(reference))
    }

    /// Returns the bare identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProfileId({})", self.0)
    }
}

impl From<&str> for ProfileId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProfileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ProfileId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reference_strips_namespace() {
        let id = ProfileId::from_reference("profile-foo");
        assert_eq!(id, ProfileId::new("foo"));
    }

    #[test]
    fn test_from_reference_strips_only_the_leading_prefix() {
        let id = ProfileId::from_reference("profile-profile-foo");
        assert_eq!(id.as_str(), "profile-foo");
    }

    #[test]
    fn test_from_reference_accepts_bare_ids() {
        let id = ProfileId::from_reference("foo");
        assert_eq!(id.as_str(), "foo");
    }

    #[test]
    fn test_display_and_debug() {
        let id = ProfileId::new("foo");
        assert_eq!(format!("{id}"), "foo");
        assert_eq!(format!("{id:?}"), "ProfileId(foo)");
    }

    #[test]
    fn test_serde_is_transparent() {
        let id: ProfileId = serde_json::from_str("\"foo\"").unwrap();
        assert_eq!(id, ProfileId::new("foo"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"foo\"");
    }
}
