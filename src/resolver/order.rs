//! Ordering of profile records by their declared dependencies
//!
//! The adapter between profile metadata and the generic sorter: record ids
//! become the item sequence (input order doubles as the tie-break), each
//! namespaced dependency reference becomes one `(dependency, dependent)`
//! constraint, and the sorter's cyclic outcome becomes a structured
//! [`ResolveError`].

use super::error::{ResolveError, ResolveResult};
use super::profile_id::ProfileId;
use crate::graph::{topological_sort, Topology};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One profile's metadata as supplied by the registry.
///
/// `dependencies` holds namespaced references (`"profile-<id>"`) exactly as
/// declared; a record that declares none deserializes without the field.
///
/// # Examples
///
/// ```
/// use taxis::ProfileInfo;
///
/// let standalone = ProfileInfo::new("foo");
/// assert!(standalone.dependencies.is_empty());
///
/// let dependent = ProfileInfo::with_dependencies("bar", ["profile-foo"]);
/// assert_eq!(dependent.dependencies, ["profile-foo"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInfo {
    /// Bare identifier of this profile.
    pub id: ProfileId,
    /// Namespaced references to the profiles this one depends on,
    /// in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl ProfileInfo {
    /// Creates a record with no dependencies.
    pub fn new(id: impl Into<ProfileId>) -> Self {
        Self {
            id: id.into(),
            dependencies: Vec::new(),
        }
    }

    /// Creates a record with namespaced dependency references.
    pub fn with_dependencies(
        id: impl Into<ProfileId>,
        dependencies: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            dependencies: dependencies.into_iter().map(Into::into).collect(),
        }
    }
}

/// Resolves the order in which the given profiles must be applied.
///
/// Returns the bare profile identifiers, dependencies first. Among profiles
/// with no relative constraint, input order wins, so the result is fully
/// deterministic. Dependencies on profiles missing from `profiles` constrain
/// nothing and are ignored.
///
/// # Errors
///
/// [`ResolveError::CyclicDependencies`] when the declared dependencies admit
/// no valid order. The error carries the implicated pairs; no partial order
/// is returned.
///
/// # Examples
///
/// ```
/// use taxis::{resolve_order, ProfileInfo};
///
/// let profiles = vec![
///     ProfileInfo::with_dependencies("bar", ["profile-foo"]),
///     ProfileInfo::new("foo"),
/// ];
///
/// let order = resolve_order(&profiles)?;
/// let names: Vec<&str> = order.iter().map(|id| id.as_str()).collect();
/// assert_eq!(names, ["foo", "bar"]);
/// # Ok::<(), taxis::ResolveError>(())
/// ```
pub fn resolve_order(profiles: &[ProfileInfo]) -> ResolveResult<Vec<ProfileId>> {
    let ids: Vec<ProfileId> = profiles.iter().map(|profile| profile.id.clone()).collect();

    let mut constraints: Vec<(ProfileId, ProfileId)> = Vec::new();
    for profile in profiles {
        for reference in &profile.dependencies {
            // the dependency must be applied before its dependent
            constraints.push((ProfileId::from_reference(reference), profile.id.clone()));
        }
    }

    debug!(
        profiles = ids.len(),
        constraints = constraints.len(),
        "resolving profile order"
    );

    match topological_sort(&ids, &constraints) {
        Topology::Ordered(order) => {
            debug!(resolved = order.len(), "profile order resolved");
            Ok(order)
        }
        Topology::Cyclic(pairs) => {
            warn!(pairs = ?pairs, "cyclic profile dependencies detected");
            Err(ResolveError::cyclic(pairs))
        }
    }
}
