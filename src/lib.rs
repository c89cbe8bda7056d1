//! Taxis: Deterministic Dependency Ordering for Upgrade Profiles
//!
//! `taxis` (τάξις, Greek for "arrangement" or "order") decides in which order
//! named upgrade units must be applied so that a unit never runs before the
//! units it depends on. It reports, deterministically, either a total order
//! consistent with every declared dependency or the exact chain of
//! dependencies that forms a cycle.
//!
//! # Features
//!
//! - **Stable tie-breaking**: items with no relative constraint keep their
//!   input order, so identical input always produces identical output
//! - **Cycle evidence**: a cyclic graph fails with the ordered list of
//!   dependency pairs that close the cycle, not just a boolean
//! - **Domain-agnostic core**: the sorter operates on opaque identifiers;
//!   the profile naming convention lives entirely in the resolver
//!
//! # Quick Start
//!
//! ```
//! use taxis::{resolve_order, ProfileInfo};
//!
//! let profiles = vec![
//!     ProfileInfo::with_dependencies("baz", ["profile-foo", "profile-bar"]),
//!     ProfileInfo::new("foo"),
//!     ProfileInfo::with_dependencies("bar", ["profile-foo"]),
//! ];
//!
//! let order = resolve_order(&profiles)?;
//! let names: Vec<&str> = order.iter().map(|id| id.as_str()).collect();
//! assert_eq!(names, ["foo", "bar", "baz"]);
//! # Ok::<(), taxis::ResolveError>(())
//! ```
//!
//! # Module Organization
//!
//! Each module hides one design decision:
//!
//! - [`graph`]: the topological sort (hides the visitation strategy)
//! - [`resolver`]: profile records and the naming convention (hides the
//!   `"profile-"` reference format)
//! - [`util`]: small helpers for callers that log and iterate upgrade work
//!
//! # Failure Model
//!
//! Cycle detection is the only failure mode. A cycle is always surfaced to
//! the caller as [`ResolveError::CyclicDependencies`] and never auto-broken
//! by dropping an edge; references to unknown profiles constrain nothing and
//! are ignored rather than rejected.

pub mod graph;
pub mod resolver;
pub mod util;

pub use graph::{topological_sort, Topology};
pub use resolver::{
    resolve_order, ProfileId, ProfileInfo, ResolveError, ResolveResult, PROFILE_PREFIX,
};
pub use util::{format_duration, SizedIter};

// Re-export dependencies used in the public API so callers don't hit
// version mismatches implementing Serialize/Deserialize on their types.
pub use serde;
