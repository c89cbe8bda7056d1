//! Topological ordering over opaque identifiers
//!
//! This module provides the generic ordering algorithm underneath the profile
//! resolver. It knows nothing about profiles: items are opaque identifiers and
//! constraints are `(before, after)` pairs meaning `before` must appear
//! earlier than `after` in any valid output.
//!
//! # Design
//!
//! The sorter hides the visitation strategy (depth-first with per-call marks)
//! and exposes a single operation, [`topological_sort`], whose outcome is the
//! tagged [`Topology`] value. "No valid order exists" is a first-class result
//! carrying the offending pair chain, never a sentinel such as an empty list.

mod topo;

pub use topo::{topological_sort, Topology};
