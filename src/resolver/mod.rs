//! Profile dependency resolution
//!
//! This module adapts profile metadata to the generic sorter in [`crate::graph`]
//! and owns the upgrade-unit naming convention: a profile declares its
//! dependencies as namespaced references of the form `"profile-<id>"`, while
//! everything this module returns uses bare identifiers.
//!
//! The resolver performs no I/O. The record list is supplied by an external
//! collaborator (a registry lookup, parsed configuration) and is treated as a
//! pure value; resolving it is a short, synchronous, CPU-bound call.
//!
//! # Failure Model
//!
//! The single failure mode is [`ResolveError::CyclicDependencies`], carrying
//! the dependency pairs that close the cycle. It is never retried and never
//! auto-broken by dropping an edge, and no partial order accompanies it.
//! Dependencies on profiles that are not in the record list constrain nothing
//! and are ignored.

mod error;
mod order;
mod profile_id;

pub use error::{ResolveError, ResolveResult};
pub use order::{resolve_order, ProfileInfo};
pub use profile_id::{ProfileId, PROFILE_PREFIX};
