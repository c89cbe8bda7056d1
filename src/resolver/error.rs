//! Error types for profile resolution
//!
//! This module hides the error representation and keeps the cycle evidence
//! structured: callers get the implicated pairs as data, while `Display`
//! renders a human-diagnosable message.

use super::profile_id::ProfileId;
use thiserror::Error;

/// Result type for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur while resolving a profile order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveError {
    /// The declared dependencies form a cycle, so no valid order exists.
    ///
    /// `pairs` is the ordered chain of `(before, after)` identifiers that
    /// closes the cycle, as discovered by the sorter.
    #[error("cannot resolve profile order, cyclic dependencies: {}", describe_cycle(.pairs))]
    CyclicDependencies {
        /// The dependency pairs implicated in the cycle, in discovery order.
        pairs: Vec<(ProfileId, ProfileId)>,
    },
}

impl ResolveError {
    /// Creates a cyclic-dependencies error from the sorter's evidence.
    pub fn cyclic(pairs: Vec<(ProfileId, ProfileId)>) -> Self {
        Self::CyclicDependencies { pairs }
    }
}

fn describe_cycle(pairs: &[(ProfileId, ProfileId)]) -> String {
    pairs
        .iter()
        .map(|(before, after)| format!("'{before}' -> '{after}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
