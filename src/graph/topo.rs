//! Depth-first topological sort with stable tie-breaking
//!
//! # Algorithm
//!
//! Items are visited in their original input order; that order is the
//! tie-break among items with no relative constraint. Each visit recurses
//! into the item's dependencies (in constraint-declaration order) before
//! emitting the item itself, so every dependency precedes its dependent in
//! the output.
//!
//! Per-node visitation state is a three-state mark (unvisited, in-progress,
//! done) held in a map owned by the call. Nothing is shared between calls,
//! so concurrent sorts of unrelated inputs are naturally safe.
//!
//! # Cycle Reporting
//!
//! Hitting an in-progress node means the dependency edges currently being
//! walked lead back to it. The sort aborts immediately and reports the pair
//! chain along that in-progress path, in discovery order. A cyclic graph
//! cannot be partially sorted; there is no fallback.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Outcome of a topological sort.
///
/// Either a total order over the input items consistent with every
/// constraint, or evidence that no such order exists.
///
/// # Example
///
/// ```
/// use taxis::{topological_sort, Topology};
///
/// let items = ["b", "a", "c"];
/// let constraints = [("a", "b"), ("b", "c")];
///
/// assert_eq!(
///     topological_sort(&items, &constraints),
///     Topology::Ordered(vec!["a", "b", "c"]),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topology<T> {
    /// A total order satisfying every constraint, ready to use as-is.
    Ordered(Vec<T>),
    /// No order exists. The payload is the chain of `(before, after)` pairs
    /// discovered along the dependency path that closes the cycle.
    Cyclic(Vec<(T, T)>),
}

impl<T> Topology<T> {
    /// Returns true if the sort detected a cycle.
    pub fn is_cyclic(&self) -> bool {
        matches!(self, Topology::Cyclic(_))
    }

    /// Returns the order if one exists, discarding cycle evidence.
    pub fn into_order(self) -> Option<Vec<T>> {
        match self {
            Topology::Ordered(order) => Some(order),
            Topology::Cyclic(_) => None,
        }
    }
}

/// Per-node visitation state for one sort call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Orders `items` so that for every constraint `(before, after)` with both
/// ends present among the items, `before` appears earlier than `after`.
///
/// Determinism: the item sequence is the tie-break order, and dependencies
/// are followed in constraint-declaration order, so identical input always
/// yields identical output. Constraints naming an identifier that is not in
/// `items` constrain nothing and are ignored; repeating a constraint changes
/// nothing.
///
/// Duplicate identifiers in `items` share a single visitation slot: the
/// output contains each distinct identifier once, at the position of its
/// earliest admissible occurrence.
///
/// # Example
///
/// ```
/// use taxis::{topological_sort, Topology};
///
/// // a cycle comes back as evidence, not as an error or an empty order
/// let result = topological_sort(&["a", "b"], &[("a", "b"), ("b", "a")]);
/// assert_eq!(result, Topology::Cyclic(vec![("a", "b"), ("b", "a")]));
/// ```
pub fn topological_sort<T>(items: &[T], constraints: &[(T, T)]) -> Topology<T>
where
    T: Clone + Eq + Hash,
{
    let present: HashSet<&T> = items.iter().collect();

    // dependencies[after] = the befores it must wait for, in declaration order
    let mut dependencies: HashMap<&T, Vec<&T>> = HashMap::new();
    for (before, after) in constraints {
        if !present.contains(before) || !present.contains(after) {
            continue;
        }
        dependencies.entry(after).or_default().push(before);
    }

    let mut walk = Walk {
        dependencies,
        marks: HashMap::with_capacity(items.len()),
        path: Vec::new(),
        order: Vec::with_capacity(items.len()),
    };

    for item in items {
        if let Err(pairs) = walk.visit(item) {
            return Topology::Cyclic(pairs);
        }
    }

    Topology::Ordered(walk.order)
}

/// Call-local state of one depth-first walk.
struct Walk<'a, T> {
    dependencies: HashMap<&'a T, Vec<&'a T>>,
    marks: HashMap<&'a T, Mark>,
    /// Stack of in-progress items, root first.
    path: Vec<&'a T>,
    order: Vec<T>,
}

impl<'a, T> Walk<'a, T>
where
    T: Clone + Eq + Hash,
{
    fn visit(&mut self, item: &'a T) -> Result<(), Vec<(T, T)>> {
        match self.marks.get(item).copied().unwrap_or(Mark::Unvisited) {
            Mark::Done => return Ok(()),
            Mark::InProgress => return Err(self.close_cycle(item)),
            Mark::Unvisited => {}
        }

        self.marks.insert(item, Mark::InProgress);
        self.path.push(item);

        // clone the edge list so the recursion can borrow the walk mutably
        let befores = self.dependencies.get(item).cloned().unwrap_or_default();
        for before in befores {
            self.visit(before)?;
        }

        self.path.pop();
        self.marks.insert(item, Mark::Done);
        self.order.push(item.clone());
        Ok(())
    }

    /// Builds the cycle evidence once `reentered` shows up twice on the walk.
    ///
    /// The pairs follow the in-progress path from `reentered` to the current
    /// item and close back on `reentered`, so a self-cycle on `a` reports
    /// exactly `[(a, a)]`.
    fn close_cycle(&self, reentered: &T) -> Vec<(T, T)> {
        // An in-progress item is always on the path.
        let start = self
            .path
            .iter()
            .position(|&on_path| on_path == reentered)
            .unwrap_or(0);
        let segment = &self.path[start..];

        let mut pairs = Vec::with_capacity(segment.len());
        for window in segment.windows(2) {
            pairs.push((window[0].clone(), window[1].clone()));
        }
        if let Some(&last) = segment.last() {
            pairs.push((last.clone(), reentered.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple() {
        let items = ["b", "a", "c"];
        let constraints = [("a", "b"), ("b", "c")];

        assert_eq!(
            topological_sort(&items, &constraints),
            Topology::Ordered(vec!["a", "b", "c"])
        );
    }

    #[test]
    fn test_advanced() {
        let items = ["a", "c", "b", "d"];
        let constraints = [("a", "b"), ("a", "c"), ("b", "d"), ("b", "c")];

        assert_eq!(
            topological_sort(&items, &constraints),
            Topology::Ordered(vec!["a", "b", "c", "d"])
        );
    }

    #[test]
    fn test_empty_input() {
        let result = topological_sort::<&str>(&[], &[]);
        assert_eq!(result, Topology::Ordered(vec![]));
    }

    #[test]
    fn test_no_constraints_keeps_input_order() {
        let items = ["c", "a", "b"];
        assert_eq!(
            topological_sort(&items, &[]),
            Topology::Ordered(vec!["c", "a", "b"])
        );
    }

    #[test]
    fn test_unconstrained_items_keep_relative_order() {
        let items = ["d", "b", "a", "c"];
        let constraints = [("a", "d")];

        // a is pulled ahead of d; b and c stay where they were
        assert_eq!(
            topological_sort(&items, &constraints),
            Topology::Ordered(vec!["a", "d", "b", "c"])
        );
    }

    #[test]
    fn test_duplicated_items_collapse() {
        let items = ["a", "b", "a"];
        let constraints = [("b", "a")];

        assert_eq!(
            topological_sort(&items, &constraints),
            Topology::Ordered(vec!["b", "a"])
        );
    }

    #[test]
    fn test_cyclic() {
        let items = ["a", "b"];
        let constraints = [("a", "b"), ("b", "a")];

        assert_eq!(
            topological_sort(&items, &constraints),
            Topology::Cyclic(vec![("a", "b"), ("b", "a")])
        );
    }

    #[test]
    fn test_self_constraint_is_a_cycle_of_one() {
        let items = ["a", "b"];
        let constraints = [("a", "a")];

        assert_eq!(
            topological_sort(&items, &constraints),
            Topology::Cyclic(vec![("a", "a")])
        );
    }

    #[test]
    fn test_cycle_reached_through_a_chain() {
        // d is fine, but a -> b -> c -> a closes a loop of three
        let items = ["d", "a", "b", "c"];
        let constraints = [("d", "a"), ("a", "b"), ("b", "c"), ("c", "a")];

        let result = topological_sort(&items, &constraints);
        match result {
            Topology::Cyclic(pairs) => {
                assert_eq!(pairs.len(), 3);
                // the chain closes on its first element
                assert_eq!(pairs.first().map(|p| &p.0), pairs.last().map(|p| &p.1));
            }
            Topology::Ordered(order) => panic!("expected cycle, got order {order:?}"),
        }
    }

    #[test]
    fn test_dangling_constraints_are_ignored() {
        let items = ["a", "b"];
        let constraints = [("missing", "a"), ("b", "also-missing"), ("b", "a")];

        assert_eq!(
            topological_sort(&items, &constraints),
            Topology::Ordered(vec!["b", "a"])
        );
    }

    #[test]
    fn test_redundant_constraints_change_nothing() {
        let items = ["b", "a"];
        let once = topological_sort(&items, &[("a", "b")]);
        let thrice = topological_sort(&items, &[("a", "b"), ("a", "b"), ("a", "b")]);

        assert_eq!(once, Topology::Ordered(vec!["a", "b"]));
        assert_eq!(once, thrice);
    }

    #[test]
    fn test_deterministic() {
        let items = ["e", "b", "d", "a", "c"];
        let constraints = [("a", "e"), ("c", "b")];

        let first = topological_sort(&items, &constraints);
        let second = topological_sort(&items, &constraints);
        assert_eq!(first, second);
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let items = ["c", "a", "b"];
        let constraints = [("a", "c"), ("b", "c")];

        let order = topological_sort(&items, &constraints)
            .into_order()
            .unwrap();
        let again = topological_sort(&order, &constraints).into_order().unwrap();
        assert_eq!(order, again);
    }

    #[test]
    fn test_every_constraint_respected_in_diamond() {
        let items = ["d", "c", "b", "a"];
        let constraints = [("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")];

        let order = topological_sort(&items, &constraints)
            .into_order()
            .unwrap();

        let position = |id: &str| order.iter().position(|x| *x == id).unwrap();
        for (before, after) in &constraints {
            assert!(
                position(before) < position(after),
                "{before} must precede {after} in {order:?}"
            );
        }
    }

    #[test]
    fn test_owned_identifiers() {
        let items = vec!["b".to_string(), "a".to_string()];
        let constraints = vec![("a".to_string(), "b".to_string())];

        assert_eq!(
            topological_sort(&items, &constraints),
            Topology::Ordered(vec!["a".to_string(), "b".to_string()])
        );
    }
}
