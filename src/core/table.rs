//! Transition relation storage.

use super::state::{State, Symbol};
use std::collections::HashMap;

/// A partial function from `(state, symbol)` to the successor state.
///
/// Stored as a two-level map so a lookup borrows the current state and the
/// symbol instead of building an owned key. Missing entries are legal; they
/// only matter when an execution reaches them.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::TransitionTable;
///
/// let table = TransitionTable::from([("even", 'a', "odd"), ("odd", 'a', "even")]);
///
/// assert_eq!(table.get(&"even", &'a'), Some(&"odd"));
/// assert_eq!(table.get(&"even", &'b'), None);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable<S: State, A: Symbol> {
    edges: HashMap<S, HashMap<A, S>>,
}

impl<S: State, A: Symbol> TransitionTable<S, A> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Set the successor of `(from, symbol)`.
    ///
    /// Returns the successor that was replaced, if any.
    pub fn insert(&mut self, from: S, symbol: A, to: S) -> Option<S> {
        self.edges.entry(from).or_default().insert(symbol, to)
    }

    /// Look up the successor of `(from, symbol)`.
    pub fn get(&self, from: &S, symbol: &A) -> Option<&S> {
        self.edges.get(from)?.get(symbol)
    }

    pub fn contains(&self, from: &S, symbol: &A) -> bool {
        self.get(from, symbol).is_some()
    }

    /// Number of defined `(state, symbol)` pairs.
    pub fn len(&self) -> usize {
        self.edges.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over `(from, symbol, to)` triples in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &A, &S)> {
        self.edges
            .iter()
            .flat_map(|(from, row)| row.iter().map(move |(symbol, to)| (from, symbol, to)))
    }
}

impl<S: State, A: Symbol> Default for TransitionTable<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Symbol> FromIterator<(S, A, S)> for TransitionTable<S, A> {
    fn from_iter<I: IntoIterator<Item = (S, A, S)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (from, symbol, to) in iter {
            table.insert(from, symbol, to);
        }
        table
    }
}

impl<S: State, A: Symbol, const N: usize> From<[(S, A, S); N]> for TransitionTable<S, A> {
    fn from(edges: [(S, A, S); N]) -> Self {
        edges.into_iter().collect()
    }
}
