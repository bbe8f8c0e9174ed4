//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{DeterministicFsm, State, Symbol, TransitionTable};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Builder for constructing deterministic state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use fsmkit::builder::FsmBuilder;
/// use fsmkit::core::Evaluation;
///
/// let mut machine = FsmBuilder::<&str, char, &str>::new()
///     .initial("locked")
///     .transition("locked", 'c', "unlocked")?
///     .transition("unlocked", 'p', "locked")?
///     .accept("locked")
///     .output("locked", "secure")
///     .build()?;
///
/// assert_eq!(machine.evaluate_str("cp"), Ok(Evaluation::Output("secure")));
/// # Ok::<(), fsmkit::builder::BuildError>(())
/// ```
pub struct FsmBuilder<S: State, A: Symbol, O = S> {
    initial: Option<S>,
    transitions: TransitionTable<S, A>,
    accepting: HashSet<S>,
    outputs: Option<HashMap<S, O>>,
}

impl<S: State, A: Symbol, O: Clone> FsmBuilder<S, A, O> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: TransitionTable::new(),
            accepting: HashSet::new(),
            outputs: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition.
    /// Returns an error if `(from, symbol)` already leads somewhere else.
    pub fn transition(mut self, from: S, symbol: A, to: S) -> Result<Self, BuildError> {
        if let Some(existing) = self.transitions.get(&from, &symbol) {
            if *existing != to {
                return Err(BuildError::ConflictingTransition {
                    from: from.name().to_string(),
                    symbol: format!("{symbol:?}"),
                    existing: existing.name().to_string(),
                    requested: to.name().to_string(),
                });
            }
            return Ok(self);
        }

        self.transitions.insert(from, symbol, to);
        Ok(self)
    }

    /// Add multiple transitions at once.
    pub fn transitions<I>(self, edges: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (S, A, S)>,
    {
        edges
            .into_iter()
            .try_fold(self, |builder, (from, symbol, to)| {
                builder.transition(from, symbol, to)
            })
    }

    /// Mark a state as accepting.
    pub fn accept(mut self, state: S) -> Self {
        self.accepting.insert(state);
        self
    }

    /// Mark several states as accepting.
    pub fn accept_all<I: IntoIterator<Item = S>>(mut self, states: I) -> Self {
        self.accepting.extend(states);
        self
    }

    /// Map a state to an output value.
    ///
    /// The first call makes the output map present; accepting states left
    /// unmapped then fail evaluation with a missing-output error.
    pub fn output(mut self, state: S, value: O) -> Self {
        self.outputs
            .get_or_insert_with(HashMap::new)
            .insert(state, value);
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<DeterministicFsm<S, A, O>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        debug!(
            initial = initial.name(),
            transitions = self.transitions.len(),
            accepting = self.accepting.len(),
            mapped_outputs = self.outputs.as_ref().map_or(0, HashMap::len),
            "built state machine"
        );

        Ok(DeterministicFsm::new(
            initial,
            self.transitions,
            self.accepting,
            self.outputs,
        ))
    }
}

impl<S: State, A: Symbol, O: Clone> Default for FsmBuilder<S, A, O> {
    fn default() -> Self {
        Self::new()
    }
}
