//! Execution error types.

use super::state::{State, Symbol};
use thiserror::Error;

/// A step reached a `(state, symbol)` pair with no defined successor.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("No transition defined for state '{}' with symbol {symbol:?}", .state.name())]
pub struct UndefinedTransition<S: State, A: Symbol> {
    pub state: S,
    pub symbol: A,
}

/// Errors that can occur while evaluating a whole input sequence.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvaluationError<S: State, A: Symbol> {
    /// A symbol had no transition from the state current at the time.
    #[error(transparent)]
    UndefinedTransition(#[from] UndefinedTransition<S, A>),

    /// All input was consumed but the final state is not accepting.
    #[error("Input rejected: final state '{}' is not accepting", .state.name())]
    Rejected { state: S },

    /// The final state is accepting but the output map has no entry for it.
    #[error("Accepting state '{}' has no entry in the output map", .state.name())]
    MissingOutput { state: S },
}

impl<S: State, A: Symbol> EvaluationError<S, A> {
    /// The state the machine was in when evaluation failed.
    pub fn state(&self) -> &S {
        match self {
            Self::UndefinedTransition(err) => &err.state,
            Self::Rejected { state } | Self::MissingOutput { state } => state,
        }
    }
}
