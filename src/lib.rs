//! fsmkit: a deterministic finite-state-machine executor
//!
//! A machine is defined once by its initial state, a partial transition
//! table, a set of accepting states and an optional output map. Running it
//! over an input sequence either yields an output (or the final state) or
//! fails in one of three distinct ways: an undefined transition, a rejected
//! final state, or an accepting state with no mapped output.
//!
//! # Core Concepts
//!
//! - **State**: Opaque labels via the `State` trait (or the `state_enum!` macro)
//! - **TransitionTable**: Partial function from `(state, symbol)` to state
//! - **DeterministicFsm**: Holds the definition plus the current state
//!
//! # Example
//!
//! ```rust
//! use fsmkit::core::{Evaluation, EvaluationError};
//! use fsmkit::machines::{mod_three, Remainder};
//!
//! let mut machine = mod_three();
//! assert_eq!(machine.evaluate_str("1110"), Ok(Evaluation::Output(2)));
//!
//! machine.reset();
//! let err = machine.evaluate_str("12").unwrap_err();
//! assert!(matches!(err, EvaluationError::UndefinedTransition(_)));
//! assert_eq!(err.state(), &Remainder::S1);
//! ```

pub mod builder;
#[cfg(feature = "cli")]
pub mod cli;
pub mod core;
pub mod machines;
pub mod threshold;

// Re-export commonly used types
pub use crate::builder::{BuildError, FsmBuilder};
pub use crate::core::{
    DeterministicFsm, Evaluation, EvaluationError, State, Symbol, TransitionTable,
    UndefinedTransition,
};
