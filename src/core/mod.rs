//! Core state machine types and logic.
//!
//! This module contains the executor and everything it is defined over:
//! - State and symbol label contracts
//! - The transition relation
//! - The deterministic machine and its error types

mod error;
mod machine;
mod state;
mod table;

pub use error::{EvaluationError, UndefinedTransition};
pub use machine::{DeterministicFsm, Evaluation};
pub use state::{State, Symbol};
pub use table::TransitionTable;
