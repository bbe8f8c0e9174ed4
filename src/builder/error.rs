//! Build errors for the machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error(
        "Conflicting transition from '{from}' on {symbol}: already goes to '{existing}', not '{requested}'"
    )]
    ConflictingTransition {
        from: String,
        symbol: String,
        existing: String,
        requested: String,
    },
}
