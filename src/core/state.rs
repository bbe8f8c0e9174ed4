//! State and symbol label contracts.
//!
//! States and symbols are opaque tokens: the executor only ever compares
//! them, hashes them, and clones them into error values.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// A state is a label with no internal structure beyond equality and
/// hashing. `name` exists for diagnostics and log fields only.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State: Clone + Eq + Hash + Debug {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl<'a> State for &'a str {
    fn name(&self) -> &str {
        self
    }
}

/// Trait for input symbols.
///
/// Anything comparable and hashable can be an input symbol, so this is
/// blanket-implemented.
pub trait Symbol: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Symbol for T {}
