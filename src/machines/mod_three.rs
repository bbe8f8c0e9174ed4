//! Remainder of a binary number modulo 3.
//!
//! Reading bit `b` moves remainder `r` to `(2r + b) mod 3`.

use crate::core::{DeterministicFsm, TransitionTable};
use crate::state_enum;
use std::collections::{HashMap, HashSet};

state_enum! {
    /// Running remainder of the bits read so far, divided by 3.
    pub enum Remainder {
        S0,
        S1,
        S2,
    }
}

impl Remainder {
    /// The remainder this state stands for.
    pub fn value(self) -> u8 {
        match self {
            Self::S0 => 0,
            Self::S1 => 1,
            Self::S2 => 2,
        }
    }
}

/// Build the modulo-3 machine over the alphabet `{'0', '1'}`.
///
/// Every state accepts and maps to its remainder.
///
/// ```rust
/// use fsmkit::core::Evaluation;
/// use fsmkit::machines::mod_three;
///
/// let mut machine = mod_three();
/// assert_eq!(machine.evaluate_str("1101"), Ok(Evaluation::Output(1)));
/// ```
pub fn mod_three() -> DeterministicFsm<Remainder, char, u8> {
    use Remainder::*;

    let transitions = TransitionTable::from([
        (S0, '0', S0),
        (S0, '1', S1),
        (S1, '0', S2),
        (S1, '1', S0),
        (S2, '0', S1),
        (S2, '1', S2),
    ]);
    let accepting: HashSet<_> = Remainder::ALL.iter().copied().collect();
    let outputs: HashMap<_, _> = Remainder::ALL.iter().map(|r| (*r, r.value())).collect();

    DeterministicFsm::new(S0, transitions, accepting, Some(outputs))
}
