//! Deterministic state machine executor.

use super::error::{EvaluationError, UndefinedTransition};
use super::state::{State, Symbol};
use super::table::TransitionTable;
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Successful result of [`DeterministicFsm::evaluate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Evaluation<S, O> {
    /// Output mapped from the accepting final state
    Output(O),

    /// The accepting final state itself, when no output map is configured
    State(S),
}

impl<S, O> Evaluation<S, O> {
    /// The mapped output, if there was an output map.
    pub fn into_output(self) -> Option<O> {
        match self {
            Self::Output(output) => Some(output),
            Self::State(_) => None,
        }
    }

    /// The final state, if there was no output map.
    pub fn as_state(&self) -> Option<&S> {
        match self {
            Self::Output(_) => None,
            Self::State(state) => Some(state),
        }
    }
}

/// Deterministic finite-state machine.
///
/// The definition (initial state, transitions, accepting states and the
/// optional output map) is fixed at construction. The only mutable field is
/// the current state, which moves on [`step`](Self::step) and is rewound by
/// [`reset`](Self::reset). Evaluations never reset implicitly.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::{DeterministicFsm, Evaluation, TransitionTable};
/// use std::collections::{HashMap, HashSet};
///
/// let mut parity = DeterministicFsm::new(
///     "even",
///     TransitionTable::from([
///         ("even", '1', "odd"),
///         ("odd", '1', "even"),
///         ("even", '0', "even"),
///         ("odd", '0', "odd"),
///     ]),
///     HashSet::from(["even", "odd"]),
///     Some(HashMap::from([("even", 0u8), ("odd", 1u8)])),
/// );
///
/// assert_eq!(parity.evaluate("1011".chars()), Ok(Evaluation::Output(1)));
/// ```
#[derive(Clone, Debug)]
pub struct DeterministicFsm<S: State, A: Symbol, O = S> {
    initial: S,
    current: S,
    transitions: TransitionTable<S, A>,
    accepting: HashSet<S>,
    output_map: Option<HashMap<S, O>>,
}

impl<S: State, A: Symbol, O: Clone> DeterministicFsm<S, A, O> {
    /// Create a machine in its initial state.
    ///
    /// The definition is stored as given: the relation need not be total and
    /// the initial state need not be accepting.
    pub fn new(
        initial: S,
        transitions: TransitionTable<S, A>,
        accepting: HashSet<S>,
        output_map: Option<HashMap<S, O>>,
    ) -> Self {
        Self {
            current: initial.clone(),
            initial,
            transitions,
            accepting,
            output_map,
        }
    }

    /// Get initial state (pure)
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn transitions(&self) -> &TransitionTable<S, A> {
        &self.transitions
    }

    pub fn accepting_states(&self) -> &HashSet<S> {
        &self.accepting
    }

    pub fn output_map(&self) -> Option<&HashMap<S, O>> {
        self.output_map.as_ref()
    }

    /// Check if the current state is accepting (pure)
    pub fn is_accepting(&self) -> bool {
        self.accepting.contains(&self.current)
    }

    /// Rewind to the initial state.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
    }

    /// Consume one symbol.
    ///
    /// On an undefined transition the current state is left untouched.
    pub fn step(&mut self, symbol: &A) -> Result<&S, UndefinedTransition<S, A>> {
        let Some(next) = self.transitions.get(&self.current, symbol) else {
            return Err(UndefinedTransition {
                state: self.current.clone(),
                symbol: symbol.clone(),
            });
        };

        trace!(
            from = self.current.name(),
            symbol = ?symbol,
            to = next.name(),
            "transition"
        );
        self.current = next.clone();
        Ok(&self.current)
    }

    /// Run a whole input sequence from the current state.
    ///
    /// Every symbol is stepped in order, then the final state must be
    /// accepting. With an output map the mapped output is returned, otherwise
    /// the final state itself. Call [`reset`](Self::reset) first when reusing
    /// the machine for an independent input.
    pub fn evaluate<I>(&mut self, input: I) -> Result<Evaluation<S, O>, EvaluationError<S, A>>
    where
        I: IntoIterator,
        I::Item: Borrow<A>,
    {
        let mut consumed = 0usize;
        for symbol in input {
            self.step(symbol.borrow())?;
            consumed += 1;
        }

        if !self.is_accepting() {
            debug!(state = self.current.name(), consumed, "input rejected");
            return Err(EvaluationError::Rejected {
                state: self.current.clone(),
            });
        }

        let result = match &self.output_map {
            None => Evaluation::State(self.current.clone()),
            Some(outputs) => match outputs.get(&self.current) {
                Some(output) => Evaluation::Output(output.clone()),
                None => {
                    return Err(EvaluationError::MissingOutput {
                        state: self.current.clone(),
                    })
                }
            },
        };

        debug!(state = self.current.name(), consumed, "input accepted");
        Ok(result)
    }
}

impl<S: State, O: Clone> DeterministicFsm<S, char, O> {
    /// Evaluate a string one `char` at a time.
    pub fn evaluate_str(&mut self, input: &str) -> Result<Evaluation<S, O>, EvaluationError<S, char>> {
        self.evaluate(input.chars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(output_map: Option<HashMap<&'static str, u8>>) -> DeterministicFsm<&'static str, char, u8> {
        DeterministicFsm::new(
            "off",
            TransitionTable::from([("off", 't', "on"), ("on", 't', "off"), ("on", 'h', "on")]),
            HashSet::from(["on"]),
            output_map,
        )
    }

    #[test]
    fn new_machine_starts_in_initial_state() {
        let machine = toggle(None);

        assert_eq!(machine.current_state(), &"off");
        assert_eq!(machine.initial_state(), &"off");
        assert!(!machine.is_accepting());
    }

    #[test]
    fn step_follows_defined_transition() {
        let mut machine = toggle(None);

        assert_eq!(machine.step(&'t'), Ok(&"on"));
        assert_eq!(machine.step(&'h'), Ok(&"on"));
        assert_eq!(machine.current_state(), &"on");
    }

    #[test]
    fn undefined_step_leaves_state_unchanged() {
        let mut machine = toggle(None);

        let err = machine.step(&'h').unwrap_err();

        assert_eq!(
            err,
            UndefinedTransition {
                state: "off",
                symbol: 'h'
            }
        );
        assert_eq!(machine.current_state(), &"off");
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut machine = toggle(None);
        machine.step(&'t').unwrap();

        machine.reset();

        assert_eq!(machine.current_state(), machine.initial_state());
    }

    #[test]
    fn evaluate_without_output_map_returns_state() {
        let mut machine = toggle(None);

        // "tht" ends in "off" which is not accepting
        assert_eq!(
            machine.evaluate_str("tht"),
            Err(EvaluationError::Rejected { state: "off" })
        );

        machine.reset();
        assert_eq!(machine.evaluate_str("th"), Ok(Evaluation::State("on")));
    }

    #[test]
    fn evaluate_with_output_map_returns_output() {
        let mut machine = toggle(Some(HashMap::from([("on", 1)])));

        assert_eq!(machine.evaluate_str("t"), Ok(Evaluation::Output(1)));
    }

    #[test]
    fn missing_output_is_not_rejection() {
        let mut machine = toggle(Some(HashMap::from([("off", 0)])));

        assert_eq!(
            machine.evaluate_str("t"),
            Err(EvaluationError::MissingOutput { state: "on" })
        );
    }

    #[test]
    fn evaluate_stops_at_first_undefined_transition() {
        let mut machine = toggle(None);

        let err = machine.evaluate_str("thxt").unwrap_err();

        assert_eq!(
            err,
            EvaluationError::UndefinedTransition(UndefinedTransition {
                state: "on",
                symbol: 'x'
            })
        );
        assert_eq!(machine.current_state(), &"on");
    }

    #[test]
    fn evaluate_does_not_reset_implicitly() {
        let mut machine = toggle(None);

        assert_eq!(machine.evaluate_str("t"), Ok(Evaluation::State("on")));
        // continues from "on"
        assert_eq!(
            machine.evaluate_str("t"),
            Err(EvaluationError::Rejected { state: "off" })
        );
    }

    #[test]
    fn empty_input_checks_initial_state() {
        let mut rejecting = toggle(None);
        assert_eq!(
            rejecting.evaluate_str(""),
            Err(EvaluationError::Rejected { state: "off" })
        );

        let mut accepting = DeterministicFsm::<_, char, u8>::new(
            "start",
            TransitionTable::new(),
            HashSet::from(["start"]),
            Some(HashMap::from([("start", 7)])),
        );
        assert_eq!(accepting.evaluate_str(""), Ok(Evaluation::Output(7)));
    }

    #[test]
    fn evaluate_accepts_borrowed_symbols() {
        let mut machine = toggle(None);
        let input = vec!['t', 'h'];

        assert_eq!(machine.evaluate(&input), Ok(Evaluation::State("on")));
    }

    #[test]
    fn states_can_borrow_from_local_labels() {
        let labels: Vec<String> = (0..2).map(|i| format!("q{i}")).collect();
        let (q0, q1) = (labels[0].as_str(), labels[1].as_str());

        let mut machine: DeterministicFsm<&str, char> = DeterministicFsm::new(
            q0,
            TransitionTable::from([(q0, 'a', q1), (q1, 'a', q0)]),
            HashSet::from([q1]),
            None,
        );

        assert_eq!(machine.evaluate_str("a"), Ok(Evaluation::State(q1)));
        machine.reset();
        assert_eq!(
            machine.evaluate_str("aa"),
            Err(EvaluationError::Rejected { state: q0 })
        );
    }

    #[test]
    fn evaluation_helpers() {
        let output: Evaluation<&str, u8> = Evaluation::Output(3);
        let state: Evaluation<&str, u8> = Evaluation::State("q");

        assert_eq!(output.as_state(), None);
        assert_eq!(output.into_output(), Some(3));
        assert_eq!(state.as_state(), Some(&"q"));
        assert_eq!(state.into_output(), None);
    }
}
