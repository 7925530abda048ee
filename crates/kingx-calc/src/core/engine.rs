//! Keypad input engine
//!
//! Turns a stream of button presses into a running calculation. Operators
//! chain strictly left to right: `5 + 3 *` folds `5 + 3` into `8` before
//! arming `*`. Errors never escape; they are shown on the display and the
//! engine drops back to a state where the next digit starts a fresh number.

use tracing::{debug, info, warn};

use crate::config::CalculatorConfig;
use crate::core::{CalcError, CalcResult, Calculator, NumberFormat, Operation};

/// One semantic keypad gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// A digit `0`-`9` or the decimal point
    Digit(char),
    /// Select or replace the pending operator
    Operator(Operation),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything
    Clear,
}

impl Input {
    /// Maps a keyboard character to the input it stands for
    ///
    /// `l`/`L` selects the logarithm, `c`/`C` clears.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '0'..='9' | '.' => Some(Self::Digit(key)),
            '+' => Some(Self::Operator(Operation::Add)),
            '-' => Some(Self::Operator(Operation::Subtract)),
            '*' => Some(Self::Operator(Operation::Multiply)),
            '/' => Some(Self::Operator(Operation::Divide)),
            '^' => Some(Self::Operator(Operation::Power)),
            'l' | 'L' => Some(Self::Operator(Operation::Logarithm)),
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            _ => None,
        }
    }

    /// Maps every recognised key in `keys` to an input, skipping the rest
    ///
    /// Each character is one gesture; `"5+3*2="` is six presses.
    #[must_use]
    pub fn sequence(keys: &str) -> Vec<Self> {
        keys.chars().filter_map(Self::from_key).collect()
    }
}

/// Where the engine is in a calculation, derived from [`EngineState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing typed, nothing pending
    Idle,
    /// Typing the left-hand operand
    EnteringFirstOperand,
    /// Operator selected, right-hand operand not started
    OperatorArmed,
    /// Typing the right-hand operand
    EnteringSecondOperand,
    /// Showing the result of `=`
    ResultShown,
    /// Showing an error; the next digit starts over
    ErrorShown,
}

/// The complete state of one calculator session
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    pending_text: String,
    first_operand: Option<f64>,
    operation: Option<Operation>,
    just_produced_result: bool,
    display_text: String,
    last_error: Option<CalcError>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            pending_text: String::new(),
            first_operand: None,
            operation: None,
            just_produced_result: false,
            display_text: "0".to_string(),
            last_error: None,
        }
    }
}

impl EngineState {
    /// Text of the number being typed; empty when nothing is typed
    #[must_use]
    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    /// Left-hand operand of the pending operation
    #[must_use]
    pub const fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// The pending operator
    #[must_use]
    pub const fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// True right after `=` or an error
    #[must_use]
    pub const fn just_produced_result(&self) -> bool {
        self.just_produced_result
    }

    /// What the display shows; never empty
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// The error currently on the display, if any
    #[must_use]
    pub const fn last_error(&self) -> Option<CalcError> {
        self.last_error
    }

    /// Derives the state machine phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.just_produced_result {
            return if self.pending_text.is_empty() {
                Phase::ErrorShown
            } else {
                Phase::ResultShown
            };
        }
        match (self.first_operand.is_some(), self.pending_text.is_empty()) {
            (false, true) => Phase::Idle,
            (false, false) => Phase::EnteringFirstOperand,
            (true, true) => Phase::OperatorArmed,
            (true, false) => Phase::EnteringSecondOperand,
        }
    }

    fn has_pending_operation(&self) -> bool {
        self.first_operand.is_some() && self.operation.is_some()
    }
}

/// The calculator engine: owns one [`EngineState`] and mutates it per input
#[derive(Debug, Clone, Default)]
pub struct Engine {
    state: EngineState,
    format: NumberFormat,
}

impl Engine {
    /// Creates an engine in the cleared state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine using the configured display precision
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self::with_format(NumberFormat::new(config.significant_digits))
    }

    /// Creates an engine with a custom number format
    #[must_use]
    pub fn with_format(format: NumberFormat) -> Self {
        Self {
            state: EngineState::default(),
            format,
        }
    }

    /// Resumes from an existing state
    #[must_use]
    pub fn from_state(state: EngineState, format: NumberFormat) -> Self {
        Self { state, format }
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Consumes the engine, returning its state
    #[must_use]
    pub fn into_state(self) -> EngineState {
        self.state
    }

    /// Returns the number format in use
    #[must_use]
    pub const fn number_format(&self) -> NumberFormat {
        self.format
    }

    /// What the display shows
    #[must_use]
    pub fn display(&self) -> &str {
        &self.state.display_text
    }

    /// Applies one input and returns the new display text
    pub fn apply(&mut self, input: Input) -> &str {
        match input {
            Input::Digit(d) => self.digit_input(d),
            Input::Operator(op) => self.operator_input(op),
            Input::Equals => self.equals_input(),
            Input::Clear => self.clear_input(),
        }
    }

    /// Handles a digit or decimal point press
    pub fn digit_input(&mut self, d: char) -> &str {
        if !(d.is_ascii_digit() || d == '.') {
            warn!(key = %d, "ignoring non-digit key");
            return self.display();
        }

        let state = &mut self.state;
        if state.just_produced_result {
            state.pending_text.clear();
            state.just_produced_result = false;
        }

        if d == '.' && state.pending_text.contains('.') {
            debug!(pending = %state.pending_text, "second decimal point ignored");
            return self.display();
        }

        if state.pending_text == "0" && d != '.' {
            state.pending_text.clear();
        }
        state.pending_text.push(d);
        state.last_error = None;
        state.display_text.clone_from(&state.pending_text);

        debug!(pending = %state.pending_text, phase = ?state.phase(), "digit");
        self.display()
    }

    /// Selects or replaces the pending operator
    ///
    /// With a number typed and an operation already pending, the pending
    /// operation is folded first so chains evaluate left to right.
    pub fn operator_input(&mut self, op: Operation) -> &str {
        if !self.state.pending_text.is_empty() {
            let operand = if self.state.has_pending_operation() {
                match self.fold() {
                    Ok(value) => value,
                    Err(err) => return self.fail(err),
                }
            } else {
                match self.read_pending(CalcError::InvalidInput) {
                    Ok(value) => value,
                    Err(CalcError::InvalidInput) => {
                        return self.show_error(CalcError::InvalidInput)
                    }
                    Err(err) => return self.fail(err),
                }
            };
            self.arm(operand, op);
        } else if let Some(operand) = self.state.first_operand {
            debug!(from = ?self.state.operation, to = ?op, "operator replaced");
            self.state.operation = Some(op);
            self.state.display_text = self.armed_display(operand, op);
        } else {
            debug!(?op, "operator ignored, nothing to operate on");
        }
        self.display()
    }

    /// Selects an operator by symbol or name
    ///
    /// Names outside the operator table show [`CalcError::UnknownOperation`]
    /// and reset the calculation.
    pub fn operator_named(&mut self, name: &str) -> &str {
        match name.parse::<Operation>() {
            Ok(op) => self.operator_input(op),
            Err(err) => self.fail(err),
        }
    }

    /// Evaluates the pending operation (the `=` key)
    pub fn equals_input(&mut self) -> &str {
        match self.compute() {
            None => debug!("equals ignored, no complete operation"),
            Some(Ok((_, text))) => {
                let state = &mut self.state;
                state.display_text.clone_from(&text);
                state.pending_text = text;
                state.just_produced_result = true;
                state.first_operand = None;
                state.operation = None;
                state.last_error = None;
                debug!(result = %state.display_text, "equals");
            }
            Some(Err(err)) => {
                self.fail(err);
            }
        }
        self.display()
    }

    /// Resets to the initial state
    pub fn clear_input(&mut self) -> &str {
        self.state = EngineState::default();
        debug!("cleared");
        self.display()
    }

    /// Folds the pending operation into a new first operand
    ///
    /// Leaves `operation` for the caller to overwrite.
    fn fold(&mut self) -> CalcResult<f64> {
        let (value, text) = self
            .compute()
            .unwrap_or(Err(CalcError::InvalidNumber))?;
        debug!(result = %text, "intermediate fold");
        let state = &mut self.state;
        state.first_operand = Some(value);
        state.pending_text.clear();
        state.just_produced_result = false;
        Ok(value)
    }

    /// Runs the pending arithmetic; `None` when the operation is incomplete
    ///
    /// The value returned is the formatted text parsed back, so chained
    /// results carry exactly what the display showed.
    fn compute(&self) -> Option<CalcResult<(f64, String)>> {
        let state = &self.state;
        let (Some(x), Some(op)) = (state.first_operand, state.operation) else {
            return None;
        };
        if state.pending_text.is_empty() {
            return None;
        }

        let result = self
            .read_pending(CalcError::InvalidNumber)
            .and_then(|y| Calculator::calculate(x, y, op))
            .and_then(|value| {
                let text = self.format.format(value);
                // rounding to the display precision can push past f64::MAX
                self.format
                    .parse(&text)
                    .map(|shown| (shown, text))
                    .ok_or(CalcError::Overflow)
            });
        Some(result)
    }

    /// Parses the typed number, or reports why it cannot be used
    ///
    /// Digits beyond the finite `f64` range are [`CalcError::Overflow`];
    /// anything else unparseable is `malformed`.
    fn read_pending(&self, malformed: CalcError) -> CalcResult<f64> {
        let text = &self.state.pending_text;
        self.format.parse(text).ok_or_else(|| {
            if self.format.overflows(text) {
                CalcError::Overflow
            } else {
                malformed
            }
        })
    }

    fn arm(&mut self, operand: f64, op: Operation) {
        let display = self.armed_display(operand, op);
        let state = &mut self.state;
        state.first_operand = Some(operand);
        state.operation = Some(op);
        state.pending_text.clear();
        state.just_produced_result = false;
        state.last_error = None;
        state.display_text = display;
        debug!(operand, ?op, "operator armed");
    }

    fn armed_display(&self, operand: f64, op: Operation) -> String {
        format!("{} {}", self.format.format(operand), op.symbol())
    }

    /// Shows an error and enters error recovery
    fn fail(&mut self, err: CalcError) -> &str {
        info!(error = %err, "calculation failed");
        self.state = EngineState {
            pending_text: String::new(),
            first_operand: None,
            operation: None,
            just_produced_result: true,
            display_text: err.label(),
            last_error: Some(err),
        };
        self.display()
    }

    /// Shows an error without touching the rest of the state
    fn show_error(&mut self, err: CalcError) -> &str {
        info!(error = %err, pending = %self.state.pending_text, "input rejected");
        self.state.display_text = err.label();
        self.state.last_error = Some(err);
        self.display()
    }
}

/// Value-semantics form of [`Engine::apply`]
///
/// Formats with the default 10 significant digits; use [`transition_with`]
/// to honour a configured precision. Returns the next state and the text to
/// display.
#[must_use]
pub fn transition(state: EngineState, input: Input) -> (EngineState, String) {
    transition_with(NumberFormat::default(), state, input)
}

/// [`transition`] with an explicit number format
#[must_use]
pub fn transition_with(
    format: NumberFormat,
    state: EngineState,
    input: Input,
) -> (EngineState, String) {
    let mut engine = Engine::from_state(state, format);
    let display = engine.apply(input).to_string();
    (engine.into_state(), display)
}
