//! Shell application state
//!
//! The app owns the calculator, the keypad highlight state, and the
//! session tape. Every input event is forwarded as exactly one press and
//! runs to completion before the next is accepted; rendering always reads
//! the snapshot retained from the latest press.

use crate::core::format::display_number;
use crate::core::tape::Tape;
use crate::core::{Calculator, Snapshot};
use crate::driver::KeypadDriver;
use crate::keypad::{ButtonAction, Keypad};

/// Terminal calculator application state
#[derive(Debug)]
pub struct App {
    /// The calculator engine; the only place state is mutated
    calc: Calculator,
    /// Keypad model with button highlight state
    keypad: Keypad,
    /// Session tape of resolved computations
    tape: Tape,
    /// Snapshot retained from the latest press, rendered as-is
    snapshot: Snapshot,
    /// Whether the tape panel is shown
    show_tape: bool,
    /// Whether the help sidebar is shown
    show_help: bool,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates an app with a fresh calculator and the default tape bound
    #[must_use]
    pub fn new() -> Self {
        let calc = Calculator::new();
        let snapshot = calc.snapshot();
        Self {
            calc,
            keypad: Keypad::new(),
            tape: Tape::new(),
            snapshot,
            show_tape: true,
            show_help: true,
            should_quit: false,
        }
    }

    /// Creates an app whose tape keeps at most `limit` entries
    #[must_use]
    pub fn with_tape_limit(limit: usize) -> Self {
        Self {
            tape: Tape::with_capacity(limit),
            ..Self::new()
        }
    }

    /// Returns the latest snapshot
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Returns the keypad model
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the session tape
    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Whether the tape panel is shown
    #[must_use]
    pub fn shows_tape(&self) -> bool {
        self.show_tape
    }

    /// Whether the help sidebar is shown
    #[must_use]
    pub fn shows_help(&self) -> bool {
        self.show_help
    }

    /// Shows or hides the tape panel
    pub fn set_show_tape(&mut self, show: bool) {
        self.show_tape = show;
    }

    /// Shows or hides the help sidebar
    pub fn set_show_help(&mut self, show: bool) {
        self.show_help = show;
    }

    /// Toggles the tape panel
    pub fn toggle_tape(&mut self) {
        self.show_tape = !self.show_tape;
    }

    /// Toggles the help sidebar
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Forwards one button press to the engine and retains its snapshot.
    ///
    /// An equals press that resolves a computation is also appended to the
    /// session tape, labeled with the operands and operator it resolved.
    pub fn press(&mut self, action: ButtonAction) -> &Snapshot {
        tracing::debug!(?action, "keypad press");
        let expression = match action {
            ButtonAction::Equals => self.equals_expression(),
            _ => None,
        };
        self.snapshot = match action {
            ButtonAction::Digit(d) => self.calc.press_digit(d),
            ButtonAction::Decimal => self.calc.press_decimal_point(),
            ButtonAction::Operator(op) => self.calc.press_operator(op),
            ButtonAction::Equals => self.calc.press_equals(),
            ButtonAction::Percent => self.calc.press_percent(),
            ButtonAction::ToggleSign => self.calc.press_toggle_sign(),
            ButtonAction::Clear => self.calc.press_clear(),
        };
        if let Some(expression) = expression {
            self.tape.record(&expression, &self.snapshot.display);
        }
        self.keypad.highlight(action);
        &self.snapshot
    }

    /// Releases the keypad highlight (between key repeats)
    pub fn release_keys(&mut self) {
        self.keypad.release_all();
    }

    /// The computation an equals press is about to resolve, if any.
    fn equals_expression(&self) -> Option<String> {
        if let Some(op) = self.calc.pending_operation() {
            Some(format!(
                "{} {} {}",
                self.calc.pending_operand(),
                op.symbol(),
                self.calc.display()
            ))
        } else if self.calc.awaiting_new_entry() {
            self.calc.repeat_operation().map(|(op, operand)| {
                format!(
                    "{} {} {}",
                    self.calc.display(),
                    op.symbol(),
                    display_number(operand)
                )
            })
        } else {
            None
        }
    }
}

impl KeypadDriver for App {
    fn press(&mut self, action: ButtonAction) -> Snapshot {
        Self::press(self, action).clone()
    }

    fn snapshot(&self) -> Snapshot {
        self.snapshot.clone()
    }

    fn reset(&mut self) {
        Self::press(self, ButtonAction::Clear);
        self.tape.clear();
    }
}
