//! Unified keypad driver
//!
//! A driver feeds button presses into some calculator front end and reads
//! the resulting display fields, so the same press sequences can exercise
//! the bare engine and the terminal shell alike. The `verify_*` functions
//! below are reusable behavioral specifications written once against the
//! trait.

use crate::core::{Calculator, Snapshot};
use crate::keypad::ButtonAction;

/// Abstract driver over anything that accepts keypad presses.
pub trait KeypadDriver {
    /// Applies one button press and returns the updated snapshot.
    fn press(&mut self, action: ButtonAction) -> Snapshot;

    /// Returns the current displayable state triple.
    fn snapshot(&self) -> Snapshot;

    /// Returns to the initial state, as if freshly started.
    fn reset(&mut self);

    /// The current display string.
    fn display(&self) -> String {
        self.snapshot().display
    }

    /// The "previous value + operator" line, when present.
    fn entry_line(&self) -> Option<String> {
        self.snapshot().entry_line()
    }
}

/// Presses a whole script of keys, one character per press.
///
/// Characters map through [`ButtonAction::from_char`] (`"7+3="` presses
/// seven, plus, three, equals; `n` toggles the sign); whitespace and
/// unmapped characters are skipped. Returns the final snapshot.
pub fn press_script<D: KeypadDriver>(driver: &mut D, script: &str) -> Snapshot {
    for c in script.chars() {
        if let Some(action) = ButtonAction::from_char(c) {
            driver.press(action);
        }
    }
    driver.snapshot()
}

/// Driver over the bare engine, no presentation attached.
#[derive(Debug, Default)]
pub struct CoreDriver {
    calc: Calculator,
}

impl CoreDriver {
    /// Creates a driver around a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self {
            calc: Calculator::new(),
        }
    }

    /// Returns a reference to the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }
}

impl KeypadDriver for CoreDriver {
    fn press(&mut self, action: ButtonAction) -> Snapshot {
        match action {
            ButtonAction::Digit(d) => self.calc.press_digit(d),
            ButtonAction::Decimal => self.calc.press_decimal_point(),
            ButtonAction::Operator(op) => self.calc.press_operator(op),
            ButtonAction::Equals => self.calc.press_equals(),
            ButtonAction::Percent => self.calc.press_percent(),
            ButtonAction::ToggleSign => self.calc.press_toggle_sign(),
            ButtonAction::Clear => self.calc.press_clear(),
        }
    }

    fn snapshot(&self) -> Snapshot {
        self.calc.snapshot()
    }

    fn reset(&mut self) {
        self.calc.press_clear();
    }
}

// ===== Unified behavioral specifications =====
// These run against ANY KeypadDriver implementation.

/// Typed digits concatenate, with the leading zero suppressed.
pub fn verify_digit_entry<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(press_script(driver, "123").display, "123");
    driver.reset();
    assert_eq!(press_script(driver, "007").display, "7");
    driver.reset();
    assert_eq!(press_script(driver, "0.5").display, "0.5");
}

/// A second decimal point in the same number is ignored.
pub fn verify_single_decimal_point<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(press_script(driver, "1..5").display, "1.5");
    driver.reset();
    assert_eq!(press_script(driver, "...").display, "0.");
}

/// An operator followed directly by equals uses the display as both
/// operands.
pub fn verify_operator_equals_reuses_display<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(press_script(driver, "5+=").display, "10");
    driver.reset();
    assert_eq!(press_script(driver, "9*=").display, "81");
}

/// Repeated equals re-applies the last operation to its own result.
pub fn verify_chained_equals<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(press_script(driver, "7+3=").display, "10");
    assert_eq!(press_script(driver, "=").display, "13");
    driver.reset();
    assert_eq!(press_script(driver, "5+3=").display, "8");
    assert_eq!(press_script(driver, "=").display, "11");
}

/// Percent divides the display by one hundred in place.
pub fn verify_percent<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(press_script(driver, "50%").display, "0.5");
}

/// The sign toggle negates the display and is its own inverse.
pub fn verify_sign_toggle<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(press_script(driver, "9n").display, "-9");
    assert_eq!(press_script(driver, "n").display, "9");
}

/// A zero divisor passes through as displayable infinity, not an error.
pub fn verify_division_by_zero_passthrough<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(press_script(driver, "8/0=").display, "Infinity");
}

/// Clear restores the initial displayable state from anywhere.
pub fn verify_clear<D: KeypadDriver>(driver: &mut D) {
    driver.reset();
    press_script(driver, "12.5*4=n%");
    let snapshot = press_script(driver, "c");
    assert_eq!(snapshot.display, "0");
    assert_eq!(snapshot.pending_operand, "");
    assert_eq!(snapshot.pending_operation, None);
    assert!(snapshot.entry_line().is_none());
}

/// Runs every specification in sequence.
pub fn run_full_specification<D: KeypadDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_single_decimal_point(driver);
    verify_operator_equals_reuses_display(driver);
    verify_chained_equals(driver);
    verify_percent(driver);
    verify_sign_toggle(driver);
    verify_division_by_zero_passthrough(driver);
    verify_clear(driver);
}
