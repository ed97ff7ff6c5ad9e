//! Calculator state machine
//!
//! Interprets one discrete button press at a time and updates state
//! deterministically. No press can fail: malformed display strings cannot
//! arise because every mutation path goes through the guarded digit and
//! decimal-point appends or through float round-tripping, and numeric edge
//! cases (zero divisors, overflow) surface as displayable non-finite
//! values rather than as errors.

use crate::core::format::{display_number, parse_display};
use crate::core::{Operation, Snapshot};

/// The keypad calculator.
///
/// Owns all mutable state; the presentation layer only ever sees the
/// [`Snapshot`] returned by each press. Pressing clear re-initializes the
/// record in place, it never replaces the instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    /// Operand being entered, or the latest result. Never empty.
    display: String,
    /// Operand captured when an operator was selected; empty means none.
    pending_operand: String,
    /// Operator selected but not yet applied.
    pending_operation: Option<Operation>,
    /// The next digit starts a fresh number instead of appending.
    awaiting_new_entry: bool,
    /// Operation and right-hand operand of the last completed equals.
    /// A further equals press re-applies this pair to the display until
    /// a new operator or operand arrives.
    repeat: Option<(Operation, f64)>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator in its initial configuration: display `"0"`,
    /// no pending operand or operation, not awaiting a new entry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending_operand: String::new(),
            pending_operation: None,
            awaiting_new_entry: false,
            repeat: None,
        }
    }

    // ===== Read-only outputs =====

    /// The string currently shown as the active operand or latest result.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The previously captured operand; empty when there is none.
    #[must_use]
    pub fn pending_operand(&self) -> &str {
        &self.pending_operand
    }

    /// The operator selected but not yet applied.
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending_operation
    }

    /// Whether the next digit press starts a fresh number.
    #[must_use]
    pub fn awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    /// The operation and operand a further equals press would re-apply.
    ///
    /// Read by the presentation layer to label repeated computations; the
    /// pair is discarded when an operator is pressed or the state is
    /// cleared.
    #[must_use]
    pub fn repeat_operation(&self) -> Option<(Operation, f64)> {
        self.repeat
    }

    /// The current displayable state triple.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            pending_operand: self.pending_operand.clone(),
            pending_operation: self.pending_operation,
        }
    }

    // ===== Press operations =====

    /// Presses a digit key (`0`..=`9`).
    ///
    /// Starts a fresh number when one is awaited, suppresses a leading
    /// zero, and appends otherwise. Always succeeds.
    pub fn press_digit(&mut self, digit: u8) -> Snapshot {
        let d = char::from_digit(u32::from(digit.min(9)), 10).unwrap_or('0');
        if self.awaiting_new_entry {
            self.display.clear();
            self.display.push(d);
            self.awaiting_new_entry = false;
        } else if self.display == "0" {
            self.display.clear();
            self.display.push(d);
        } else {
            self.display.push(d);
        }
        self.snapshot()
    }

    /// Presses the decimal point key.
    ///
    /// At the start of a fresh number the display becomes `"0."`. A second
    /// decimal point in the same number is ignored, keeping the display
    /// parseable.
    pub fn press_decimal_point(&mut self) -> Snapshot {
        if self.awaiting_new_entry {
            self.display.clear();
            self.display.push_str("0.");
            self.awaiting_new_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self.snapshot()
    }

    /// Presses an operator key.
    ///
    /// If an operation is already pending and a second operand has been
    /// typed, that computation is resolved first and its result becomes
    /// the new pending operand; otherwise the current display is captured
    /// as-is (pressing two operators in a row just swaps the operator).
    pub fn press_operator(&mut self, op: Operation) -> Snapshot {
        if self.pending_operation.is_some() && !self.awaiting_new_entry {
            self.resolve_pending();
        } else {
            self.pending_operand.clone_from(&self.display);
        }
        self.pending_operation = Some(op);
        self.awaiting_new_entry = true;
        self.repeat = None;
        self.snapshot()
    }

    /// Presses the equals key.
    ///
    /// Resolves the pending operation, remembering its operator and
    /// right-hand operand: pressing equals again with no new input
    /// re-applies that pair to its own result (`7 + 3 = =` shows `13`).
    /// With nothing pending and nothing to repeat this is a no-op.
    pub fn press_equals(&mut self) -> Snapshot {
        if self.pending_operation.is_some() {
            self.repeat = self.resolve_pending();
            self.pending_operation = None;
            self.awaiting_new_entry = true;
        } else if self.awaiting_new_entry {
            if let Some((op, operand)) = self.repeat {
                let result = display_number(op.apply(parse_display(&self.display), operand));
                self.display.clone_from(&result);
                self.pending_operand = result;
            }
        }
        self.snapshot()
    }

    /// Presses the percent key: the display is divided by one hundred.
    ///
    /// Pending state and the new-entry flag are untouched.
    pub fn press_percent(&mut self) -> Snapshot {
        self.display = display_number(parse_display(&self.display) / 100.0);
        self.snapshot()
    }

    /// Presses the sign-toggle key: the display is negated.
    pub fn press_toggle_sign(&mut self) -> Snapshot {
        self.display = display_number(-1.0 * parse_display(&self.display));
        self.snapshot()
    }

    /// Presses the clear key, restoring the initial configuration.
    pub fn press_clear(&mut self) -> Snapshot {
        self.display.clear();
        self.display.push('0');
        self.pending_operand.clear();
        self.pending_operation = None;
        self.awaiting_new_entry = false;
        self.repeat = None;
        self.snapshot()
    }

    /// Applies the pending operation to `(pending_operand, display)` and
    /// writes the result into both, returning the operator and right-hand
    /// operand for repeat-equals bookkeeping.
    fn resolve_pending(&mut self) -> Option<(Operation, f64)> {
        let op = self.pending_operation?;
        let previous = parse_display(&self.pending_operand);
        let current = parse_display(&self.display);
        let result = display_number(op.apply(previous, current));
        self.display.clone_from(&result);
        self.pending_operand = result;
        Some((op, current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_digits(calc: &mut Calculator, digits: &str) {
        for c in digits.chars() {
            match c {
                '.' => {
                    calc.press_decimal_point();
                }
                _ => {
                    calc.press_digit(c.to_digit(10).expect("test digit") as u8);
                }
            }
        }
    }

    // ===== Initial state tests =====

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.pending_operand(), "");
        assert_eq!(calc.pending_operation(), None);
        assert!(!calc.awaiting_new_entry());
        assert!(calc.repeat_operation().is_none());
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(Calculator::default(), Calculator::new());
    }

    // ===== Digit entry tests =====

    #[test]
    fn test_digits_concatenate() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "123");
        assert_eq!(calc.display(), "123");
    }

    #[test]
    fn test_leading_zero_suppressed() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "007");
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_zero_stays_single() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "000");
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_decimal_entry() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "0.5");
        assert_eq!(calc.display(), "0.5");
    }

    #[test]
    fn test_decimal_point_on_default_zero_appends() {
        let mut calc = Calculator::new();
        calc.press_decimal_point();
        assert_eq!(calc.display(), "0.");
        press_digits(&mut calc, "25");
        assert_eq!(calc.display(), "0.25");
    }

    #[test]
    fn test_second_decimal_point_ignored() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "1.5");
        calc.press_decimal_point();
        press_digits(&mut calc, "7");
        assert_eq!(calc.display(), "1.57");
    }

    #[test]
    fn test_repeated_decimal_points_keep_display_parseable() {
        let mut calc = Calculator::new();
        for _ in 0..5 {
            calc.press_decimal_point();
        }
        assert_eq!(calc.display(), "0.");
        assert!(calc.display().parse::<f64>().is_ok());
    }

    #[test]
    fn test_digit_after_operator_starts_fresh_number() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "12");
        calc.press_operator(Operation::Add);
        press_digits(&mut calc, "34");
        assert_eq!(calc.display(), "34");
        assert_eq!(calc.pending_operand(), "12");
    }

    #[test]
    fn test_decimal_point_after_operator_starts_zero_dot() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "5");
        calc.press_operator(Operation::Multiply);
        calc.press_decimal_point();
        assert_eq!(calc.display(), "0.");
        assert!(!calc.awaiting_new_entry());
    }

    #[test]
    fn test_digit_after_equals_starts_fresh_number() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "7");
        calc.press_operator(Operation::Add);
        press_digits(&mut calc, "3");
        calc.press_equals();
        press_digits(&mut calc, "5");
        assert_eq!(calc.display(), "5");
    }

    // ===== Operator tests =====

    #[test]
    fn test_operator_captures_display() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "42");
        let snapshot = calc.press_operator(Operation::Subtract);
        assert_eq!(snapshot.pending_operand, "42");
        assert_eq!(snapshot.pending_operation, Some(Operation::Subtract));
        assert_eq!(snapshot.display, "42");
        assert!(calc.awaiting_new_entry());
    }

    #[test]
    fn test_operator_twice_swaps_operator_without_evaluating() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "6");
        calc.press_operator(Operation::Add);
        let snapshot = calc.press_operator(Operation::Multiply);
        assert_eq!(snapshot.pending_operand, "6");
        assert_eq!(snapshot.pending_operation, Some(Operation::Multiply));
        assert_eq!(snapshot.display, "6");
    }

    #[test]
    fn test_operator_resolves_previous_computation() {
        // 2 + 3 * ... resolves 2 + 3 before arming the multiply.
        let mut calc = Calculator::new();
        press_digits(&mut calc, "2");
        calc.press_operator(Operation::Add);
        press_digits(&mut calc, "3");
        let snapshot = calc.press_operator(Operation::Multiply);
        assert_eq!(snapshot.display, "5");
        assert_eq!(snapshot.pending_operand, "5");
        assert_eq!(snapshot.pending_operation, Some(Operation::Multiply));
    }

    #[test]
    fn test_left_to_right_chain() {
        // 2 + 3 * 4 = evaluates as (2 + 3) * 4, not 2 + 12.
        let mut calc = Calculator::new();
        press_digits(&mut calc, "2");
        calc.press_operator(Operation::Add);
        press_digits(&mut calc, "3");
        calc.press_operator(Operation::Multiply);
        press_digits(&mut calc, "4");
        assert_eq!(calc.press_equals().display, "20");
    }

    // ===== Equals tests =====

    #[test]
    fn test_equals_without_pending_operation_is_noop() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "9");
        let before = calc.snapshot();
        assert_eq!(calc.press_equals(), before);
    }

    #[test]
    fn test_equals_resolves_pending_operation() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "7");
        calc.press_operator(Operation::Add);
        press_digits(&mut calc, "3");
        let snapshot = calc.press_equals();
        assert_eq!(snapshot.display, "10");
        assert_eq!(snapshot.pending_operand, "10");
        assert_eq!(snapshot.pending_operation, None);
        assert!(calc.awaiting_new_entry());
    }

    #[test]
    fn test_operator_then_equals_reuses_display_as_both_operands() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "5");
        calc.press_operator(Operation::Add);
        assert_eq!(calc.press_equals().display, "10");
    }

    #[test]
    fn test_operator_then_equals_squares_on_multiply() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "9");
        calc.press_operator(Operation::Multiply);
        assert_eq!(calc.press_equals().display, "81");
    }

    #[test]
    fn test_chained_equals_re_applies_last_operation() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "5");
        calc.press_operator(Operation::Add);
        press_digits(&mut calc, "3");
        assert_eq!(calc.press_equals().display, "8");
        assert_eq!(calc.press_equals().display, "11");
        assert_eq!(calc.press_equals().display, "14");
    }

    #[test]
    fn test_chained_equals_scenario_seven_plus_three() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "7");
        calc.press_operator(Operation::Add);
        press_digits(&mut calc, "3");
        assert_eq!(calc.press_equals().display, "10");
        assert_eq!(calc.press_equals().display, "13");
    }

    #[test]
    fn test_chained_equals_with_subtraction() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "9");
        calc.press_operator(Operation::Subtract);
        press_digits(&mut calc, "2");
        assert_eq!(calc.press_equals().display, "7");
        assert_eq!(calc.press_equals().display, "5");
    }

    #[test]
    fn test_typing_new_operand_stops_repeat() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "7");
        calc.press_operator(Operation::Add);
        press_digits(&mut calc, "3");
        calc.press_equals();
        press_digits(&mut calc, "5");
        // No pending operation and a fresh operand: equals is a no-op.
        assert_eq!(calc.press_equals().display, "5");
    }

    #[test]
    fn test_new_operator_discards_repeat() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "7");
        calc.press_operator(Operation::Add);
        press_digits(&mut calc, "3");
        calc.press_equals();
        calc.press_operator(Operation::Multiply);
        press_digits(&mut calc, "2");
        assert_eq!(calc.press_equals().display, "20");
        // The repeat pair is now (×, 2), not the old (+, 3).
        assert_eq!(calc.press_equals().display, "40");
    }

    // ===== Percent tests =====

    #[test]
    fn test_percent_divides_display_by_hundred() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "50");
        assert_eq!(calc.press_percent().display, "0.5");
    }

    #[test]
    fn test_percent_leaves_pending_state_alone() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "200");
        calc.press_operator(Operation::Add);
        press_digits(&mut calc, "50");
        let snapshot = calc.press_percent();
        assert_eq!(snapshot.display, "0.5");
        assert_eq!(snapshot.pending_operand, "200");
        assert_eq!(snapshot.pending_operation, Some(Operation::Add));
        assert!(!calc.awaiting_new_entry());
        assert_eq!(calc.press_equals().display, "200.5");
    }

    #[test]
    fn test_percent_twice() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "5000");
        calc.press_percent();
        assert_eq!(calc.press_percent().display, "0.5");
    }

    // ===== Sign toggle tests =====

    #[test]
    fn test_toggle_sign() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "9");
        assert_eq!(calc.press_toggle_sign().display, "-9");
        assert_eq!(calc.press_toggle_sign().display, "9");
    }

    #[test]
    fn test_toggle_sign_on_zero_stays_zero() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press_toggle_sign().display, "0");
    }

    #[test]
    fn test_toggle_sign_on_decimal() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "2.5");
        assert_eq!(calc.press_toggle_sign().display, "-2.5");
    }

    #[test]
    fn test_negative_operand_feeds_arithmetic() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "9");
        calc.press_toggle_sign();
        calc.press_operator(Operation::Add);
        press_digits(&mut calc, "4");
        assert_eq!(calc.press_equals().display, "-5");
    }

    // ===== Clear tests =====

    #[test]
    fn test_clear_restores_initial_state() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "12.5");
        calc.press_operator(Operation::Divide);
        press_digits(&mut calc, "4");
        calc.press_clear();
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_clear_after_equals_discards_repeat() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "7");
        calc.press_operator(Operation::Add);
        press_digits(&mut calc, "3");
        calc.press_equals();
        calc.press_clear();
        // Nothing left to repeat: equals is a no-op on the fresh state.
        assert_eq!(calc.press_equals().display, "0");
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_clear_snapshot_fields() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "8");
        calc.press_operator(Operation::Multiply);
        let snapshot = calc.press_clear();
        assert_eq!(snapshot.display, "0");
        assert_eq!(snapshot.pending_operand, "");
        assert_eq!(snapshot.pending_operation, None);
        assert!(snapshot.entry_line().is_none());
    }

    // ===== Non-finite passthrough tests =====

    #[test]
    fn test_division_by_zero_displays_infinity() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "8");
        calc.press_operator(Operation::Divide);
        press_digits(&mut calc, "0");
        assert_eq!(calc.press_equals().display, "Infinity");
    }

    #[test]
    fn test_zero_divided_by_zero_displays_nan() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "0");
        calc.press_operator(Operation::Divide);
        press_digits(&mut calc, "0");
        assert_eq!(calc.press_equals().display, "NaN");
    }

    #[test]
    fn test_negative_division_by_zero_displays_negative_infinity() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "8");
        calc.press_toggle_sign();
        calc.press_operator(Operation::Divide);
        press_digits(&mut calc, "0");
        assert_eq!(calc.press_equals().display, "-Infinity");
    }

    #[test]
    fn test_arithmetic_continues_on_infinity() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "8");
        calc.press_operator(Operation::Divide);
        press_digits(&mut calc, "0");
        calc.press_equals();
        calc.press_operator(Operation::Subtract);
        press_digits(&mut calc, "5");
        assert_eq!(calc.press_equals().display, "Infinity");
    }

    #[test]
    fn test_overflow_displays_infinity() {
        let mut calc = Calculator::new();
        // MAX * MAX overflows to infinity; displayed verbatim, not rejected.
        calc.display = display_number(f64::MAX);
        calc.press_operator(Operation::Multiply);
        assert_eq!(calc.press_equals().display, "Infinity");
    }

    // ===== Formatting behavior tests =====

    #[test]
    fn test_float_artifact_preserved() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "0.1");
        calc.press_operator(Operation::Add);
        press_digits(&mut calc, "0.2");
        assert_eq!(calc.press_equals().display, "0.30000000000000004");
    }

    #[test]
    fn test_integer_result_has_no_fraction() {
        let mut calc = Calculator::new();
        press_digits(&mut calc, "2.5");
        calc.press_operator(Operation::Multiply);
        press_digits(&mut calc, "4");
        assert_eq!(calc.press_equals().display, "10");
    }
}
