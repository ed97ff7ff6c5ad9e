//! Display-string conversion for calculator values
//!
//! The display always holds a string the engine can parse back as a float,
//! so arithmetic keeps working even on non-finite results carried over
//! from a previous computation.

/// Formats a value the way the display shows it.
///
/// Finite values use the default shortest round-trip conversion with no
/// rounding applied, so float artifacts (`0.1 + 0.2`) appear verbatim.
/// Non-finite values use the spellings `Infinity`, `-Infinity`, and `NaN`,
/// all of which are inside `f64`'s accepted parse grammar.
pub(crate) fn display_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // negative zero renders as plain zero
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Parses a display string back into a value.
///
/// Display strings only ever come from the guarded digit entry paths or
/// from [`display_number`], so the parse cannot fail in practice; the
/// zero fallback is never observable.
pub(crate) fn parse_display(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}
