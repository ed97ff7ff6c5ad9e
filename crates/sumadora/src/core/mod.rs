//! Core calculator engine
//!
//! Everything with actual logic lives here: the press-at-a-time state
//! machine ([`Calculator`]), the arithmetic vocabulary ([`Operation`]),
//! the rendered state triple ([`Snapshot`]), and the session tape.

pub(crate) mod format;
mod state;
pub mod tape;

pub use state::Calculator;

use serde::{Deserialize, Serialize};

/// A binary arithmetic operation selectable from the keypad.
///
/// Exactly one operation can be pending at a time; there is no precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// Returns the keypad symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Applies the operation to two operands.
    ///
    /// Plain IEEE 754 arithmetic: a zero divisor yields an infinite or
    /// not-a-number result, which the calculator displays verbatim rather
    /// than treating as an error.
    #[must_use]
    pub fn apply(self, previous: f64, current: f64) -> f64 {
        match self {
            Self::Add => previous + current,
            Self::Subtract => previous - current,
            Self::Multiply => previous * current,
            Self::Divide => previous / current,
        }
    }
}

/// The displayable state triple returned by every press operation.
///
/// The presentation layer renders from this snapshot and holds no mutable
/// calculator state of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The operand being entered, or the latest result. Never empty.
    pub display: String,
    /// The operand captured when an operator was selected, or the result
    /// of the last completed equals. Empty when there is nothing to show.
    pub pending_operand: String,
    /// The operator selected but not yet applied.
    pub pending_operation: Option<Operation>,
}

impl Snapshot {
    /// The "previous value + operator" line shown above the display.
    ///
    /// Present exactly when a pending operand exists; after a completed
    /// equals the line shows the result without an operator symbol.
    #[must_use]
    pub fn entry_line(&self) -> Option<String> {
        if self.pending_operand.is_empty() {
            return None;
        }
        Some(match self.pending_operation {
            Some(op) => format!("{} {}", self.pending_operand, op.symbol()),
            None => self.pending_operand.clone(),
        })
    }
}
