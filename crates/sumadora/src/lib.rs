//! Sumadora - a keypad-driven desk calculator
//!
//! The calculator is a small state machine: it accepts one discrete button
//! press at a time (digit, decimal point, operator, equals, percent, sign
//! toggle, clear) and after every press exposes a display snapshot for
//! rendering. There is no expression parser and no operator precedence;
//! exactly one operation can be pending, resolved strictly left to right,
//! the way a desk calculator works.
//!
//! The terminal shell (behind the default-on `tui` feature) renders an
//! on-screen keypad with ratatui and forwards key and mouse events to the
//! engine; it performs no arithmetic of its own.
//!
//! # Example
//!
//! ```rust
//! use sumadora::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.press_digit(7);
//! calc.press_operator(Operation::Add);
//! calc.press_digit(3);
//! let snapshot = calc.press_equals();
//! assert_eq!(snapshot.display, "10");
//!
//! // Repeating equals re-applies the last operation to its own result.
//! assert_eq!(calc.press_equals().display, "13");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::tape::{Tape, TapeEntry};
    pub use crate::core::{Calculator, Operation, Snapshot};
    pub use crate::driver::{press_script, CoreDriver, KeypadDriver};
    pub use crate::keypad::{Button, ButtonAction, ButtonKind, Keypad};

    #[cfg(feature = "tui")]
    pub use crate::tui::App;
}
