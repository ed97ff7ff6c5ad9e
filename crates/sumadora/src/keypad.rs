//! On-screen keypad model
//!
//! The keypad is the presentation layer's input vocabulary: a grid of
//! buttons, each carrying the [`ButtonAction`] it feeds into the engine.
//! The model is independent of any rendering backend so it can also be
//! driven from scripts and tests.
//!
//! The layout is the classic four-column pad:
//!
//! ```text
//! [ C ] [ ± ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [   0   ] [ . ] [ = ]
//! ```

use crate::core::Operation;

/// The discrete input a keypad button forwards to the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter the decimal point
    Decimal,
    /// Select an operator
    Operator(Operation),
    /// Resolve the pending operation
    Equals,
    /// Divide the display by one hundred
    Percent,
    /// Negate the display
    ToggleSign,
    /// Reset to the initial state
    Clear,
}

const DIGIT_CAPTIONS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl ButtonAction {
    /// The caption drawn on the button face.
    #[must_use]
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_CAPTIONS[usize::from(*d).min(9)],
            Self::Decimal => ".",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::Percent => "%",
            Self::ToggleSign => "±",
            Self::Clear => "C",
        }
    }

    /// Maps a typed character to the action it triggers, if any.
    ///
    /// This is the shared vocabulary between keyboard input and press
    /// scripts: digits and `.` enter numbers, `+ - * /` (or the keypad
    /// glyphs) select operators, `=` resolves, `%` is percent, `n` (or
    /// `±`) toggles the sign, and `c` clears.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c as u8 - b'0')),
            '.' => Some(Self::Decimal),
            '+' => Some(Self::Operator(Operation::Add)),
            '-' | '−' => Some(Self::Operator(Operation::Subtract)),
            '*' | 'x' | '×' => Some(Self::Operator(Operation::Multiply)),
            '/' | '÷' => Some(Self::Operator(Operation::Divide)),
            '=' => Some(Self::Equals),
            '%' => Some(Self::Percent),
            'n' | '±' => Some(Self::ToggleSign),
            'c' | 'C' => Some(Self::Clear),
            _ => None,
        }
    }
}

/// Visual class of a button, mirrored in the shell's styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digits and the decimal point
    Number,
    /// Arithmetic operators and equals
    Operator,
    /// Clear, sign toggle, percent
    Function,
}

impl ButtonKind {
    /// The visual class of the given action.
    #[must_use]
    pub fn of(action: ButtonAction) -> Self {
        match action {
            ButtonAction::Digit(_) | ButtonAction::Decimal => Self::Number,
            ButtonAction::Operator(_) | ButtonAction::Equals => Self::Operator,
            ButtonAction::Percent | ButtonAction::ToggleSign | ButtonAction::Clear => {
                Self::Function
            }
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// The action this button performs
    pub action: ButtonAction,
    /// The visual class of the button
    pub kind: ButtonKind,
    /// Horizontal cells occupied in the grid (the zero key spans two)
    pub width: u16,
    /// Whether the button is currently pressed/highlighted
    pub pressed: bool,
}

impl Button {
    /// Creates a single-cell button for an action
    #[must_use]
    pub fn new(action: ButtonAction) -> Self {
        Self {
            action,
            kind: ButtonKind::of(action),
            width: 1,
            pressed: false,
        }
    }

    /// Creates a double-width button for an action
    #[must_use]
    pub fn wide(action: ButtonAction) -> Self {
        Self {
            width: 2,
            ..Self::new(action)
        }
    }

    /// The caption drawn on the button face
    #[must_use]
    pub fn caption(&self) -> &'static str {
        self.action.caption()
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad: five rows of buttons, four cell columns wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    rows: Vec<Vec<Button>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Cell columns in the grid
    pub const COLS: u16 = 4;

    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        use ButtonAction as A;
        let rows = vec![
            vec![
                Button::new(A::Clear),
                Button::new(A::ToggleSign),
                Button::new(A::Percent),
                Button::new(A::Operator(Operation::Divide)),
            ],
            vec![
                Button::new(A::Digit(7)),
                Button::new(A::Digit(8)),
                Button::new(A::Digit(9)),
                Button::new(A::Operator(Operation::Multiply)),
            ],
            vec![
                Button::new(A::Digit(4)),
                Button::new(A::Digit(5)),
                Button::new(A::Digit(6)),
                Button::new(A::Operator(Operation::Subtract)),
            ],
            vec![
                Button::new(A::Digit(1)),
                Button::new(A::Digit(2)),
                Button::new(A::Digit(3)),
                Button::new(A::Operator(Operation::Add)),
            ],
            vec![
                Button::wide(A::Digit(0)),
                Button::new(A::Decimal),
                Button::new(A::Equals),
            ],
        ];
        Self { rows }
    }

    /// Returns the button rows, top to bottom
    #[must_use]
    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    /// Returns the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the total number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Returns an iterator over all buttons, row-major
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    /// Gets a button by row and position within the row
    #[must_use]
    pub fn button_at(&self, row: usize, index: usize) -> Option<&Button> {
        self.rows.get(row)?.get(index)
    }

    /// Finds the button carrying the given caption
    #[must_use]
    pub fn find_by_caption(&self, caption: &str) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|b| b.caption() == caption)
                .map(|i| (r, i))
        })
    }

    /// The action of the button occupying the given cell column of a row,
    /// accounting for double-width buttons.
    #[must_use]
    pub fn action_at_cell(&self, row: usize, cell: u16) -> Option<ButtonAction> {
        let mut start = 0;
        for button in self.rows.get(row)? {
            if (start..start + button.width).contains(&cell) {
                return Some(button.action);
            }
            start += button.width;
        }
        None
    }

    /// Highlights the button for an action, releasing all others
    pub fn highlight(&mut self, action: ButtonAction) {
        for button in self.rows.iter_mut().flatten() {
            button.set_pressed(button.action == action);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for button in self.rows.iter_mut().flatten() {
            button.set_pressed(false);
        }
    }
}
