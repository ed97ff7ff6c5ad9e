//! Keyboard input handling
//!
//! Maps crossterm key events onto keypad presses and shell commands. The
//! mapping is total and infallible; unrecognized keys are ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keypad::ButtonAction;

/// What a key event asks the shell to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Forward a button press to the calculator
    Press(ButtonAction),
    /// Toggle the tape panel
    ToggleTape,
    /// Toggle the help sidebar
    ToggleHelp,
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Input handler that maps key events to shell events
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to a shell event.
    ///
    /// Digits, `.`, `+ - * /`, `=`, `%`, `n`, and `c` press the matching
    /// button; Enter is equals and Esc is clear; `t` and `?` toggle the
    /// side panels; `q` and Ctrl+C quit.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> InputEvent {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => InputEvent::Quit,
                _ => InputEvent::None,
            };
        }

        match code {
            KeyCode::Char('q') => InputEvent::Quit,
            KeyCode::Char('t') => InputEvent::ToggleTape,
            KeyCode::Char('?') => InputEvent::ToggleHelp,
            KeyCode::Char(c) => {
                ButtonAction::from_char(c).map_or(InputEvent::None, InputEvent::Press)
            }
            KeyCode::Enter => InputEvent::Press(ButtonAction::Equals),
            KeyCode::Esc => InputEvent::Press(ButtonAction::Clear),
            KeyCode::Delete => InputEvent::Press(ButtonAction::Clear),
            _ => InputEvent::None,
        }
    }
}
