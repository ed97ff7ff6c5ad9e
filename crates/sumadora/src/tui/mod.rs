//! Terminal keypad shell
//!
//! Collects key and mouse events, forwards them to the engine one press
//! at a time, and re-renders from the returned snapshot. No arithmetic
//! happens here.

pub mod app;
pub mod input;
pub mod ui;

pub use app::App;
pub use input::{InputEvent, InputHandler};
pub use ui::{keypad_hit, layout, render, UiAreas};
