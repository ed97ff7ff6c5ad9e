//! Terminal rendering
//!
//! Pure view code: everything here reads the app's latest snapshot and
//! draws it. The same layout math drives both rendering and mouse
//! hit-testing, so clicks land on the button that was drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::App;
use crate::keypad::{Button, ButtonAction, ButtonKind, Keypad};

/// Title of the outer frame
pub const APP_TITLE: &str = " Sumadora ";

/// Key bindings listed in the help sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Type a number"),
    ("+-*/", "Operator"),
    ("Enter", "Equals"),
    ("%", "Percent"),
    ("n", "Toggle sign"),
    ("Esc/c", "Clear"),
    ("click", "Press a button"),
    ("t", "Tape on/off"),
    ("?", "Help on/off"),
    ("q", "Quit"),
];

/// Screen regions computed from the current panel configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiAreas {
    /// Entry line and display
    pub readout: Rect,
    /// The on-screen keypad
    pub keypad: Rect,
    /// Session tape panel, when shown
    pub tape: Option<Rect>,
    /// Help sidebar, when shown
    pub help: Option<Rect>,
}

/// Splits the screen into panel regions.
///
/// Used by [`render`] and by the event loop's mouse handling, which needs
/// to know where the keypad was drawn.
#[must_use]
pub fn layout(app: &App, area: Rect) -> UiAreas {
    let mut constraints = vec![Constraint::Min(26)];
    if app.shows_tape() {
        constraints.push(Constraint::Length(28));
    }
    if app.shows_help() {
        constraints.push(Constraint::Length(24));
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints(constraints)
        .split(area);

    let mut next = 1;
    let tape = if app.shows_tape() {
        next += 1;
        Some(columns[next - 1])
    } else {
        None
    };
    let help = if app.shows_help() {
        next += 1;
        Some(columns[next - 1])
    } else {
        None
    };

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(11)])
        .split(columns[0]);

    UiAreas {
        readout: main[0],
        keypad: main[1],
        tape,
        help,
    }
}

/// Renders the whole calculator UI into the frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let areas = layout(app, area);
    let buf = frame.buffer_mut();

    Block::default()
        .title(APP_TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .render(area, buf);

    render_readout(app, areas.readout, buf);
    KeypadWidget::new(app.keypad()).render(areas.keypad, buf);
    if let Some(tape_area) = areas.tape {
        render_tape(app, tape_area, buf);
    }
    if let Some(help_area) = areas.help {
        render_help(help_area, buf);
    }
}

/// Renders the entry line and the display, right-aligned.
fn render_readout(app: &App, area: Rect, buf: &mut Buffer) {
    let snapshot = app.snapshot();
    let entry = snapshot.entry_line().unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled(entry, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            snapshot.display.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Display ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .render(area, buf);
}

/// Renders the session tape, newest entries first.
fn render_tape(app: &App, area: Rect, buf: &mut Buffer) {
    let items: Vec<ListItem> = app
        .tape()
        .iter_rev()
        .take(usize::from(area.height.saturating_sub(2)))
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(entry.expression.clone(), Style::default().fg(Color::Gray)),
                Span::raw(" = "),
                Span::styled(entry.result.clone(), Style::default().fg(Color::Cyan)),
            ]))
        })
        .collect();

    List::new(items)
        .block(
            Block::default()
                .title(" Tape (newest first) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .render(area, buf);
}

/// Renders the help sidebar.
fn render_help(area: Rect, buf: &mut Buffer) {
    let items: Vec<ListItem> = HELP_SHORTCUTS
        .iter()
        .map(|(key, desc)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{key:>6}"), Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::styled(*desc, Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    List::new(items)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(area, buf);
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let rows = self.keypad.row_count() as u16;
        if inner.width < Keypad::COLS || inner.height < rows {
            return; // too small to draw buttons
        }

        let cell_w = inner.width / Keypad::COLS;
        let cell_h = inner.height / rows;

        for (row_index, row) in self.keypad.rows().iter().enumerate() {
            let y = inner.y + row_index as u16 * cell_h + cell_h / 2;
            let mut cell = 0;
            for button in row {
                let x = inner.x + cell * cell_w;
                let span_width = button.width * cell_w;
                let label = format!("[{}]", button.caption());
                let label_x = x + span_width.saturating_sub(label.len() as u16) / 2;
                if label_x < inner.x + inner.width && y < inner.y + inner.height {
                    buf.set_span(label_x, y, &Span::styled(label, button_style(button)), span_width);
                }
                cell += button.width;
            }
        }
    }
}

/// Style for a button face, by visual class and pressed state.
fn button_style(button: &Button) -> Style {
    if button.pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match button.action {
        ButtonAction::Equals => Style::default().fg(Color::Green),
        ButtonAction::Clear => Style::default().fg(Color::Red),
        _ => match button.kind {
            ButtonKind::Number => Style::default().fg(Color::White),
            ButtonKind::Operator => Style::default().fg(Color::Yellow),
            ButtonKind::Function => Style::default().fg(Color::Cyan),
        },
    }
}

/// Maps a click position inside the keypad area to the button under it.
///
/// Uses the same cell math as the renderer; clicks on the border or in
/// the slack outside the grid return `None`.
#[must_use]
pub fn keypad_hit(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<ButtonAction> {
    if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
        return None;
    }

    let rel_x = x - area.x;
    let rel_y = y - area.y;

    // Border is one cell on each side
    if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
        return None;
    }

    let rows = keypad.row_count() as u16;
    let cell_w = area.width.saturating_sub(2) / Keypad::COLS;
    let cell_h = area.height.saturating_sub(2) / rows;
    if cell_w == 0 || cell_h == 0 {
        return None;
    }

    let cell = (rel_x - 1) / cell_w;
    let row = (rel_y - 1) / cell_h;
    if row >= rows || cell >= Keypad::COLS {
        return None;
    }

    keypad.action_at_cell(usize::from(row), cell)
}
