//! Sumadora terminal shell
//!
//! Brings up the terminal, forwards key and mouse events to the
//! calculator one press at a time, and re-renders after each one.
//!
//! ## Usage
//!
//! ```bash
//! sumadora                 # Launch the keypad
//! sumadora --no-help       # Without the help sidebar
//! sumadora --tape-limit 20 # Keep a short session tape
//! ```

mod args;
mod error;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::EnvFilter;

use args::Cli;
use error::{CliError, CliResult};
use sumadora::tui::{ui, App, InputEvent, InputHandler};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    if cli.tape_limit == 0 {
        return Err(CliError::invalid_argument("--tape-limit must be at least 1"));
    }

    init_tracing(&cli);

    let mut app = App::with_tape_limit(cli.tape_limit);
    app.set_show_tape(!cli.no_tape);
    app.set_show_help(!cli.no_help);

    run_tui(&mut app)
}

/// Installs the stderr tracing subscriber before the alternate screen is
/// entered. `RUST_LOG` overrides the verbosity flags.
fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Raw-mode terminal bring-up, event loop, restore on the way out.
fn run_tui(app: &mut App) -> CliResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Draws, waits for one event, applies it; one press at a time.
fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> CliResult<()> {
    let input = InputHandler::new();

    loop {
        terminal.draw(|frame| ui::render(app, frame))?;

        match event::read()? {
            Event::Key(key) => match input.handle_key(key) {
                InputEvent::Press(action) => {
                    app.press(action);
                }
                InputEvent::ToggleTape => app.toggle_tape(),
                InputEvent::ToggleHelp => app.toggle_help(),
                InputEvent::Quit => app.quit(),
                InputEvent::None => app.release_keys(),
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let screen = Rect::new(0, 0, size.width, size.height);
                let areas = ui::layout(app, screen);
                if let Some(action) = ui::keypad_hit(app.keypad(), areas.keypad, mouse.column, mouse.row)
                {
                    app.press(action);
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
