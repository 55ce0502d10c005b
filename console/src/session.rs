//! The interactive command loop.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use inventory_core::{AppState, Event, FormMode, InventoryApp, TableRow, Transport};
use tracing::warn;

use crate::command::{self, Command, HELP};
use crate::terminal::Terminal;

/// Table followed by the form, if it is open.
pub fn render_screen(state: &AppState, rows: &[TableRow]) -> String {
    let mut screen = String::new();
    let _ = writeln!(
        screen,
        "    {:<24} {:>8} {:<10} {}",
        "Name", "Quantity", "Unit", "Last edited"
    );
    if rows.is_empty() {
        screen.push_str("    (no ingredients)\n");
    }
    for row in rows {
        let _ = writeln!(screen, "{row}");
    }

    let form = &state.form;
    if form.is_visible() {
        let _ = writeln!(screen, "-- {} --", form.title());
        let lock = match form.mode() {
            FormMode::Add => "",
            FormMode::Edit { .. } => " (read-only)",
        };
        let _ = writeln!(screen, "name:     {}{lock}", form.name());
        let _ = writeln!(screen, "quantity: {}", form.quantity());
        let _ = writeln!(screen, "unit:     {}", form.unit());
    }
    screen.truncate(screen.trim_end().len());
    screen
}

/// Read commands until `quit` or end of input.
///
/// Failed API calls are printed and the loop continues; only terminal I/O
/// errors end the session early.
pub fn run<T, R, W>(app: &mut InventoryApp<T, Terminal<R, W>>) -> anyhow::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    handle(app, Event::Refresh)?;
    while let Some(line) = app.dialogs_mut().read_line("> ")? {
        match command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => app.dialogs_mut().print(HELP)?,
            Ok(Some(Command::Event(event))) => handle(app, event)?,
            Err(e) => app.dialogs_mut().print(&format!("error: {e}"))?,
        }
    }
    Ok(())
}

fn handle<T, R, W>(app: &mut InventoryApp<T, Terminal<R, W>>, event: Event) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    if let Err(e) = app.dispatch(event) {
        warn!(error = %e, "action failed");
        app.dialogs_mut().print(&format!("error: {e}"))?;
    }
    let screen = render_screen(app.state(), &app.rows());
    app.dialogs_mut().print(&screen)
}
