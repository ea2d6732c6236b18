//! Binary entry point that glues the SQLite-backed employee store to the TUI:
//! open the database, fetch the initial record set, and drive the Ratatui
//! event loop until the user exits.
use anyhow::Context;
use employee_manager::{open_default_store, run_app, App, EmployeeStore};

/// Initialize persistence, load cached data, and launch the Ratatui event
/// loop. Returning a `Result` bubbles up fatal initialization problems (for
/// example an unwritable data directory) to the terminal instead of crashing
/// silently.
fn main() -> anyhow::Result<()> {
    let store = open_default_store()?;
    let employees = store.list().context("failed to load employees")?;

    let mut app = App::new(store, employees);
    run_app(&mut app)
}
