//! Ratatui front-end: the list/form state machine, the pager that derives the
//! visible page, and the terminal event loop that drives them.

mod app;
mod form;
mod helpers;
mod pager;
mod terminal;

pub use app::App;
pub use terminal::run_app;
