//! Core library surface for the Employee Manager TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as potential external tooling can reuse the same
//! pieces.
pub mod models;
pub mod store;
pub mod ui;

/// Convenience re-exports for the persistence layer. These are typically used
/// by `main.rs` to open the embedded SQLite store and preload data.
pub use store::{open_default_store, EmployeeStore, SqliteStore, StoreError};

/// The primary domain type that other layers manipulate.
pub use models::Employee;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
