//! Domain models that mirror the SQLite schema and get passed throughout the
//! TUI. The intent is that these types stay light-weight data holders so other
//! layers can focus on presentation and persistence logic.

use chrono::NaiveDate;

/// Departments an employee can belong to. The table and the form both treat
/// this as a closed option set, so keeping it as one constant means the two
/// can never drift apart.
pub const DEPARTMENT_OPTIONS: &[&str] = &["HR", "Finance", "IT", "Sales", "Marketing"];

#[derive(Debug, Clone, PartialEq, Eq)]
/// In-memory representation of one employee record. The struct mirrors rows in
/// the `employees` table.
pub struct Employee {
    /// Primary key assigned by the store. `None` marks a draft that has never
    /// been saved; the store fills the id in on insert.
    pub id: Option<i64>,
    /// Display name shown in the table and edited through the form.
    pub name: String,
    /// One of [`DEPARTMENT_OPTIONS`]. Kept as text because the store and the
    /// form both speak strings; the form only ever writes values from the
    /// option set.
    pub department: String,
    /// Free-text job title.
    pub designation: String,
    /// Date the employee joined the company.
    pub joining_date: NaiveDate,
}

impl Employee {
    /// Textual id for table cells. Unsaved drafts never appear in the table,
    /// but the fallback keeps rendering total anyway.
    pub fn id_text(&self) -> String {
        match self.id {
            Some(id) => id.to_string(),
            None => "-".to_string(),
        }
    }
}
