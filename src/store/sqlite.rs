use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use directories::BaseDirs;
use rusqlite::{params, Connection};

use crate::models::Employee;

use super::{EmployeeStore, StoreError};

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".employee-manager";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "employees.sqlite";

/// Embedded SQLite implementation of [`EmployeeStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Wrap an open connection, creating the schema if it is missing. Taking
    /// the connection as a parameter keeps tests free to use an in-memory
    /// database.
    pub fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS employees (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                department TEXT NOT NULL,
                designation TEXT NOT NULL,
                joining_date TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }
}

/// Open the store at its default on-disk location, creating the data
/// directory and schema on first run.
pub fn open_default_store() -> Result<SqliteStore> {
    let db_path = db_path()?;

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let conn = Connection::open(&db_path).context("failed to open SQLite database")?;
    SqliteStore::with_connection(conn).context("failed to prepare employees table")
}

/// Resolve the absolute path to the SQLite database inside the user's home.
fn db_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}

impl EmployeeStore for SqliteStore {
    fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, department, designation, joining_date
             FROM employees
             ORDER BY id",
        )?;

        let employees = stmt
            .query_map([], |row| {
                Ok(Employee {
                    id: Some(row.get(0)?),
                    name: row.get(1)?,
                    department: row.get(2)?,
                    designation: row.get(3)?,
                    joining_date: row.get::<_, NaiveDate>(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(employees)
    }

    fn save(&mut self, employee: &Employee) -> Result<(), StoreError> {
        match employee.id {
            Some(id) => {
                let updated = self.conn.execute(
                    "UPDATE employees
                     SET name = ?1, department = ?2, designation = ?3, joining_date = ?4
                     WHERE id = ?5",
                    params![
                        employee.name,
                        employee.department,
                        employee.designation,
                        employee.joining_date,
                        id
                    ],
                )?;
                if updated == 0 {
                    return Err(StoreError::NotFound);
                }
            }
            None => {
                self.conn.execute(
                    "INSERT INTO employees (name, department, designation, joining_date)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![
                        employee.name,
                        employee.department,
                        employee.designation,
                        employee.joining_date
                    ],
                )?;
            }
        }
        Ok(())
    }

    fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM employees WHERE id = ?1", params![id])?;

        if deleted == 0 {
            Err(StoreError::NotFound)
        } else {
            Ok(())
        }
    }

    fn delete_many(&mut self, ids: &[i64]) -> Result<(), StoreError> {
        // Dropping the transaction without committing rolls every row back,
        // which keeps the bulk operation all-or-nothing.
        let tx = self.conn.transaction()?;
        for &id in ids {
            let deleted = tx.execute("DELETE FROM employees WHERE id = ?1", params![id])?;
            if deleted == 0 {
                return Err(StoreError::NotFound);
            }
        }
        tx.commit()?;
        Ok(())
    }
}
