use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{Employee, DEPARTMENT_OPTIONS};

/// Whether the form creates a fresh record or rewrites an existing one. Edit
/// carries the id so the save keeps targeting the original record even after
/// every visible field has been retyped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormMode {
    Add,
    Edit(i64),
}

/// Fields available within the employee form, in focus order.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub(crate) enum FormField {
    #[default]
    Name,
    Department,
    Designation,
    JoiningDate,
}

/// Scratch copy of one employee's fields while the form view is open. All
/// values stay as raw text until save time; `parse_inputs` is the single
/// place they become a typed record.
#[derive(Debug, Clone)]
pub(crate) struct EmployeeForm {
    pub(crate) mode: FormMode,
    pub(crate) name: String,
    pub(crate) department: String,
    pub(crate) designation: String,
    pub(crate) joining_date: String,
    pub(crate) active: FormField,
}

impl EmployeeForm {
    /// Empty draft for the add flow.
    pub(crate) fn new() -> Self {
        Self {
            mode: FormMode::Add,
            name: String::new(),
            department: String::new(),
            designation: String::new(),
            joining_date: String::new(),
            active: FormField::Name,
        }
    }

    /// Populate the draft from an existing record when entering edit mode.
    pub(crate) fn from_employee(employee: &Employee, id: i64) -> Self {
        Self {
            mode: FormMode::Edit(id),
            name: employee.name.clone(),
            department: employee.department.clone(),
            designation: employee.designation.clone(),
            joining_date: employee.joining_date.format("%Y-%m-%d").to_string(),
            active: FormField::Name,
        }
    }

    /// Card title shown above the form, derived from the mode.
    pub(crate) fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add Employee",
            FormMode::Edit(_) => "Edit Employee",
        }
    }

    /// Cycle focus forward across the four fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            FormField::Name => FormField::Department,
            FormField::Department => FormField::Designation,
            FormField::Designation => FormField::JoiningDate,
            FormField::JoiningDate => FormField::Name,
        };
    }

    /// Cycle focus backward.
    pub(crate) fn toggle_field_back(&mut self) {
        self.active = match self.active {
            FormField::Name => FormField::JoiningDate,
            FormField::Department => FormField::Name,
            FormField::Designation => FormField::Department,
            FormField::JoiningDate => FormField::Designation,
        };
    }

    /// Append a character to the active field, validating allowed input. The
    /// department is a closed option set and only changes through
    /// [`EmployeeForm::cycle_department`]; the date field accepts just the
    /// characters of its `YYYY-MM-DD` shape.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        match self.active {
            FormField::Name => {
                if ch.is_control() {
                    return false;
                }
                self.name.push(ch);
                true
            }
            FormField::Department => false,
            FormField::Designation => {
                if ch.is_control() {
                    return false;
                }
                self.designation.push(ch);
                true
            }
            FormField::JoiningDate => {
                if ch.is_ascii_digit() || ch == '-' {
                    self.joining_date.push(ch);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Department => self.department.clear(),
            FormField::Designation => {
                self.designation.pop();
            }
            FormField::JoiningDate => {
                self.joining_date.pop();
            }
        }
    }

    /// Step the department through the fixed option set. An unset department
    /// starts at the first or last option depending on direction.
    pub(crate) fn cycle_department(&mut self, step: isize) {
        let len = DEPARTMENT_OPTIONS.len() as isize;
        let current = DEPARTMENT_OPTIONS
            .iter()
            .position(|&option| option == self.department);

        let next = match current {
            Some(index) => (index as isize + step).rem_euclid(len),
            None if step < 0 => len - 1,
            None => 0,
        };
        self.department = DEPARTMENT_OPTIONS[next as usize].to_string();
    }

    /// Validate the draft and return a typed record ready for the store. The
    /// first missing field wins, so the caller surfaces exactly one warning
    /// per attempt.
    pub(crate) fn parse_inputs(&self) -> Result<Employee> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Name is required."));
        }
        let department = self.department.trim();
        if department.is_empty() {
            return Err(anyhow!("Department is required."));
        }
        if !DEPARTMENT_OPTIONS.contains(&department) {
            return Err(anyhow!("Department must be one of the listed options."));
        }
        let designation = self.designation.trim();
        if designation.is_empty() {
            return Err(anyhow!("Designation is required."));
        }
        let date_raw = self.joining_date.trim();
        if date_raw.is_empty() {
            return Err(anyhow!("Joining date is required."));
        }
        let joining_date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d")
            .context("Joining date must be a valid YYYY-MM-DD date.")?;

        Ok(Employee {
            id: match self.mode {
                FormMode::Add => None,
                FormMode::Edit(id) => Some(id),
            },
            name: name.to_string(),
            department: department.to_string(),
            designation: designation.to_string(),
            joining_date,
        })
    }

    /// Render a styled line for the form widget.
    pub(crate) fn build_line(&self, field_name: &str, field: FormField) -> Line<'static> {
        let value = match field {
            FormField::Name => &self.name,
            FormField::Department => &self.department,
            FormField::Designation => &self.designation,
            FormField::JoiningDate => &self.joining_date,
        };
        let is_active = self.active == field;

        let placeholder = match field {
            FormField::Department => "<←/→ to choose>",
            FormField::JoiningDate => "<YYYY-MM-DD>",
            _ => "<required>",
        };

        let display = if value.is_empty() {
            placeholder.to_string()
        } else {
            value.clone()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }
}
