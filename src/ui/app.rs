use std::collections::HashSet;
use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use ratatui::Frame;

use crate::models::Employee;
use crate::store::EmployeeStore;

use super::form::{EmployeeForm, FormField};
use super::helpers::{centered_rect, surface_error};
use super::pager::Pager;

/// Footer space reserved for pagination summary, key hints, and the latest
/// notice.
const FOOTER_HEIGHT: u16 = 5;

/// The two mutually exclusive views. Modeling them as one enum means the
/// component can never show both (or neither) at once, and the form draft
/// only exists while the form view does.
enum View {
    List,
    Form(EmployeeForm),
}

/// Severity levels for user feedback, mirrored in the footer styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Success,
    Error,
    Warning,
}

impl Severity {
    fn style(&self) -> Style {
        match self {
            Severity::Success => Style::default().fg(Color::Green),
            Severity::Error => Style::default().fg(Color::Red),
            Severity::Warning => Style::default().fg(Color::Yellow),
        }
    }
}

/// One entry for the notification sink. The app records every notice and the
/// footer renders the most recent.
pub(crate) struct Notice {
    pub(crate) title: String,
    pub(crate) message: String,
    pub(crate) severity: Severity,
}

/// Central application state shared across the TUI: the cached record set,
/// the pager derived over it, the selection, and whichever view is active.
pub struct App<S: EmployeeStore> {
    store: S,
    employees: Vec<Employee>,
    pager: Pager,
    selected_ids: HashSet<i64>,
    cursor: usize,
    view: View,
    notices: Vec<Notice>,
}

impl<S: EmployeeStore> App<S> {
    /// Build the app around an already-fetched record set so startup failures
    /// surface in `main` instead of inside the draw loop.
    pub fn new(store: S, employees: Vec<Employee>) -> Self {
        Self {
            store,
            employees,
            pager: Pager::new(),
            selected_ids: HashSet::new(),
            cursor: 0,
            view: View::List,
            notices: Vec::new(),
        }
    }

    /// Route one key press to the active view. Returns `true` when the user
    /// asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let view = mem::replace(&mut self.view, View::List);

        self.view = match view {
            View::List => self.handle_list_key(code, &mut exit),
            View::Form(form) => self.handle_form_key(code, form),
        };

        Ok(exit)
    }

    fn handle_list_key(&mut self, code: KeyCode, exit: &mut bool) -> View {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::Left => {
                if self.pager.prev_page() {
                    self.cursor = 0;
                }
            }
            KeyCode::Right => {
                if self.pager.next_page(self.employees.len()) {
                    self.cursor = 0;
                }
            }
            KeyCode::Char('z') => {
                self.pager.cycle_page_size();
                self.cursor = 0;
            }
            KeyCode::Char(' ') => self.toggle_current_selection(),
            KeyCode::Char('a') => self.select_visible_page(),
            KeyCode::Char('c') => self.select_rows([]),
            KeyCode::Char('+') => return View::Form(EmployeeForm::new()),
            KeyCode::Char('e') | KeyCode::Char('E') => {
                if let Some(employee) = self.current_row().cloned() {
                    match employee.id {
                        Some(id) => return View::Form(EmployeeForm::from_employee(&employee, id)),
                        None => self.notify(
                            "Error",
                            "This record has not been saved yet.",
                            Severity::Error,
                        ),
                    }
                } else {
                    self.notify("Error", "No employee selected to edit.", Severity::Error);
                }
            }
            KeyCode::Char('-') | KeyCode::Delete => {
                if let Some(id) = self.current_row().and_then(|employee| employee.id) {
                    self.delete_one(id);
                } else {
                    self.notify("Error", "No employee selected to delete.", Severity::Error);
                }
            }
            KeyCode::Char('x') | KeyCode::Char('X') => self.delete_selected(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.refresh(),
            _ => {}
        }
        View::List
    }

    fn handle_form_key(&mut self, code: KeyCode, mut form: EmployeeForm) -> View {
        match code {
            // Cancel discards the draft without touching the store.
            KeyCode::Esc => return View::List,
            KeyCode::Tab => form.toggle_field(),
            KeyCode::BackTab => form.toggle_field_back(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Left if form.active == FormField::Department => form.cycle_department(-1),
            KeyCode::Right if form.active == FormField::Department => form.cycle_department(1),
            KeyCode::Enter => {
                if self.submit_form(&form) {
                    return View::List;
                }
            }
            KeyCode::Char(ch) => {
                form.push_char(ch);
            }
            _ => {}
        }
        View::Form(form)
    }

    /// Validate the draft and push it to the store. Returns `true` when the
    /// form should close. Validation failures warn and keep everything as it
    /// was; store failures leave the draft open for retry.
    fn submit_form(&mut self, form: &EmployeeForm) -> bool {
        let employee = match form.parse_inputs() {
            Ok(employee) => employee,
            Err(err) => {
                self.notify("Warning", surface_error(&err), Severity::Warning);
                return false;
            }
        };

        let updating = employee.id.is_some();
        match self.store.save(&employee) {
            Ok(()) => {
                let message = if updating {
                    "Employee updated"
                } else {
                    "Employee added"
                };
                self.notify("Success", message, Severity::Success);
                self.refresh();
                true
            }
            Err(err) => {
                self.notify(
                    "Error",
                    format!("Error saving employee: {err}"),
                    Severity::Error,
                );
                false
            }
        }
    }

    /// Delete a single record by id, then reconcile with the store. On
    /// failure the record set and pagination stay untouched.
    fn delete_one(&mut self, id: i64) {
        match self.store.delete(id) {
            Ok(()) => {
                self.selected_ids.remove(&id);
                self.notify("Success", "Employee deleted successfully", Severity::Success);
                self.refresh();
            }
            Err(_) => {
                self.notify("Error", "Error deleting employee", Severity::Error);
            }
        }
    }

    /// Bulk-delete everything in the selection with one store call. An empty
    /// selection is a warning, not an error, and never reaches the store.
    fn delete_selected(&mut self) {
        if self.selected_ids.is_empty() {
            self.notify("Warning", "No employees selected", Severity::Warning);
            return;
        }

        let ids: Vec<i64> = self.selected_ids.iter().copied().collect();
        match self.store.delete_many(&ids) {
            Ok(()) => {
                self.notify(
                    "Success",
                    "Selected employees deleted successfully",
                    Severity::Success,
                );
                self.selected_ids.clear();
                self.refresh();
            }
            Err(err) => {
                // Surface the store's own message so constraint details reach
                // the user unchanged.
                self.notify("Error", err.to_string(), Severity::Error);
            }
        }
    }

    /// Replace the selection wholesale. An empty set means "deselect all".
    fn select_rows<I: IntoIterator<Item = i64>>(&mut self, ids: I) {
        self.selected_ids = ids.into_iter().collect();
    }

    /// Toggle the row under the cursor in or out of the selection.
    fn toggle_current_selection(&mut self) {
        let Some(id) = self.current_row().and_then(|employee| employee.id) else {
            return;
        };
        let mut ids = self.selected_ids.clone();
        if !ids.insert(id) {
            ids.remove(&id);
        }
        self.select_rows(ids);
    }

    /// Add every row on the visible page to the selection.
    fn select_visible_page(&mut self) {
        let mut ids = self.selected_ids.clone();
        ids.extend(
            self.pager
                .slice(&self.employees)
                .iter()
                .filter_map(|(_, employee)| employee.id),
        );
        self.select_rows(ids);
    }

    /// Re-fetch the record set and replace it wholesale. This is the single
    /// reconciliation point after every mutation; the cached copy is never
    /// patched locally, so store-assigned ids always come back authoritative.
    /// A failed fetch keeps the previous records on screen.
    fn refresh(&mut self) {
        match self.store.list() {
            Ok(employees) => {
                self.employees = employees;
                self.pager.clamp(self.employees.len());
                self.clamp_cursor();
            }
            Err(err) => {
                self.notify(
                    "Error",
                    format!("Error loading employees: {err}"),
                    Severity::Error,
                );
            }
        }
    }

    fn notify<T, M>(&mut self, title: T, message: M, severity: Severity)
    where
        T: Into<String>,
        M: Into<String>,
    {
        self.notices.push(Notice {
            title: title.into(),
            message: message.into(),
            severity,
        });
    }

    /// Record under the cursor on the current page, if any.
    fn current_row(&self) -> Option<&Employee> {
        self.pager
            .slice(&self.employees)
            .get(self.cursor)
            .map(|&(_, employee)| employee)
    }

    fn move_cursor(&mut self, offset: isize) {
        let len = self.pager.slice(&self.employees).len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = (self.cursor as isize + offset).clamp(0, len as isize - 1);
        self.cursor = target as usize;
    }

    fn clamp_cursor(&mut self) {
        let len = self.pager.slice(&self.employees).len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.view {
            View::List => self.draw_table(frame, content_area),
            View::Form(form) => self.draw_form(frame, content_area, form),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        if self.employees.is_empty() {
            let message = Paragraph::new("No employees yet. Press '+' to add one.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Employees"));
            frame.render_widget(message, area);
            return;
        }

        let header = Row::new(vec![
            "", "#", "ID", "Name", "Department", "Designation", "Joined",
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .pager
            .slice(&self.employees)
            .into_iter()
            .enumerate()
            .map(|(page_index, (number, employee))| {
                let marker = match employee.id {
                    Some(id) if self.selected_ids.contains(&id) => "[x]",
                    _ => "[ ]",
                };
                let row = Row::new(vec![
                    Cell::from(marker),
                    Cell::from(number.to_string()),
                    Cell::from(employee.id_text()),
                    Cell::from(employee.name.clone()),
                    Cell::from(employee.department.clone()),
                    Cell::from(employee.designation.clone()),
                    Cell::from(employee.joining_date.format("%Y-%m-%d").to_string()),
                ]);
                if page_index == self.cursor {
                    row.style(Style::default().fg(Color::Yellow))
                } else {
                    row
                }
            })
            .collect();

        let widths = [
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Min(16),
            Constraint::Length(12),
            Constraint::Min(14),
            Constraint::Length(12),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .block(Block::default().borders(Borders::ALL).title("Employees"));
        frame.render_widget(table, area);
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect, form: &EmployeeForm) {
        let popup = centered_rect(60, 60, area);

        let lines = vec![
            form.build_line("Name", FormField::Name),
            form.build_line("Department", FormField::Department),
            form.build_line("Designation", FormField::Designation),
            form.build_line("Joining date", FormField::JoiningDate),
            Line::from(""),
            Line::from(Span::styled(
                "Tab next field · Enter save · Esc cancel",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        frame.render_widget(Clear, popup);
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(form.title()));
        frame.render_widget(paragraph, popup);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let len = self.employees.len();
        let summary = format!(
            "Page {}/{} · {} employees · page size {} · {} selected",
            self.pager.page(),
            self.pager.page_count(len).max(1),
            len,
            self.pager.page_size(),
            self.selected_ids.len(),
        );

        let hints = match self.view {
            View::List => {
                "↑/↓ row · ←/→ page · z size · space select · a page · c clear · \
                 + add · e edit · - delete · x bulk delete · r refresh · q quit"
            }
            View::Form(_) => "Fill the fields, then Enter to save or Esc to go back.",
        };

        let status = match self.notices.last() {
            Some(notice) => Line::from(Span::styled(
                format!("{}: {}", notice.title, notice.message),
                notice.severity.style(),
            )),
            None => Line::from(""),
        };

        let footer = Paragraph::new(vec![
            Line::from(summary),
            Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
            status,
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::NaiveDate;

    use crate::store::StoreError;

    use super::super::form::FormMode;
    use super::*;

    /// In-memory store fake that counts every call, so tests can assert which
    /// flows reach the backend and which stay local.
    struct MemoryStore {
        rows: Vec<Employee>,
        next_id: i64,
        list_calls: Cell<usize>,
        save_calls: usize,
        delete_calls: usize,
        bulk_calls: usize,
        fail_mutations: bool,
        fail_list: bool,
    }

    impl MemoryStore {
        fn with_rows(rows: Vec<Employee>) -> Self {
            let next_id = rows
                .iter()
                .filter_map(|employee| employee.id)
                .max()
                .unwrap_or(0)
                + 1;
            Self {
                rows,
                next_id,
                list_calls: Cell::new(0),
                save_calls: 0,
                delete_calls: 0,
                bulk_calls: 0,
                fail_mutations: false,
                fail_list: false,
            }
        }
    }

    impl EmployeeStore for MemoryStore {
        fn list(&self) -> Result<Vec<Employee>, StoreError> {
            self.list_calls.set(self.list_calls.get() + 1);
            if self.fail_list {
                return Err(StoreError::NotFound);
            }
            Ok(self.rows.clone())
        }

        fn save(&mut self, employee: &Employee) -> Result<(), StoreError> {
            self.save_calls += 1;
            if self.fail_mutations {
                return Err(StoreError::NotFound);
            }
            match employee.id {
                Some(id) => {
                    let slot = self
                        .rows
                        .iter_mut()
                        .find(|row| row.id == Some(id))
                        .ok_or(StoreError::NotFound)?;
                    *slot = employee.clone();
                }
                None => {
                    let mut stored = employee.clone();
                    stored.id = Some(self.next_id);
                    self.next_id += 1;
                    self.rows.push(stored);
                }
            }
            Ok(())
        }

        fn delete(&mut self, id: i64) -> Result<(), StoreError> {
            self.delete_calls += 1;
            if self.fail_mutations {
                return Err(StoreError::NotFound);
            }
            let before = self.rows.len();
            self.rows.retain(|row| row.id != Some(id));
            if self.rows.len() == before {
                return Err(StoreError::NotFound);
            }
            Ok(())
        }

        fn delete_many(&mut self, ids: &[i64]) -> Result<(), StoreError> {
            self.bulk_calls += 1;
            if self.fail_mutations {
                return Err(StoreError::NotFound);
            }
            if !ids
                .iter()
                .all(|id| self.rows.iter().any(|row| row.id == Some(*id)))
            {
                return Err(StoreError::NotFound);
            }
            self.rows.retain(|row| match row.id {
                Some(id) => !ids.contains(&id),
                None => true,
            });
            Ok(())
        }
    }

    fn employee(id: i64) -> Employee {
        Employee {
            id: Some(id),
            name: format!("Employee {id}"),
            department: "IT".to_string(),
            designation: "Developer".to_string(),
            joining_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn seeded_app(count: i64) -> App<MemoryStore> {
        let rows: Vec<Employee> = (1..=count).map(employee).collect();
        let store = MemoryStore::with_rows(rows.clone());
        App::new(store, rows)
    }

    fn filled_form() -> EmployeeForm {
        let mut form = EmployeeForm::new();
        form.name = "Ann".to_string();
        form.department = "IT".to_string();
        form.designation = "Dev".to_string();
        form.joining_date = "2024-01-01".to_string();
        form
    }

    fn count_severity<S: EmployeeStore>(app: &App<S>, severity: Severity) -> usize {
        app.notices
            .iter()
            .filter(|notice| notice.severity == severity)
            .count()
    }

    #[test]
    fn save_with_missing_field_warns_and_never_calls_the_store() {
        let mut app = seeded_app(0);
        let mut form = filled_form();
        form.department.clear();
        app.view = View::Form(form);

        app.handle_key(KeyCode::Enter).unwrap();

        assert_eq!(app.store.save_calls, 0);
        assert_eq!(count_severity(&app, Severity::Warning), 1);
        assert_eq!(
            app.notices.last().unwrap().message,
            "Department is required."
        );
        assert!(matches!(app.view, View::Form(_)));
    }

    #[test]
    fn successful_save_closes_the_form_and_refreshes() {
        let mut app = seeded_app(0);
        app.view = View::Form(filled_form());

        app.handle_key(KeyCode::Enter).unwrap();

        assert!(matches!(app.view, View::List));
        assert_eq!(app.store.save_calls, 1);
        assert_eq!(app.store.list_calls.get(), 1);
        assert_eq!(app.employees.len(), 1);
        // The id comes back from the store, not from local patching.
        assert_eq!(app.employees[0].id, Some(1));
        assert_eq!(app.notices.last().unwrap().message, "Employee added");
    }

    #[test]
    fn saving_an_edit_reports_an_update() {
        let mut app = seeded_app(1);
        let mut form = filled_form();
        form.mode = FormMode::Edit(1);
        form.name = "Renamed".to_string();
        app.view = View::Form(form);

        app.handle_key(KeyCode::Enter).unwrap();

        assert_eq!(app.notices.last().unwrap().message, "Employee updated");
        assert_eq!(app.employees[0].name, "Renamed");
    }

    #[test]
    fn failed_save_keeps_the_draft_for_retry() {
        let mut app = seeded_app(0);
        app.store.fail_mutations = true;
        app.view = View::Form(filled_form());

        app.handle_key(KeyCode::Enter).unwrap();

        assert!(matches!(app.view, View::Form(_)));
        assert_eq!(count_severity(&app, Severity::Error), 1);
        assert!(app.employees.is_empty());
    }

    #[test]
    fn edit_then_cancel_discards_the_draft_without_store_calls() {
        let mut app = seeded_app(3);

        app.handle_key(KeyCode::Char('e')).unwrap();
        match &app.view {
            View::Form(form) => {
                assert_eq!(form.mode, FormMode::Edit(1));
                assert_eq!(form.name, "Employee 1");
            }
            View::List => panic!("edit should open the form"),
        }

        app.handle_key(KeyCode::Esc).unwrap();

        assert!(matches!(app.view, View::List));
        assert_eq!(app.store.save_calls, 0);
        assert_eq!(app.store.list_calls.get(), 0);
    }

    #[test]
    fn bulk_delete_with_empty_selection_warns_once_and_skips_the_store() {
        let mut app = seeded_app(3);

        app.handle_key(KeyCode::Char('x')).unwrap();

        assert_eq!(app.store.bulk_calls, 0);
        assert_eq!(count_severity(&app, Severity::Warning), 1);
        assert_eq!(app.notices.last().unwrap().message, "No employees selected");
    }

    #[test]
    fn successful_bulk_delete_clears_selection_and_refreshes() {
        let mut app = seeded_app(3);
        app.select_rows([1, 2]);

        app.handle_key(KeyCode::Char('x')).unwrap();

        assert_eq!(app.store.bulk_calls, 1);
        assert!(app.selected_ids.is_empty());
        assert_eq!(app.store.list_calls.get(), 1);
        assert_eq!(app.employees.len(), 1);
        assert_eq!(count_severity(&app, Severity::Success), 1);
    }

    #[test]
    fn failed_bulk_delete_leaves_selection_and_records_alone() {
        let mut app = seeded_app(3);
        app.select_rows([1, 2]);
        app.store.fail_mutations = true;

        app.handle_key(KeyCode::Char('x')).unwrap();

        assert_eq!(app.selected_ids.len(), 2);
        assert_eq!(app.employees.len(), 3);
        assert_eq!(count_severity(&app, Severity::Error), 1);
    }

    #[test]
    fn deleting_the_only_record_on_the_last_page_clamps_back() {
        let mut app = seeded_app(6);
        app.handle_key(KeyCode::Right).unwrap();
        assert_eq!(app.pager.page(), 2);

        // Cursor sits on record 6, the only row of page 2.
        app.handle_key(KeyCode::Char('-')).unwrap();

        assert_eq!(app.employees.len(), 5);
        assert_eq!(app.pager.page(), 1);
        assert_eq!(count_severity(&app, Severity::Success), 1);
    }

    #[test]
    fn failed_single_delete_keeps_the_record_set() {
        let mut app = seeded_app(2);
        app.store.fail_mutations = true;

        app.handle_key(KeyCode::Char('-')).unwrap();

        assert_eq!(app.employees.len(), 2);
        assert_eq!(
            app.notices.last().unwrap().message,
            "Error deleting employee"
        );
    }

    #[test]
    fn failed_refresh_keeps_the_previous_records() {
        let mut app = seeded_app(4);
        app.store.fail_list = true;

        app.handle_key(KeyCode::Char('r')).unwrap();

        assert_eq!(app.employees.len(), 4);
        assert_eq!(count_severity(&app, Severity::Error), 1);
    }

    #[test]
    fn select_rows_replaces_the_selection_wholesale() {
        let mut app = seeded_app(4);
        app.select_rows([1, 2, 3]);
        assert_eq!(app.selected_ids.len(), 3);

        app.select_rows([4]);
        assert_eq!(app.selected_ids, HashSet::from([4]));

        app.select_rows([]);
        assert!(app.selected_ids.is_empty());
    }

    #[test]
    fn space_toggles_the_row_under_the_cursor() {
        let mut app = seeded_app(2);

        app.handle_key(KeyCode::Char(' ')).unwrap();
        assert!(app.selected_ids.contains(&1));

        app.handle_key(KeyCode::Char(' ')).unwrap();
        assert!(app.selected_ids.is_empty());
    }

    #[test]
    fn selection_survives_page_navigation() {
        // Deliberate policy: moving between pages keeps the selection; only a
        // successful bulk delete (or 'c') clears it.
        let mut app = seeded_app(8);
        app.handle_key(KeyCode::Char(' ')).unwrap();

        app.handle_key(KeyCode::Right).unwrap();
        assert!(app.selected_ids.contains(&1));

        app.handle_key(KeyCode::Left).unwrap();
        assert!(app.selected_ids.contains(&1));
    }

    #[test]
    fn select_all_on_page_and_clear() {
        let mut app = seeded_app(7);

        app.handle_key(KeyCode::Char('a')).unwrap();
        assert_eq!(app.selected_ids, HashSet::from([1, 2, 3, 4, 5]));

        app.handle_key(KeyCode::Right).unwrap();
        app.handle_key(KeyCode::Char('a')).unwrap();
        assert_eq!(app.selected_ids.len(), 7);

        app.handle_key(KeyCode::Char('c')).unwrap();
        assert!(app.selected_ids.is_empty());
    }

    #[test]
    fn cursor_stays_inside_the_page_slice() {
        let mut app = seeded_app(3);
        app.handle_key(KeyCode::Down).unwrap();
        app.handle_key(KeyCode::Down).unwrap();
        app.handle_key(KeyCode::Down).unwrap();
        assert_eq!(app.cursor, 2);

        app.handle_key(KeyCode::Up).unwrap();
        assert_eq!(app.cursor, 1);
    }
}
