//! The application session.
//!
//! A [`Session`] owns everything that lives for the duration of one run:
//! the roster, the input form, the current row selection and the display
//! surface that renders the roster. It is passed explicitly to the front
//! end; there is no global state.

use tracing::{info, warn};

use crate::config::DisplayConfig;
use crate::display::{DisplaySurface, TableRow, TextTable, snapshot, surface_for};
use crate::error::{FormField, PayrollError, PayrollResult, SelectionTarget};
use crate::form::FormController;
use crate::models::{EmployeeKind, EmployeeRecord};
use crate::roster::{RecordHandle, Roster};

/// One interactive payroll session.
///
/// # Example
///
/// ```
/// use payroll_roster::error::FormField;
/// use payroll_roster::models::EmployeeKind;
/// use payroll_roster::session::Session;
///
/// let mut session = Session::default();
/// session.select_type(Some(EmployeeKind::Salaried));
/// session.set_field(FormField::Name, "Alice")?;
/// session.set_field(FormField::Id, "1")?;
/// session.set_field(FormField::SalaryOrRate, "5000")?;
/// session.add()?;
///
/// assert_eq!(session.roster().len(), 1);
/// assert_eq!(session.rows()[0].pay, 5000.0);
/// # Ok::<(), payroll_roster::error::PayrollError>(())
/// ```
pub struct Session {
    roster: Roster,
    form: FormController,
    selection: Option<RecordHandle>,
    surface: Box<dyn DisplaySurface>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Box::new(TextTable::default()))
    }
}

impl Session {
    /// Creates an empty session rendering through the given surface.
    pub fn new(surface: Box<dyn DisplaySurface>) -> Self {
        Self {
            roster: Roster::new(),
            form: FormController::new(),
            selection: None,
            surface,
        }
    }

    /// Creates an empty session with the surface the configuration asks for.
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(surface_for(config))
    }

    /// The roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The input form.
    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// The currently selected entry, if any.
    pub fn selection(&self) -> Option<RecordHandle> {
        self.selection
    }

    /// Chooses the employee type on the form.
    pub fn select_type(&mut self, kind: Option<EmployeeKind>) {
        self.form.select_type(kind);
    }

    /// Sets a form field.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> PayrollResult<()> {
        self.form.set_field(field, value)
    }

    /// Selects the entry shown at a 1-based table row.
    ///
    /// # Errors
    ///
    /// Returns `NoSelection` if the row does not exist. Any previous
    /// selection is kept in that case.
    pub fn select_row(&mut self, row: usize) -> PayrollResult<RecordHandle> {
        let handle = row
            .checked_sub(1)
            .and_then(|index| self.roster.handle_at(index))
            .ok_or_else(|| {
                warn!(row, rows = self.roster.len(), "Selected row does not exist");
                PayrollError::no_selection(SelectionTarget::Row)
            })?;
        self.selection = Some(handle);
        Ok(handle)
    }

    /// Drops the current row selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Builds a record from the form and appends it to the roster.
    ///
    /// # Errors
    ///
    /// Propagates the form's `NoSelection` and `InvalidInput` errors; the
    /// roster is not touched when either occurs.
    pub fn add(&mut self) -> PayrollResult<RecordHandle> {
        let record = self.form.submit()?;
        Ok(self.roster.add(record))
    }

    /// Removes the selected entry from the roster.
    ///
    /// # Errors
    ///
    /// Returns `NoSelection` if nothing is selected or the selected entry is
    /// no longer on the roster.
    pub fn remove(&mut self) -> PayrollResult<EmployeeRecord> {
        let Some(handle) = self.selection.take() else {
            warn!("Remove attempted without a selected row");
            return Err(PayrollError::no_selection(SelectionTarget::Row));
        };

        let record = self.roster.remove(handle)?;
        info!(
            employee_id = record.id(),
            remaining = self.roster.len(),
            "Selected employee removed"
        );
        Ok(record)
    }

    /// The rows for the current roster.
    pub fn rows(&self) -> Vec<TableRow> {
        snapshot(&self.roster, self.selection)
    }

    /// Renders the current roster through the display surface.
    pub fn render(&self) -> String {
        self.surface.render(&self.rows())
    }
}
