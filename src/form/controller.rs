//! The employee input form.
//!
//! The form has two states: no type selected, or a type selected. Only the
//! hours field depends on the state; it is enabled for hourly employees and
//! disabled (and cleared) otherwise.

use tracing::{debug, warn};

use crate::error::{FormField, PayrollError, PayrollResult, SelectionTarget};
use crate::models::{EmployeeKind, EmployeeRecord, make_hourly, make_salaried};

use super::fields::FormFields;

/// The type-selector state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    /// No employee type chosen.
    #[default]
    Unselected,
    /// An employee type has been chosen.
    TypeSelected(EmployeeKind),
}

/// Holds the form's fields and type selection, and builds records from them.
///
/// # Example
///
/// ```
/// use payroll_roster::error::FormField;
/// use payroll_roster::form::FormController;
/// use payroll_roster::models::{EmployeeKind, make_hourly};
///
/// let mut form = FormController::new();
/// form.select_type(Some(EmployeeKind::Hourly));
/// form.set_field(FormField::Name, "Bob").unwrap();
/// form.set_field(FormField::Id, "2").unwrap();
/// form.set_field(FormField::SalaryOrRate, "20.0").unwrap();
/// form.set_field(FormField::Hours, "10").unwrap();
///
/// let record = form.submit().unwrap();
/// assert_eq!(record, make_hourly("Bob", 2, 10, 20.0));
/// assert!(form.fields().name.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormController {
    state: FormState,
    fields: FormFields,
}

impl FormController {
    /// Creates an empty form with no type selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current type-selector state.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// The current field text.
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Returns true if the hours field accepts input.
    pub fn hours_enabled(&self) -> bool {
        self.state == FormState::TypeSelected(EmployeeKind::Hourly)
    }

    /// Chooses the employee type, or clears it with `None`.
    ///
    /// Anything other than hourly disables and clears the hours field.
    pub fn select_type(&mut self, kind: Option<EmployeeKind>) {
        self.state = match kind {
            Some(kind) => FormState::TypeSelected(kind),
            None => FormState::Unselected,
        };
        if !self.hours_enabled() {
            self.fields.hours.clear();
        }
        debug!(state = ?self.state, "Employee type selected");
    }

    /// Replaces the text of a field.
    ///
    /// # Errors
    ///
    /// Returns `FieldDisabled` when setting hours while the type is not hourly.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> PayrollResult<()> {
        if field == FormField::Hours && !self.hours_enabled() {
            warn!(state = ?self.state, "Hours entered while the field is disabled");
            return Err(PayrollError::FieldDisabled { field });
        }
        self.fields.set(field, value.into());
        Ok(())
    }

    /// Builds a record from the current input and resets the form.
    ///
    /// On any error the fields and type selection are left as they were.
    ///
    /// # Errors
    ///
    /// - `NoSelection` if no employee type is selected
    /// - `InvalidInput` if the ID, salary/rate or (hourly) hours field does
    ///   not parse
    pub fn submit(&mut self) -> PayrollResult<EmployeeRecord> {
        let FormState::TypeSelected(kind) = self.state else {
            warn!("Add attempted without an employee type");
            return Err(PayrollError::no_selection(SelectionTarget::EmployeeType));
        };

        let record = self.build(kind).inspect_err(|err| {
            warn!(error = %err, kind = ?kind, "Add rejected");
        })?;
        self.reset();
        Ok(record)
    }

    fn build(&self, kind: EmployeeKind) -> PayrollResult<EmployeeRecord> {
        let name = self.fields.name.clone();
        let id = self.fields.parse_id()?;
        let amount = self.fields.parse_salary_or_rate()?;

        match kind {
            EmployeeKind::Salaried => Ok(make_salaried(name, id, amount)),
            EmployeeKind::Hourly => {
                let hours = self.fields.parse_hours()?;
                Ok(make_hourly(name, id, hours, amount))
            }
        }
    }

    /// Clears every field and the type selection.
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.state = FormState::Unselected;
    }
}
