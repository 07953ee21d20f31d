//! Raw form input and parsing.

use std::str::FromStr;

use crate::error::{FormField, PayrollError, PayrollResult};

/// The text currently typed into each form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    /// Employee name.
    pub name: String,
    /// Employee ID text.
    pub id: String,
    /// Monthly salary or hourly rate text.
    pub salary_or_rate: String,
    /// Hours worked text.
    pub hours: String,
}

impl FormFields {
    /// Returns the text of a field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Id => &self.id,
            FormField::SalaryOrRate => &self.salary_or_rate,
            FormField::Hours => &self.hours,
        }
    }

    pub(super) fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Id => self.id = value,
            FormField::SalaryOrRate => self.salary_or_rate = value,
            FormField::Hours => self.hours = value,
        }
    }

    /// Parses the ID field as an integer.
    pub fn parse_id(&self) -> PayrollResult<i32> {
        parse_field(FormField::Id, &self.id)
    }

    /// Parses the salary/rate field as a float.
    pub fn parse_salary_or_rate(&self) -> PayrollResult<f64> {
        parse_field(FormField::SalaryOrRate, &self.salary_or_rate)
    }

    /// Parses the hours field as an integer.
    pub fn parse_hours(&self) -> PayrollResult<i32> {
        parse_field(FormField::Hours, &self.hours)
    }
}

/// Parses a trimmed numeric field, mapping failures to `InvalidInput`.
fn parse_field<T>(field: FormField, raw: &str) -> PayrollResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PayrollError::invalid_input(field, "value is required"));
    }
    trimmed
        .parse()
        .map_err(|e: T::Err| PayrollError::invalid_input(field, format!("'{}': {}", trimmed, e)))
}
