//! Employee record model.
//!
//! This module defines the two kinds of employee record kept on the roster
//! and the pay calculation for each.

use serde::{Deserialize, Serialize};

/// The kind of employee record, as chosen in the form's type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeKind {
    /// Paid a fixed monthly amount.
    Salaried,
    /// Paid hours worked times an hourly rate.
    Hourly,
}

/// An employee paid a fixed monthly salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalariedEmployee {
    /// The employee's name.
    pub name: String,
    /// Caller-supplied identifier. Not required to be unique.
    pub id: i32,
    /// The monthly salary.
    pub monthly_salary: f64,
}

/// An employee paid by the hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyEmployee {
    /// The employee's name.
    pub name: String,
    /// Caller-supplied identifier. Not required to be unique.
    pub id: i32,
    /// Hours worked in the period.
    pub hours_worked: i32,
    /// The hourly rate.
    pub hourly_rate: f64,
}

/// A record on the roster.
///
/// Records are built once by the form and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmployeeRecord {
    /// A salaried employee.
    Salaried(SalariedEmployee),
    /// An hourly employee.
    Hourly(HourlyEmployee),
}

/// Builds a salaried employee record. No range checks are applied.
///
/// # Examples
///
/// ```
/// use payroll_roster::models::make_salaried;
///
/// let alice = make_salaried("Alice", 1, 5000.0);
/// assert_eq!(alice.pay(), 5000.0);
/// ```
pub fn make_salaried(name: impl Into<String>, id: i32, monthly_salary: f64) -> EmployeeRecord {
    EmployeeRecord::Salaried(SalariedEmployee {
        name: name.into(),
        id,
        monthly_salary,
    })
}

/// Builds an hourly employee record. No range checks are applied.
///
/// # Examples
///
/// ```
/// use payroll_roster::models::make_hourly;
///
/// let bob = make_hourly("Bob", 2, 10, 20.0);
/// assert_eq!(bob.pay(), 200.0);
/// ```
pub fn make_hourly(
    name: impl Into<String>,
    id: i32,
    hours_worked: i32,
    hourly_rate: f64,
) -> EmployeeRecord {
    EmployeeRecord::Hourly(HourlyEmployee {
        name: name.into(),
        id,
        hours_worked,
        hourly_rate,
    })
}

/// Computes the current pay for a record.
pub fn pay(record: &EmployeeRecord) -> f64 {
    match record {
        EmployeeRecord::Salaried(salaried) => salaried.monthly_salary,
        EmployeeRecord::Hourly(hourly) => f64::from(hourly.hours_worked) * hourly.hourly_rate,
    }
}

impl EmployeeRecord {
    /// Computes the current pay. Recomputed on every call.
    pub fn pay(&self) -> f64 {
        pay(self)
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        match self {
            EmployeeRecord::Salaried(salaried) => &salaried.name,
            EmployeeRecord::Hourly(hourly) => &hourly.name,
        }
    }

    /// The employee's caller-supplied ID.
    pub fn id(&self) -> i32 {
        match self {
            EmployeeRecord::Salaried(salaried) => salaried.id,
            EmployeeRecord::Hourly(hourly) => hourly.id,
        }
    }

    /// Which kind of record this is.
    pub fn kind(&self) -> EmployeeKind {
        match self {
            EmployeeRecord::Salaried(_) => EmployeeKind::Salaried,
            EmployeeRecord::Hourly(_) => EmployeeKind::Hourly,
        }
    }
}
