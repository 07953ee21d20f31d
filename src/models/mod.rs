//! Core data models for the payroll roster.

mod employee;

pub use employee::{
    EmployeeKind, EmployeeRecord, HourlyEmployee, SalariedEmployee, make_hourly, make_salaried,
    pay,
};
