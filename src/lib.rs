//! Payroll roster for salaried and hourly employees.
//!
//! This crate keeps an in-memory roster of employee records, computes each
//! employee's pay, and drives it from a line-based input form that
//! re-renders the roster table after every change.

#![warn(missing_docs)]

pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod models;
pub mod roster;
pub mod session;
pub mod terminal;
