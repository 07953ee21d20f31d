//! The session roster.
//!
//! This module provides [`Roster`], the insertion-ordered collection of
//! employee records. Entries are identified by a [`RecordHandle`] rather
//! than by their fields, so two identical records are still two entries.

use std::fmt;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult, SelectionTarget};
use crate::models::EmployeeRecord;

/// Identity of one roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordHandle(Uuid);

impl RecordHandle {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RecordHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A record together with its handle.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    /// The entry's identity.
    pub handle: RecordHandle,
    /// The employee record.
    pub record: EmployeeRecord,
}

/// An ordered, append/remove-only collection of employee records.
///
/// # Example
///
/// ```
/// use payroll_roster::models::make_salaried;
/// use payroll_roster::roster::Roster;
///
/// let mut roster = Roster::new();
/// let handle = roster.add(make_salaried("Alice", 1, 5000.0));
/// assert_eq!(roster.len(), 1);
///
/// roster.remove(handle).unwrap();
/// assert!(roster.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the end of the roster and returns its handle.
    ///
    /// Always succeeds; IDs are not checked for uniqueness.
    pub fn add(&mut self, record: EmployeeRecord) -> RecordHandle {
        let handle = RecordHandle::new();
        info!(
            handle = %handle,
            employee_id = record.id(),
            kind = ?record.kind(),
            pay = record.pay(),
            "Employee added to roster"
        );
        self.entries.push(RosterEntry { handle, record });
        handle
    }

    /// Removes the entry with the given handle and returns its record.
    ///
    /// # Errors
    ///
    /// Returns `NoSelection` if no entry has that handle. The roster is
    /// left unchanged in that case.
    pub fn remove(&mut self, handle: RecordHandle) -> PayrollResult<EmployeeRecord> {
        let Some(position) = self.entries.iter().position(|e| e.handle == handle) else {
            warn!(handle = %handle, "Remove requested for an entry not in the roster");
            return Err(PayrollError::no_selection(SelectionTarget::Row));
        };

        let entry = self.entries.remove(position);
        info!(
            handle = %handle,
            employee_id = entry.record.id(),
            position,
            "Employee removed from roster"
        );
        Ok(entry.record)
    }

    /// The current entries, in insertion order.
    pub fn list(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Iterates the records, in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &EmployeeRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    /// Looks up a record by handle.
    pub fn get(&self, handle: RecordHandle) -> Option<&EmployeeRecord> {
        self.entries
            .iter()
            .find(|e| e.handle == handle)
            .map(|e| &e.record)
    }

    /// The handle of the entry at a zero-based position.
    pub fn handle_at(&self, index: usize) -> Option<RecordHandle> {
        let handle = self.entries.get(index).map(|e| e.handle);
        debug!(index, found = handle.is_some(), "Roster position lookup");
        handle
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the roster has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{make_hourly, make_salaried};

    #[test]
    fn test_add_appends_at_end() {
        let mut roster = Roster::new();
        roster.add(make_salaried("Alice", 1, 5000.0));
        roster.add(make_hourly("Bob", 2, 10, 20.0));

        let names: Vec<&str> = roster.records().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_add_does_not_deduplicate() {
        let mut roster = Roster::new();
        let first = roster.add(make_salaried("Alice", 1, 5000.0));
        let second = roster.add(make_salaried("Alice", 1, 5000.0));

        assert_ne!(first, second);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_remove_takes_exactly_the_referenced_entry() {
        let mut roster = Roster::new();
        let first = roster.add(make_salaried("Alice", 1, 5000.0));
        let second = roster.add(make_salaried("Alice", 1, 5000.0));

        let removed = roster.remove(second).unwrap();
        assert_eq!(removed, make_salaried("Alice", 1, 5000.0));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.list()[0].handle, first);
    }

    #[test]
    fn test_remove_absent_handle_is_no_selection() {
        let mut roster = Roster::new();
        let handle = roster.add(make_hourly("Bob", 2, 10, 20.0));
        roster.remove(handle).unwrap();

        let result = roster.remove(handle);
        assert!(matches!(
            result,
            Err(PayrollError::NoSelection {
                target: SelectionTarget::Row
            })
        ));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_get_and_handle_at() {
        let mut roster = Roster::new();
        let handle = roster.add(make_hourly("Bob", 2, 10, 20.0));

        assert_eq!(roster.handle_at(0), Some(handle));
        assert_eq!(roster.handle_at(1), None);
        assert_eq!(roster.get(handle).map(|r| r.name()), Some("Bob"));
    }
}
