//! Table rows built from the roster.

use serde::Serialize;

use crate::roster::{RecordHandle, Roster};

/// One displayed row: name, ID and current pay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// Employee name.
    pub name: String,
    /// Employee ID.
    pub id: i32,
    /// Pay, computed when the row was built.
    pub pay: f64,
    /// Whether this row is the current selection.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

/// Builds the rows for the current roster, marking the selected entry.
///
/// Pay is read from each record at call time, so the rows always reflect
/// the roster as it is now.
pub fn snapshot(roster: &Roster, selection: Option<RecordHandle>) -> Vec<TableRow> {
    roster
        .list()
        .iter()
        .map(|entry| TableRow {
            name: entry.record.name().to_string(),
            id: entry.record.id(),
            pay: entry.record.pay(),
            selected: selection == Some(entry.handle),
        })
        .collect()
}
