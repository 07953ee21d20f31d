//! Integration tests for the payroll roster.
//!
//! This test suite covers:
//! - Adding salaried and hourly employees through the form
//! - Removing the selected employee
//! - Rejected actions leaving the roster untouched
//! - The terminal front end end to end
//! - Roster properties under random add/remove sequences

use proptest::prelude::*;

use payroll_roster::config::{ConfigLoader, DisplayFormat};
use payroll_roster::error::{FormField, PayrollError, SelectionTarget};
use payroll_roster::models::{EmployeeKind, EmployeeRecord, make_hourly, make_salaried};
use payroll_roster::roster::Roster;
use payroll_roster::session::Session;
use payroll_roster::terminal;

// =============================================================================
// Test Helpers
// =============================================================================

fn fill(session: &mut Session, kind: Option<EmployeeKind>, fields: &[(FormField, &str)]) {
    session.select_type(kind);
    for (field, value) in fields {
        session.set_field(*field, *value).unwrap();
    }
}

fn add_alice(session: &mut Session) {
    fill(
        session,
        Some(EmployeeKind::Salaried),
        &[
            (FormField::Name, "Alice"),
            (FormField::Id, "1"),
            (FormField::SalaryOrRate, "5000.0"),
        ],
    );
    session.add().unwrap();
}

fn add_bob(session: &mut Session) {
    fill(
        session,
        Some(EmployeeKind::Hourly),
        &[
            (FormField::Name, "Bob"),
            (FormField::Id, "2"),
            (FormField::SalaryOrRate, "20.0"),
            (FormField::Hours, "10"),
        ],
    );
    session.add().unwrap();
}

fn records(session: &Session) -> Vec<EmployeeRecord> {
    session.roster().records().cloned().collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_add_salaried_alice() {
    let mut session = Session::default();
    add_alice(&mut session);

    assert_eq!(records(&session), vec![make_salaried("Alice", 1, 5000.0)]);
    assert_eq!(session.rows()[0].pay, 5000.0);
}

#[test]
fn test_add_hourly_bob() {
    let mut session = Session::default();
    add_alice(&mut session);
    add_bob(&mut session);

    let rows = session.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].name, "Bob");
    assert_eq!(rows[1].pay, 200.0);
}

#[test]
fn test_select_alice_and_remove() {
    let mut session = Session::default();
    add_alice(&mut session);
    add_bob(&mut session);

    session.select_row(1).unwrap();
    session.remove().unwrap();

    assert_eq!(records(&session), vec![make_hourly("Bob", 2, 10, 20.0)]);
}

#[test]
fn test_duplicate_ids_are_accepted() {
    let mut session = Session::default();
    add_alice(&mut session);
    add_alice(&mut session);

    assert_eq!(session.roster().len(), 2);
    session.select_row(2).unwrap();
    session.remove().unwrap();
    assert_eq!(records(&session), vec![make_salaried("Alice", 1, 5000.0)]);
}

// =============================================================================
// Rejected actions
// =============================================================================

#[test]
fn test_add_without_type_never_changes_roster() {
    let mut session = Session::default();
    add_alice(&mut session);
    fill(
        &mut session,
        None,
        &[
            (FormField::Name, "Carol"),
            (FormField::Id, "x"),
            (FormField::SalaryOrRate, "1"),
        ],
    );

    let result = session.add();
    assert!(matches!(
        result,
        Err(PayrollError::NoSelection {
            target: SelectionTarget::EmployeeType
        })
    ));
    assert_eq!(records(&session), vec![make_salaried("Alice", 1, 5000.0)]);
}

#[test]
fn test_non_numeric_fields_never_change_roster() {
    let cases: [(EmployeeKind, &str, &str, &str, FormField); 4] = [
        (EmployeeKind::Salaried, "abc", "100", "", FormField::Id),
        (EmployeeKind::Salaried, "3", "lots", "", FormField::SalaryOrRate),
        (EmployeeKind::Hourly, "3", "15.0", "many", FormField::Hours),
        (EmployeeKind::Hourly, "", "15.0", "8", FormField::Id),
    ];

    for (kind, id, amount, hours, bad_field) in cases {
        let mut session = Session::default();
        let mut fields = vec![
            (FormField::Name, "Carol"),
            (FormField::Id, id),
            (FormField::SalaryOrRate, amount),
        ];
        if kind == EmployeeKind::Hourly {
            fields.push((FormField::Hours, hours));
        }
        fill(&mut session, Some(kind), &fields);

        match session.add() {
            Err(PayrollError::InvalidInput { field, .. }) => assert_eq!(field, bad_field),
            other => panic!("expected InvalidInput for {:?}, got {:?}", bad_field, other),
        }
        assert!(session.roster().is_empty());
    }
}

#[test]
fn test_remove_with_nothing_selected() {
    let mut session = Session::default();
    add_alice(&mut session);

    assert!(matches!(
        session.remove(),
        Err(PayrollError::NoSelection {
            target: SelectionTarget::Row
        })
    ));
    assert_eq!(session.roster().len(), 1);
}

#[test]
fn test_form_reset_after_successful_add() {
    let mut session = Session::default();
    add_bob(&mut session);

    assert!(!session.form().hours_enabled());
    assert!(session.form().fields().name.is_empty());
    assert!(matches!(
        session.add(),
        Err(PayrollError::NoSelection { .. })
    ));
}

// =============================================================================
// Terminal front end
// =============================================================================

fn run_terminal(session: &mut Session, script: &str) -> String {
    let mut output = Vec::new();
    terminal::run(session, script.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_terminal_full_scenario() {
    let script = "\
type salaried
name Alice
id 1
rate 5000.0
add
type hourly
name Bob
id 2
rate 20.0
hours 10
add
select 1
remove
";
    let mut session = Session::default();
    let output = run_terminal(&mut session, script);

    assert_eq!(records(&session), vec![make_hourly("Bob", 2, 10, 20.0)]);
    assert!(output.contains("> 1 | Alice |  1 | 5000.00"));
    assert!(output.trim_end().ends_with(">"));
}

#[test]
fn test_terminal_hours_rejected_for_salaried() {
    let mut session = Session::default();
    let output = run_terminal(&mut session, "type salaried\nhours 10\n");

    assert!(output.contains("WARNING: Hours worked can only be entered for hourly employees."));
    assert_eq!(session.form().fields().hours, "");
}

#[test]
fn test_terminal_json_output() {
    let config = ConfigLoader::from_yaml_str("display:\n  format: json\n", "inline")
        .unwrap()
        .into_config();
    assert_eq!(config.display.format, DisplayFormat::Json);

    let mut session = Session::from_config(&config.display);
    let output = run_terminal(
        &mut session,
        "type hourly\nname Bob\nid 2\nrate 20.0\nhours 10\nadd\nquit\n",
    );

    assert!(output.contains("\"name\": \"Bob\""));
    assert!(output.contains("\"pay\": 200.0"));
}

// =============================================================================
// Roster properties
// =============================================================================

#[derive(Debug, Clone)]
enum Op {
    Add(i32, f64),
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<i32>(), -1.0e6f64..1.0e6f64).prop_map(|(id, pay)| Op::Add(id, pay)),
        (0usize..8).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_roster_matches_vec_model(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut roster = Roster::new();
        let mut model: Vec<EmployeeRecord> = Vec::new();

        for op in ops {
            match op {
                Op::Add(id, salary) => {
                    let record = make_salaried("emp", id, salary);
                    roster.add(record.clone());
                    model.push(record);
                    prop_assert_eq!(roster.list().last().map(|e| &e.record), model.last());
                }
                Op::Remove(index) => match roster.handle_at(index) {
                    Some(handle) => {
                        let removed = roster.remove(handle).unwrap();
                        prop_assert_eq!(removed, model.remove(index));
                    }
                    None => prop_assert!(index >= model.len()),
                },
            }
        }

        let actual: Vec<EmployeeRecord> = roster.records().cloned().collect();
        prop_assert_eq!(actual, model);
    }
}
