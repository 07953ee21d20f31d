//! Parsing of terminal input lines into form actions.

use crate::error::{FormField, PayrollError, PayrollResult};
use crate::models::EmployeeKind;

/// One user action entered at the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the text of a form field.
    SetField(FormField, String),
    /// Choose the employee type, or clear it.
    SelectType(Option<EmployeeKind>),
    /// Add the employee described by the form.
    Add,
    /// Select a displayed row (1-based).
    Select(usize),
    /// Clear the row selection.
    Deselect,
    /// Remove the selected employee.
    Remove,
    /// Re-render the table.
    Show,
    /// Show the form's current state.
    Form,
    /// List the available commands.
    Help,
    /// Leave the session.
    Quit,
}

/// Text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  type salaried|hourly|none   choose the employee type
  name <text>                 set the employee name
  id <number>                 set the employee ID
  rate <number>               set the monthly salary or hourly rate (alias: salary)
  hours <number>              set hours worked (hourly employees only)
  add                         add the employee to the roster
  select <row>                select a table row
  deselect                    clear the row selection
  remove                      remove the selected employee
  show                        show the roster table
  form                        show the form
  help                        show this help
  quit                        leave (alias: exit)
";

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCommand` for unrecognised keywords or arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_roster::error::FormField;
    /// use payroll_roster::terminal::Command;
    ///
    /// let command = Command::parse("name Alice Smith").unwrap();
    /// assert_eq!(
    ///     command,
    ///     Some(Command::SetField(FormField::Name, "Alice Smith".to_string()))
    /// );
    /// ```
    pub fn parse(line: &str) -> PayrollResult<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };
        let unknown = || PayrollError::UnknownCommand {
            input: line.to_string(),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "name" => Command::SetField(FormField::Name, rest.to_string()),
            "id" => Command::SetField(FormField::Id, rest.to_string()),
            "rate" | "salary" => Command::SetField(FormField::SalaryOrRate, rest.to_string()),
            "hours" => Command::SetField(FormField::Hours, rest.to_string()),
            "type" => Command::SelectType(parse_kind(rest).ok_or_else(unknown)?),
            "add" if rest.is_empty() => Command::Add,
            "select" => Command::Select(rest.parse().map_err(|_| unknown())?),
            "deselect" if rest.is_empty() => Command::Deselect,
            "remove" if rest.is_empty() => Command::Remove,
            "show" if rest.is_empty() => Command::Show,
            "form" if rest.is_empty() => Command::Form,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(unknown()),
        };
        Ok(Some(command))
    }
}

/// Outer `None` means the argument was not understood; inner `None` clears the type.
fn parse_kind(arg: &str) -> Option<Option<EmployeeKind>> {
    match arg.to_ascii_lowercase().as_str() {
        "salaried" | "full-time" => Some(Some(EmployeeKind::Salaried)),
        "hourly" | "part-time" => Some(Some(EmployeeKind::Hourly)),
        "none" => Some(None),
        _ => None,
    }
}
