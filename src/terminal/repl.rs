//! The interactive read-dispatch-render loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::display::Notice;
use crate::error::{FormField, PayrollResult};
use crate::form::FormState;
use crate::models::EmployeeKind;
use crate::session::Session;

use super::command::{Command, HELP};

/// What to write back after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reply {
    Nothing,
    Table,
    Form,
    Help,
    Quit,
}

/// Runs the terminal front end until `quit` or end of input.
///
/// The table is written after every successful mutation. Rejected actions
/// print a notice and leave the session as it was.
///
/// # Errors
///
/// Only I/O errors on `input` or `output` end the loop early. Lines that
/// are not valid UTF-8 are decoded lossily and handled like any other input.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    info!("Payroll session started");
    output.write_all(session.render().as_bytes())?;
    write!(output, "> ")?;
    output.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let outcome = Command::parse(&line).and_then(|command| match command {
            Some(command) => execute(session, command),
            None => Ok(Reply::Nothing),
        });

        match outcome {
            Ok(Reply::Quit) => break,
            Ok(Reply::Nothing) => {}
            Ok(Reply::Table) => output.write_all(session.render().as_bytes())?,
            Ok(Reply::Form) => write_form(session, &mut output)?,
            Ok(Reply::Help) => output.write_all(HELP.as_bytes())?,
            Err(err) => {
                debug!(error = %err, "Action rejected");
                writeln!(output, "{}", Notice::from(&err))?;
            }
        }
        write!(output, "> ")?;
        output.flush()?;
    }

    writeln!(output)?;
    info!(employees = session.roster().len(), "Payroll session ended");
    Ok(())
}

fn execute(session: &mut Session, command: Command) -> PayrollResult<Reply> {
    let reply = match command {
        Command::SetField(field, value) => {
            session.set_field(field, value)?;
            Reply::Nothing
        }
        Command::SelectType(kind) => {
            session.select_type(kind);
            Reply::Nothing
        }
        Command::Add => {
            session.add()?;
            Reply::Table
        }
        Command::Select(row) => {
            session.select_row(row)?;
            Reply::Table
        }
        Command::Deselect => {
            session.clear_selection();
            Reply::Table
        }
        Command::Remove => {
            session.remove()?;
            Reply::Table
        }
        Command::Show => Reply::Table,
        Command::Form => Reply::Form,
        Command::Help => Reply::Help,
        Command::Quit => Reply::Quit,
    };
    Ok(reply)
}

fn write_form<W: Write>(session: &Session, output: &mut W) -> io::Result<()> {
    let form = session.form();
    let fields = form.fields();
    let kind = match form.state() {
        FormState::Unselected => "(select employee type)",
        FormState::TypeSelected(EmployeeKind::Salaried) => "salaried",
        FormState::TypeSelected(EmployeeKind::Hourly) => "hourly",
    };
    let hours = if form.hours_enabled() {
        fields.get(FormField::Hours)
    } else {
        "(hourly only)"
    };

    writeln!(output, "Type:         {}", kind)?;
    writeln!(output, "Name:         {}", fields.name)?;
    writeln!(output, "ID:           {}", fields.id)?;
    writeln!(output, "Salary/Rate:  {}", fields.salary_or_rate)?;
    writeln!(output, "Hours Worked: {}", hours)
}
