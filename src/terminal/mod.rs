//! Line-driven terminal front end.
//!
//! Each input line is one user action. The roster table is re-rendered to
//! the output after every change, and rejected actions print a notice.

mod command;
mod repl;

pub use command::{Command, HELP};
pub use repl::run;
