//! Display surface for the roster table and user notices.
//!
//! The table is rebuilt from the roster after every mutation; nothing is
//! cached between renders.

mod notice;
mod rows;
mod surface;

pub use notice::{Notice, NoticeLevel};
pub use rows::{TableRow, snapshot};
pub use surface::{DisplaySurface, JsonTable, TextTable, surface_for};
