//! Employee input form: fields, type selector and the add action.

mod controller;
mod fields;

pub use controller::{FormController, FormState};
pub use fields::FormFields;
