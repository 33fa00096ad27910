//! Person records and the fixed sample roster.
//!
//! This module defines the record shape and the process-lifetime record
//! store consumed by both presenters.

mod person;
mod roster;

pub use person::{Person, COLUMNS, NUMERIC_COLUMNS};
pub use roster::Roster;
