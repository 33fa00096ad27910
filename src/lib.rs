//! Roster - a terminal-based viewer for a sample person roster.
//!
//! Roster holds a fixed, in-memory list of person records and presents it
//! two ways: an aligned plain-text table written to standard output, and an
//! interactive age-versus-salary scatter chart drawn in the terminal.
//!
//! # Features
//!
//! - Full-width table output with no column truncation
//! - Scatter chart with dashed gridlines and labeled axes
//! - Tab-cycled table view with vim-style scrolling
//! - Gruvbox color themes
//! - Clipboard export of the table as TSV
//!
//! # Example
//!
//! ```ignore
//! use roster::data::Roster;
//! use roster::table::TableView;
//!
//! let roster = Roster::sample();
//! let view = TableView::new(roster.people());
//! print!("{}", view.render());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod data;
pub mod error;
pub mod scatter;
pub mod table;
pub mod ui;

pub use error::{Result, RosterError};
