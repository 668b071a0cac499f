//! Temporal selection engine for tessera date, month and time pickers.
//!
//! The engine turns a displayed period, a selection and a pair of bounds into
//! grids of cells a host can render, and applies clicks and key presses to
//! produce the next selection. It performs no I/O and never reads a clock:
//! "today" and "now" are passed in by the host.
//!
//! # Usage
//!
//! Resolve bounds once, then build grids from them.
//!
//! ```
//! use tessera_temporal::{
//!     constraint::resolve_constraints,
//!     date::{CalendarDate, YearMonth},
//!     grid::{MonthGridArgs, build_month_grid},
//!     selection::{SelectionState, select},
//! };
//!
//! let today = CalendarDate::new(2024, 1, 14).unwrap();
//! let min = CalendarDate::new(2024, 1, 10).unwrap();
//! let constraints = resolve_constraints(Some(min.into()), None);
//!
//! // Two clicks complete a range; endpoints are ordered whatever the click order.
//! let mut selection = SelectionState::range();
//! for day in [20, 12] {
//!     let date = CalendarDate::new(2024, 1, day).unwrap();
//!     selection = select(selection, date, &constraints);
//! }
//!
//! let february = YearMonth::new(2024, 1).unwrap();
//! let grid = build_month_grid(
//!     &MonthGridArgs::new(february, today)
//!         .selection(selection)
//!         .constraints(constraints),
//! );
//!
//! assert_eq!(grid.cells().len(), 42);
//! let in_range = grid.cells().iter().filter(|cell| cell.is_in_range).count();
//! assert_eq!(in_range, 9);
//! ```
//!
//! For stateful pickers see [`controller`].
#![deny(missing_docs, clippy::unwrap_used)]

pub mod clock;
pub mod constraint;
pub mod controller;
pub mod convert;
pub mod date;
pub mod enumerate;
pub mod error;
pub mod granularity;
pub mod grid;
pub mod input;
pub mod instant;
pub mod labels;
pub mod navigation;
pub mod selection;
pub mod time;

pub use error::TemporalError;
