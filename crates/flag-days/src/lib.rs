//! # flag-days
//!
//! A calendar of Danish flag days ("flagdage") with three lookups: the flag
//! day on a date, the next flag day after a date, and the previous flag day
//! before a date.
//!
//! Flag days are either one-off or recur every year from their anchor date.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use flag_days::default_catalog;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
//! let day = default_catalog().flag_day(date).unwrap();
//! assert_eq!(day.name(), "Grundlovsdag");
//! ```
//!
//! ## Modules
//!
//! - [`flag_day`] — `FlagDay` entity, matching, overrides, anchor ordering
//! - [`catalog`] — sorted `Catalog`, JSON definitions, built-in data
//! - [`query`] — flag day on / next after / previous before a date
//! - [`recurrence`] — expand flag days into concrete dates in a window
//! - [`date`] — date string parsing and today's date
//! - [`error`] — Error types

pub mod catalog;
pub mod date;
pub mod error;
pub mod flag_day;
pub mod query;
pub mod recurrence;

pub use catalog::{default_catalog, Catalog};
pub use date::{parse_date, today};
pub use error::FlagDayError;
pub use flag_day::{compare, FlagDay, FlagDayOverrides, DEFAULT_EMOJI};
pub use query::{flag_day, next_flag_day, previous_flag_day};
pub use recurrence::{calendar, next_occurrence, occurrences, previous_occurrence, Occurrence};
