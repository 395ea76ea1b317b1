//! Flag day lookups: the day on a date, and the next/previous day around it.
//!
//! Next and previous compare against each flag day's *anchor* date, not its
//! occurrence in the query year. A recurring day anchored in 2018 is "before"
//! every date from 2018-xx-xx onward, whichever month it falls in. For the
//! occurrence-based variants see [`crate::recurrence`].

use chrono::NaiveDate;
use tracing::debug;

use crate::flag_day::{compare, FlagDay};

/// The first flag day in `days` that falls on `date`.
///
/// Scans in slice order. If several days match, the first one wins.
#[tracing::instrument(level = "debug", skip(days), fields(n_days = days.len()))]
pub fn flag_day(date: NaiveDate, days: &[FlagDay]) -> Option<&FlagDay> {
    days.iter().find(|day| day.matches(date))
}

/// The first flag day anchored strictly after `date`.
///
/// `days` is sorted by anchor before scanning, so any slice order is
/// accepted. When nothing is anchored after `date`, the first recurring day
/// is returned with its anchor moved one year forward. Returns `None` when
/// there is no such day either.
#[tracing::instrument(level = "debug", skip(days), fields(n_days = days.len()))]
pub fn next_flag_day(date: NaiveDate, days: &[FlagDay]) -> Option<FlagDay> {
    let mut sorted = days.to_vec();
    sorted.sort_by(compare);

    if let Some(day) = sorted.iter().find(|day| day.anchor() > date) {
        return Some(day.clone());
    }

    let wrapped = sorted
        .iter()
        .find(|day| day.is_recurring())
        .and_then(|day| day.shifted_years(1));
    debug!(found = wrapped.is_some(), "no anchor after date, wrapped to next year");
    wrapped
}

/// The last flag day anchored strictly before `date`.
///
/// Scans `days` from the end without re-sorting, so the slice is expected to
/// be in ascending anchor order already (as a [`crate::Catalog`] is). When
/// nothing is anchored before `date`, the last recurring day is returned with
/// its anchor moved one year back.
#[tracing::instrument(level = "debug", skip(days), fields(n_days = days.len()))]
pub fn previous_flag_day(date: NaiveDate, days: &[FlagDay]) -> Option<FlagDay> {
    if let Some(day) = days.iter().rev().find(|day| day.anchor() < date) {
        return Some(day.clone());
    }

    let wrapped = days
        .iter()
        .rev()
        .find(|day| day.is_recurring())
        .and_then(|day| day.shifted_years(-1));
    debug!(found = wrapped.is_some(), "no anchor before date, wrapped to previous year");
    wrapped
}
