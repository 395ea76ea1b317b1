//! Occurrence expansion: the concrete dates a flag day falls on.
//!
//! Recurring days are expanded through a yearly RRULE
//! (`FREQ=YEARLY` from the anchor, bounded by `UNTIL`) using the `rrule`
//! crate, so a 29 February anchor yields leap years only. One-off days occur
//! on their anchor.
//!
//! [`next_occurrence`] and [`previous_occurrence`] traverse by occurrence
//! rather than by anchor, unlike [`crate::query`].

use chrono::{Datelike, NaiveDate, Utc};
use rrule::RRuleSet;
use serde::{Deserialize, Serialize};

use crate::error::{FlagDayError, Result};
use crate::flag_day::FlagDay;

/// The longest gap between two leap years (e.g. 1896 to 1904). Searching this
/// many years either side of a date always finds a recurring day's occurrence.
const MAX_YEARS_BETWEEN_OCCURRENCES: i32 = 8;

const ICAL_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// One concrete date on which a flag day occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub date: NaiveDate,
    pub day: FlagDay,
}

/// Every date in the inclusive window `[from, to]` on which `day` occurs.
///
/// An inverted window (`from > to`) yields an empty list.
///
/// # Errors
/// Returns `FlagDayError::InvalidRule` for a recurring day whose series or
/// window reaches outside the years 1 to 9999, or if the `rrule` crate
/// rejects the generated rule.
#[tracing::instrument(level = "debug", skip(day), fields(name = day.name()))]
pub fn occurrences(day: &FlagDay, from: NaiveDate, to: NaiveDate) -> Result<Vec<Occurrence>> {
    if from > to {
        return Ok(Vec::new());
    }

    if !day.is_recurring() {
        let anchor = day.anchor();
        let hit = (from..=to).contains(&anchor).then(|| Occurrence {
            date: anchor,
            day: day.clone(),
        });
        return Ok(hit.into_iter().collect());
    }

    // The series has not started by the end of the window.
    if to < day.anchor() {
        return Ok(Vec::new());
    }

    let dates = expand_yearly(day.anchor(), to)?;

    Ok(dates
        .into_iter()
        .filter(|date| *date >= from)
        .map(|date| Occurrence {
            date,
            day: day.clone(),
        })
        .collect())
}

/// All occurrences of all `days` inside `[from, to]`, sorted by date.
///
/// Days that fall on the same date keep their order in `days`.
///
/// # Errors
/// Propagates the first expansion error from [`occurrences`].
#[tracing::instrument(level = "debug", skip(days), fields(n_days = days.len()))]
pub fn calendar(days: &[FlagDay], from: NaiveDate, to: NaiveDate) -> Result<Vec<Occurrence>> {
    let mut all = Vec::new();
    for day in days {
        all.extend(occurrences(day, from, to)?);
    }
    all.sort_by_key(|occurrence| occurrence.date);
    Ok(all)
}

/// The nearest occurrence of any of `days` strictly after `date`.
///
/// Ties on the same date go to the day listed first in `days`.
pub fn next_occurrence(days: &[FlagDay], date: NaiveDate) -> Option<Occurrence> {
    let mut best: Option<Occurrence> = None;
    for day in days {
        if let Some(found) = first_after(day, date) {
            if best.as_ref().is_none_or(|b| found < b.date) {
                best = Some(Occurrence {
                    date: found,
                    day: day.clone(),
                });
            }
        }
    }
    best
}

/// The nearest occurrence of any of `days` strictly before `date`.
///
/// Ties on the same date go to the day listed first in `days`.
pub fn previous_occurrence(days: &[FlagDay], date: NaiveDate) -> Option<Occurrence> {
    let mut best: Option<Occurrence> = None;
    for day in days {
        if let Some(found) = last_before(day, date) {
            if best.as_ref().is_none_or(|b| found > b.date) {
                best = Some(Occurrence {
                    date: found,
                    day: day.clone(),
                });
            }
        }
    }
    best
}

fn first_after(day: &FlagDay, date: NaiveDate) -> Option<NaiveDate> {
    if !day.is_recurring() {
        return (day.anchor() > date).then_some(day.anchor());
    }
    let start = date.year().max(day.anchor().year());
    (start..=start + MAX_YEARS_BETWEEN_OCCURRENCES)
        .filter_map(|year| day.occurrence_in(year))
        .find(|d| *d > date)
}

fn last_before(day: &FlagDay, date: NaiveDate) -> Option<NaiveDate> {
    if !day.is_recurring() {
        return (day.anchor() < date).then_some(day.anchor());
    }
    ((date.year() - MAX_YEARS_BETWEEN_OCCURRENCES)..=date.year())
        .rev()
        .filter_map(|year| day.occurrence_in(year))
        .find(|d| *d < date)
}

/// Expand a yearly series starting at `anchor` up to and including `until`.
fn expand_yearly(anchor: NaiveDate, until: NaiveDate) -> Result<Vec<NaiveDate>> {
    // iCalendar dates carry a four-digit year.
    if !(ICAL_YEARS.contains(&anchor.year()) && ICAL_YEARS.contains(&until.year())) {
        return Err(FlagDayError::InvalidRule(format!(
            "FREQ=YEARLY from {} until {}: year outside {}..={}",
            anchor,
            until,
            ICAL_YEARS.start(),
            ICAL_YEARS.end(),
        )));
    }

    let rule_text = format!(
        "DTSTART:{}T000000Z\nRRULE:FREQ=YEARLY;UNTIL={}T000000Z",
        anchor.format("%Y%m%d"),
        until.format("%Y%m%d"),
    );

    let rrule_set: RRuleSet = rule_text
        .parse()
        .map_err(|e| FlagDayError::InvalidRule(format!("{}", e)))?;

    // One instance per year at most; cap at what `all` accepts.
    let years = until.year() - anchor.year() + 1;
    let limit = u16::try_from(years).unwrap_or(u16::MAX);

    let instances = rrule_set.all(limit);

    Ok(instances
        .dates
        .into_iter()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .collect())
}
