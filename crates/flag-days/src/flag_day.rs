//! The flag day entity: a named date that is either one-off or recurs every
//! year from its anchor date onward.

use std::cmp::Ordering;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date::parse_date;
use crate::error::Result;

/// Emoji used when a flag day does not name its own (the Danish flag).
pub const DEFAULT_EMOJI: &str = "🇩🇰";

/// A named flag day.
///
/// The anchor is the date the flag day was constructed with. For a one-off
/// day it is the only date the day occurs on; for a recurring day it is the
/// first occurrence of a yearly series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlagDay {
    #[serde(rename = "date")]
    anchor: NaiveDate,
    name: String,
    recurring: bool,
    emoji: String,
}

/// Field replacements for [`FlagDay::with_overrides`].
///
/// `None` leaves the field as it is. `Some` always replaces it, including
/// `Some(String::new())`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlagDayOverrides {
    pub date: Option<NaiveDate>,
    pub name: Option<String>,
    pub recurring: Option<bool>,
    pub emoji: Option<String>,
}

impl FlagDay {
    /// A recurring flag day with the default emoji.
    pub fn new(anchor: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            anchor,
            name: name.into(),
            recurring: true,
            emoji: DEFAULT_EMOJI.to_string(),
        }
    }

    /// A flag day that occurs on `anchor` only.
    pub fn one_off(anchor: NaiveDate, name: impl Into<String>) -> Self {
        Self::new(anchor, name).with_recurring(false)
    }

    pub fn with_recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Build a flag day from a literal date string.
    ///
    /// # Errors
    /// Returns `FlagDayError::InvalidDate` if `date` is not a parseable date.
    pub fn parse(date: &str, name: &str, recurring: bool, emoji: &str) -> Result<Self> {
        let anchor = parse_date(date)?;
        Ok(Self::new(anchor, name)
            .with_recurring(recurring)
            .with_emoji(emoji))
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn is_recurring(&self) -> bool {
        self.recurring
    }

    /// Whether the flag day falls on `date`.
    ///
    /// A one-off day matches its anchor only. A recurring day matches the
    /// anchor's month and day in the anchor year and every later year; years
    /// before the anchor never match. A 29 February anchor therefore only
    /// matches in leap years.
    pub fn matches(&self, date: NaiveDate) -> bool {
        if !self.recurring {
            return date == self.anchor;
        }
        date.year() >= self.anchor.year()
            && date.month() == self.anchor.month()
            && date.day() == self.anchor.day()
    }

    /// The date this flag day falls on in `year`, if any.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        if !self.recurring {
            return (self.anchor.year() == year).then_some(self.anchor);
        }
        if year < self.anchor.year() {
            return None;
        }
        NaiveDate::from_ymd_opt(year, self.anchor.month(), self.anchor.day())
    }

    /// A copy of this flag day with the given fields replaced.
    pub fn with_overrides(&self, overrides: FlagDayOverrides) -> FlagDay {
        FlagDay {
            anchor: overrides.date.unwrap_or(self.anchor),
            name: overrides.name.unwrap_or_else(|| self.name.clone()),
            recurring: overrides.recurring.unwrap_or(self.recurring),
            emoji: overrides.emoji.unwrap_or_else(|| self.emoji.clone()),
        }
    }

    /// A copy with the anchor moved by whole years.
    ///
    /// 29 February lands on 28 February in non-leap years. Returns `None`
    /// only if the result is outside the representable calendar.
    pub fn shifted_years(&self, years: i32) -> Option<FlagDay> {
        let months = Months::new(years.unsigned_abs().checked_mul(12)?);
        let anchor = if years >= 0 {
            self.anchor.checked_add_months(months)?
        } else {
            self.anchor.checked_sub_months(months)?
        };
        Some(self.with_overrides(FlagDayOverrides {
            date: Some(anchor),
            ..FlagDayOverrides::default()
        }))
    }
}

/// Order two flag days by anchor date.
///
/// Recurring days are compared by the date their series started, so a day
/// anchored in a later year sorts after one anchored earlier even when it
/// comes first within a year. This is the catalog's sort order.
pub fn compare(a: &FlagDay, b: &FlagDay) -> Ordering {
    a.anchor.cmp(&b.anchor)
}
