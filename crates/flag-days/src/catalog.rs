//! The flag day catalog: an immutable collection sorted by anchor date, plus
//! the built-in Danish data set.

use std::ops::Deref;
use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::date::{parse_date, today};
use crate::error::{FlagDayError, Result};
use crate::flag_day::{compare, FlagDay, DEFAULT_EMOJI};
use crate::query;

/// An ordered, read-only set of flag days.
///
/// Entries are sorted ascending by anchor date (see [`compare`]). The sort is
/// stable: entries with the same anchor keep their construction order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    days: Vec<FlagDay>,
}

impl Catalog {
    pub fn new(mut days: Vec<FlagDay>) -> Self {
        days.sort_by(compare);
        debug!(n_days = days.len(), "built flag day catalog");
        Self { days }
    }

    /// Build a catalog from a JSON array of flag day definitions.
    ///
    /// Each entry is an object with a `date` (`YYYY-MM-DD`), a `name`, and
    /// optionally `recurring` (default `true`) and `emoji` (default 🇩🇰).
    ///
    /// # Errors
    /// Returns `FlagDayError::Json` if the text is not an array of such
    /// objects, and `FlagDayError::Definition` if an entry's date cannot be
    /// parsed.
    pub fn from_json(json: &str) -> Result<Self> {
        let definitions: Vec<Definition> = serde_json::from_str(json)?;

        let days = definitions
            .into_iter()
            .enumerate()
            .map(|(index, def)| def.into_flag_day(index))
            .collect::<Result<Vec<_>>>()?;

        debug!(n_definitions = days.len(), "parsed flag day definitions");
        Ok(Self::new(days))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlagDay> {
        self.days.iter()
    }

    pub fn into_inner(self) -> Vec<FlagDay> {
        self.days
    }

    /// See [`query::flag_day`].
    pub fn flag_day(&self, date: NaiveDate) -> Option<&FlagDay> {
        query::flag_day(date, &self.days)
    }

    /// See [`query::next_flag_day`].
    pub fn next_flag_day(&self, date: NaiveDate) -> Option<FlagDay> {
        query::next_flag_day(date, &self.days)
    }

    /// See [`query::previous_flag_day`].
    pub fn previous_flag_day(&self, date: NaiveDate) -> Option<FlagDay> {
        query::previous_flag_day(date, &self.days)
    }

    pub fn flag_day_today(&self) -> Option<&FlagDay> {
        self.flag_day(today())
    }

    pub fn next_flag_day_from_today(&self) -> Option<FlagDay> {
        self.next_flag_day(today())
    }

    pub fn previous_flag_day_from_today(&self) -> Option<FlagDay> {
        self.previous_flag_day(today())
    }
}

impl Deref for Catalog {
    type Target = [FlagDay];

    fn deref(&self) -> &[FlagDay] {
        &self.days
    }
}

impl FromIterator<FlagDay> for Catalog {
    fn from_iter<I: IntoIterator<Item = FlagDay>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a FlagDay;
    type IntoIter = std::slice::Iter<'a, FlagDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

#[derive(Debug, Deserialize)]
struct Definition {
    date: String,
    name: String,
    #[serde(default = "default_recurring")]
    recurring: bool,
    #[serde(default = "default_emoji")]
    emoji: String,
}

fn default_recurring() -> bool {
    true
}

fn default_emoji() -> String {
    DEFAULT_EMOJI.to_string()
}

impl Definition {
    fn into_flag_day(self, index: usize) -> Result<FlagDay> {
        let anchor = parse_date(&self.date).map_err(|e| FlagDayError::Definition {
            index,
            message: e.to_string(),
        })?;
        Ok(FlagDay::new(anchor, self.name)
            .with_recurring(self.recurring)
            .with_emoji(self.emoji))
    }
}

// ---------------------------------------------------------------------------
// Built-in data
// ---------------------------------------------------------------------------

const EU: &str = "🇪🇺";
const UN: &str = "🇺🇳";
const PRIDE: &str = "🏳️‍🌈";

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid built-in flag day date"),
    }
}

/// `(anchor, name, recurring, emoji)`
type Entry = (NaiveDate, &'static str, bool, &'static str);

const DANISH_FLAG_DAYS: [Entry; 28] = [
    (ymd(2018, 1, 1), "Nytårsdag", true, DEFAULT_EMOJI),
    (ymd(2018, 2, 5), "Kronprinsesse Marys fødselsdag", true, DEFAULT_EMOJI),
    (ymd(2018, 2, 6), "Prinsesse Maries fødselsdag", true, DEFAULT_EMOJI),
    (ymd(2018, 3, 23), "Nordens dag", true, DEFAULT_EMOJI),
    (ymd(2018, 4, 9), "Danmarks besættelse 1940", true, DEFAULT_EMOJI),
    (ymd(2018, 4, 16), "Dronning Margrethes fødselsdag", true, DEFAULT_EMOJI),
    (ymd(2018, 4, 29), "Prinsesse Benediktes fødselsdag", true, DEFAULT_EMOJI),
    (ymd(2018, 5, 1), "Arbejdernes kampdag", true, DEFAULT_EMOJI),
    (ymd(2018, 5, 4), "Danmarks Befrielsesdag", true, DEFAULT_EMOJI),
    (ymd(2018, 5, 5), "Danmarks befrielse 1945", true, DEFAULT_EMOJI),
    (ymd(2018, 5, 6), "Børnehjælpsdagen", true, DEFAULT_EMOJI),
    (ymd(2018, 5, 9), "Europadag", true, EU),
    (ymd(2018, 5, 26), "Kronprins Frederiks fødselsdag", true, DEFAULT_EMOJI),
    (ymd(2018, 6, 5), "Grundlovsdag", true, DEFAULT_EMOJI),
    (ymd(2018, 6, 7), "Prins Joachims fødselsdag", true, DEFAULT_EMOJI),
    (ymd(2018, 6, 15), "Valdemarsdag og Genforeningsdag", true, DEFAULT_EMOJI),
    (ymd(2018, 9, 5), "Danmarks Udsendte", true, DEFAULT_EMOJI),
    (ymd(2018, 10, 24), "FN-dag", true, UN),
    (ymd(2018, 12, 25), "Juledag", true, DEFAULT_EMOJI),
    // 2018 only
    (ymd(2018, 3, 30), "Langfredag", false, DEFAULT_EMOJI),
    (ymd(2018, 4, 1), "Påskedag", false, DEFAULT_EMOJI),
    (ymd(2018, 8, 13), "Copenhagen Pride", false, PRIDE),
    (ymd(2018, 8, 14), "Copenhagen Pride", false, PRIDE),
    (ymd(2018, 8, 15), "Copenhagen Pride", false, PRIDE),
    (ymd(2018, 8, 16), "Copenhagen Pride", false, PRIDE),
    (ymd(2018, 8, 17), "Copenhagen Pride", false, PRIDE),
    (ymd(2018, 8, 18), "Copenhagen Pride", false, PRIDE),
    (ymd(2018, 8, 19), "Copenhagen Pride", false, PRIDE),
];

static DEFAULT_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    DANISH_FLAG_DAYS
        .iter()
        .map(|&(anchor, name, recurring, emoji)| {
            FlagDay::new(anchor, name)
                .with_recurring(recurring)
                .with_emoji(emoji)
        })
        .collect()
});

/// The built-in Danish flag days, sorted by anchor date.
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}
