//! Tests for occurrence expansion and occurrence-based traversal.

use chrono::NaiveDate;
use flag_days::{
    calendar, default_catalog, next_occurrence, occurrences, previous_occurrence, FlagDay,
    FlagDayError,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn dates(list: &[flag_days::Occurrence]) -> Vec<NaiveDate> {
    list.iter().map(|o| o.date).collect()
}

// ---------------------------------------------------------------------------
// occurrences
// ---------------------------------------------------------------------------

#[test]
fn recurring_day_once_per_year_in_window() {
    let day = FlagDay::new(date(2018, 6, 5), "Grundlovsdag");
    let result = occurrences(&day, date(2020, 1, 1), date(2022, 12, 31)).unwrap();
    assert_eq!(
        dates(&result),
        [date(2020, 6, 5), date(2021, 6, 5), date(2022, 6, 5)]
    );
    assert!(result.iter().all(|o| o.day == day));
}

#[test]
fn window_bounds_are_inclusive() {
    let day = FlagDay::new(date(2018, 6, 5), "Grundlovsdag");
    let result = occurrences(&day, date(2019, 6, 5), date(2020, 6, 5)).unwrap();
    assert_eq!(dates(&result), [date(2019, 6, 5), date(2020, 6, 5)]);
}

#[test]
fn recurring_day_starts_at_anchor() {
    let day = FlagDay::new(date(2018, 6, 5), "Grundlovsdag");
    let result = occurrences(&day, date(2015, 1, 1), date(2019, 1, 1)).unwrap();
    assert_eq!(dates(&result), [date(2018, 6, 5)]);
}

#[test]
fn window_before_anchor_is_empty() {
    let day = FlagDay::new(date(2018, 6, 5), "Grundlovsdag");
    let result = occurrences(&day, date(2010, 1, 1), date(2018, 6, 4)).unwrap();
    assert!(result.is_empty());
}

#[test]
fn inverted_window_is_empty() {
    let day = FlagDay::new(date(2018, 6, 5), "Grundlovsdag");
    let result = occurrences(&day, date(2020, 1, 1), date(2019, 1, 1)).unwrap();
    assert!(result.is_empty());
}

#[test]
fn one_off_day_occurs_once() {
    let day = FlagDay::one_off(date(2018, 3, 30), "Langfredag");
    let inside = occurrences(&day, date(2018, 1, 1), date(2030, 1, 1)).unwrap();
    assert_eq!(dates(&inside), [date(2018, 3, 30)]);

    let outside = occurrences(&day, date(2019, 1, 1), date(2030, 1, 1)).unwrap();
    assert!(outside.is_empty());
}

#[test]
fn leap_day_occurs_in_leap_years_only() {
    let day = FlagDay::new(date(2020, 2, 29), "Leap");
    let result = occurrences(&day, date(2020, 1, 1), date(2032, 12, 31)).unwrap();
    assert_eq!(
        dates(&result),
        [date(2020, 2, 29), date(2024, 2, 29), date(2028, 2, 29), date(2032, 2, 29)]
    );
}

#[test]
fn series_before_year_one_is_an_invalid_rule() {
    let day = FlagDay::new(date(-50, 6, 5), "Ancient");
    let err = occurrences(&day, date(-50, 1, 1), date(2018, 1, 1)).unwrap_err();
    assert!(
        matches!(err, FlagDayError::InvalidRule(_)),
        "expected InvalidRule, got {err:?}"
    );
}

#[test]
fn window_past_year_9999_is_an_invalid_rule() {
    let day = FlagDay::new(date(2018, 6, 5), "Grundlovsdag");
    let err = occurrences(&day, date(2018, 1, 1), date(10000, 1, 1)).unwrap_err();
    assert!(matches!(err, FlagDayError::InvalidRule(_)), "got {err:?}");
}

#[test]
fn one_off_outside_rrule_years_still_expands() {
    let day = FlagDay::one_off(date(-50, 6, 5), "Ancient");
    let result = occurrences(&day, date(-100, 1, 1), date(2018, 1, 1)).unwrap();
    assert_eq!(dates(&result), [date(-50, 6, 5)]);
}

// ---------------------------------------------------------------------------
// calendar
// ---------------------------------------------------------------------------

#[test]
fn calendar_of_default_catalog_for_a_year() {
    let year = calendar(default_catalog(), date(2024, 1, 1), date(2024, 12, 31)).unwrap();
    assert_eq!(year.len(), 19, "only recurring days occur in 2024");
    assert!(year.windows(2).all(|w| w[0].date <= w[1].date));
    assert_eq!(year[0].day.name(), "Nytårsdag");
    assert_eq!(year[18].day.name(), "Juledag");
}

#[test]
fn calendar_2018_includes_one_off_days() {
    let year = calendar(default_catalog(), date(2018, 1, 1), date(2018, 12, 31)).unwrap();
    assert_eq!(year.len(), 28);
    let pride = year
        .iter()
        .filter(|o| o.day.name() == "Copenhagen Pride")
        .count();
    assert_eq!(pride, 7);
}

#[test]
fn calendar_same_date_keeps_slice_order() {
    let days = [
        FlagDay::new(date(2018, 5, 1), "First"),
        FlagDay::new(date(2010, 5, 1), "Second"),
    ];
    let result = calendar(&days, date(2020, 5, 1), date(2020, 5, 1)).unwrap();
    let names: Vec<&str> = result.iter().map(|o| o.day.name()).collect();
    assert_eq!(names, ["First", "Second"]);
}

#[test]
fn calendar_of_nothing_is_empty() {
    let result = calendar(&[], date(2020, 1, 1), date(2020, 12, 31)).unwrap();
    assert!(result.is_empty());
}

// ---------------------------------------------------------------------------
// next_occurrence / previous_occurrence
// ---------------------------------------------------------------------------

#[test]
fn next_occurrence_projects_recurring_days() {
    // Anchor traversal would pick the 2031 one-off; by occurrence the old
    // series comes first.
    let days = [
        FlagDay::new(date(2018, 1, 1), "Old series"),
        FlagDay::one_off(date(2031, 12, 1), "Far one-off"),
    ];
    let next = next_occurrence(&days, date(2030, 6, 1)).unwrap();
    assert_eq!(next.date, date(2031, 1, 1));
    assert_eq!(next.day.name(), "Old series");
}

#[test]
fn next_occurrence_is_strictly_after() {
    let next = next_occurrence(default_catalog(), date(2024, 6, 5)).unwrap();
    assert_eq!(next.date, date(2024, 6, 7));
    assert_eq!(next.day.name(), "Prins Joachims fødselsdag");
}

#[test]
fn next_occurrence_wraps_into_next_year() {
    let next = next_occurrence(default_catalog(), date(2024, 12, 25)).unwrap();
    assert_eq!(next.date, date(2025, 1, 1));
    assert_eq!(next.day.name(), "Nytårsdag");
}

#[test]
fn next_occurrence_finds_next_leap_day() {
    let days = [FlagDay::new(date(2020, 2, 29), "Leap")];
    let next = next_occurrence(&days, date(2020, 3, 1)).unwrap();
    assert_eq!(next.date, date(2024, 2, 29));
}

#[test]
fn previous_occurrence_wraps_into_previous_year() {
    let previous = previous_occurrence(default_catalog(), date(2025, 1, 1)).unwrap();
    assert_eq!(previous.date, date(2024, 12, 25));
    assert_eq!(previous.day.name(), "Juledag");
}

#[test]
fn previous_occurrence_does_not_reach_before_anchor() {
    let days = [FlagDay::new(date(2018, 6, 5), "Grundlovsdag")];
    assert_eq!(previous_occurrence(&days, date(2018, 6, 5)), None);
    assert_eq!(
        previous_occurrence(&days, date(2018, 6, 6)).map(|o| o.date),
        Some(date(2018, 6, 5))
    );
}

#[test]
fn occurrence_traversal_of_nothing_is_none() {
    assert_eq!(next_occurrence(&[], date(2020, 1, 1)), None);
    assert_eq!(previous_occurrence(&[], date(2020, 1, 1)), None);
}

#[test]
fn distant_one_off_days_are_reachable() {
    let days = [FlagDay::one_off(date(2040, 3, 1), "Far ahead")];
    let next = next_occurrence(&days, date(2020, 1, 1)).unwrap();
    assert_eq!(next.date, date(2040, 3, 1));

    let days = [FlagDay::one_off(date(1990, 3, 1), "Long ago")];
    let previous = previous_occurrence(&days, date(2020, 1, 1)).unwrap();
    assert_eq!(previous.date, date(1990, 3, 1));
}

#[test]
fn past_one_off_days_have_no_next_occurrence() {
    let days = [FlagDay::one_off(date(2018, 3, 30), "Langfredag")];
    assert_eq!(next_occurrence(&days, date(2018, 3, 30)), None);
}
