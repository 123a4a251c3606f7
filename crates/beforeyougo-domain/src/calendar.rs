//! Two-month expiration calendar used to pick a check-in date.
//!
//! The window starts on the first day of the month containing `today` and ends on
//! the last day of the following month. Every day carries its month number, its
//! weekday (0 = Monday) and its signed offset in days from `today`.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

/// Per-day metadata inside a [`CalendarWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    /// Month number, 1-12.
    pub month: u32,
    /// Weekday index, 0 = Monday ... 6 = Sunday.
    pub weekday: u32,
    /// Days from `today`: negative in the past, 0 for today.
    pub offset: i64,
}

/// The rolling window covering this month and next month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWindow {
    pub first_of_month: NaiveDate,
    pub first_of_next_month: NaiveDate,
    /// Ascending by date, no gaps.
    pub days: BTreeMap<NaiveDate, CalendarDay>,
}

impl CalendarWindow {
    /// Last date covered by the window (last day of next month).
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }
}

/// Compute the calendar window for `today`. Pure and deterministic.
pub fn compute_window(today: NaiveDate) -> CalendarWindow {
    let first_of_month = today - Days::new(u64::from(today.day0()));
    let first_of_next_month = first_of_month + Months::new(1);
    let last_of_next_month = first_of_next_month + Months::new(1) - Days::new(1);

    let days = first_of_month
        .iter_days()
        .take_while(|day| *day <= last_of_next_month)
        .map(|day| {
            let meta = CalendarDay {
                month: day.month(),
                weekday: day.weekday().num_days_from_monday(),
                offset: (day - today).num_days(),
            };
            (day, meta)
        })
        .collect();

    CalendarWindow {
        first_of_month,
        first_of_next_month,
        days,
    }
}
