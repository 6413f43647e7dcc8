//! # Time-Bucketed Reporting
//!
//! Groups registrations by calendar day of submission over a lookback
//! window. The output sequence is dense — every day in the window appears,
//! zero-filled — so chart axes stay stable across refreshes. Weekly growth
//! compares the trailing seven days against the seven before them.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use encuentro_core::{Money, Registration};

/// How far back a daily series reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookbackWindow {
    /// The trailing 7 days.
    Days7,
    /// The trailing 30 days.
    Days30,
    /// The trailing 90 days.
    Days90,
    /// From the earliest registration onward.
    All,
}

impl LookbackWindow {
    /// The window length in days, or `None` for the unbounded window.
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::Days7 => Some(7),
            Self::Days30 => Some(30),
            Self::Days90 => Some(90),
            Self::All => None,
        }
    }

    /// The canonical string name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Days7 => "7",
            Self::Days30 => "30",
            Self::Days90 => "90",
            Self::All => "all",
        }
    }
}

impl std::fmt::Display for LookbackWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of the dense series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBucket {
    /// The calendar day (UTC).
    pub date: NaiveDate,
    /// Registrations submitted that day.
    pub count: usize,
    /// Sum of agreed prices submitted that day.
    pub projected: Money,
    /// Sum of paid amounts for registrations submitted that day.
    pub realized: Money,
}

/// Build the dense daily series for a window ending at `today`.
///
/// Bounded windows span exactly `days` calendar days ending at `today`,
/// inclusive. The unbounded window spans from the earliest submission to
/// `today`; an empty input yields an empty series. Submissions dated after
/// `today` fall outside every window and are ignored.
pub fn daily_series(
    registrations: &[Registration],
    window: LookbackWindow,
    today: NaiveDate,
) -> Vec<DailyBucket> {
    let start = match window.days() {
        Some(days) => today - Duration::days(days - 1),
        None => match registrations
            .iter()
            .map(|r| r.created_at.date_naive())
            .min()
        {
            Some(earliest) => earliest.min(today),
            None => return Vec::new(),
        },
    };

    let len = (today - start).num_days() + 1;
    let mut series: Vec<DailyBucket> = (0..len)
        .map(|offset| DailyBucket {
            date: start + Duration::days(offset),
            count: 0,
            projected: Money::ZERO,
            realized: Money::ZERO,
        })
        .collect();

    for registration in registrations {
        let day = registration.created_at.date_naive();
        if day < start || day > today {
            continue;
        }
        let index = (day - start).num_days() as usize;
        let bucket = &mut series[index];
        bucket.count += 1;
        bucket.projected = bucket.projected.saturating_add(registration.agreed_price());
        bucket.realized = bucket.realized.saturating_add(registration.amount_paid);
    }

    series
}

/// Week-over-week growth of submission counts, as a percentage.
///
/// Compares the trailing 7 days (ending at `today`) against the 7 days
/// before them. When the previous week is empty the convention is: 0% if
/// the current week is also empty, 100% otherwise — "growth from nothing"
/// is reported as maximal rather than dividing by zero.
pub fn weekly_growth(registrations: &[Registration], today: NaiveDate) -> f64 {
    let current_start = today - Duration::days(6);
    let previous_start = today - Duration::days(13);

    let mut current = 0usize;
    let mut previous = 0usize;
    for registration in registrations {
        let day = registration.created_at.date_naive();
        if day >= current_start && day <= today {
            current += 1;
        } else if day >= previous_start && day < current_start {
            previous += 1;
        }
    }

    if previous == 0 {
        if current == 0 {
            0.0
        } else {
            100.0
        }
    } else {
        (current as f64 - previous as f64) / previous as f64 * 100.0
    }
}
