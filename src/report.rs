use crate::models::AppData;
use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::Serialize;

/// Reporting window kind. Week is Monday-anchored; month and year follow the
/// calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Week,
    Month,
    Year,
}

impl Period {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }
}

/// Per-habit aggregate over one period window.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodStat {
    pub name: String,
    pub total_minutes: u32,
    pub days_tracked: u32,
    pub avg_minutes: u32,
    /// `days_tracked` as a share of a full year, shown on the yearly report.
    pub consistency_pct: u32,
}

pub fn report_for(period: Period, data: &AppData) -> Vec<PeriodStat> {
    report_for_at(period, data, Local::now().date_naive())
}

/// Aggregates entries per habit over the window containing `today`, one stat
/// per habit in importance order. Pure; recomputed on every read.
pub fn report_for_at(period: Period, data: &AppData, today: NaiveDate) -> Vec<PeriodStat> {
    let (start, end) = period_bounds(period, today);
    let start_key = date_key(start);
    let end_key = date_key(end);

    data.habits
        .iter()
        .map(|habit| {
            let mut total_minutes = 0u32;
            let mut days_tracked = 0u32;
            // Date keys are zero-padded, so the lexicographic range check is
            // a chronological one.
            for entry in &data.habit_entries {
                if entry.habit_id == habit.id
                    && entry.date.as_str() >= start_key.as_str()
                    && entry.date.as_str() <= end_key.as_str()
                {
                    total_minutes = total_minutes.saturating_add(entry.minutes);
                    days_tracked += 1;
                }
            }

            let avg_minutes = if days_tracked > 0 {
                (f64::from(total_minutes) / f64::from(days_tracked)).round() as u32
            } else {
                0
            };

            PeriodStat {
                name: habit.name.clone(),
                total_minutes,
                days_tracked,
                avg_minutes,
                consistency_pct: (f64::from(days_tracked) / 365.0 * 100.0).round() as u32,
            }
        })
        .collect()
}

/// Inclusive `[start, end]` calendar-day window for `period` around `today`.
pub fn period_bounds(period: Period, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    match period {
        Period::Week => {
            let start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
            (start, start + Duration::days(6))
        }
        Period::Month => {
            let start = today.with_day(1).unwrap_or(today);
            let next_month = if today.month() == 12 {
                NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
            };
            let end = next_month.map(|d| d - Duration::days(1)).unwrap_or(today);
            (start, end)
        }
        Period::Year => {
            let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
            let end = NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today);
            (start, end)
        }
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
