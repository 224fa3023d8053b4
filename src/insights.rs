use crate::models::AppData;
use crate::report::{report_for_at, Period, PeriodStat};
use chrono::{Duration, Local, NaiveDate};

pub fn insights(data: &AppData) -> Vec<String> {
    insights_at(data, Local::now().date_naive())
}

/// Rule-based "AI" evaluation: a deterministic, ordered set of observations
/// about the current week and month. Never returns an empty list.
pub fn insights_at(data: &AppData, today: NaiveDate) -> Vec<String> {
    let mut insights = Vec::new();

    let week_stats = report_for_at(Period::Week, data, today);
    for stat in &week_stats {
        if stat.days_tracked >= 5 {
            insights.push(format!(
                "Great consistency with \"{}\"! You've logged {} days this week.",
                stat.name, stat.days_tracked
            ));
        } else if stat.days_tracked == 0 {
            insights.push(format!(
                "\"{}\" hasn't been tracked this week. Consider starting small with just 5-10 minutes.",
                stat.name
            ));
        }
        // 1..=4 tracked days is deliberately silent.
    }

    let month_stats = report_for_at(Period::Month, data, today);
    if let Some(top) = top_habit(&month_stats) {
        if top.total_minutes > 0 {
            insights.push(format!(
                "Your strongest habit this month is \"{}\" with {} hours invested.",
                top.name,
                top.total_minutes / 60
            ));
        }
    }

    let gratitude_count = recent_gratitude_count(data, today);
    if gratitude_count >= 5 {
        insights.push(format!(
            "Your gratitude practice is strong with {gratitude_count} entries this week. \
             This positive mindset supports all your habits!"
        ));
    }

    if insights.is_empty() {
        insights.push("Keep logging your habits to receive personalized AI insights!".to_string());
    }

    insights
}

/// Stat with the largest monthly total. Ties go to the habit appearing first
/// in importance order, which is why this scans rather than using `max_by`.
fn top_habit(stats: &[PeriodStat]) -> Option<&PeriodStat> {
    let mut best: Option<&PeriodStat> = None;
    for stat in stats {
        match best {
            Some(current) if stat.total_minutes <= current.total_minutes => {}
            _ => best = Some(stat),
        }
    }
    best
}

/// Gratitude entries in the trailing 7-day window ending today. The window is
/// not calendar-aligned, so dates are parsed instead of compared as strings.
fn recent_gratitude_count(data: &AppData, today: NaiveDate) -> usize {
    let window_start = today - Duration::days(6);
    data.gratitude_entries
        .iter()
        .filter_map(|entry| NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d").ok())
        .filter(|date| *date >= window_start && *date <= today)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GratitudeEntry, Habit, HabitEntry};
    use crate::report::date_key;

    fn habit(id: &str, name: &str, importance: u32) -> Habit {
        Habit {
            id: id.to_string(),
            name: name.to_string(),
            importance,
            created_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    fn entry(habit_id: &str, date: NaiveDate, minutes: u32) -> HabitEntry {
        HabitEntry {
            habit_id: habit_id.to_string(),
            date: date_key(date),
            minutes,
        }
    }

    fn gratitude(date: NaiveDate) -> GratitudeEntry {
        GratitudeEntry {
            id: date_key(date),
            date: date_key(date),
            content: "grateful".to_string(),
            prompt: "What made you smile today?".to_string(),
        }
    }

    // Wednesday; its week is 2026-01-05 ..= 2026-01-11.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 7).unwrap()
    }

    #[test]
    fn empty_state_falls_back_to_single_message() {
        let data = AppData::default();
        let result = insights_at(&data, today());
        assert_eq!(
            result,
            vec!["Keep logging your habits to receive personalized AI insights!".to_string()]
        );
    }

    #[test]
    fn five_tracked_days_earn_encouragement() {
        let mut data = AppData::default();
        data.habits.push(habit("a", "Read", 1));
        let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        for offset in 0..5 {
            data.habit_entries
                .push(entry("a", monday + Duration::days(offset), 10));
        }

        let result = insights_at(&data, today());
        assert!(result
            .iter()
            .any(|s| s.contains("Great consistency with \"Read\"") && s.contains("5 days")));
    }

    #[test]
    fn untracked_habit_gets_a_nudge() {
        let mut data = AppData::default();
        data.habits.push(habit("a", "Meditate", 1));

        let result = insights_at(&data, today());
        assert!(result
            .iter()
            .any(|s| s.contains("\"Meditate\" hasn't been tracked this week")));
    }

    #[test]
    fn middle_band_is_silent() {
        let mut data = AppData::default();
        data.habits.push(habit("a", "Read", 1));
        let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        data.habit_entries.push(entry("a", monday, 30));
        data.habit_entries.push(entry("a", monday + Duration::days(1), 30));

        let result = insights_at(&data, today());
        // Two tracked days: no weekly insight, but the monthly top-habit one
        // fires (60 minutes -> 1 hour).
        assert!(!result.iter().any(|s| s.contains("consistency")));
        assert!(!result.iter().any(|s| s.contains("hasn't been tracked")));
        assert!(result
            .iter()
            .any(|s| s.contains("strongest habit this month is \"Read\"") && s.contains("1 hours")));
    }

    #[test]
    fn monthly_tie_goes_to_earlier_habit() {
        let mut data = AppData::default();
        data.habits.push(habit("a", "Read", 1));
        data.habits.push(habit("b", "Run", 2));
        let day = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        data.habit_entries.push(entry("a", day, 120));
        data.habit_entries.push(entry("b", day, 120));

        let result = insights_at(&data, today());
        assert!(result
            .iter()
            .any(|s| s.contains("strongest habit this month is \"Read\"")));
        assert!(!result.iter().any(|s| s.contains("strongest habit this month is \"Run\"")));
    }

    #[test]
    fn strongest_habit_hours_truncate() {
        let mut data = AppData::default();
        data.habits.push(habit("a", "Read", 1));
        let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        for offset in 0..5 {
            // 5 * 35 = 175 minutes = 2.91 hours, reported as 2.
            data.habit_entries
                .push(entry("a", monday + Duration::days(offset), 35));
        }

        let result = insights_at(&data, today());
        assert!(result.iter().any(|s| s.contains("with 2 hours invested")));
    }

    #[test]
    fn frequent_gratitude_is_celebrated() {
        let mut data = AppData::default();
        for offset in 0..5 {
            data.gratitude_entries
                .push(gratitude(today() - Duration::days(offset)));
        }
        // Outside the trailing window, not counted.
        data.gratitude_entries
            .push(gratitude(today() - Duration::days(10)));

        let result = insights_at(&data, today());
        assert!(result
            .iter()
            .any(|s| s.contains("gratitude practice is strong with 5 entries")));
    }

    #[test]
    fn fewer_than_five_gratitude_entries_stay_quiet() {
        let mut data = AppData::default();
        for offset in 0..4 {
            data.gratitude_entries
                .push(gratitude(today() - Duration::days(offset)));
        }

        let result = insights_at(&data, today());
        assert!(!result.iter().any(|s| s.contains("gratitude practice")));
    }
}
