use crate::models::{AppData, GratitudeEntry, Habit, HabitEntry};
use crate::report::date_key;
use chrono::{Local, NaiveDate};
use uuid::Uuid;

// Every operation here is fail-quiet: invalid input leaves the data untouched
// and the return value says whether anything changed (so callers can skip the
// persist).

pub fn add_habit(data: &mut AppData, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return false;
    }
    let importance = data.habits.len() as u32 + 1;
    data.habits.push(Habit {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        importance,
        created_at: Local::now().to_rfc3339(),
    });
    true
}

/// Swaps the habit at `index` with its neighbor, then reassigns every
/// importance to its positional rank so ranks stay dense 1..=N.
pub fn move_habit(data: &mut AppData, index: usize, direction: &str) -> bool {
    let target = match direction {
        "up" => index.checked_sub(1),
        "down" => index.checked_add(1),
        _ => None,
    };
    let Some(target) = target else {
        return false;
    };
    if index >= data.habits.len() || target >= data.habits.len() {
        return false;
    }

    data.habits.swap(index, target);
    reassign_ranks(data);
    true
}

/// Removes the habit and cascades to its entries. Unknown id is a no-op.
pub fn delete_habit(data: &mut AppData, id: &str) -> bool {
    let before = data.habits.len();
    data.habits.retain(|habit| habit.id != id);
    if data.habits.len() == before {
        return false;
    }
    data.habit_entries.retain(|entry| entry.habit_id != id);
    reassign_ranks(data);
    true
}

pub fn log_minutes(data: &mut AppData, habit_id: &str, minutes_text: &str) -> bool {
    log_minutes_at(data, habit_id, minutes_text, Local::now().date_naive())
}

/// Upserts today's entry for the habit. Non-numeric or non-positive minutes,
/// or an unknown habit id, leave the data untouched.
pub fn log_minutes_at(
    data: &mut AppData,
    habit_id: &str,
    minutes_text: &str,
    today: NaiveDate,
) -> bool {
    let Ok(minutes) = minutes_text.trim().parse::<u32>() else {
        return false;
    };
    if minutes == 0 || !data.habits.iter().any(|habit| habit.id == habit_id) {
        return false;
    }

    let date = date_key(today);
    if let Some(existing) = data
        .habit_entries
        .iter_mut()
        .find(|entry| entry.habit_id == habit_id && entry.date == date)
    {
        existing.minutes = minutes;
    } else {
        data.habit_entries.push(HabitEntry {
            habit_id: habit_id.to_string(),
            date,
            minutes,
        });
    }
    true
}

pub fn save_gratitude(data: &mut AppData, content: &str, prompt: &str) -> bool {
    save_gratitude_at(data, content, prompt, Local::now().date_naive())
}

/// Upserts today's journal entry; a replacement gets a fresh id.
pub fn save_gratitude_at(
    data: &mut AppData,
    content: &str,
    prompt: &str,
    today: NaiveDate,
) -> bool {
    if content.trim().is_empty() {
        return false;
    }

    let entry = GratitudeEntry {
        id: Uuid::new_v4().to_string(),
        date: date_key(today),
        content: content.to_string(),
        prompt: prompt.to_string(),
    };

    if let Some(existing) = data
        .gratitude_entries
        .iter_mut()
        .find(|existing| existing.date == entry.date)
    {
        *existing = entry;
    } else {
        data.gratitude_entries.push(entry);
    }
    true
}

pub fn set_premium(data: &mut AppData, enabled: bool) -> bool {
    if data.is_premium == enabled {
        return false;
    }
    data.is_premium = enabled;
    true
}

fn reassign_ranks(data: &mut AppData) {
    for (position, habit) in data.habits.iter_mut().enumerate() {
        habit.importance = position as u32 + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(data: &AppData) -> Vec<&str> {
        data.habits.iter().map(|h| h.name.as_str()).collect()
    }

    fn assert_dense_ranks(data: &AppData) {
        let mut ranks: Vec<u32> = data.habits.iter().map(|h| h.importance).collect();
        ranks.sort_unstable();
        let expected: Vec<u32> = (1..=data.habits.len() as u32).collect();
        assert_eq!(ranks, expected);
    }

    fn seeded() -> AppData {
        let mut data = AppData::default();
        add_habit(&mut data, "Read");
        add_habit(&mut data, "Run");
        add_habit(&mut data, "Meditate");
        data
    }

    #[test]
    fn add_habit_assigns_next_rank() {
        let data = seeded();
        assert_eq!(names(&data), ["Read", "Run", "Meditate"]);
        assert_eq!(
            data.habits.iter().map(|h| h.importance).collect::<Vec<_>>(),
            [1, 2, 3]
        );
    }

    #[test]
    fn add_habit_rejects_blank_names() {
        let mut data = AppData::default();
        assert!(!add_habit(&mut data, "   "));
        assert!(data.habits.is_empty());
    }

    #[test]
    fn add_habit_trims_the_name() {
        let mut data = AppData::default();
        assert!(add_habit(&mut data, "  Read  "));
        assert_eq!(data.habits[0].name, "Read");
    }

    #[test]
    fn habit_ids_are_unique() {
        let data = seeded();
        assert_ne!(data.habits[0].id, data.habits[1].id);
        assert_ne!(data.habits[1].id, data.habits[2].id);
    }

    #[test]
    fn move_habit_swaps_and_rewrites_ranks() {
        let mut data = seeded();
        assert!(move_habit(&mut data, 2, "up"));
        assert_eq!(names(&data), ["Read", "Meditate", "Run"]);
        assert_dense_ranks(&data);
    }

    #[test]
    fn move_habit_is_its_own_inverse() {
        let mut data = seeded();
        let original = names(&data)
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        assert!(move_habit(&mut data, 1, "up"));
        assert!(move_habit(&mut data, 0, "down"));
        assert_eq!(names(&data), original);
        assert_dense_ranks(&data);
    }

    #[test]
    fn move_habit_out_of_bounds_is_a_noop() {
        let mut data = seeded();
        assert!(!move_habit(&mut data, 0, "up"));
        assert!(!move_habit(&mut data, 2, "down"));
        assert!(!move_habit(&mut data, 9, "up"));
        assert!(!move_habit(&mut data, 0, "sideways"));
        assert_eq!(names(&data), ["Read", "Run", "Meditate"]);
    }

    #[test]
    fn delete_habit_cascades_and_closes_rank_gap() {
        let mut data = seeded();
        let doomed = data.habits[1].id.clone();
        let survivor = data.habits[0].id.clone();
        log_minutes_at(
            &mut data,
            &doomed,
            "30",
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
        );
        log_minutes_at(
            &mut data,
            &survivor,
            "10",
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
        );

        assert!(delete_habit(&mut data, &doomed));
        assert_eq!(names(&data), ["Read", "Meditate"]);
        assert_dense_ranks(&data);
        assert!(data.habit_entries.iter().all(|e| e.habit_id != doomed));
        assert_eq!(data.habit_entries.len(), 1);
    }

    #[test]
    fn delete_unknown_habit_is_a_noop() {
        let mut data = seeded();
        assert!(!delete_habit(&mut data, "missing"));
        assert_eq!(data.habits.len(), 3);
    }

    #[test]
    fn ranks_stay_dense_across_mixed_operations() {
        let mut data = seeded();
        move_habit(&mut data, 0, "down");
        let id = data.habits[2].id.clone();
        delete_habit(&mut data, &id);
        add_habit(&mut data, "Stretch");
        move_habit(&mut data, 2, "up");
        assert_dense_ranks(&data);
    }

    #[test]
    fn log_minutes_upserts_per_day() {
        let mut data = seeded();
        let id = data.habits[0].id.clone();
        let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

        assert!(log_minutes_at(&mut data, &id, "25", day));
        assert!(log_minutes_at(&mut data, &id, "40", day));

        let matching: Vec<_> = data
            .habit_entries
            .iter()
            .filter(|e| e.habit_id == id && e.date == "2026-01-05")
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].minutes, 40);
    }

    #[test]
    fn log_minutes_rejects_bad_input() {
        let mut data = seeded();
        let id = data.habits[0].id.clone();
        let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

        assert!(!log_minutes_at(&mut data, &id, "abc", day));
        assert!(!log_minutes_at(&mut data, &id, "0", day));
        assert!(!log_minutes_at(&mut data, &id, "-5", day));
        assert!(!log_minutes_at(&mut data, "missing", "10", day));
        assert!(data.habit_entries.is_empty());
    }

    #[test]
    fn save_gratitude_upserts_per_day() {
        let mut data = AppData::default();
        let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

        assert!(save_gratitude_at(&mut data, "sunshine", "What made you smile today?", day));
        let first_id = data.gratitude_entries[0].id.clone();
        assert!(save_gratitude_at(&mut data, "coffee", "What made you smile today?", day));

        assert_eq!(data.gratitude_entries.len(), 1);
        assert_eq!(data.gratitude_entries[0].content, "coffee");
        // A replacement entry gets a fresh id.
        assert_ne!(data.gratitude_entries[0].id, first_id);
    }

    #[test]
    fn save_gratitude_rejects_blank_content() {
        let mut data = AppData::default();
        let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert!(!save_gratitude_at(&mut data, "  ", "prompt", day));
        assert!(data.gratitude_entries.is_empty());
    }

    #[test]
    fn set_premium_reports_changes_only() {
        let mut data = AppData::default();
        assert!(set_premium(&mut data, true));
        assert!(!set_premium(&mut data, true));
        assert!(data.is_premium);
        assert!(set_premium(&mut data, false));
    }
}
