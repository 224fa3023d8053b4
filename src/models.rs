use serde::{Deserialize, Serialize};

/// A user-defined recurring activity tracked in minutes per day.
///
/// `importance` is a dense 1-based rank equal to the habit's position in the
/// collection. Every reorder or delete reassigns ranks so the set of values
/// is always exactly `{1..=N}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub importance: u32,
    pub created_at: String,
}

/// Minutes logged for one habit on one calendar day.
///
/// At most one entry exists per (habit_id, date) pair; logging again for the
/// same day overwrites the minutes. Entries are deleted only when their habit
/// is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitEntry {
    pub habit_id: String,
    /// Zero-padded `YYYY-MM-DD`, so lexicographic order is chronological.
    pub date: String,
    pub minutes: u32,
}

/// One day's journal response to a gratitude prompt. At most one per date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GratitudeEntry {
    pub id: String,
    pub date: String,
    pub content: String,
    pub prompt: String,
}

/// Whole persisted snapshot, overwritten on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AppData {
    pub habits: Vec<Habit>,
    pub habit_entries: Vec<HabitEntry>,
    pub gratitude_entries: Vec<GratitudeEntry>,
    pub is_premium: bool,
}

#[derive(Debug, Deserialize)]
pub struct AddHabitRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct MoveHabitRequest {
    pub index: usize,
    pub direction: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteHabitRequest {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct LogMinutesRequest {
    pub habit_id: String,
    /// Minutes as typed by the user; non-numeric or non-positive input is a
    /// silent no-op.
    pub minutes: String,
}

#[derive(Debug, Deserialize)]
pub struct GratitudeRequest {
    pub content: String,
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct PremiumRequest {
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct HabitOverview {
    pub id: String,
    pub name: String,
    pub importance: u32,
    pub today_minutes: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub date: String,
    pub habits: Vec<HabitOverview>,
    pub today_gratitude: Option<GratitudeEntry>,
    pub prompt: String,
    pub is_premium: bool,
}

#[derive(Debug, Serialize)]
pub struct HabitHistory {
    pub id: String,
    pub name: String,
    pub entries: Vec<HabitEntry>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub habits: Vec<HabitHistory>,
    pub gratitude: Vec<GratitudeEntry>,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: Vec<String>,
}
