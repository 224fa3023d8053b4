use crate::errors::AppError;
use crate::insights::insights;
use crate::models::{
    AddHabitRequest, AppData, DeleteHabitRequest, GratitudeRequest, HabitHistory, HabitOverview,
    HistoryResponse, InsightsResponse, LogMinutesRequest, MoveHabitRequest, OverviewResponse,
    PremiumRequest,
};
use crate::ops;
use crate::prompts::prompt_at;
use crate::report::{date_key, report_for, Period, PeriodStat};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::Local;
use serde::Deserialize;

pub async fn index() -> Html<String> {
    Html(render_index(&today_string()))
}

pub async fn get_overview(State(state): State<AppState>) -> Json<OverviewResponse> {
    let data = state.data.lock().await;
    Json(build_overview(&data))
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<AddHabitRequest>,
) -> Result<Json<OverviewResponse>, AppError> {
    mutate(&state, |data| ops::add_habit(data, &payload.name)).await
}

pub async fn move_habit(
    State(state): State<AppState>,
    Json(payload): Json<MoveHabitRequest>,
) -> Result<Json<OverviewResponse>, AppError> {
    mutate(&state, |data| {
        ops::move_habit(data, payload.index, &payload.direction)
    })
    .await
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Json(payload): Json<DeleteHabitRequest>,
) -> Result<Json<OverviewResponse>, AppError> {
    mutate(&state, |data| ops::delete_habit(data, &payload.id)).await
}

pub async fn log_minutes(
    State(state): State<AppState>,
    Json(payload): Json<LogMinutesRequest>,
) -> Result<Json<OverviewResponse>, AppError> {
    mutate(&state, |data| {
        ops::log_minutes(data, &payload.habit_id, &payload.minutes)
    })
    .await
}

pub async fn save_gratitude(
    State(state): State<AppState>,
    Json(payload): Json<GratitudeRequest>,
) -> Result<Json<OverviewResponse>, AppError> {
    mutate(&state, |data| {
        ops::save_gratitude(data, &payload.content, &payload.prompt)
    })
    .await
}

pub async fn set_premium(
    State(state): State<AppState>,
    Json(payload): Json<PremiumRequest>,
) -> Result<Json<OverviewResponse>, AppError> {
    mutate(&state, |data| ops::set_premium(data, payload.enabled)).await
}

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub period: String,
}

pub async fn get_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<Vec<PeriodStat>>, AppError> {
    let Some(period) = Period::parse(&query.period) else {
        return Err(AppError::bad_request(
            "period must be 'week', 'month' or 'year'",
        ));
    };
    let data = state.data.lock().await;
    Ok(Json(report_for(period, &data)))
}

pub async fn get_insights(State(state): State<AppState>) -> Json<InsightsResponse> {
    let data = state.data.lock().await;
    Json(InsightsResponse {
        insights: insights(&data),
    })
}

pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let data = state.data.lock().await;

    let habits = data
        .habits
        .iter()
        .map(|habit| {
            let mut entries: Vec<_> = data
                .habit_entries
                .iter()
                .filter(|entry| entry.habit_id == habit.id)
                .cloned()
                .collect();
            entries.sort_by(|a, b| b.date.cmp(&a.date));
            entries.truncate(10);
            HabitHistory {
                id: habit.id.clone(),
                name: habit.name.clone(),
                entries,
            }
        })
        .collect();

    let mut gratitude: Vec<_> = data.gratitude_entries.to_vec();
    gratitude.sort_by(|a, b| b.date.cmp(&a.date));

    Json(HistoryResponse { habits, gratitude })
}

/// Applies one mutation under the state lock, persists only when something
/// changed, and answers with the fresh overview. Rejected input still gets a
/// 200 with the unchanged state.
async fn mutate(
    state: &AppState,
    op: impl FnOnce(&mut AppData) -> bool,
) -> Result<Json<OverviewResponse>, AppError> {
    let mut data = state.data.lock().await;
    if op(&mut data) {
        persist_data(&state.data_path, &data).await?;
    }
    Ok(Json(build_overview(&data)))
}

fn build_overview(data: &AppData) -> OverviewResponse {
    let date = today_string();

    let habits = data
        .habits
        .iter()
        .map(|habit| HabitOverview {
            id: habit.id.clone(),
            name: habit.name.clone(),
            importance: habit.importance,
            today_minutes: data
                .habit_entries
                .iter()
                .find(|entry| entry.habit_id == habit.id && entry.date == date)
                .map(|entry| entry.minutes),
        })
        .collect();

    let today_gratitude = data
        .gratitude_entries
        .iter()
        .find(|entry| entry.date == date)
        .cloned();

    // Keep the prompt the entry was written to once one exists; otherwise
    // pick from the rotation.
    let prompt = today_gratitude
        .as_ref()
        .map(|entry| entry.prompt.clone())
        .unwrap_or_else(|| prompt_at(clock_index()).to_string());

    OverviewResponse {
        date,
        habits,
        today_gratitude,
        prompt,
        is_premium: data.is_premium,
    }
}

fn clock_index() -> usize {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos() as usize)
        .unwrap_or(0)
}

fn today_string() -> String {
    date_key(Local::now().date_naive())
}
