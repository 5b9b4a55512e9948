use crate::calendar;
use crate::entries::{describe_entry, entry_value};
use crate::errors::{AppError, HabitError};
use crate::habits::{habit_view, preview_habit};
use crate::models::{
    EntryRequest, EntryResponse, HabitDraft, HabitView, HeatmapQuery, ImportResponse,
    OptionsResponse, COLORS, METRIC_TYPES, STATISTICS,
};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use chrono::Datelike;
use tracing::{info, warn};

pub async fn index() -> Html<String> {
    let today = calendar::today();
    Html(render_index(&calendar::format_date(today), today.year()))
}

pub async fn get_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        metric_types: &METRIC_TYPES,
        colors: &COLORS,
        statistics: &STATISTICS,
    })
}

pub async fn list_habits(
    State(state): State<AppState>,
    Query(query): Query<HeatmapQuery>,
) -> Json<Vec<HabitView>> {
    let today = calendar::today();
    let data = state.data.lock().await;
    Json(
        data.habits
            .iter()
            .map(|habit| habit_view(habit, query.year, today))
            .collect(),
    )
}

pub async fn get_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<HeatmapQuery>,
) -> Result<Json<HabitView>, AppError> {
    let data = state.data.lock().await;
    let habit = data.find(&id)?;
    Ok(Json(habit_view(habit, query.year, calendar::today())))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(draft): Json<HabitDraft>,
) -> Result<(StatusCode, Json<HabitView>), AppError> {
    let view = state
        .commit(|data| Ok(habit_view(data.create_habit(draft)?, None, calendar::today())))
        .await?;
    info!(habit = %view.habit.id, "created habit");
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn update_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<HabitDraft>,
) -> Result<Json<HabitView>, AppError> {
    let view = state
        .commit(|data| Ok(habit_view(data.update_habit(&id, draft)?, None, calendar::today())))
        .await?;
    info!(habit = %id, "updated habit");
    Ok(Json(view))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.commit(|data| data.delete_habit(&id)).await?;
    info!(habit = %id, "deleted habit");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path((id, date)): Path<(String, String)>,
) -> Result<Json<EntryResponse>, AppError> {
    if calendar::parse_date(&date).is_none() {
        return Err(HabitError::InvalidDate(date).into());
    }
    let data = state.data.lock().await;
    let habit = data.find(&id)?;
    Ok(Json(EntryResponse {
        value: entry_value(&habit.entries, &date),
        tooltip: describe_entry(habit, &date),
        date,
    }))
}

pub async fn set_entry(
    State(state): State<AppState>,
    Path((id, date)): Path<(String, String)>,
    Json(payload): Json<EntryRequest>,
) -> Result<Json<HabitView>, AppError> {
    let view = state
        .commit(|data| {
            let habit = data.set_entry(&id, &date, payload.value)?;
            Ok(habit_view(habit, None, calendar::today()))
        })
        .await?;
    info!(habit = %id, %date, value = payload.value, "saved entry");
    Ok(Json(view))
}

pub async fn preview(Json(draft): Json<HabitDraft>) -> Json<HabitView> {
    let today = calendar::today();
    let habit = preview_habit(draft, &mut rand::thread_rng(), today);
    Json(habit_view(&habit, None, today))
}

pub async fn export_habits(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let data = state.data.lock().await;
    let body = data.export_json().map_err(AppError::internal)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"habits.json\"",
            ),
        ],
        body,
    ))
}

pub async fn import_habits(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ImportResponse>, AppError> {
    let imported = state
        .commit(|data| data.import_json(&body))
        .await
        .inspect_err(|err| warn!("rejected import: {}", err.message))?;
    info!("imported {imported} habits");
    Ok(Json(ImportResponse { imported }))
}
