use crate::errors::AppError;
use crate::models::{AddDayRequest, AddHabitRequest, AddHabitResponse, Habit};
use crate::state::AppState;
use crate::store;
use crate::storage::persist_habits;
use crate::ui::INDEX_HTML;
use crate::validator::validate;
use crate::view::{habit_view, page_view, HabitView, PageView};
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use std::collections::HashMap;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn list_habits(State(state): State<AppState>) -> Json<Vec<Habit>> {
    let habits = state.habits.lock().await;
    Json(habits.clone())
}

pub async fn get_habit_view(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<PageView>, AppError> {
    let habits = state.habits.lock().await;
    let view = page_view(&habits, id)
        .ok_or_else(|| AppError::not_found(format!("no habit with id {id}")))?;
    Ok(Json(view))
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<AddHabitRequest>,
) -> Result<Json<AddHabitResponse>, AppError> {
    let values = HashMap::from([
        ("name".to_string(), payload.name),
        ("icon".to_string(), payload.icon),
        ("target".to_string(), payload.target),
    ]);
    let fields = validate(&values, &["name", "icon", "target"]).map_err(AppError::validation)?;

    let target: i64 = fields["target"]
        .parse()
        .map_err(|_| AppError::validation(vec!["target".into()]))?;

    let mut habits = state.habits.lock().await;
    let id = store::add_habit(
        &mut habits,
        fields["name"].clone(),
        fields["icon"].clone(),
        target,
    );
    persist_habits(&state.data_path, &habits).await?;

    Ok(Json(AddHabitResponse { id }))
}

pub async fn add_day(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(payload): Json<AddDayRequest>,
) -> Result<Json<HabitView>, AppError> {
    let values = HashMap::from([("comment".to_string(), payload.comment)]);
    let fields = validate(&values, &["comment"]).map_err(AppError::validation)?;

    let mut habits = state.habits.lock().await;
    if !store::add_day(&mut habits, id, fields["comment"].clone()) {
        return Err(AppError::not_found(format!("no habit with id {id}")));
    }
    persist_habits(&state.data_path, &habits).await?;

    let habit = store::find_habit(&habits, id)
        .ok_or_else(|| AppError::not_found(format!("no habit with id {id}")))?;
    Ok(Json(habit_view(habit)))
}

pub async fn delete_day(
    State(state): State<AppState>,
    Path((id, index)): Path<(u32, usize)>,
) -> Result<Json<HabitView>, AppError> {
    let mut habits = state.habits.lock().await;
    if store::find_habit(&habits, id).is_none() {
        return Err(AppError::not_found(format!("no habit with id {id}")));
    }

    // Out-of-range index performs no removal; the current view still comes
    // back so the page rerenders from truth.
    if store::delete_day(&mut habits, id, index) {
        persist_habits(&state.data_path, &habits).await?;
    }

    let habit = store::find_habit(&habits, id)
        .ok_or_else(|| AppError::not_found(format!("no habit with id {id}")))?;
    Ok(Json(habit_view(habit)))
}
