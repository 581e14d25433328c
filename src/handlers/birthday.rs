//! Handlers for the structured birthday endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calendar::{CalendarError, UpcomingBirthday};
use crate::constants::UPCOMING_LIMIT;
use crate::handlers::error::ApiError;
use crate::models::{Birthday, Data};
use crate::utils::validation::{validate_birthday, validate_day, validate_month};

/// Query parameters identifying a birthday to delete
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub name: String,
    pub month: u32,
    pub day: u32,
}

/// Confirmation message wrapper
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `POST /birthdays` - add a birthday to the calendar, echoing the stored record
pub async fn add_birthday(
    State(data): State<Arc<Data>>,
    Json(birthday): Json<Birthday>,
) -> Result<Json<Birthday>, ApiError> {
    validate_birthday(&birthday)?;

    let mut calendar = data.calendar.write().await;
    calendar.insert(birthday.clone())?;
    info!(
        "Added birthday for {} on {}/{}",
        birthday.name, birthday.month, birthday.day
    );
    Ok(Json(birthday))
}

/// `DELETE /birthdays?name=&month=&day=` - delete the first matching birthday
pub async fn delete_birthday(
    State(data): State<Arc<Data>>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_month(params.month)?;
    validate_day(params.day)?;

    let mut calendar = data.calendar.write().await;
    let message = calendar.remove(&params.name, params.month, params.day)?;
    info!("{message}");
    Ok(Json(MessageResponse { message }))
}

/// `GET /birthdays/upcoming` - the next 10 upcoming birthdays from today (UTC)
pub async fn upcoming_birthdays(State(data): State<Arc<Data>>) -> Json<Vec<UpcomingBirthday>> {
    let calendar = data.calendar.read().await;
    Json(calendar.upcoming(Utc::now().date_naive(), UPCOMING_LIMIT))
}

/// `GET /calendar/{month}` - all birthdays in a month, keyed by day
pub async fn birthdays_by_month(
    State(data): State<Arc<Data>>,
    Path(month): Path<u32>,
) -> Result<Json<BTreeMap<u32, Vec<Birthday>>>, ApiError> {
    validate_month(month)?;

    let calendar = data.calendar.read().await;
    Ok(Json(calendar.month(month)?.clone()))
}

/// `GET /calendar/{month}/{day}` - birthdays on a specific day
pub async fn birthdays_by_day(
    State(data): State<Arc<Data>>,
    Path((month, day)): Path<(u32, u32)>,
) -> Result<Json<Vec<Birthday>>, ApiError> {
    validate_month(month)?;
    validate_day(day)?;

    let calendar = data.calendar.read().await;
    let bucket = calendar.day(month, day).ok_or(CalendarError::DayNotFound)?;
    Ok(Json(bucket.to_vec()))
}
