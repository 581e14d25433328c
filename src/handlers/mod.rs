/// Handler modules for the HTTP endpoints
mod birthday;
mod error;
mod ingest;

pub use error::ApiError;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::models::Data;

use birthday::{
    add_birthday, birthdays_by_day, birthdays_by_month, delete_birthday, upcoming_birthdays,
};
use ingest::add_birthdays_from_upload;

/// Build the application router over shared state
pub fn router(data: Arc<Data>) -> Router {
    Router::new()
        .route("/birthdays", post(add_birthday).delete(delete_birthday))
        .route("/birthdays/upcoming", get(upcoming_birthdays))
        .route("/birthdays/from_text", post(add_birthdays_from_upload))
        .route("/calendar/{month}", get(birthdays_by_month))
        .route("/calendar/{month}/{day}", get(birthdays_by_day))
        .with_state(data)
}
