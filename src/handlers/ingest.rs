//! Handler for text-upload ingestion.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use tracing::info;

use crate::extract::add_birthdays_from_text;
use crate::handlers::birthday::MessageResponse;
use crate::handlers::error::ApiError;
use crate::models::Data;

/// `POST /birthdays/from_text` - extract birthdays from an uploaded text file.
///
/// Expects a multipart form with a `file` part carrying UTF-8 text and one
/// or more `names` parts listing candidate names. Non-UTF-8 file content is
/// rejected before any extraction runs.
pub async fn add_birthdays_from_upload(
    State(data): State<Arc<Data>>,
    mut multipart: Multipart,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut text = None;
    let mut names = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("file") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Upload(e.to_string()))?;
                let decoded =
                    String::from_utf8(bytes.to_vec()).map_err(|_| ApiError::InvalidEncoding)?;
                text = Some(decoded);
            }
            Some("names") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::Upload(e.to_string()))?;
                names.push(value);
            }
            _ => {}
        }
    }

    let text = text.ok_or_else(|| ApiError::Upload("missing `file` part".to_string()))?;

    let mut calendar = data.calendar.write().await;
    let added = add_birthdays_from_text(&text, &names, &mut calendar);
    info!("Added {added} birthdays from uploaded text");
    Ok(Json(MessageResponse {
        message: format!("{added} birthdays added from text."),
    }))
}
