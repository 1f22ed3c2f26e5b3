use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use event_admin_domain::{
    ServiceResult, app::AppState,
    event::{EventId, NewEvent, missing_category},
};

use crate::ApiError;

const CREATE_FAILED: &str = "Failed to create event";

type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Form fields as the admin panel posts them.
#[derive(serde::Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JsonEventRequest {
    #[serde(default)]
    event_name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    is_checked: bool,
    #[serde(default)]
    date: String,
    #[serde(default)]
    price: JsonText,
    #[serde(default)]
    location: String,
    #[serde(default)]
    organizer_name: String,
    category_id: JsonText,
}

/// A field the form may send either as a string or as a JSON number.
#[derive(serde::Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum JsonText {
    Number(serde_json::Number),
    Text(String),
}

impl Default for JsonText {
    fn default() -> Self {
        JsonText::Text(String::new())
    }
}

impl std::fmt::Display for JsonText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonText::Number(n) => write!(f, "{}", n),
            JsonText::Text(s) => write!(f, "{}", s),
        }
    }
}

impl JsonEventRequest {
    fn to_new_event(&self) -> ServiceResult<NewEvent> {
        let category_id = match &self.category_id {
            JsonText::Number(n) => n.as_i64(),
            JsonText::Text(s) => s.trim().parse().ok(),
        }
        .ok_or_else(|| missing_category(&self.category_id))?;

        Ok(NewEvent {
            name: self.event_name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            promoted: self.is_checked,
            date: self.date.clone(),
            price: self.price.to_string(),
            location: self.location.clone(),
            organizer: self.organizer_name.clone(),
            category_id,
        })
    }
}

/// The new id followed by the submitted body exactly as sent. Keys in the
/// body win over `id`.
fn created_event(id: EventId, body: JsonObject) -> JsonObject {
    let mut data = JsonObject::new();
    data.insert("id".to_string(), id.into());
    data.extend(body);
    data
}

#[derive(serde::Serialize)]
pub struct JsonCreateEventResponse {
    success: bool,
    message: String,
    data: JsonObject,
}

pub async fn create_event(
    State(app_state): State<AppState>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> Result<(StatusCode, Json<JsonCreateEventResponse>), ApiError> {
    let Json(body) = payload?;
    let req: JsonEventRequest = serde_json::from_value(serde_json::Value::Object(body.clone()))?;
    let event = req
        .to_new_event()
        .map_err(|e| ApiError::from_service(e, CREATE_FAILED))?;

    let id = app_state
        .event_service
        .create_event(&event)
        .await
        .map_err(|e| ApiError::from_service(e, CREATE_FAILED))?;

    Ok((
        StatusCode::CREATED,
        Json(JsonCreateEventResponse {
            success: true,
            message: "Event created successfully!".to_string(),
            data: created_event(id, body),
        }),
    ))
}
