use axum::{Json, extract::State};
use event_admin_domain::{app::AppState, category::Category};

use crate::ApiError;

#[derive(serde::Serialize, Clone)]
pub struct JsonCategoriesResponse {
    data: Vec<JsonCategory>,
}

#[derive(serde::Serialize, Clone)]
pub struct JsonCategory {
    id: i64,
    name: String,
}

impl From<Category> for JsonCategory {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

pub async fn get_categories(
    State(app_state): State<AppState>,
) -> Result<Json<JsonCategoriesResponse>, ApiError> {
    let categories = app_state
        .category_service
        .list_categories()
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to fetch categories"))?;

    Ok(Json(JsonCategoriesResponse {
        data: categories.into_iter().map(JsonCategory::from).collect(),
    }))
}
