//! Category endpoints

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::http::error::ApiError;
use crate::models::{category_map, Question};
use crate::state::AppState;

/// Category listing response
#[derive(Serialize)]
pub struct CategoryListResponse {
    pub categories: Map<String, Value>,
    pub success: bool,
}

/// GET /categories - all categories as an id -> type mapping
async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, ApiError> {
    let categories = state.categories().list().await?;

    Ok(Json(CategoryListResponse {
        categories: category_map(&categories),
        success: true,
    }))
}

/// Questions-in-category response
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
}

/// GET /categories/{id}/questions - all questions referencing the category.
///
/// The stored reference is matched against the decimal form of the path
/// id. An unknown category yields an empty list, not an error.
async fn questions_by_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    // The route only accepts integer ids; anything else is a route miss
    let id: i32 = id.parse().map_err(|_| ApiError::NotFound)?;

    let questions = state.questions().by_category(&id.to_string()).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
    }))
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_by_category))
}
