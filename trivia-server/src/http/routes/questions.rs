//! Question endpoints: paginated listing, create/search, delete

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::http::error::ApiError;
use crate::models::{category_map, page_slice, parse_page, NewQuestion, Question};
use crate::state::AppState;

/// Query parameters for the question listing
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Raw page value; non-numeric input falls back to page 1
    pub page: Option<String>,
}

/// Question listing response
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: i64,
    pub categories: Map<String, Value>,
    pub current_category: String,
    pub success: bool,
}

/// GET /questions?page=N - one fixed-size page of the question list.
///
/// Loads the whole table and slices in memory; fine at question-bank
/// scale. An empty slice (page beyond range, or no questions) is a 404.
async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let page = parse_page(params.page.as_deref());

    let questions = state.questions().list_all().await?;
    let current = page_slice(&questions, page).ok_or(ApiError::NotFound)?;

    let categories = state.categories().list().await?;

    Ok(Json(QuestionListResponse {
        questions: current.to_vec(),
        total_questions: questions.len() as i64,
        categories: category_map(&categories),
        // The listing is category-agnostic; clients expect the field anyway
        current_category: String::new(),
        success: true,
    }))
}

/// POST /questions body: either a search request or a new question.
///
/// One endpoint serves both intents; a non-empty `searchTerm` selects
/// search mode, anything else is treated as a create.
#[derive(Debug, Deserialize)]
pub struct QuestionPostBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<Value>,
    pub difficulty: Option<Value>,
}

/// Search response
#[derive(Serialize)]
pub struct SearchResponse {
    pub questions: Vec<Question>,
    pub success: bool,
}

/// Create response
#[derive(Serialize)]
pub struct CreateResponse {
    pub success: bool,
    pub created: i32,
}

/// POST /questions - search when a search term is present, create otherwise
async fn create_or_search(
    State(state): State<AppState>,
    body: Result<Json<QuestionPostBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::BadRequest)?;
    let repo = state.questions();

    match body.search_term.as_deref().filter(|t| !t.is_empty()) {
        Some(term) => {
            let questions = repo.search(term).await.map_err(|e| {
                tracing::warn!("question search failed: {}", e);
                ApiError::Unprocessable
            })?;

            Ok(Json(SearchResponse {
                questions,
                success: true,
            })
            .into_response())
        }
        None => {
            let new = NewQuestion::from_body(
                body.question,
                body.answer,
                body.category,
                body.difficulty,
            )?;
            let created = repo.insert(&new).await.map_err(|e| {
                tracing::warn!("question insert failed: {}", e);
                ApiError::Unprocessable
            })?;

            Ok(Json(CreateResponse {
                success: true,
                created,
            })
            .into_response())
        }
    }
}

/// Delete response
#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: i32,
}

/// DELETE /questions/{id}
///
/// Lookup and delete failures collapse into one 422 class, a missing id
/// included; clients distinguish nothing finer.
async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    // The route only accepts integer ids; anything else is a route miss
    let id: i32 = id.parse().map_err(|_| ApiError::NotFound)?;

    let repo = state.questions();
    repo.get(id).await.map_err(|_| ApiError::Unprocessable)?;
    repo.delete(id).await.map_err(|e| {
        tracing::warn!("question delete failed: {}", e);
        ApiError::Unprocessable
    })?;

    Ok(Json(DeleteResponse {
        success: true,
        deleted: id,
    }))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/{id}", delete(delete_question))
}
