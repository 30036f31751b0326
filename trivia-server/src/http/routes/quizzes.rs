//! Quiz play endpoint

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use rand::seq::SliceRandom;
use serde::Serialize;
use serde_json::Value;

use crate::http::error::ApiError;
use crate::models::{Question, QuizRequest};
use crate::state::AppState;

/// Quiz play response: the drawn question, or `false` once the category
/// is exhausted (not an error).
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Value,
}

/// Pick one question uniformly at random.
fn draw(eligible: &[Question]) -> Option<&Question> {
    eligible.choose(&mut rand::thread_rng())
}

/// POST /quizzes - random unseen question from the requested category
async fn play_quiz(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    // A body that fails to decode counts as a selection failure (500),
    // not a bad request; clients rely on this route's single error class
    let Json(req) = body.map_err(|e| ApiError::Internal {
        message: e.to_string(),
    })?;

    let category = req.quiz_category.id;
    let key = (!category.is_all()).then(|| category.as_key());

    let eligible = state
        .questions()
        .eligible(key.as_deref(), &req.previous_questions)
        .await?;

    let question = match draw(&eligible) {
        Some(q) => serde_json::to_value(q).map_err(|e| ApiError::Internal {
            message: e.to_string(),
        })?,
        None => Value::Bool(false),
    };

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(play_quiz))
}
