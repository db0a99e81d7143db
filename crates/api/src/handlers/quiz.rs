//! Handlers for the SDG knowledge quiz.

use axum::extract::State;
use axum::Json;
use hub_core::quiz::{public_questions, score_answers, PublicQuestion};
use hub_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuizSubmission {
    /// Chosen option index per question, in question order.
    pub answers: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct QuizOutcome {
    pub score: i32,
    pub total: i32,
    pub correct: Vec<bool>,
    /// Attempts recorded on the profile, including this one.
    pub attempts: i32,
}

/// GET /api/v1/quiz
pub async fn questions() -> Json<DataResponse<Vec<PublicQuestion>>> {
    Json(DataResponse {
        data: public_questions(),
    })
}

/// POST /api/v1/quiz/submit
///
/// Scores server-side and stores the score on the caller's profile.
pub async fn submit(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<QuizSubmission>,
) -> AppResult<Json<DataResponse<QuizOutcome>>> {
    let result = score_answers(&input.answers)?;

    let user = UserRepo::record_quiz_result(&state.pool, auth.user_id, result.score)
        .await?
        .ok_or(AppError::not_found("User", auth.user_id))?;

    tracing::info!(
        user_id = %auth.user_id,
        score = result.score,
        attempts = user.quiz_attempts,
        "Quiz submitted",
    );

    Ok(Json(DataResponse {
        data: QuizOutcome {
            score: result.score,
            total: result.total,
            correct: result.correct,
            attempts: user.quiz_attempts,
        },
    }))
}
