use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::error::ApiError;
use crate::prompt;
use crate::AppState;

use super::models::{
    AnswerResponse, ErrorResponse, GenerateRequest, GenerateResponse, QuestionRequest,
};

/// Returned as the solution when the model produced no usable text.
pub const NO_RESPONSE_FALLBACK: &str = "Not able to generate response";

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let generation = payload.validate()?;

    let prompt = prompt::render(generation.language, generation.problem, generation.mode);
    let response = state.model.generate_content(&prompt).await?;

    let solution = match response.first_text() {
        Some(text) => text.to_string(),
        None => {
            tracing::warn!(reason = response.empty_reason(), "model returned no text");
            NO_RESPONSE_FALLBACK.to_string()
        }
    };

    tracing::info!(
        mode = generation.mode,
        language = generation.language,
        "generated solution"
    );
    Ok(Json(GenerateResponse { solution }))
}

pub async fn question_ans(
    State(state): State<AppState>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let question = payload
        .ok()
        .and_then(|Json(request)| request.question)
        .unwrap_or_default();

    let response = state.model.generate_content(&question).await?;
    let answer = match response.first_text() {
        Some(text) => text.to_string(),
        None => {
            tracing::warn!(reason = response.empty_reason(), "model returned no answer");
            return Err(ApiError::EmptyAnswer);
        }
    };

    Ok(Json(AnswerResponse { answer }))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}
