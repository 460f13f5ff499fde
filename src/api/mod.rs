mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use handlers::{generate, index, not_found, question_ans, NO_RESPONSE_FALLBACK};
pub use models::{
    AnswerResponse, ErrorResponse, GenerateRequest, GenerateResponse, Generation, QuestionRequest,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/question_ans", post(question_ans))
        .fallback(not_found)
        .with_state(state)
}
