use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::advisor::PhoneSpecs;
use crate::api::error::ApiError;
use crate::AppState;

#[derive(Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AskResponse {
    pub phone_model: String,
    pub specs: PhoneSpecs,
    pub review: String,
    pub status: String,
}

pub async fn ask_advisor(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    let advice = state.advisor.ask(&request.question).await.map_err(|e| {
        tracing::info!(error = %e, "question not answered");
        ApiError::from(e)
    })?;

    Ok(Json(AskResponse {
        phone_model: advice.phone_model,
        specs: advice.specs,
        review: advice.review,
        status: "success".to_string(),
    }))
}
