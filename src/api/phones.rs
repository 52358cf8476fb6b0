use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::catalog::{PhoneRecord, PhoneSummary};
use crate::AppState;

#[derive(Serialize)]
pub struct PhonesResponse {
    count: usize,
    phones: Vec<PhoneSummary>,
}

#[derive(Serialize)]
pub struct PhoneResponse {
    phone: PhoneRecord,
}

pub async fn list_phones(State(state): State<AppState>) -> Json<PhonesResponse> {
    let phones = state.catalog.list_phones().await;

    Json(PhonesResponse {
        count: phones.len(),
        phones,
    })
}

pub async fn get_phone(
    State(state): State<AppState>,
    Path(model_name): Path<String>,
) -> Result<Json<PhoneResponse>, ApiError> {
    match state.catalog.get_by_model(&model_name).await {
        Some(phone) => Ok(Json(PhoneResponse { phone })),
        None => Err(ApiError::NotFound(format!(
            "Phone model '{}' not found in database",
            model_name
        ))),
    }
}
