//! Axum route handlers for the RPP API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::rpp::generator::generate_rpp;
use crate::rpp::models::LessonPlanRequest;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRppResponse {
    pub rpp: String,
}

/// POST /api/generate-rpp
///
/// Validates the form, composes the prompt and returns the generated document.
/// 400 on missing fields (no external call), 500 on any generation failure.
pub async fn handle_generate_rpp(
    State(state): State<AppState>,
    payload: Result<Json<LessonPlanRequest>, JsonRejection>,
) -> Result<Json<GenerateRppResponse>, AppError> {
    let Json(request) = payload?;

    let rpp = generate_rpp(state.generator.as_ref(), &request).await?;

    Ok(Json(GenerateRppResponse { rpp }))
}
