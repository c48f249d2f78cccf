//! RPP Generation: validate → compose → one gateway call.
//!
//! Stateless: nothing survives the call. A validation failure returns before
//! the gateway is touched.

use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{LlmError, TextGenerator};
use crate::rpp::composer::compose;
use crate::rpp::models::LessonPlanRequest;
use crate::rpp::prompts::{RPP_MAX_OUTPUT_TOKENS, RPP_SYSTEM, RPP_TEMPERATURE};

/// Runs the generation pipeline for one submission and returns the document text.
pub async fn generate_rpp(
    generator: &dyn TextGenerator,
    request: &LessonPlanRequest,
) -> Result<String, AppError> {
    let plan = request.validate()?;

    let generation_id = Uuid::new_v4();
    let composed = compose(&plan);
    info!(
        %generation_id,
        tier = composed.tier.label(),
        template = composed.template.key,
        prompt_chars = composed.prompt.chars().count(),
        "Composed RPP prompt"
    );

    let rpp = generator
        .generate(
            &composed.prompt,
            RPP_SYSTEM,
            RPP_TEMPERATURE,
            RPP_MAX_OUTPUT_TOKENS,
        )
        .await
        .map_err(|e| match e {
            LlmError::EmptyContent => AppError::EmptyGeneration,
            other => AppError::Llm(format!("Generation {generation_id} failed: {other}")),
        })?;

    info!(
        %generation_id,
        output_chars = rpp.chars().count(),
        "RPP generated"
    );

    Ok(rpp)
}
