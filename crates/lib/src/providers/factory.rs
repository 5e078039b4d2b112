//! # Dynamic AI Provider Factory
//!
//! This module centralizes the logic for creating AI provider instances from a
//! model name. By placing it in the library, any consumer (the CLI today, other
//! front ends tomorrow) gets the same provider selection behavior.

use crate::{
    errors::OrganizeError,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
};
use tracing::info;

/// Creates an AI provider instance based on a model name.
///
/// Model names starting with `gemini` select the Gemini REST API, with the
/// endpoint derived from the model name and the key read from `GEMINI_API_KEY`.
/// Any other model name selects an OpenAI-compatible local provider, whose
/// endpoint must be supplied via `LOCAL_AI_API_URL`.
pub fn create_provider(model_name: &str) -> Result<Box<dyn AiProvider>, OrganizeError> {
    info!("Creating AI provider for model: '{model_name}'");

    if model_name.starts_with("gemini") {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            OrganizeError::MissingAiProvider(
                "GEMINI_API_KEY must be set in the environment (or .env) to use Gemini models."
                    .to_string(),
            )
        })?;
        let api_url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{model_name}:generateContent"
        );
        info!("Configuring Gemini provider with URL: {api_url}");
        Ok(Box::new(GeminiProvider::new(api_url, api_key)?))
    } else {
        let api_url = std::env::var("LOCAL_AI_API_URL").map_err(|_| {
            OrganizeError::MissingAiProvider(
                "LOCAL_AI_API_URL must be set to use a non-Gemini model.".to_string(),
            )
        })?;
        let api_key = std::env::var("LOCAL_AI_API_KEY").ok();
        info!("Configuring local AI provider with URL: {api_url}");
        Ok(Box::new(LocalAiProvider::new(
            api_url,
            api_key,
            Some(model_name.to_string()),
        )?))
    }
}
