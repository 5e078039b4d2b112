pub mod gemini;
pub mod local;

use crate::errors::OrganizeError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface for text generation across different
/// Large Language Models (e.g., Gemini, local OpenAI-compatible servers).
/// Each call is independent: the full context travels in the prompts, and the
/// provider returns a single response string.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    ///
    /// The result should be a string containing the AI's raw response.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, OrganizeError>;
}

dyn_clone::clone_trait_object!(AiProvider);
