use thiserror::Error;

/// Custom error types for the application.
#[derive(Error, Debug)]
pub enum OrganizeError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize the AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("The AI provider returned an error: {0}")]
    AiApi(String),
    #[error("No AI provider is configured: {0}")]
    MissingAiProvider(String),
    #[error("API key is missing")]
    MissingApiKey,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to parse classification response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write the bookmark export: {0}")]
    Export(#[from] std::io::Error),
}
