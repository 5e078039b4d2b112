#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared helpers for the integration tests: a deterministic, programmable
//! AI provider and one-time tracing setup.

use async_trait::async_trait;
use shiori::providers::ai::AiProvider;
use shiori::OrganizeError;
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenvy::dotenv().ok();
        tracing_subscriber::fmt::init();
    });
}

// --- Mock AI Provider for Logic Testing ---

/// A stub provider that replays a programmed queue of responses and records
/// every (system, user) prompt pair it receives. Once the queue is exhausted
/// it fails, which doubles as the "provider invocation failed" case.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<(String, String)>>>,
    pub responses: Arc<RwLock<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
        }
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, OrganizeError> {
        self.call_history
            .write()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        if let Some(response) = self.responses.write().unwrap().pop() {
            Ok(response)
        } else {
            Err(OrganizeError::AiApi(
                "MockAiProvider: no response programmed".to_string(),
            ))
        }
    }
}
