use async_trait::async_trait;

use super::errors::CompletionError;
use super::model::GeneratedCompletion;

/// Service port for generating a completion from a prompt via the
/// remote model API.
#[async_trait]
pub trait CompletionGeneratorService: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GeneratedCompletion, CompletionError>;
}
