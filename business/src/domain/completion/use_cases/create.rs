use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::CompletionRecord;

pub struct CreateCompletionParams {
    pub prompt: String,
}

#[async_trait]
pub trait CreateCompletionUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CreateCompletionParams,
    ) -> Result<CompletionRecord, CompletionError>;
}
