use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::CompletionRecord;

pub struct ListRecentCompletionsParams {
    pub limit: usize,
}

#[async_trait]
pub trait ListRecentCompletionsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListRecentCompletionsParams,
    ) -> Result<Vec<CompletionRecord>, CompletionError>;
}
