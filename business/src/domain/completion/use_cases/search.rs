use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::CompletionRecord;

pub struct SearchCompletionsParams {
    pub term: String,
}

#[async_trait]
pub trait SearchCompletionsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SearchCompletionsParams,
    ) -> Result<Vec<CompletionRecord>, CompletionError>;
}
