use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::CompletionRecord;

pub struct GetCompletionByIdParams {
    pub id: u64,
}

#[async_trait]
pub trait GetCompletionByIdUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetCompletionByIdParams,
    ) -> Result<CompletionRecord, CompletionError>;
}
