use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::CompletionRecord;
use crate::domain::completion::repository::CompletionRepository;
use crate::domain::completion::use_cases::search::{
    SearchCompletionsParams, SearchCompletionsUseCase,
};
use crate::domain::logger::Logger;

pub struct SearchCompletionsUseCaseImpl {
    pub repository: Arc<dyn CompletionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchCompletionsUseCase for SearchCompletionsUseCaseImpl {
    async fn execute(
        &self,
        params: SearchCompletionsParams,
    ) -> Result<Vec<CompletionRecord>, CompletionError> {
        if params.term.trim().is_empty() {
            return Err(CompletionError::SearchTermRequired);
        }

        self.logger
            .debug(&format!("Searching completions for: {}", params.term));

        let records = self
            .repository
            .search(&params.term)
            .await
            .map_err(CompletionError::Repository)?;

        self.logger
            .debug(&format!("Search matched {} completions", records.len()));

        Ok(records)
    }
}
