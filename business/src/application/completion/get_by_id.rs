use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::CompletionRecord;
use crate::domain::completion::repository::CompletionRepository;
use crate::domain::completion::use_cases::get_by_id::{
    GetCompletionByIdParams, GetCompletionByIdUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetCompletionByIdUseCaseImpl {
    pub repository: Arc<dyn CompletionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCompletionByIdUseCase for GetCompletionByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetCompletionByIdParams,
    ) -> Result<CompletionRecord, CompletionError> {
        self.logger
            .debug(&format!("Fetching completion by id: {}", params.id));

        let record = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CompletionError::NotFound,
                other => CompletionError::Repository(other),
            })?;

        Ok(record)
    }
}
