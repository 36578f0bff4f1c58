use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::CompletionRecord;
use crate::domain::completion::repository::CompletionRepository;
use crate::domain::completion::use_cases::list_recent::{
    ListRecentCompletionsParams, ListRecentCompletionsUseCase,
};
use crate::domain::logger::Logger;

pub struct ListRecentCompletionsUseCaseImpl {
    pub repository: Arc<dyn CompletionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListRecentCompletionsUseCase for ListRecentCompletionsUseCaseImpl {
    async fn execute(
        &self,
        params: ListRecentCompletionsParams,
    ) -> Result<Vec<CompletionRecord>, CompletionError> {
        self.logger.debug(&format!(
            "Listing recent completions (limit: {})",
            params.limit
        ));

        let records = self
            .repository
            .list_recent(params.limit)
            .await
            .map_err(CompletionError::Repository)?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::completion::model::{NewCompletion, TokenUsage};
    use crate::domain::errors::RepositoryError;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub CompletionRepo {}

        #[async_trait]
        impl CompletionRepository for CompletionRepo {
            async fn insert(&self, new: NewCompletion) -> Result<CompletionRecord, RepositoryError>;
            async fn get_by_id(&self, id: u64) -> Result<CompletionRecord, RepositoryError>;
            async fn list_recent(&self, limit: usize) -> Result<Vec<CompletionRecord>, RepositoryError>;
            async fn search(&self, term: &str) -> Result<Vec<CompletionRecord>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn sample_record(id: u64) -> CompletionRecord {
        CompletionRecord {
            id,
            prompt: format!("prompt {}", id),
            completion: "text".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            usage: TokenUsage::new(1, 1),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn should_forward_limit_to_repository() {
        let mut mock_repo = MockCompletionRepo::new();
        mock_repo
            .expect_list_recent()
            .withf(|limit| *limit == 2)
            .returning(|_| Ok(vec![sample_record(2), sample_record(1)]));

        let use_case = ListRecentCompletionsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListRecentCompletionsParams { limit: 2 })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_empty_list_from_empty_log() {
        let mut mock_repo = MockCompletionRepo::new();
        mock_repo.expect_list_recent().returning(|_| Ok(vec![]));

        let use_case = ListRecentCompletionsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListRecentCompletionsParams { limit: 5 })
            .await;

        assert!(result.unwrap().is_empty());
    }
}
