use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::{CompletionRecord, NewCompletion};
use crate::domain::completion::repository::CompletionRepository;
use crate::domain::completion::services::CompletionGeneratorService;
use crate::domain::completion::use_cases::create::{
    CreateCompletionParams, CreateCompletionUseCase,
};
use crate::domain::logger::Logger;

pub struct CreateCompletionUseCaseImpl {
    pub repository: Arc<dyn CompletionRepository>,
    pub generator: Arc<dyn CompletionGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCompletionUseCase for CreateCompletionUseCaseImpl {
    async fn execute(
        &self,
        params: CreateCompletionParams,
    ) -> Result<CompletionRecord, CompletionError> {
        // Validation happens before the remote call is attempted.
        if params.prompt.trim().is_empty() {
            return Err(CompletionError::PromptRequired);
        }

        self.logger.info(&format!(
            "Generating completion for prompt of {} chars",
            params.prompt.len()
        ));

        let generated = match self.generator.generate(&params.prompt).await {
            Ok(generated) => generated,
            Err(err) => {
                self.logger
                    .error(&format!("Completion generation failed: {}", err));
                return Err(err);
            }
        };

        let record = self
            .repository
            .insert(NewCompletion {
                prompt: params.prompt,
                completion: generated.text,
                model: generated.model,
                usage: generated.usage,
            })
            .await
            .map_err(CompletionError::Repository)?;

        self.logger.info(&format!(
            "Stored completion {} ({} tokens, model {})",
            record.id, record.usage.total_tokens, record.model
        ));

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::completion::model::{GeneratedCompletion, TokenUsage};
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
        pub Generator {}

        #[async_trait]
        impl CompletionGeneratorService for Generator {
            async fn generate(&self, prompt: &str) -> Result<GeneratedCompletion, CompletionError>;
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

    fn generated_hello() -> GeneratedCompletion {
        GeneratedCompletion {
            text: "hello".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            usage: TokenUsage::new(1, 1),
        }
    }

    fn record_from(new: NewCompletion) -> CompletionRecord {
        CompletionRecord {
            id: 1,
            prompt: new.prompt,
            completion: new.completion,
            model: new.model,
            usage: new.usage,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn should_store_and_return_record_on_success() {
        let mut mock_generator = MockGenerator::new();
        mock_generator
            .expect_generate()
            .withf(|prompt| prompt == "hi")
            .returning(|_| Ok(generated_hello()));

        let mut mock_repo = MockCompletionRepo::new();
        mock_repo
            .expect_insert()
            .withf(|new| new.prompt == "hi" && new.completion == "hello")
            .returning(|new| Ok(record_from(new)));

        let use_case = CreateCompletionUseCaseImpl {
            repository: Arc::new(mock_repo),
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCompletionParams {
                prompt: "hi".to_string(),
            })
            .await;

        assert!(result.is_ok());
        let record = result.unwrap();
        assert_eq!(record.prompt, "hi");
        assert_eq!(record.completion, "hello");
        assert_eq!(
            record.usage.total_tokens,
            record.usage.prompt_tokens + record.usage.completion_tokens
        );
    }

    #[tokio::test]
    async fn should_reject_empty_prompt_without_calling_generator() {
        // No expectations set: any call on these mocks fails the test.
        let mock_generator = MockGenerator::new();
        let mock_repo = MockCompletionRepo::new();

        let use_case = CreateCompletionUseCaseImpl {
            repository: Arc::new(mock_repo),
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCompletionParams {
                prompt: String::new(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CompletionError::PromptRequired
        ));
    }

    #[tokio::test]
    async fn should_reject_whitespace_only_prompt() {
        let mock_generator = MockGenerator::new();
        let mock_repo = MockCompletionRepo::new();

        let use_case = CreateCompletionUseCaseImpl {
            repository: Arc::new(mock_repo),
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCompletionParams {
                prompt: "   ".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CompletionError::PromptRequired
        ));
    }

    #[tokio::test]
    async fn should_not_insert_when_generator_fails() {
        let mut mock_generator = MockGenerator::new();
        mock_generator.expect_generate().returning(|_| {
            Err(CompletionError::Upstream {
                status: Some(429),
                message: "quota exceeded".to_string(),
            })
        });

        // No insert expectation: a failed generation must leave the log untouched.
        let mock_repo = MockCompletionRepo::new();

        let use_case = CreateCompletionUseCaseImpl {
            repository: Arc::new(mock_repo),
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCompletionParams {
                prompt: "hi".to_string(),
            })
            .await;

        match result.unwrap_err() {
            CompletionError::Upstream { status, message } => {
                assert_eq!(status, Some(429));
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_return_repository_error_when_insert_fails() {
        let mut mock_generator = MockGenerator::new();
        mock_generator
            .expect_generate()
            .returning(|_| Ok(generated_hello()));

        let mut mock_repo = MockCompletionRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = CreateCompletionUseCaseImpl {
            repository: Arc::new(mock_repo),
            generator: Arc::new(mock_generator),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCompletionParams {
                prompt: "hi".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CompletionError::Repository(_)
        ));
    }
}
