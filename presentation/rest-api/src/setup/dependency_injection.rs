use std::sync::Arc;

use logger::TracingLogger;
use persistence::completion::repository::CompletionRepositoryInMemory;

use business::application::completion::create::CreateCompletionUseCaseImpl;
use business::application::completion::get_by_id::GetCompletionByIdUseCaseImpl;
use business::application::completion::list_recent::ListRecentCompletionsUseCaseImpl;
use business::application::completion::search::SearchCompletionsUseCaseImpl;
use business::domain::completion::services::CompletionGeneratorService;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub completion_api: crate::api::completion::routes::CompletionApi,
}

impl DependencyContainer {
    /// Wires one isolated completion log per container. The generator is
    /// injected so tests can substitute a stub adapter for the remote API.
    pub fn new(generator: Arc<dyn CompletionGeneratorService>) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapter: the in-memory completion log.
        let repository = Arc::new(CompletionRepositoryInMemory::new());

        // Completion use cases
        let create_use_case = Arc::new(CreateCompletionUseCaseImpl {
            repository: repository.clone(),
            generator,
            logger: logger.clone(),
        });
        let list_recent_use_case = Arc::new(ListRecentCompletionsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetCompletionByIdUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let search_use_case = Arc::new(SearchCompletionsUseCaseImpl { repository, logger });

        let completion_api = crate::api::completion::routes::CompletionApi::new(
            create_use_case,
            list_recent_use_case,
            get_by_id_use_case,
            search_use_case,
        );

        Self {
            health_api,
            completion_api,
        }
    }
}
