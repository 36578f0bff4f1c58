use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion.prompt_required")]
    PromptRequired,
    #[error("completion.term_required")]
    SearchTermRequired,
    #[error("completion.not_found")]
    NotFound,
    /// The remote model call failed. `status` is the upstream HTTP status
    /// when one was received; it is diagnostic only and never drives retries.
    #[error("completion.upstream: {message}")]
    Upstream { status: Option<u16>, message: String },
    #[error("repository.persistence")]
    Repository(RepositoryError),
}
