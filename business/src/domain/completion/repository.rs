use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{CompletionRecord, NewCompletion};

/// Port for the append-only completion log.
///
/// Implementations must treat id allocation and insertion as a single
/// atomic step: two concurrent inserts never observe the same id.
#[async_trait]
pub trait CompletionRepository: Send + Sync {
    async fn insert(&self, new: NewCompletion) -> Result<CompletionRecord, RepositoryError>;
    async fn get_by_id(&self, id: u64) -> Result<CompletionRecord, RepositoryError>;
    async fn list_recent(&self, limit: usize) -> Result<Vec<CompletionRecord>, RepositoryError>;
    async fn search(&self, term: &str) -> Result<Vec<CompletionRecord>, RepositoryError>;
}
