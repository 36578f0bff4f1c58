use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use business::domain::completion::model::{CompletionRecord, NewCompletion};
use business::domain::completion::repository::CompletionRepository;
use business::domain::errors::RepositoryError;

struct StoreState {
    records: HashMap<u64, CompletionRecord>,
    next_id: u64,
}

/// In-memory completion log. Append-only, process-lifetime storage:
/// all records vanish when the process exits.
///
/// Id allocation and insertion happen under a single write guard, so
/// concurrent inserts never share an id and ids grow by exactly 1.
pub struct CompletionRepositoryInMemory {
    state: RwLock<StoreState>,
}

impl CompletionRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                records: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for CompletionRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionRepository for CompletionRepositoryInMemory {
    async fn insert(&self, new: NewCompletion) -> Result<CompletionRecord, RepositoryError> {
        let mut state = self.state.write().map_err(|_| RepositoryError::Persistence)?;

        let id = state.next_id;
        state.next_id += 1;

        let record = CompletionRecord {
            id,
            prompt: new.prompt,
            completion: new.completion,
            model: new.model,
            usage: new.usage,
            created_at: Utc::now(),
        };
        state.records.insert(id, record.clone());

        Ok(record)
    }

    async fn get_by_id(&self, id: u64) -> Result<CompletionRecord, RepositoryError> {
        let state = self.state.read().map_err(|_| RepositoryError::Persistence)?;

        state
            .records
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<CompletionRecord>, RepositoryError> {
        let state = self.state.read().map_err(|_| RepositoryError::Persistence)?;

        let mut records: Vec<CompletionRecord> = state.records.values().cloned().collect();
        // Newest first; equal timestamps fall back to the higher id.
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        records.truncate(limit);

        Ok(records)
    }

    async fn search(&self, term: &str) -> Result<Vec<CompletionRecord>, RepositoryError> {
        let state = self.state.read().map_err(|_| RepositoryError::Persistence)?;

        let needle = term.to_lowercase();
        let records = state
            .records
            .values()
            .filter(|record| record.prompt.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        Ok(records)
    }
}
