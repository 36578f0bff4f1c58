use chrono::{DateTime, Utc};

/// Token accounting reported for a single generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    /// Builds usage from the prompt and completion counts.
    /// `total_tokens` is always their sum.
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// A stored completion. Records are immutable once inserted.
#[derive(Debug, Clone)]
pub struct CompletionRecord {
    pub id: u64,
    pub prompt: String,
    pub completion: String,
    pub model: String,
    pub usage: TokenUsage,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the completion log. Id and timestamp are
/// assigned by the repository at insertion time.
#[derive(Debug, Clone)]
pub struct NewCompletion {
    pub prompt: String,
    pub completion: String,
    pub model: String,
    pub usage: TokenUsage,
}

/// Output of the completion generator service.
#[derive(Debug, Clone)]
pub struct GeneratedCompletion {
    pub text: String,
    pub model: String,
    pub usage: TokenUsage,
}
