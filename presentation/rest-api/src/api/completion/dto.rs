use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::completion::model::CompletionRecord;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CreateCompletionRequest {
    /// Prompt to send to the model. Required; rejected when missing or empty.
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct UsageResponse {
    /// Tokens consumed by the prompt
    pub prompt_tokens: u32,
    /// Tokens produced by the model
    pub completion_tokens: u32,
    /// Sum of prompt and completion tokens
    pub total_tokens: u32,
}

/// Body returned from the creation endpoint: the record id plus the
/// generated text and a usage breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CompletionCreatedResponse {
    pub id: u64,
    pub prompt: String,
    pub completion: String,
    pub usage: UsageResponse,
}

/// Full stored record as returned by the read endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecordResponse {
    pub id: u64,
    pub prompt: String,
    pub completion: String,
    /// Model that produced the completion
    pub model: String,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
    /// Creation instant, RFC 3339
    pub timestamp: DateTime<Utc>,
}

impl From<CompletionRecord> for CompletionCreatedResponse {
    fn from(record: CompletionRecord) -> Self {
        Self {
            id: record.id,
            prompt: record.prompt,
            completion: record.completion,
            usage: UsageResponse {
                prompt_tokens: record.usage.prompt_tokens,
                completion_tokens: record.usage.completion_tokens,
                total_tokens: record.usage.total_tokens,
            },
        }
    }
}

impl From<CompletionRecord> for CompletionRecordResponse {
    fn from(record: CompletionRecord) -> Self {
        Self {
            id: record.id,
            prompt: record.prompt,
            completion: record.completion,
            model: record.model,
            prompt_tokens: record.usage.prompt_tokens,
            completion_tokens: record.usage.completion_tokens,
            total_tokens: record.usage.total_tokens,
            timestamp: record.created_at,
        }
    }
}
