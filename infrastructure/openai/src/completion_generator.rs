use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::completion::errors::CompletionError;
use business::domain::completion::model::{GeneratedCompletion, TokenUsage};
use business::domain::completion::services::CompletionGeneratorService;

use crate::client::OpenAIClient;

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
const MODEL: &str = "gpt-3.5-turbo";
const MAX_TOKENS: u32 = 150;

pub struct CompletionGeneratorOpenAI {
    client: OpenAIClient,
}

impl CompletionGeneratorOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    model: String,
    choices: Vec<ChatChoice>,
    usage: ChatUsage,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

fn upstream(status: Option<u16>, message: impl Into<String>) -> CompletionError {
    CompletionError::Upstream {
        status,
        message: message.into(),
    }
}

#[async_trait]
impl CompletionGeneratorService for CompletionGeneratorOpenAI {
    async fn generate(&self, prompt: &str) -> Result<GeneratedCompletion, CompletionError> {
        let body = json!({
            "model": MODEL,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt},
            ],
            "max_tokens": MAX_TOKENS,
        });

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|err| upstream(None, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Surface the upstream message when the error body is parseable.
            let message = match response.json::<ApiErrorResponse>().await {
                Ok(parsed) => parsed.error.message,
                Err(_) => format!("OpenAI API returned status {}", status),
            };
            return Err(upstream(Some(status.as_u16()), message));
        }

        let data: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| upstream(None, err.to_string()))?;

        let text = data
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| upstream(None, "OpenAI API returned no choices"))?;

        Ok(GeneratedCompletion {
            text,
            model: data.model,
            usage: TokenUsage::new(data.usage.prompt_tokens, data.usage.completion_tokens),
        })
    }
}
