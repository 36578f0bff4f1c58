use serde::Deserialize;

use crate::client::OpenAIClient;

#[derive(Debug, Deserialize)]
struct ModelList {
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
}

/// Lists the model ids visible to the configured API key.
///
/// Used as a startup connectivity probe: a successful listing proves the
/// key authenticates and the API is reachable.
pub async fn list_models(client: &OpenAIClient) -> Result<Vec<String>, reqwest::Error> {
    let response = client
        .client
        .get(client.models_url())
        .header("Authorization", client.auth_header())
        .send()
        .await?
        .error_for_status()?;

    let list: ModelList = response.json().await?;
    Ok(list.data.into_iter().map(|m| m.id).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_model_list() {
        let payload = r#"{
            "object": "list",
            "data": [
                {"id": "gpt-3.5-turbo", "object": "model", "owned_by": "openai"},
                {"id": "gpt-4o-mini", "object": "model", "owned_by": "openai"}
            ]
        }"#;

        let parsed: ModelList = serde_json::from_str(payload).unwrap();

        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].id, "gpt-3.5-turbo");
    }
}
