use std::env;
use std::path::Path;

const API_KEY_FILE: &str = "api-key.txt";

/// Configuration for OpenAI API access.
///
/// The key is resolved from, in precedence order:
/// 1. a `--api-key=KEY` command line argument,
/// 2. the `OPENAI_API_KEY` environment variable,
/// 3. a local `api-key.txt` file.
pub struct OpenAIConfig {
    pub api_key: String,
}

impl OpenAIConfig {
    pub fn load() -> anyhow::Result<Self> {
        let api_key = from_args(env::args())
            .or_else(from_env_var)
            .or_else(from_key_file);

        match api_key {
            Some(key) if !key.trim().is_empty() => Ok(Self {
                api_key: key.trim().to_string(),
            }),
            _ => anyhow::bail!(
                "OpenAI API key not found. Provide it with --api-key=KEY, \
                 the OPENAI_API_KEY environment variable, or an api-key.txt file."
            ),
        }
    }
}

fn from_args(args: impl Iterator<Item = String>) -> Option<String> {
    args.filter_map(|arg| {
        arg.strip_prefix("--api-key=")
            .map(|value| value.to_string())
    })
    .next()
}

fn from_env_var() -> Option<String> {
    env::var("OPENAI_API_KEY").ok()
}

fn from_key_file() -> Option<String> {
    if !Path::new(API_KEY_FILE).exists() {
        return None;
    }
    std::fs::read_to_string(API_KEY_FILE).ok()
}
