use std::env;

/// Default endpoint root; `/chat/completions` is appended by the client.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o";

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const MODEL_VAR: &str = "OPENAI_MODEL";
pub const MAX_HISTORY_VAR: &str = "GPT_CLI_MAX_HISTORY";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model_id: String,
    /// Max transcript messages resent per chat turn. `None` resends everything.
    pub max_history: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Load configuration from the process environment. Returns an error if the API key is missing.
pub fn load() -> Result<Config, ConfigError> {
    load_from(|name| env::var(name).ok())
}

/// Load configuration through `lookup`, which maps a variable name to its value.
pub fn load_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let api_key = non_empty(API_KEY_VAR)
        .map(|k| k.trim().to_string())
        .ok_or(ConfigError::MissingApiKey)?;

    let base_url = non_empty(BASE_URL_VAR)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    let model_id = non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let max_history = match non_empty(MAX_HISTORY_VAR) {
        None => None,
        Some(raw) => {
            let n: usize = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: MAX_HISTORY_VAR,
                value: raw.clone(),
            })?;
            (n > 0).then_some(n)
        }
    };

    Ok(Config {
        api_key,
        base_url,
        model_id,
        max_history,
    })
}
