use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4-turbo-preview";
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_ms: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unparseable or blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_key = lookup("OPENAI_API_KEY").unwrap_or_default();

        let base_url = non_blank("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let model = non_blank("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout_ms = lookup("COMPLETION_TIMEOUT_MS").and_then(|value| value.parse::<u64>().ok());

        Self {
            port,
            api_key,
            base_url,
            model,
            timeout_ms,
        }
    }
}

pub fn studio_endpoint_from_env() -> String {
    env::var("CASE_STUDY_ENDPOINT")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.api_key, "");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_ms, None);
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("PORT", "abc"),
            ("OPENAI_MODEL", ""),
            ("OPENAI_BASE_URL", "  "),
            ("COMPLETION_TIMEOUT_MS", "x"),
        ]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, None);
    }

    #[test]
    fn reads_provided_values() {
        let config = config_from(&[
            ("PORT", "8088"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:9000/v1"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("COMPLETION_TIMEOUT_MS", "1500"),
        ]);
        assert_eq!(config.port, 8088);
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.timeout_ms, Some(1500));
    }
}
