use crate::types::{AppError, AppResult};
use std::collections::HashMap;
use std::env;
use std::fmt;

pub const DEFAULT_PROVIDER: &str = "groq";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
}

#[derive(Clone)]
pub struct LLMConfig {
    pub provider: String,
    pub api_key: String,
    pub model: String,
    pub api_base: Option<String>,
}

impl fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LLMConfig")
            .field("provider", &self.provider)
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = var("LLM_PROVIDER")
            .unwrap_or_else(|| DEFAULT_PROVIDER.to_string())
            .to_lowercase();

        // The provider-specific key wins over the generic one.
        let key_var = format!("{}_API_KEY", provider.to_uppercase());
        let api_key = var(&key_var)
            .or_else(|| var("LLM_API_KEY"))
            .ok_or_else(|| {
                AppError::Config(format!("{} (or LLM_API_KEY) must be set", key_var))
            })?;

        Ok(Self {
            server: ServerConfig {
                port: parse_var(&var, "PORT", 8501)?,
                host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                cors_allowed_origins: var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|| "*".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                max_upload_bytes: parse_var(&var, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            },
            llm: LLMConfig {
                provider,
                api_key,
                model: var("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                api_base: var("LLM_API_BASE"),
            },
        })
    }

    pub fn from_map(vars: &HashMap<String, String>) -> AppResult<Self> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }
}

fn parse_var<T, F>(var: &F, key: &str, default: T) -> AppResult<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} has an invalid value {:?}: {}", key, raw, e))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_with_groq_key() {
        let config = Config::from_map(&vars(&[("GROQ_API_KEY", "gsk-test")])).unwrap();

        assert_eq!(config.llm.provider, "groq");
        assert_eq!(config.llm.api_key, "gsk-test");
        assert_eq!(config.llm.model, "llama-3.1-8b-instant");
        assert!(config.llm.api_base.is_none());
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.cors_allowed_origins, vec!["*".to_string()]);
        assert_eq!(config.server.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let err = Config::from_map(&vars(&[("PORT", "9000")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_is_rejected() {
        let err = Config::from_map(&vars(&[("GROQ_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_generic_key_and_provider_override() {
        let config = Config::from_map(&vars(&[
            ("LLM_PROVIDER", "OpenAI"),
            ("LLM_API_KEY", "sk-generic"),
            ("LLM_MODEL", "gpt-4o-mini"),
            ("LLM_API_BASE", "http://localhost:9999/v1"),
            ("ALLOWED_ORIGINS", "http://a.test, http://b.test"),
        ]))
        .unwrap();

        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.api_key, "sk-generic");
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.api_base.as_deref(), Some("http://localhost:9999/v1"));
        assert_eq!(
            config.server.cors_allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_map(&vars(&[("GROQ_API_KEY", "k"), ("PORT", "not-a-port")]))
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_debug_masks_api_key() {
        let config = Config::from_map(&vars(&[("GROQ_API_KEY", "gsk-secret")])).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("gsk-secret"));
    }
}
