use async_trait::async_trait;
use crate::config::LLMConfig;
use crate::llm::groq::GroqAdapter;
use crate::llm::openai::OpenAIAdapter;
use crate::llm::openrouter::OpenRouterAdapter;
use crate::types::{AppError, AppResult, LLMRequest, LLMResponse};

#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;
}

pub struct LLM {
    adapter: Box<dyn LLMAdapter>,
    provider_name: String,
}

impl LLM {
    pub fn from_config(config: &LLMConfig) -> AppResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(AppError::Config(format!(
                "no API key configured for provider '{}'",
                config.provider
            )));
        }

        let api_key = config.api_key.as_str();
        let adapter: Box<dyn LLMAdapter> = match (config.provider.as_str(), config.api_base.as_deref()) {
            // An explicit base wins for any OpenAI-compatible provider.
            ("groq" | "openai" | "openrouter", Some(base)) => {
                Box::new(OpenAIAdapter::new_with_api_base(api_key, base))
            }
            ("groq", None) => Box::new(GroqAdapter::new(api_key)),
            ("openai", None) => Box::new(OpenAIAdapter::new(api_key)),
            ("openrouter", None) => Box::new(OpenRouterAdapter::new(api_key)),
            (other, _) => {
                return Err(AppError::Config(format!("Unsupported provider: {}", other)));
            }
        };

        Ok(Self {
            adapter,
            provider_name: config.provider.clone(),
        })
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}

#[async_trait]
impl LLMAdapter for LLM {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        self.adapter.create_chat_completion(request).await
    }
}
