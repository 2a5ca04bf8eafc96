use reqwest::Client;

use crate::domain::{
    common::{
        LLMConfig, LLMProvider,
        entities::app_errors::CoreError,
    },
    description::ports::LLMClient,
};

pub mod gemini_client;
pub mod openai_client;

pub use gemini_client::GeminiLLMClient;
pub use openai_client::OpenAiLLMClient;

/// The LLM backend selected by configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredLLMClient {
    OpenAi(OpenAiLLMClient),
    Gemini(GeminiLLMClient),
}

impl ConfiguredLLMClient {
    pub fn from_config(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        let api_key = config.api_key.clone().filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            tracing::warn!("No LLM API key configured, descriptions will use the fallback text");
        }

        let model_name = config.model_name();

        Ok(match config.provider {
            LLMProvider::OpenAi => {
                ConfiguredLLMClient::OpenAi(OpenAiLLMClient::new(api_key, model_name, client))
            }
            LLMProvider::Gemini => {
                ConfiguredLLMClient::Gemini(GeminiLLMClient::new(api_key, model_name, client))
            }
        })
    }
}

impl LLMClient for ConfiguredLLMClient {
    async fn generate_text(&self, prompt: String, max_tokens: u32) -> Result<String, CoreError> {
        match self {
            ConfiguredLLMClient::OpenAi(client) => client.generate_text(prompt, max_tokens).await,
            ConfiguredLLMClient::Gemini(client) => client.generate_text(prompt, max_tokens).await,
        }
    }
}
