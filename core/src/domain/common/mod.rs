use std::time::Duration;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct OxaLensConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LLMProvider {
    #[default]
    OpenAi,
    Gemini,
}

impl LLMProvider {
    pub fn default_model(&self) -> &'static str {
        match self {
            LLMProvider::OpenAi => "gpt-4o",
            LLMProvider::Gemini => "gemini-2.0-flash",
        }
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub provider: LLMProvider,
    /// Without a key every description falls back to the fixed sentence.
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl LLMConfig {
    pub fn model_name(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| self.provider.default_model().to_string())
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: None,
            model: None,
            max_tokens: 150,
            timeout: Duration::from_secs(30),
        }
    }
}
