use std::time::Duration;

use clap::{Parser, ValueEnum};
use oxalens_core::domain::common::{LLMConfig, LLMProvider, OxaLensConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "oxalens", version, about = "Food oxalate lookup server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/oxalens`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmProviderArg {
    Openai,
    Gemini,
}

impl From<LlmProviderArg> for LLMProvider {
    fn from(value: LlmProviderArg) -> Self {
        match value {
            LlmProviderArg::Openai => LLMProvider::OpenAi,
            LlmProviderArg::Gemini => LLMProvider::Gemini,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(
        long = "llm-provider",
        env = "LLM_PROVIDER",
        value_enum,
        default_value_t = LlmProviderArg::Openai
    )]
    pub provider: LlmProviderArg,

    #[arg(long = "llm-api-key", env = "LLM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "llm-model", env = "LLM_MODEL")]
    pub model: Option<String>,

    #[arg(long = "llm-max-tokens", env = "LLM_MAX_TOKENS", default_value_t = 150)]
    pub max_tokens: u32,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for OxaLensConfig {
    fn from(args: Args) -> Self {
        OxaLensConfig {
            llm: LLMConfig {
                provider: args.llm.provider.into(),
                api_key: args.llm.api_key,
                model: args.llm.model,
                max_tokens: args.llm.max_tokens,
                timeout: Duration::from_secs(args.llm.timeout_secs),
            },
        }
    }
}
