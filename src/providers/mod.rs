mod anthropic;
mod factory;
mod fake;
mod open_ai;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use fake::FakeProvider;
pub use open_ai::OpenAiProvider;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for text-generation calls.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("malformed service response: {0}")]
    MalformedResponse(String),

    #[error("provider not configured: {0}")]
    NotConfigured(String),
}

/// One generation call: the prompt plus its sampling parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    /// Optional system message; omitted from the wire request when `None`.
    pub system: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        CompletionRequest {
            prompt: prompt.into(),
            system: None,
            max_tokens: 800,
            temperature: crate::prompts::DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Unified trait for all LLM providers.
///
/// Implementations are stateless and thread-safe: send one prompt, return the
/// model's raw text reply. No retries happen at this layer; callers degrade
/// to empty structured results on failure.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Execute one generation call and return the raw reply text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError>;
}
