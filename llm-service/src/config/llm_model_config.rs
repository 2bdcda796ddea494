use crate::config::llm_provider::LlmProvider;

/// Configuration for an LLM model invocation.
///
/// Built once at startup from environment variables (see
/// [`crate::config::default_config`]) and handed to the matching service.
/// Grounded Q&A wants deterministic completions, so the default constructors
/// pin a low temperature and a bounded output budget.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// The backend this config targets.
    pub provider: LlmProvider,

    /// Model identifier string (e.g. `"gemini-2.5-flash"`, `"gpt-4o-mini"`).
    pub model: String,

    /// Base API URL, scheme included.
    pub endpoint: String,

    /// API key; required by both supported providers.
    pub api_key: Option<String>,

    /// Maximum number of tokens the model may generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature (0.0 = deterministic).
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Request timeout in seconds for the underlying HTTP client.
    pub timeout_secs: Option<u64>,
}
