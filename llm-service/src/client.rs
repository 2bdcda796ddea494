//! Provider dispatch: one configured backend behind one call surface.

use tracing::info;

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::LlmServiceError,
    services::{gemini_service::GeminiService, open_ai_service::OpenAiService},
};

/// A text-generation client backed by exactly one configured provider.
///
/// The variant is fixed at construction from [`LlmModelConfig::provider`];
/// callers never choose a backend per request.
pub enum LlmClient {
    Gemini(GeminiService),
    OpenAI(OpenAiService),
}

impl LlmClient {
    /// Builds the service matching `cfg.provider`.
    ///
    /// # Errors
    /// Propagates the service constructor's validation errors.
    pub fn from_config(cfg: LlmModelConfig) -> Result<Self, LlmServiceError> {
        let provider = cfg.provider;
        let model = cfg.model.clone();
        let client = match provider {
            LlmProvider::Gemini => Self::Gemini(GeminiService::new(cfg)?),
            LlmProvider::OpenAI => Self::OpenAI(OpenAiService::new(cfg)?),
        };
        info!(?provider, %model, "LLM client initialized");
        Ok(client)
    }

    /// The provider this client was configured with.
    pub fn provider(&self) -> LlmProvider {
        match self {
            Self::Gemini(_) => LlmProvider::Gemini,
            Self::OpenAI(_) => LlmProvider::OpenAI,
        }
    }

    /// Generates one answer for `prompt`, issuing exactly one outbound call.
    ///
    /// `system` applies to chat-format providers only; Gemini receives the
    /// prompt as a single user text block that already carries the grounding
    /// instruction.
    ///
    /// # Errors
    /// Returns [`LlmServiceError`] on transport failures or non-2xx upstream
    /// statuses. An answerless 2xx response is not an error; it resolves to
    /// the provider's fixed fallback text.
    pub async fn generate(
        &self,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<String, LlmServiceError> {
        match self {
            Self::Gemini(svc) => svc.generate(prompt).await,
            Self::OpenAI(svc) => svc.generate(prompt, system).await,
        }
    }
}
