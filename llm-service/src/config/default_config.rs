//! Default LLM configs loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! Common:
//! - `LLM_KIND`       = provider kind: `gemini` (default) or `openai`
//! - `LLM_MAX_TOKENS` = optional output budget override (u32, default 1500)
//!
//! Gemini-specific:
//! - `GEMINI_API_KEY` = API key (mandatory)
//! - `GEMINI_MODEL`   = model id (default `gemini-2.5-flash`)
//! - `GEMINI_URL`     = API base (default `https://generativelanguage.googleapis.com`)
//!
//! OpenAI-specific:
//! - `OPENAI_API_KEY` = API key (mandatory)
//! - `OPENAI_MODEL`   = model id (default `gpt-4o-mini`)
//! - `OPENAI_URL`     = API base (default `https://api.openai.com`)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{ConfigError, Result, env_opt_u32, must_env, validate_http_endpoint},
};

/// Default output budget when `LLM_MAX_TOKENS` is unset.
const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Fixed sampling temperature for grounded answers.
const ANSWER_TEMPERATURE: f32 = 0.2;

/// Builds the config for whichever provider `LLM_KIND` selects.
///
/// # Errors
/// - [`ConfigError::UnsupportedProvider`] for an unrecognized `LLM_KIND`
/// - whatever the per-provider constructor reports (missing key, bad URL)
pub fn config_from_env() -> Result<LlmModelConfig> {
    let kind = std::env::var("LLM_KIND").unwrap_or_else(|_| "gemini".into());
    match LlmProvider::from_kind(&kind) {
        Some(LlmProvider::Gemini) => config_gemini(),
        Some(LlmProvider::OpenAI) => config_openai(),
        None => Err(ConfigError::UnsupportedProvider(kind).into()),
    }
}

/// Constructs the **Gemini** answering config.
///
/// # Errors
/// - [`ConfigError::MissingVar`] if `GEMINI_API_KEY` is absent or empty
/// - [`ConfigError::InvalidFormat`] if `GEMINI_URL` lacks an http scheme
pub fn config_gemini() -> Result<LlmModelConfig> {
    let api_key = must_env("GEMINI_API_KEY")?;
    let model = env_or("GEMINI_MODEL", "gemini-2.5-flash");
    let endpoint = env_or("GEMINI_URL", "https://generativelanguage.googleapis.com");
    validate_http_endpoint("GEMINI_URL", &endpoint)?;
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?.unwrap_or(DEFAULT_MAX_TOKENS);

    Ok(LlmModelConfig {
        provider: LlmProvider::Gemini,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens: Some(max_tokens),
        temperature: Some(ANSWER_TEMPERATURE),
        top_p: None,
        timeout_secs: Some(60),
    })
}

/// Constructs the **OpenAI** answering config.
///
/// # Errors
/// - [`ConfigError::MissingVar`] if `OPENAI_API_KEY` is absent or empty
/// - [`ConfigError::InvalidFormat`] if `OPENAI_URL` lacks an http scheme
pub fn config_openai() -> Result<LlmModelConfig> {
    let api_key = must_env("OPENAI_API_KEY")?;
    let model = env_or("OPENAI_MODEL", "gpt-4o-mini");
    let endpoint = env_or("OPENAI_URL", "https://api.openai.com");
    validate_http_endpoint("OPENAI_URL", &endpoint)?;
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?.unwrap_or(DEFAULT_MAX_TOKENS);

    Ok(LlmModelConfig {
        provider: LlmProvider::OpenAI,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens: Some(max_tokens),
        temperature: Some(ANSWER_TEMPERATURE),
        top_p: None,
        timeout_secs: Some(60),
    })
}

fn env_or(name: &str, dflt: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| dflt.to_string())
}
