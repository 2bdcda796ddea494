//! Provider-polymorphic LLM client for grounded question answering.
//!
//! One deployment talks to exactly one backend, selected by configuration:
//! - **Gemini** — `POST {endpoint}/v1/models/{model}:generateContent`
//! - **OpenAI** — `POST {endpoint}/v1/chat/completions`
//!
//! Both services issue a single non-streaming request per call, with a
//! bounded output budget and low-temperature sampling. A response that
//! arrives with a 2xx status but without the expected answer field is
//! downgraded to a fixed fallback answer instead of failing the request;
//! transport-level failures propagate as [`error_handler::LlmServiceError`].

pub mod client;
pub mod config;
pub mod error_handler;
pub mod services;

pub use client::LlmClient;
pub use config::default_config::config_from_env;
pub use config::llm_model_config::LlmModelConfig;
pub use config::llm_provider::LlmProvider;
pub use error_handler::LlmServiceError;
