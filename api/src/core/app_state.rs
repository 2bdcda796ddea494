use std::sync::Arc;

use course_context::{FileStore, MaterialsConfig, OsFileStore};
use llm_service::{LlmClient, config_from_env};
use survey_relay::{SurveyConfig, SurveyRelay};
use tracing::{info, warn};

/// Shared state for all HTTP handlers, loaded once at startup.
pub struct AppState {
    /// Configured model client, or `None` when the provider credential is
    /// absent — in which case `/ask` reports a configuration failure.
    pub llm: Option<LlmClient>,
    /// Survey telemetry, enabled only with a complete configuration.
    pub survey: Option<SurveyRelay>,
    /// Where each mode's grounding material lives.
    pub materials: MaterialsConfig,
    /// Link appended to every answer's disclaimer.
    pub syllabus_link: String,
    /// Filesystem capability used by the context loader.
    pub files: Arc<dyn FileStore>,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// A missing or invalid model-provider configuration is not fatal here:
    /// the service still starts and answers every `/ask` with the matching
    /// 500, preserving the behavior of a deployment with an unset key.
    pub fn from_env() -> Self {
        let llm = match config_from_env().and_then(LlmClient::from_config) {
            Ok(client) => Some(client),
            Err(err) => {
                warn!(%err, "model provider not configured; /ask will fail until it is");
                None
            }
        };

        let survey = match SurveyConfig::from_env() {
            Some(cfg) => match SurveyRelay::new(cfg) {
                Ok(relay) => Some(relay),
                Err(err) => {
                    warn!(%err, "survey relay could not be built; telemetry disabled");
                    None
                }
            },
            None => {
                info!("survey telemetry not configured");
                None
            }
        };

        Self {
            llm,
            survey,
            materials: MaterialsConfig::from_env(),
            syllabus_link: std::env::var("SYLLABUS_LINK").unwrap_or_default(),
            files: Arc::new(OsFileStore),
        }
    }
}
