//! Best-effort telemetry to a Qualtrics survey.
//!
//! Each answered question is optionally forwarded as a survey response for
//! instructor review. The call is strictly informational: it runs only when
//! all three integration parameters are configured, never alters the answer,
//! and never fails the request — every outcome collapses into a status
//! string appended to the response trailer.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

/// Trailer text when telemetry is not configured.
const STATUS_NOT_CALLED: &str = "Qualtrics not called";

/// The three survey-integration parameters, all-or-nothing.
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    pub api_token: String,
    pub survey_id: String,
    pub datacenter: String,
}

impl SurveyConfig {
    /// Reads `QUALTRICS_API_TOKEN`, `QUALTRICS_SURVEY_ID`, and
    /// `QUALTRICS_DATACENTER`. Returns `None` unless all three are present
    /// and non-empty; a partial configuration disables telemetry entirely.
    pub fn from_env() -> Option<Self> {
        Some(Self {
            api_token: env_nonempty("QUALTRICS_API_TOKEN")?,
            survey_id: env_nonempty("QUALTRICS_SURVEY_ID")?,
            datacenter: env_nonempty("QUALTRICS_DATACENTER")?,
        })
    }
}

fn env_nonempty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// What happened to the telemetry attempt for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryOutcome {
    /// Whether a network call was made.
    pub attempted: bool,
    /// Human-readable status line for the response trailer.
    pub status: String,
}

impl TelemetryOutcome {
    /// Outcome for an unconfigured deployment; no network call occurred.
    pub fn not_called() -> Self {
        Self {
            attempted: false,
            status: STATUS_NOT_CALLED.to_string(),
        }
    }
}

/// Client posting question/answer pairs to the survey endpoint.
pub struct SurveyRelay {
    client: reqwest::Client,
    url: String,
    api_token: String,
}

impl SurveyRelay {
    /// Builds the relay for the configured datacenter and survey.
    ///
    /// # Errors
    /// Returns the underlying error if the HTTP client cannot be built.
    pub fn new(cfg: SurveyConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        let url = format!(
            "https://{}.qualtrics.com/API/v3/surveys/{}/responses",
            cfg.datacenter, cfg.survey_id
        );
        Ok(Self {
            client,
            url,
            api_token: cfg.api_token,
        })
    }

    /// Posts one question/answer pair. Infallible by contract: any failure
    /// is absorbed into the returned outcome's status string.
    pub async fn record(&self, question: &str, answer: &str) -> TelemetryOutcome {
        let payload = SurveyResponse {
            values: SurveyValues {
                response_text: answer,
                query_text: question,
            },
        };

        debug!("POST {}", self.url);
        match self
            .client
            .post(&self.url)
            .header("X-API-TOKEN", &self.api_token)
            .json(&payload)
            .send()
            .await
        {
            Ok(resp) => TelemetryOutcome {
                attempted: true,
                status: format!("Qualtrics status: {}", resp.status().as_u16()),
            },
            Err(err) => {
                warn!(%err, "survey call failed");
                TelemetryOutcome {
                    attempted: true,
                    status: "Qualtrics status: unreachable".to_string(),
                }
            }
        }
    }
}

/* ==========================
HTTP payload
========================== */

#[derive(Debug, Serialize)]
struct SurveyResponse<'a> {
    values: SurveyValues<'a>,
}

#[derive(Debug, Serialize)]
struct SurveyValues<'a> {
    #[serde(rename = "responseText")]
    response_text: &'a str,
    #[serde(rename = "queryText")]
    query_text: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_shape() {
        let payload = SurveyResponse {
            values: SurveyValues {
                response_text: "October 26.",
                query_text: "When is the midterm?",
            },
        };
        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(v["values"]["responseText"], "October 26.");
        assert_eq!(v["values"]["queryText"], "When is the midterm?");
    }

    #[test]
    fn not_called_outcome() {
        let outcome = TelemetryOutcome::not_called();
        assert!(!outcome.attempted);
        assert_eq!(outcome.status, "Qualtrics not called");
    }

    #[test]
    fn relay_targets_configured_datacenter_and_survey() {
        let relay = SurveyRelay::new(SurveyConfig {
            api_token: "tok".into(),
            survey_id: "SV_123".into(),
            datacenter: "ca1".into(),
        })
        .unwrap();
        assert_eq!(
            relay.url,
            "https://ca1.qualtrics.com/API/v3/surveys/SV_123/responses"
        );
    }

    fn relay_to(url: &str) -> SurveyRelay {
        SurveyRelay {
            client: reqwest::Client::new(),
            url: url.to_string(),
            api_token: "tok".into(),
        }
    }

    #[tokio::test]
    async fn record_reports_the_upstream_status_code() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::header("X-API-TOKEN", "tok"))
            .respond_with(wiremock::ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let outcome = relay_to(&server.uri())
            .record("When is the midterm?", "October 26.")
            .await;
        assert!(outcome.attempted);
        assert_eq!(outcome.status, "Qualtrics status: 200");
    }

    #[tokio::test]
    async fn rejected_submission_still_lands_in_the_status_string() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .respond_with(wiremock::ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let outcome = relay_to(&server.uri()).record("q", "a").await;
        assert!(outcome.attempted);
        assert_eq!(outcome.status, "Qualtrics status: 401");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_absorbed() {
        let outcome = relay_to("http://127.0.0.1:1").record("q", "a").await;
        assert!(outcome.attempted);
        assert_eq!(outcome.status, "Qualtrics status: unreachable");
    }
}
