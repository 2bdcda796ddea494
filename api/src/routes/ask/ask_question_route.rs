//! POST /ask — answers a question grounded in course materials.
//!
//! Per-request pipeline, strictly sequential: validate the body, check the
//! provider credential, load the grounding document, build the prompt, make
//! exactly one model call, append the disclaimer, then best-effort telemetry.
//! The telemetry outcome never alters the answer; it only rides along as an
//! HTML-comment trailer on the plain-text body.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use course_context::{Mode, Prompt, SYSTEM_INSTRUCTION, load_context};
use survey_relay::TelemetryOutcome;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::ask::ask_request::AskRequest,
};

/// Handler: POST /ask
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/ask \
///   -H 'content-type: application/json' \
///   -d '{"mode":"syllabus","question":"When is the midterm?"}'
/// ```
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<String> {
    let Json(body) = payload?;

    let question = body.question.trim();
    if body.mode.trim().is_empty() || question.is_empty() {
        return Err(AppError::BadRequest("Missing mode or question".into()));
    }
    let mode = Mode::parse(body.mode.trim())
        .ok_or_else(|| AppError::BadRequest("Unknown mode".into()))?;

    let llm = state.llm.as_ref().ok_or(AppError::MissingCredential)?;

    let doc = load_context(state.files.as_ref(), &state.materials, mode)?;
    let prompt = Prompt::build(&doc, question);

    let answer = llm
        .generate(prompt.as_str(), Some(SYSTEM_INSTRUCTION))
        .await
        .map_err(AppError::Upstream)?;

    let result = append_disclaimer(&answer, &state.syllabus_link);

    let outcome = match &state.survey {
        Some(relay) => relay.record(question, &result).await,
        None => TelemetryOutcome::not_called(),
    };

    Ok(with_trailer(&result, &outcome))
}

/// Append the fixed disclaimer sentence referencing the course page.
fn append_disclaimer(answer: &str, link: &str) -> String {
    format!(
        "{answer}\n\nThere may be errors in my responses; always refer to the course web page: {link}"
    )
}

/// Append the telemetry status as an HTML-comment trailer line.
fn with_trailer(text: &str, outcome: &TelemetryOutcome) -> String {
    format!("{text}\n<!-- {} -->", outcome.status)
}
