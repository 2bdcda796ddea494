use serde::Deserialize;

/// Request payload for /ask.
///
/// `mode` stays a raw string here; the handler validates it against the
/// closed mode enumeration so an unrecognized value yields 400 rather than a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Which course material grounds the answer: "syllabus", "midterm", or "final".
    pub mode: String,
    /// Natural language question.
    pub question: String,
}
