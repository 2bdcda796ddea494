//! Prompt builder: fixed grounding instruction around one context document.

use crate::ContextDocument;

/// The grounding directive every request carries.
///
/// Also passed as the system segment for chat-format providers.
pub const SYSTEM_INSTRUCTION: &str = "You are an accurate course assistant.\n\
Answer using ONLY the provided context.\n\
If the answer is not in the context, say you do not know.";

/// An immutable prompt, rendered once per request.
///
/// Pure function of (instruction, context document, question): identical
/// inputs produce byte-identical text. The full context body is always
/// included; there is no truncation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    text: String,
}

impl Prompt {
    /// Render the single-block prompt.
    pub fn build(doc: &ContextDocument, question: &str) -> Self {
        let text = format!(
            "INSTRUCTION:\n{SYSTEM_INSTRUCTION}\n\n\
             CONTEXT (from {label}):\n{body}\n\n\
             QUESTION:\n{question}",
            label = doc.label,
            body = doc.body,
        );
        Self { text }
    }

    /// The rendered prompt text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}
