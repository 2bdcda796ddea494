//! Typed error for context loading.
//!
//! Display strings double as user-visible response bodies, so they carry the
//! exact wording the service has always returned.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextError {
    /// The designated file or directory could not be read at all.
    #[error("Error loading {label}")]
    Unreadable {
        label: &'static str,
        #[source]
        source: io::Error,
    },

    /// Listing succeeded but no readable file produced content, or the
    /// grounding text was empty/whitespace-only.
    #[error("No materials available for this section yet.")]
    Empty { label: &'static str },
}

impl ContextError {
    /// Which materials category failed.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unreadable { label, .. } | Self::Empty { label } => label,
        }
    }
}
