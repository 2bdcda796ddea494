//! Materials locations loaded from environment variables.

use std::path::PathBuf;

/// Where each mode's grounding material lives on disk.
///
/// Loaded once at startup; all fields have defaults via [`from_env`].
///
/// [`from_env`]: MaterialsConfig::from_env
#[derive(Clone, Debug)]
pub struct MaterialsConfig {
    /// The single syllabus document.
    pub syllabus_file: PathBuf,
    /// Directory aggregated for the midterm mode.
    pub midterm_dir: PathBuf,
    /// Directory aggregated for the final mode.
    pub final_dir: PathBuf,
}

impl MaterialsConfig {
    /// Build from environment variables with the deployed defaults.
    pub fn from_env() -> Self {
        Self {
            syllabus_file: env("SYLLABUS_FILE", "syllabus.md").into(),
            midterm_dir: env("MIDTERM_DIR", "1026_midterm_test").into(),
            final_dir: env("FINAL_DIR", "1026_final").into(),
        }
    }
}

fn env(k: &str, dflt: &str) -> String {
    std::env::var(k)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| dflt.to_string())
}
