// Outline error taxonomy
//
// Only an unknown language tag is fatal to an extraction call. Malformed
// declarations and syntax-error regions degrade to best-effort output.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutlineError {
    #[error("unsupported language: '{language}'. Supported languages: go, python, java, javascript, typescript, tsx, swift, c, cpp")]
    UnsupportedLanguage { language: String },
}
