use thiserror::Error;

/// Failure modes of one generation call.
///
/// Every variant renders as a complete, displayable sentence; callers show
/// the `Display` text directly and never inspect transport internals.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// The API key was never configured. Checked before any network access,
    /// so this is a configuration fault rather than a remote failure.
    #[error("GEMINI_API_KEY environment variable not set. Cannot call the Gemini API.")]
    MissingCredential,

    /// The service rejected the configured key.
    #[error("Invalid API key. Please check your GEMINI_API_KEY environment variable.")]
    InvalidCredential,

    /// The call failed with a reportable reason (HTTP status, network fault).
    #[error("Gemini API error: {0}")]
    Remote(String),

    /// The failure had no recognizable shape.
    #[error("An unknown error occurred while communicating with the Gemini API.")]
    Unrecognized,
}
