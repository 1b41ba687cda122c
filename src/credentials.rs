//! API credential resolution
//!
//! The Gemini API key is the one process-wide secret. It is read exactly
//! once at startup from the environment; a missing or blank key blocks the
//! whole UI behind the configuration-error screen.

use std::env;

/// Environment variable holding the Gemini API key.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";

/// Read the API key from the environment.
///
/// Returns `None` when the variable is unset or blank, so callers never
/// have to distinguish the two.
pub fn api_key_from_env() -> Option<String> {
    normalize(env::var(ENV_API_KEY).ok())
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_is_none() {
        assert_eq!(normalize(None), None);
    }

    #[test]
    fn blank_is_none() {
        assert_eq!(normalize(Some(String::new())), None);
        assert_eq!(normalize(Some("   ".to_string())), None);
    }

    #[test]
    fn key_is_trimmed() {
        assert_eq!(
            normalize(Some("  abc123 \n".to_string())),
            Some("abc123".to_string())
        );
    }
}
