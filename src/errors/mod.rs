use thiserror::Error;
use crate::enums::ai_provider_error::AiProviderError;

/// Errors surfaced by the generation client, the optimizer and the CLI around them.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The model selector names no known backend family. Raised before any
    /// network call is attempted.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Anything the backend raised, passed through untouched.
    #[error(transparent)]
    Backend(#[from] AiProviderError),

    /// Settings the backend would reject, as reported by `validate`.
    #[error("Configuration has {} problem(s): {}", .0.len(), .0.join("; "))]
    ValidationFailed(Vec<String>),

    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid transcript JSON: {0}")]
    Transcript(#[from] serde_json::Error),
}

impl GenerationError {
    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// The backend error this wraps, if any.
    pub fn backend_error(&self) -> Option<&AiProviderError> {
        match self {
            Self::Backend(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_keep_their_message() {
        let inner = AiProviderError::NetworkError("connection reset".to_string());
        let wrapped: GenerationError = inner.clone().into();

        assert_eq!(wrapped.to_string(), inner.to_string());
        assert_eq!(wrapped.backend_error(), Some(&inner));
    }

    #[test]
    fn validation_failures_list_every_problem() {
        let err = GenerationError::ValidationFailed(vec!["top_p too large".to_string(), "empty location".to_string()]);
        assert_eq!(err.to_string(), "Configuration has 2 problem(s): top_p too large; empty location");
    }

    #[test]
    fn invalid_configuration_has_no_backend_error() {
        let err = GenerationError::InvalidConfiguration("palm".to_string());
        assert!(err.backend_error().is_none());
        assert_eq!(err.to_string(), "Invalid configuration: palm");
    }
}
