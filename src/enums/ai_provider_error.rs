use std::error::Error;
use std::fmt;

/// Failure raised by the remote text-generation backend.
///
/// The generation client never inspects or rewrites these; they reach the
/// caller exactly as the backend produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiProviderError {
    ApiError(String),
    NetworkError(String),
    SerializationError(String),
    AuthenticationError(String),
}

impl AiProviderError {
    pub fn from_status(status: reqwest::StatusCode, error_text: String) -> Self {
        match status.as_u16() {
            400 => Self::ApiError(format!("Bad request: {}", error_text)),
            401 => Self::AuthenticationError(error_text),
            403 => Self::ApiError(format!("Forbidden: {}", error_text)),
            429 => Self::ApiError(format!("Rate limit exceeded: {}", error_text)),
            _ => Self::ApiError(format!("HTTP {}: {}", status, error_text)),
        }
    }
}

impl fmt::Display for AiProviderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AiProviderError::ApiError(msg) => write!(f, "Vertex AI API Error: {}", msg),
            AiProviderError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            AiProviderError::SerializationError(msg) => write!(f, "Serialization Error: {}", msg),
            AiProviderError::AuthenticationError(msg) => write!(f, "Authentication Error: {}", msg),
        }
    }
}

impl Error for AiProviderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn maps_http_statuses_like_the_other_providers() {
        assert_eq!(
            AiProviderError::from_status(StatusCode::UNAUTHORIZED, "bad token".to_string()),
            AiProviderError::AuthenticationError("bad token".to_string())
        );
        assert_eq!(
            AiProviderError::from_status(StatusCode::TOO_MANY_REQUESTS, "quota".to_string()),
            AiProviderError::ApiError("Rate limit exceeded: quota".to_string())
        );
        assert_eq!(
            AiProviderError::from_status(StatusCode::BAD_REQUEST, "nope".to_string()),
            AiProviderError::ApiError("Bad request: nope".to_string())
        );
        assert!(matches!(
            AiProviderError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()),
            AiProviderError::ApiError(msg) if msg.starts_with("HTTP 500")
        ));
    }
}
