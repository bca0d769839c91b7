use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::backend_response::BackendResponse;
use crate::structs::ai::generate_content_parameters::GenerateContentParameters;
use crate::structs::ai::predict_parameters::PredictParameters;

/// The two remote call shapes a generation client can dispatch to.
///
/// Implementations are not assumed to be safe for concurrent use; callers
/// that share one across tasks serialize access themselves.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextBackend: Send + Sync {

    /// Legacy single-turn predictor (`text-bison`).
    async fn predict(&self, request_text: String, parameters: PredictParameters) -> Result<BackendResponse, AiProviderError>;

    /// Generative content API (`gemini`).
    async fn generate_content(&self, request_text: String, parameters: GenerateContentParameters) -> Result<BackendResponse, AiProviderError>;
}
