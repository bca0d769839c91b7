use std::env;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::config::constants::{regional_endpoint, DEFAULT_BISON_MODEL, DEFAULT_GEMINI_MODEL, PROJECT_ID_ENV};
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::backend_response::BackendResponse;
use crate::structs::ai::bison::bison_instance::BisonInstance;
use crate::structs::ai::bison::bison_request::BisonRequest;
use crate::structs::ai::bison::bison_response::BisonResponse;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;
use crate::structs::ai::generate_content_parameters::GenerateContentParameters;
use crate::structs::ai::predict_parameters::PredictParameters;
use crate::structs::config::backend_config::BackendConfig;
use crate::structs::config::generation_config::GenerationConfig;
use crate::traits::text_backend::TextBackend;

/// Vertex AI REST backend for both the `text-bison` and `gemini` families.
#[derive(Clone)]
pub struct VertexProvider {
    access_token: String,
    base_url: String,
    client: Client,
    project_id: String,
    location: String,
    bison_model: String,
    gemini_model: String,
}

impl VertexProvider {
    pub fn new(access_token: String, project_id: String, location: String) -> Self {
        Self {
            access_token,
            base_url: regional_endpoint(&location),
            client: Client::new(),
            project_id,
            location,
            bison_model: DEFAULT_BISON_MODEL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }

    /// Binds project, location and credentials from configuration and the
    /// environment. The project falls back to `GOOGLE_CLOUD_PROJECT`.
    pub fn from_config(generation: &GenerationConfig, backend: &BackendConfig) -> Result<Self, AiProviderError> {
        let access_token = env::var(&backend.access_token_env).map_err(|_| {
            AiProviderError::AuthenticationError(format!(
                "No access token found in ${}",
                backend.access_token_env
            ))
        })?;

        let project_id = generation
            .project_id
            .clone()
            .or_else(|| env::var(PROJECT_ID_ENV).ok())
            .ok_or_else(|| {
                AiProviderError::AuthenticationError(format!(
                    "No project configured and ${} is not set",
                    PROJECT_ID_ENV
                ))
            })?;

        let mut client_builder = Client::builder();
        if let Some(timeout_secs) = backend.timeout_secs {
            client_builder = client_builder.timeout(Duration::from_secs(timeout_secs));
        }
        let client = client_builder
            .build()
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        let mut provider = Self::new(access_token, project_id, generation.location.clone())
            .with_client(client)
            .with_models(backend.bison_model.clone(), backend.gemini_model.clone());

        if let Some(api_endpoint) = &backend.api_endpoint {
            provider = provider.with_base_url(api_endpoint.clone());
        }

        Ok(provider)
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_models(mut self, bison_model: String, gemini_model: String) -> Self {
        self.bison_model = bison_model;
        self.gemini_model = gemini_model;
        self
    }

    pub fn model_url(&self, model: &str, method: &str) -> String {
        format!(
            "{}/projects/{}/locations/{}/publishers/google/models/{}:{}",
            self.base_url, self.project_id, self.location, model, method
        )
    }

    fn get_bison_request(request_text: String, parameters: PredictParameters) -> BisonRequest {
        BisonRequest {
            instances: vec![BisonInstance { prompt: request_text }],
            parameters: parameters.into(),
        }
    }

    fn get_gemini_request(request_text: String, parameters: GenerateContentParameters) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent::user(request_text)],
            generation_config: parameters.into(),
        }
    }

    async fn make_request<B, R>(&self, url: String, request_body: &B) -> Result<R, AiProviderError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        log::debug!("📦 POST {}", url);

        let response = self.client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::warn!("❌ Vertex AI API Error Response: {}", error_text);

            return Err(AiProviderError::from_status(status, error_text));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))
    }
}

#[async_trait]
impl TextBackend for VertexProvider {
    async fn predict(&self, request_text: String, parameters: PredictParameters) -> Result<BackendResponse, AiProviderError> {
        let url = self.model_url(&self.bison_model, "predict");
        let request_body = Self::get_bison_request(request_text, parameters);

        let response: BisonResponse = self.make_request(url, &request_body).await?;
        let text = response
            .text()
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))?;

        Ok(BackendResponse::new(text))
    }

    async fn generate_content(&self, request_text: String, parameters: GenerateContentParameters) -> Result<BackendResponse, AiProviderError> {
        let url = self.model_url(&self.gemini_model, "generateContent");
        let request_body = Self::get_gemini_request(request_text, parameters);

        let response: GeminiResponse = self.make_request(url, &request_body).await?;
        let text = response
            .text()
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))?;

        Ok(BackendResponse::new(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider() -> VertexProvider {
        VertexProvider::new("token".to_string(), "my-project".to_string(), "europe-west4".to_string())
    }

    #[test]
    fn builds_regional_publisher_urls() {
        assert_eq!(
            provider().model_url("gemini-1.0-pro", "generateContent"),
            "https://europe-west4-aiplatform.googleapis.com/v1/projects/my-project/locations/europe-west4/publishers/google/models/gemini-1.0-pro:generateContent"
        );
        assert_eq!(
            provider()
                .with_base_url("http://127.0.0.1:9000/v1/".to_string())
                .model_url("text-bison", "predict"),
            "http://127.0.0.1:9000/v1/projects/my-project/locations/europe-west4/publishers/google/models/text-bison:predict"
        );
    }

    #[test]
    fn bison_body_has_no_top_k() {
        let parameters = PredictParameters { max_output_tokens: 256, temperature: 0.5, top_p: 1.0 };
        let body = serde_json::to_value(VertexProvider::get_bison_request("hi".to_string(), parameters)).unwrap();

        assert_eq!(
            body,
            json!({
                "instances": [{ "prompt": "hi" }],
                "parameters": { "maxOutputTokens": 256, "temperature": 0.5, "topP": 1.0 }
            })
        );
    }

    #[test]
    fn gemini_body_uses_camel_case_generation_config() {
        let parameters = GenerateContentParameters { max_output_tokens: 2048, temperature: 0.0, top_p: 1.0, top_k: 40 };
        let body = serde_json::to_value(VertexProvider::get_gemini_request("hi".to_string(), parameters)).unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [{ "role": "user", "parts": [{ "text": "hi" }] }],
                "generationConfig": { "maxOutputTokens": 2048, "temperature": 0.0, "topP": 1.0, "topK": 40 }
            })
        );
    }

    #[test]
    fn gemini_response_joins_candidate_parts() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Hello, " }, { "text": "world" }] }, "finishReason": "STOP" },
                { "content": { "role": "model", "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some("Hello, world"));
    }

    #[test]
    fn empty_responses_have_no_text() {
        let gemini: GeminiResponse = serde_json::from_value(json!({ "candidates": [] })).unwrap();
        let bison: BisonResponse = serde_json::from_value(json!({ "predictions": [] })).unwrap();

        assert!(gemini.text().is_none());
        assert!(bison.text().is_none());
    }

    #[test]
    fn bison_response_reads_prediction_content() {
        let response: BisonResponse = serde_json::from_value(json!({
            "predictions": [{ "content": " keep spacing ", "safetyAttributes": {} }]
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some(" keep spacing "));
    }
}
